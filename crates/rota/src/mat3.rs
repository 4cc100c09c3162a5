use crate::scalar::{self, EPSILON_6};
use crate::{Radian, Vec3};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3x3 matrix, row-major storage.
///
/// Vectors are rows: `v * M` transforms `v`, and `A * B` applies `A` first.
/// Used for rotations, scales and reflections, and as the storage of
/// [`OrientationMatrix`](crate::OrientationMatrix).
///
/// ```text
/// | m[0] m[1] m[2] |
/// | m[3] m[4] m[5] |
/// | m[6] m[7] m[8] |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    pub const ZERO: Self = Self { m: [0.0; 9] };
    pub const IDENTITY: Self = Self { m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0] };

    /// Construct from individual elements, row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self { m: [m00, m01, m02, m10, m11, m12, m20, m21, m22] }
    }

    #[inline]
    pub const fn from_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }

    #[inline]
    pub fn diagonal(d: Vec3) -> Self {
        Self::scale(d.x, d.y, d.z)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 9] {
        self.m
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 3 && col < 3);
        self.m[row * 3 + col]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        debug_assert!(i < 3);
        let i = i * 3;
        Vec3::new(self.m[i], self.m[i + 1], self.m[i + 2])
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        debug_assert!(i < 3);
        Vec3::new(self.m[i], self.m[i + 3], self.m[i + 6])
    }

    pub fn set_row(&mut self, i: usize, v: Vec3) {
        debug_assert!(i < 3);
        let i = i * 3;
        self.m[i] = v.x;
        self.m[i + 1] = v.y;
        self.m[i + 2] = v.z;
    }

    pub fn set_col(&mut self, i: usize, v: Vec3) {
        debug_assert!(i < 3);
        self.m[i] = v.x;
        self.m[i + 3] = v.y;
        self.m[i + 6] = v.z;
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8])
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7])
            + m[1] * (m[5] * m[6] - m[3] * m[8])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.m[0] + self.m[4] + self.m[8]
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[4] * m[8] - m[5] * m[7],
            m[7] * m[2] - m[8] * m[1],
            m[1] * m[5] - m[2] * m[4],
            m[5] * m[6] - m[3] * m[8],
            m[8] * m[0] - m[6] * m[2],
            m[2] * m[3] - m[0] * m[5],
            m[3] * m[7] - m[4] * m[6],
            m[6] * m[1] - m[7] * m[0],
            m[0] * m[4] - m[1] * m[3],
        )
    }

    /// `None` when the determinant is within 1e-6 of zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let adj = self.adjugate();
        let det = self.m[0] * adj.m[0] + self.m[1] * adj.m[3] + self.m[2] * adj.m[6];
        if scalar::approx_eq(det, 0.0, EPSILON_6) {
            return None;
        }
        Some(adj * (1.0 / det))
    }

    /// Inverse, or [`Mat3::ZERO`] for a singular matrix.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            log::trace!("Mat3::inverse: singular matrix, returning ZERO");
            Self::ZERO
        })
    }

    /// Rows are unit length and mutually perpendicular, within 1e-6.
    pub fn is_orthogonal(&self) -> bool {
        self.is_orthogonal_within(EPSILON_6)
    }

    pub fn is_orthogonal_within(&self, eps: f32) -> bool {
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        scalar::approx_eq(r0.dot(r0), 1.0, eps)
            && scalar::approx_eq(r1.dot(r1), 1.0, eps)
            && scalar::approx_eq(r2.dot(r2), 1.0, eps)
            && scalar::approx_eq(r0.dot(r1), 0.0, eps)
            && scalar::approx_eq(r0.dot(r2), 0.0, eps)
            && scalar::approx_eq(r1.dot(r2), 0.0, eps)
    }

    /// Gram-Schmidt on the first two rows; the third row is rebuilt as `r0 x r1`.
    pub fn orthogonalized(&self) -> Self {
        let r0 = self.row(0);
        let r1 = self.row(1);
        let r1 = r1 - r0 * (r1.dot(r0) / r0.dot(r0));
        let r0 = r0.normalized();
        let r1 = r1.normalized();
        Self::from_rows(r0, r1, r0.cross(r1))
    }

    /// Rotation about +X.
    pub fn rotation_x(angle: Radian) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
    }

    /// Rotation about +Y.
    pub fn rotation_y(angle: Radian) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
    }

    /// Rotation about +Z.
    pub fn rotation_z(angle: Radian) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation about an arbitrary unit axis (Rodrigues' formula, row-vector form).
    pub fn rotation_axis(axis: Vec3, angle: Radian) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;
        Self::new(
            t * x * x + c,
            t * x * y + s * z,
            t * x * z - s * y,
            t * x * y - s * z,
            t * y * y + c,
            t * y * z + s * x,
            t * x * z + s * y,
            t * y * z - s * x,
            t * z * z + c,
        )
    }

    /// Scale along the cardinal axes.
    pub fn scale(kx: f32, ky: f32, kz: f32) -> Self {
        Self::new(kx, 0.0, 0.0, 0.0, ky, 0.0, 0.0, 0.0, kz)
    }

    /// Scale by `k` along the unit direction `n`.
    pub fn scale_along(n: Vec3, k: f32) -> Self {
        let k1 = k - 1.0;
        let Vec3 { x, y, z } = n;
        Self::new(
            1.0 + k1 * x * x,
            k1 * x * y,
            k1 * x * z,
            k1 * x * y,
            1.0 + k1 * y * y,
            k1 * y * z,
            k1 * x * z,
            k1 * y * z,
            1.0 + k1 * z * z,
        )
    }

    /// Reflection about the plane through the origin with unit normal `n`.
    pub fn reflection(n: Vec3) -> Self {
        Self::scale_along(n, -1.0)
    }

    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| scalar::approx_eq(*a, *b, eps))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(m: [f32; 9]) -> Self {
        Self { m }
    }
}

impl Index<usize> for Mat3 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[i] + rhs.m[i]) }
    }
}

impl Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[i] - rhs.m[i]) }
    }
}

impl Neg for Mat3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { m: self.m.map(|v| -v) }
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { m: self.m.map(|v| v * rhs) }
    }
}

impl Mul<Mat3> for f32 {
    type Output = Mat3;
    fn mul(self, rhs: Mat3) -> Mat3 {
        rhs * self
    }
}

impl Div<f32> for Mat3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "Mat3 divided by zero");
        Self { m: self.m.map(|v| v / rhs) }
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Self {
            m: core::array::from_fn(|i| {
                let (r, c) = (i / 3 * 3, i % 3);
                a[r] * b[c] + a[r + 1] * b[c + 3] + a[r + 2] * b[c + 6]
            }),
        }
    }
}

// Vec3 * Mat3
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Vec3 {
        let m = &rhs.m;
        Vec3::new(
            self.x * m[0] + self.y * m[3] + self.z * m[6],
            self.x * m[1] + self.y * m[4] + self.z * m[7],
            self.x * m[2] + self.y * m[5] + self.z * m[8],
        )
    }
}

impl MulAssign<Mat3> for Vec3 {
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = *self * rhs;
    }
}

impl AddAssign for Mat3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Mat3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl core::fmt::Display for Mat3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let m = &self.m;
        write!(
            f,
            "[{}, {}, {}; {}, {}, {}; {}, {}, {}]",
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use crate::scalar::HALF_PI;

    fn invertible() -> Mat3 {
        Mat3::new(2.0, 3.0, 1.0, 4.0, 6.0, 5.0, 1.0, -2.0, 3.0)
    }

    #[test]
    fn identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * Mat3::IDENTITY, v);
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
    }

    #[test]
    fn transpose() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let mt = m.transpose();
        assert_eq!(mt.get(0, 1), 4.0);
        assert_eq!(mt.get(1, 0), 2.0);
        assert_eq!(mt.transpose(), m);
    }

    #[test]
    fn determinant() {
        assert!((Mat3::IDENTITY.determinant() - 1.0).abs() < 1e-6);
        let m = Mat3::new(342.0, -42.0, 53.0, 11.9, -31.57, 0.05, 99.0, 21.0, -3.0);
        let expected = 209216.91;
        assert!(((m.determinant() - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn inverse() {
        let a = invertible();
        assert!((a * a.inverse()).approx_eq(&Mat3::IDENTITY, 1e-5));
        assert!((a.inverse() * a).approx_eq(&Mat3::IDENTITY, 1e-5));
        assert!(a.try_inverse().is_some());
    }

    #[test]
    fn singular_inverse_is_zero() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.inverse(), Mat3::ZERO);
    }

    #[test]
    fn rotation_inverse_is_opposite_rotation() {
        let plus = Mat3::rotation_x(Radian::new(HALF_PI));
        let minus = Mat3::rotation_x(Radian::new(-HALF_PI));
        assert!(plus.inverse().approx_eq(&minus, 1e-6));
        assert!(plus.transpose().approx_eq(&minus, 1e-6));
    }

    #[test]
    fn row_vector_rotations() {
        let quarter = Radian::new(HALF_PI);
        assert!((Vec3::RIGHT * Mat3::rotation_z(quarter)).approx_eq(Vec3::UP, 1e-6));
        assert!((Vec3::UP * Mat3::rotation_x(quarter)).approx_eq(Vec3::FORWARD, 1e-6));
        assert!((Vec3::FORWARD * Mat3::rotation_y(quarter)).approx_eq(Vec3::RIGHT, 1e-6));
    }

    #[test]
    fn rotation_axis_matches_cardinal() {
        let angle = Radian::new(0.7);
        assert!(Mat3::rotation_axis(Vec3::RIGHT, angle).approx_eq(&Mat3::rotation_x(angle), 1e-6));
        assert!(Mat3::rotation_axis(Vec3::UP, angle).approx_eq(&Mat3::rotation_y(angle), 1e-6));
        assert!(Mat3::rotation_axis(Vec3::FORWARD, angle).approx_eq(&Mat3::rotation_z(angle), 1e-6));
    }

    #[test]
    fn composition_applies_left_first() {
        let quarter = Radian::new(HALF_PI);
        let m = Mat3::rotation_z(quarter) * Mat3::rotation_x(quarter);
        // RIGHT -> UP (about z), then UP -> FORWARD (about x)
        assert!((Vec3::RIGHT * m).approx_eq(Vec3::FORWARD, 1e-6));
    }

    #[test]
    fn orthogonalize() {
        let m = Mat3::new(1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0);
        assert!(!m.is_orthogonal());
        let o = m.orthogonalized();
        assert!(o.is_orthogonal_within(1e-5));
        let r0 = Vec3::new(1.0, 1.0, 0.0).normalized();
        assert!(o.row(0).approx_eq(r0, 1e-6));
        assert!((o.determinant() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn scale_and_reflection() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * Mat3::scale(2.0, 3.0, 4.0), Vec3::new(2.0, 6.0, 12.0));
        assert_eq!(Mat3::diagonal(Vec3::splat(1.0)), Mat3::IDENTITY);
        let along_x = Mat3::scale_along(Vec3::RIGHT, 5.0);
        assert_eq!(v * along_x, Vec3::new(5.0, 2.0, 3.0));
        let mirror = Mat3::reflection(Vec3::UP);
        assert_eq!(v * mirror, Vec3::new(1.0, -2.0, 3.0));
        assert!((mirror.determinant() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn rows_cols_and_trace() {
        let mut m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.col(2), Vec3::new(3.0, 6.0, 9.0));
        assert_eq!(m.trace(), 15.0);
        m.set_row(0, Vec3::ZERO);
        m.set_col(2, Vec3::splat(1.0));
        assert_eq!(m[0], 0.0);
        assert_eq!(m[2], 1.0);
        assert_eq!(m[5], 1.0);
        assert_eq!(m[4], 5.0);
    }

    #[test]
    fn arithmetic() {
        let a = invertible();
        assert_eq!(a + a, 2.0 * a);
        assert_eq!(a - a, Mat3::ZERO);
        assert_eq!(-a, a * -1.0);
        assert_eq!((a * 4.0) / 4.0, a);
        let mut b = a;
        b *= Mat3::IDENTITY;
        assert_eq!(b, a);
    }

    #[test]
    fn display() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(format!("{}", m), "[1, 2, 3; 4, 5, 6; 7, 8, 9]");
    }
}
