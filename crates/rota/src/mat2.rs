use crate::scalar::{self, EPSILON_6};
use crate::{Radian, Vec2};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2x2 matrix, row-major storage.
///
/// ```text
/// | m[0] m[1] |
/// | m[2] m[3] |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat2 {
    m: [f32; 4],
}

impl Mat2 {
    pub const ZERO: Self = Self { m: [0.0; 4] };
    pub const IDENTITY: Self = Self { m: [1.0, 0.0, 0.0, 1.0] };

    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self { m: [m00, m01, m10, m11] }
    }

    #[inline]
    pub const fn from_array(m: [f32; 4]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn from_rows(r0: Vec2, r1: Vec2) -> Self {
        Self::new(r0.x, r0.y, r1.x, r1.y)
    }

    /// Counter-clockwise rotation for row vectors (`v * M`).
    pub fn rotation(angle: Radian) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.m
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 2 && col < 2);
        self.m[row * 2 + col]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec2 {
        debug_assert!(i < 2);
        Vec2::new(self.m[i * 2], self.m[i * 2 + 1])
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec2 {
        debug_assert!(i < 2);
        Vec2::new(self.m[i], self.m[i + 2])
    }

    pub fn set_row(&mut self, i: usize, v: Vec2) {
        debug_assert!(i < 2);
        self.m[i * 2] = v.x;
        self.m[i * 2 + 1] = v.y;
    }

    pub fn set_col(&mut self, i: usize, v: Vec2) {
        debug_assert!(i < 2);
        self.m[i] = v.x;
        self.m[i + 2] = v.y;
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.m[0], self.m[2], self.m[1], self.m[3])
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    /// `None` when the determinant is within 1e-6 of zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if scalar::approx_eq(det, 0.0, EPSILON_6) {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Self::new(self.m[3], -self.m[1], -self.m[2], self.m[0]) * inv_det)
    }

    /// Inverse, or [`Mat2::ZERO`] for a singular matrix.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            log::trace!("Mat2::inverse: singular matrix, returning ZERO");
            Self::ZERO
        })
    }

    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| scalar::approx_eq(*a, *b, eps))
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for Mat2 {
    fn from(m: [f32; 4]) -> Self {
        Self { m }
    }
}

impl Index<usize> for Mat2 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl Add for Mat2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[i] + rhs.m[i]) }
    }
}

impl Sub for Mat2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[i] - rhs.m[i]) }
    }
}

impl Neg for Mat2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { m: self.m.map(|v| -v) }
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { m: self.m.map(|v| v * rhs) }
    }
}

impl Mul<Mat2> for f32 {
    type Output = Mat2;
    fn mul(self, rhs: Mat2) -> Mat2 {
        rhs * self
    }
}

impl Div<f32> for Mat2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "Mat2 divided by zero");
        Self { m: self.m.map(|v| v / rhs) }
    }
}

impl Mul for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Self::new(
            a[0] * b[0] + a[1] * b[2],
            a[0] * b[1] + a[1] * b[3],
            a[2] * b[0] + a[3] * b[2],
            a[2] * b[1] + a[3] * b[3],
        )
    }
}

// Row vector times matrix
impl Mul<Mat2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Mat2) -> Vec2 {
        Vec2::new(
            self.x * rhs.m[0] + self.y * rhs.m[2],
            self.x * rhs.m[1] + self.y * rhs.m[3],
        )
    }
}

impl AddAssign for Mat2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Mat2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl core::fmt::Display for Mat2 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let m = &self.m;
        write!(f, "[{}, {}; {}, {}]", m[0], m[1], m[2], m[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use crate::scalar::HALF_PI;

    #[test]
    fn determinant() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.determinant(), -2.0);
        assert_eq!(Mat2::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn inverse() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        let inv = m.inverse();
        assert!(inv.approx_eq(&Mat2::new(-2.0, 1.0, 1.5, -0.5), 1e-6));
        assert!((m * inv).approx_eq(&Mat2::IDENTITY, 1e-6));
    }

    #[test]
    fn singular_inverse_is_zero() {
        let m = Mat2::new(1.0, 2.0, 2.0, 4.0);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.inverse(), Mat2::ZERO);
    }

    #[test]
    fn rows_and_cols() {
        let mut m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.row(1), Vec2::new(3.0, 4.0));
        assert_eq!(m.col(1), Vec2::new(2.0, 4.0));
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m[2], 3.0);
        m.set_col(0, Vec2::new(9.0, 8.0));
        assert_eq!(m, Mat2::new(9.0, 2.0, 8.0, 4.0));
        m.set_row(1, Vec2::new(0.0, 1.0));
        assert_eq!(m.transpose(), Mat2::new(9.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn row_vector_rotation() {
        let r = Mat2::rotation(Radian::new(HALF_PI));
        let v = Vec2::RIGHT * r;
        assert!(v.approx_eq(Vec2::UP, 1e-6));
    }

    #[test]
    fn arithmetic() {
        let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(a - a, Mat2::ZERO);
        assert_eq!(-a + a, Mat2::ZERO);
        assert_eq!((2.0 * a) / 2.0, a);
        assert_eq!(a * a, Mat2::new(7.0, 10.0, 15.0, 22.0));
        assert_eq!(a * Mat2::IDENTITY, a);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Mat2::new(1.0, 2.0, 3.0, 4.0)), "[1, 2; 3, 4]");
    }
}
