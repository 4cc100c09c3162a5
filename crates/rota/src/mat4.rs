use crate::scalar::{self, EPSILON_6};
use crate::{Mat3, Radian, Vec3, Vec4};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// 4x4 matrix, row-major storage.
///
/// Homogeneous transforms for row vectors: the linear part sits in the
/// upper-left 3x3 block and the translation in row 3 (`m[12..15]`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    m: [f32; 16],
}

// Indices of the three rows (or columns) left after removing `i`.
#[inline]
fn remaining(i: usize) -> [usize; 3] {
    match i {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl Mat4 {
    pub const ZERO: Self = Self { m: [0.0; 16] };
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m: [
                m00, m01, m02, m03,
                m10, m11, m12, m13,
                m20, m21, m22, m23,
                m30, m31, m32, m33,
            ],
        }
    }

    #[inline]
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        let mut out = Self::ZERO;
        out.set_row(0, r0);
        out.set_row(1, r1);
        out.set_row(2, r2);
        out.set_row(3, r3);
        out
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        self.m
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 4 && col < 4);
        self.m[row * 4 + col]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        debug_assert!(i < 4);
        let i = i * 4;
        Vec4::new(self.m[i], self.m[i + 1], self.m[i + 2], self.m[i + 3])
    }

    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        debug_assert!(i < 4);
        Vec4::new(self.m[i], self.m[i + 4], self.m[i + 8], self.m[i + 12])
    }

    pub fn set_row(&mut self, i: usize, v: Vec4) {
        debug_assert!(i < 4);
        let i = i * 4;
        self.m[i] = v.x;
        self.m[i + 1] = v.y;
        self.m[i + 2] = v.z;
        self.m[i + 3] = v.w;
    }

    pub fn set_col(&mut self, i: usize, v: Vec4) {
        debug_assert!(i < 4);
        self.m[i] = v.x;
        self.m[i + 4] = v.y;
        self.m[i + 8] = v.z;
        self.m[i + 12] = v.w;
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[(i % 4) * 4 + i / 4]) }
    }

    // Determinant of the 3x3 block picked out by `rows` and `cols`.
    fn minor(&self, rows: [usize; 3], cols: [usize; 3]) -> f32 {
        let e = |r: usize, c: usize| self.m[rows[r] * 4 + cols[c]];
        e(0, 0) * (e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1))
            + e(0, 1) * (e(1, 2) * e(2, 0) - e(1, 0) * e(2, 2))
            + e(0, 2) * (e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0))
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        Self {
            m: core::array::from_fn(|i| {
                let (r, c) = (i / 4, i % 4);
                let minor = self.minor(remaining(c), remaining(r));
                if (r + c) % 2 == 0 { minor } else { -minor }
            }),
        }
    }

    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|j| {
                let minor = self.minor(remaining(0), remaining(j));
                let cofactor = if j % 2 == 0 { minor } else { -minor };
                self.m[j] * cofactor
            })
            .sum()
    }

    /// `None` when the determinant is within 1e-6 of zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let adj = self.adjugate();
        let det = self.m[0] * adj.m[0] + self.m[1] * adj.m[4] + self.m[2] * adj.m[8] + self.m[3] * adj.m[12];
        if scalar::approx_eq(det, 0.0, EPSILON_6) {
            return None;
        }
        Some(adj * (1.0 / det))
    }

    /// Inverse, or [`Mat4::ZERO`] for a singular matrix.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|| {
            log::trace!("Mat4::inverse: singular matrix, returning ZERO");
            Self::ZERO
        })
    }

    /// Upper-left 3x3 block.
    pub fn linear(&self) -> Mat3 {
        let m = &self.m;
        Mat3::new(m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10])
    }

    /// Copy with the upper-left 3x3 block replaced.
    pub fn with_linear(mut self, linear: Mat3) -> Self {
        for r in 0..3 {
            for c in 0..3 {
                self.m[r * 4 + c] = linear[r * 3 + c];
            }
        }
        self
    }

    /// Translation by `t`, stored in row 3.
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.set_row(3, Vec4::point(t));
        m
    }

    /// `self` followed by a translation by `t`.
    pub fn translate(&self, t: Vec3) -> Self {
        *self * Self::translation(t)
    }

    pub fn rotation_x(angle: Radian) -> Self {
        Self::IDENTITY.with_linear(Mat3::rotation_x(angle))
    }

    pub fn rotation_y(angle: Radian) -> Self {
        Self::IDENTITY.with_linear(Mat3::rotation_y(angle))
    }

    pub fn rotation_z(angle: Radian) -> Self {
        Self::IDENTITY.with_linear(Mat3::rotation_z(angle))
    }

    pub fn scale(kx: f32, ky: f32, kz: f32) -> Self {
        Self::IDENTITY.with_linear(Mat3::scale(kx, ky, kz))
    }

    pub fn scale_along(n: Vec3, k: f32) -> Self {
        Self::IDENTITY.with_linear(Mat3::scale_along(n, k))
    }

    pub fn reflection(n: Vec3) -> Self {
        Self::IDENTITY.with_linear(Mat3::reflection(n))
    }

    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| scalar::approx_eq(*a, *b, eps))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(m: [f32; 16]) -> Self {
        Self { m }
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[i] + rhs.m[i]) }
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { m: core::array::from_fn(|i| self.m[i] - rhs.m[i]) }
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { m: self.m.map(|v| -v) }
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { m: self.m.map(|v| v * rhs) }
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        rhs * self
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "Mat4 divided by zero");
        Self { m: self.m.map(|v| v / rhs) }
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Self {
            m: core::array::from_fn(|i| {
                let (r, c) = (i / 4 * 4, i % 4);
                a[r] * b[c] + a[r + 1] * b[c + 4] + a[r + 2] * b[c + 8] + a[r + 3] * b[c + 12]
            }),
        }
    }
}

// Vec4 * Mat4
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Vec4 {
        let m = &rhs.m;
        Vec4::new(
            self.x * m[0] + self.y * m[4] + self.z * m[8] + self.w * m[12],
            self.x * m[1] + self.y * m[5] + self.z * m[9] + self.w * m[13],
            self.x * m[2] + self.y * m[6] + self.z * m[10] + self.w * m[14],
            self.x * m[3] + self.y * m[7] + self.z * m[11] + self.w * m[15],
        )
    }
}

impl MulAssign<Mat4> for Vec4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl core::fmt::Display for Mat4 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "[ ")?;
        for (i, v) in self.m.iter().enumerate() {
            match i {
                0 => write!(f, "{}", v)?,
                _ if i % 4 == 0 => write!(f, "; {}", v)?,
                _ => write!(f, ", {}", v)?,
            }
        }
        write!(f, "]")
    }
}
