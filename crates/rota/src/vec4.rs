use crate::scalar::{self, EPSILON_5, EPSILON_6};
use crate::Vec3;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Homogeneous 4-vector. Points carry `w = 1`, directions `w = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }

    /// A point in homogeneous coordinates (`w = 1`).
    #[inline]
    pub const fn point(p: Vec3) -> Self { Self::new(p.x, p.y, p.z, 1.0) }

    #[inline]
    pub const fn zero() -> Self { Self::ZERO }

    #[inline]
    pub const fn splat(v: f32) -> Self { Self::new(v, v, v, v) }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 { self.dot(self) }

    #[inline]
    pub fn length(self) -> f32 { scalar::sqrt(self.length_squared()) }

    /// Unit vector in the same direction. A zero-length vector is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if scalar::approx_eq(len, 0.0, EPSILON_6) {
            return self;
        }
        self / len
    }

    #[inline]
    pub fn is_unit(self) -> bool {
        scalar::approx_eq(self.length_squared(), 1.0, EPSILON_5)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Perspective divide by `w`. Directions (`w == 0`) are returned unchanged.
    #[inline]
    pub fn to_cartesian(self) -> Self {
        if self.w == 0.0 {
            return self;
        }
        let inv_w = 1.0 / self.w;
        Self::new(self.x * inv_w, self.y * inv_w, self.z * inv_w, 1.0)
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        scalar::approx_eq(self.x, other.x, eps)
            && scalar::approx_eq(self.y, other.y, eps)
            && scalar::approx_eq(self.z, other.z, eps)
            && scalar::approx_eq(self.w, other.w, eps)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self { [v.x, v.y, v.z, v.w] }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index {} out of range", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index {} out of range", i),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "Vec4 divided by zero");
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Div for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self {
        debug_assert!(
            rhs.x != 0.0 && rhs.y != 0.0 && rhs.z != 0.0 && rhs.w != 0.0,
            "Vec4 divided by zero component"
        );
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl AddAssign for Vec4 {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z; self.w += rhs.w;
    }
}

impl SubAssign for Vec4 {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z; self.w -= rhs.w;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline] fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs; self.w *= rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    #[inline] fn div_assign(&mut self, rhs: f32) {
        debug_assert!(rhs != 0.0, "Vec4 divided by zero");
        self.x /= rhs; self.y /= rhs; self.z /= rhs; self.w /= rhs;
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Vec4) -> Vec4 { rhs * self }
}

impl core::fmt::Display for Vec4 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
