use crate::scalar::{self, EPSILON_5, EPSILON_6};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self { Self { x, y, z } }

    #[inline]
    pub const fn zero() -> Self { Self::ZERO }

    #[inline]
    pub const fn splat(v: f32) -> Self { Self::new(v, v, v) }

    #[inline]
    pub const fn x() -> Self { Self::RIGHT }

    #[inline]
    pub const fn y() -> Self { Self::UP }

    #[inline]
    pub const fn z() -> Self { Self::FORWARD }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
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

    /// Returns the element-wise product (Hadamard product)
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(scalar::abs(self.x), scalar::abs(self.y), scalar::abs(self.z))
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: f32) -> crate::Vec4 {
        crate::Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        scalar::approx_eq(self.x, other.x, eps)
            && scalar::approx_eq(self.y, other.y, eps)
            && scalar::approx_eq(self.z, other.z, eps)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self { [v.x, v.y, v.z] }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {} out of range", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index {} out of range", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Component-wise product
impl Mul for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.hadamard(rhs) }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "Vec3 divided by zero");
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// Component-wise quotient
impl Div for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self {
        debug_assert!(rhs.x != 0.0 && rhs.y != 0.0 && rhs.z != 0.0, "Vec3 divided by zero component");
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline] fn div_assign(&mut self, rhs: f32) {
        debug_assert!(rhs != 0.0, "Vec3 divided by zero");
        self.x /= rhs; self.y /= rhs; self.z /= rhs;
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { rhs * self }
}

impl core::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
