use crate::angle;
use crate::scalar::{self, EPSILON_6};
use crate::{AxisAngle, ExponentialMap, Radian, Vec3};
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Quaternion: w + xi + yj + zk
///
/// Represents a rotation when unit length. Nothing enforces that; use
/// [`normalized`](Self::normalized) after accumulating products.
///
/// Equality is approximate and ignores sign, since `q` and `-q` encode the
/// same rotation. For a stable key use [`canonical_sign`](Self::canonical_sign).
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Scalar part `w` and vector part `v`.
    #[inline]
    pub const fn from_scalar_vector(w: f32, v: Vec3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Quaternion from axis-angle representation
    pub fn from_axis_angle(axis: Vec3, angle: impl Into<Radian>) -> Self {
        Self::from(AxisAngle::new(axis, angle))
    }

    #[inline]
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Half the rotation angle, `acos(w)`.
    pub fn alpha(&self) -> Radian {
        angle::acos(self.w.clamp(-1.0, 1.0))
    }

    /// Rotation angle, `2 * alpha`.
    pub fn theta(&self) -> Radian {
        self.alpha() * 2.0
    }

    /// Unit rotation axis. The identity reports +X.
    pub fn axis(&self) -> Vec3 {
        let sin_alpha = self.alpha().sin();
        if scalar::approx_eq(sin_alpha, 0.0, EPSILON_6) {
            return Vec3::RIGHT;
        }
        self.vector() / sin_alpha
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Unit quaternion in the same direction. The zero quaternion is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if scalar::approx_eq(len, 0.0, EPSILON_6) {
            return *self;
        }
        *self / len
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse, `conjugate / |q|^2`. The zero quaternion is returned unchanged.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if scalar::approx_eq(len_sq, 0.0, EPSILON_6) {
            return *self;
        }
        self.conjugate() / len_sq
    }

    /// Rotation taking `self` to `other`: `self^-1 * other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.inverse() * *other
    }

    /// Rotate a vector by this quaternion: q * v * q^-1
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let qv = Self::from_scalar_vector(0.0, v);
        (*self * qv * self.conjugate()).vector()
    }

    /// Raise a unit quaternion to a power, scaling its rotation angle.
    pub fn pow(&self, exponent: f32) -> Self {
        // Near identity the axis is undefined.
        if scalar::abs(self.w) > 1.0 - EPSILON_6 {
            return *self;
        }
        let alpha = scalar::acos(self.w);
        let new_alpha = alpha * exponent;
        let k = scalar::sin(new_alpha) / scalar::sin(alpha);
        Self::from_scalar_vector(scalar::cos(new_alpha), self.vector() * k)
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// The result is not renormalized.
    pub fn slerp(q0: &Self, q1: &Self, t: f32) -> Self {
        let mut cos_omega = q0.dot(q1);
        let mut q1 = *q1;

        // Ensure shortest path
        if cos_omega < 0.0 {
            q1 = -q1;
            cos_omega = -cos_omega;
        }

        let (k0, k1) = if cos_omega > 1.0 - EPSILON_6 {
            // Nearly parallel: plain lerp
            (1.0 - t, t)
        } else {
            let sin_omega = scalar::sqrt(1.0 - cos_omega * cos_omega);
            let omega = angle::atan2(sin_omega, cos_omega);
            let inv_sin = 1.0 / sin_omega;
            ((omega * (1.0 - t)).sin() * inv_sin, (omega * t).sin() * inv_sin)
        };

        *q0 * k0 + q1 * k1
    }

    /// The representative of `{q, -q}` with a non-negative scalar part.
    pub fn canonical_sign(&self) -> Self {
        if self.w < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Component-wise comparison, treating `q` and `-q` as equal.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        let same = |s: f32| {
            scalar::approx_eq(self.w, s * other.w, eps)
                && scalar::approx_eq(self.x, s * other.x, eps)
                && scalar::approx_eq(self.y, s * other.y, eps)
                && scalar::approx_eq(self.z, s * other.z, eps)
        };
        same(1.0) || same(-1.0)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON_6)
    }
}

impl From<AxisAngle> for Quaternion {
    fn from(aa: AxisAngle) -> Self {
        let (s, c) = (aa.angle() / 2.0).sin_cos();
        Self::from_scalar_vector(c, aa.axis() * s)
    }
}

impl From<Quaternion> for AxisAngle {
    fn from(q: Quaternion) -> Self {
        let v = q.vector();
        let sin_half = v.length();
        if scalar::approx_eq(sin_half, 0.0, EPSILON_6) {
            return AxisAngle::IDENTITY;
        }
        let theta = 2.0 * scalar::atan2(sin_half, q.w);
        AxisAngle::new(v / sin_half, Radian::new(theta))
    }
}

impl From<ExponentialMap> for Quaternion {
    fn from(e: ExponentialMap) -> Self {
        Self::from(e.to_axis_angle())
    }
}

impl From<Quaternion> for ExponentialMap {
    fn from(q: Quaternion) -> Self {
        ExponentialMap::from(AxisAngle::from(q))
    }
}

impl Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// Hamilton product
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y + self.y * o.w + self.z * o.x - self.x * o.z,
            self.w * o.z + self.z * o.w + self.x * o.y - self.y * o.x,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "Quaternion divided by zero");
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Quaternion {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, ({}, {}, {})]", self.w, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use crate::scalar::{HALF_PI, PI};
    use crate::Degree;

    fn about_z(degrees: f32) -> Quaternion {
        Quaternion::from(AxisAngle::new(Vec3::FORWARD, Degree::new(degrees)))
    }

    #[test]
    fn from_axis_angle() {
        let q = about_z(90.0);
        let (s, c) = Radian::from(Degree::new(45.0)).sin_cos();
        assert!((q.w - c).abs() < 1e-6);
        assert!(q.x.abs() < 1e-6);
        assert!(q.y.abs() < 1e-6);
        assert!((q.z - s).abs() < 1e-6);
        assert_eq!(Quaternion::from_axis_angle(Vec3::FORWARD, Degree::new(90.0)), q);
    }

    #[test]
    fn arithmetic() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);

        let sum = a + b;
        assert_eq!((sum.w, sum.x, sum.y, sum.z), (6.0, 8.0, 10.0, 12.0));
        let mut acc = a;
        acc += b;
        assert_eq!(acc, sum);
        acc -= b;
        assert_eq!(acc, a);

        assert_eq!(a * 2.0, 2.0 * a);
        let half = a / 2.0;
        assert_eq!((half.w, half.x), (0.5, 1.0));
        assert_eq!(a.dot(&b), 70.0);
    }

    #[test]
    fn hamilton_product() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(Quaternion::IDENTITY * b, b);
        assert_eq!(b * Quaternion::IDENTITY, b);

        let prod = a * b;
        let manual = Quaternion::new(
            1.0 * 5.0 - 2.0 * 6.0 - 3.0 * 7.0 - 4.0 * 8.0,
            1.0 * 6.0 + 2.0 * 5.0 + 3.0 * 8.0 - 4.0 * 7.0,
            1.0 * 7.0 + 3.0 * 5.0 + 4.0 * 6.0 - 2.0 * 8.0,
            1.0 * 8.0 + 4.0 * 5.0 + 2.0 * 7.0 - 3.0 * 6.0,
        );
        assert_eq!((prod.w, prod.x, prod.y, prod.z), (manual.w, manual.x, manual.y, manual.z));

        let mut c = a;
        c *= b;
        assert_eq!(c, prod);
    }

    #[test]
    fn norm_conjugate_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert!((q.length() - 30.0f32.sqrt()).abs() < 1e-6);
        assert!((q.length_squared() - 30.0).abs() < 1e-5);

        let n = q.normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);

        let c = q.conjugate();
        assert_eq!((c.w, c.x, c.y, c.z), (1.0, -2.0, -3.0, -4.0));

        assert!((n * n.inverse()).approx_eq(&Quaternion::IDENTITY, 1e-6));
        assert!((q * q.inverse()).approx_eq(&Quaternion::IDENTITY, 1e-6));

        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalized().w, 0.0);
    }

    #[test]
    fn pow_doubles_angle() {
        assert_eq!(about_z(90.0).pow(2.0), about_z(180.0));
        assert_eq!(Quaternion::IDENTITY.pow(3.0), Quaternion::IDENTITY);
    }

    #[test]
    fn slerp_halfway() {
        let mid = Quaternion::slerp(&Quaternion::IDENTITY, &about_z(90.0), 0.5);
        assert_eq!(mid, about_z(45.0));
    }

    #[test]
    fn slerp_endpoints_and_short_arc() {
        let q0 = about_z(10.0);
        let q1 = about_z(70.0);
        assert!(Quaternion::slerp(&q0, &q1, 0.0).approx_eq(&q0, 1e-6));
        assert!(Quaternion::slerp(&q0, &q1, 1.0).approx_eq(&q1, 1e-6));

        // -q1 is the same rotation, the path must not go the long way
        let mid = Quaternion::slerp(&q0, &-q1, 0.5);
        assert_eq!(mid, about_z(40.0));
    }

    #[test]
    fn slerp_nearly_parallel_falls_back_to_lerp() {
        let q = about_z(30.0);
        let mid = Quaternion::slerp(&q, &q, 0.25);
        assert!(mid.approx_eq(&q, 1e-6));
    }

    #[test]
    fn sign_invariant_equality() {
        let q = about_z(60.0);
        assert_eq!(q, -q);
        assert!(q.canonical_sign().w >= 0.0);
        assert!((-q).canonical_sign().w >= 0.0);
        assert_eq!((-q).canonical_sign().w, q.canonical_sign().w);
        assert_ne!(q, about_z(61.0));
    }

    #[test]
    fn accessors() {
        let q = Quaternion::from(AxisAngle::new(Vec3::RIGHT, Degree::new(60.0)));
        assert!((q.alpha().radians() - 60.0 * 0.5 * (PI / 180.0)).abs() < 1e-6);
        assert!((q.theta().radians() - Radian::from(Degree::new(60.0)).radians()).abs() < 1e-6);
        assert!(q.axis().approx_eq(Vec3::RIGHT, 1e-6));
        assert_eq!(Quaternion::IDENTITY.axis(), Vec3::RIGHT);
    }

    #[test]
    fn rotate_vector() {
        let q = about_z(90.0);
        assert!(q.rotate(Vec3::RIGHT).approx_eq(Vec3::UP, 1e-6));
        assert_eq!(Quaternion::IDENTITY.rotate(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn difference_composes_back() {
        let a = about_z(20.0);
        let b = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), Radian::new(0.4));
        let d = a.difference(&b);
        assert!((a * d).approx_eq(&b, 1e-6));
    }

    #[test]
    fn axis_angle_round_trip() {
        let aa = AxisAngle::new(Vec3::new(0.0, 3.0, 4.0), Radian::new(-1.2));
        let back = AxisAngle::from(Quaternion::from(aa));
        // (axis, -angle) and (-axis, angle) are the same rotation
        let same = back.axis().approx_eq(aa.axis(), 1e-5) && back.angle().approx_eq(aa.angle(), 1e-5);
        let flipped = back.axis().approx_eq(-aa.axis(), 1e-5) && back.angle().approx_eq(-aa.angle(), 1e-5);
        assert!(same || flipped);

        assert_eq!(AxisAngle::from(Quaternion::IDENTITY), AxisAngle::IDENTITY);
    }

    #[test]
    fn exponential_map_round_trip() {
        let e = ExponentialMap::new(Vec3::new(0.3, -0.5, 0.7));
        let q = Quaternion::from(e);
        let back = ExponentialMap::from(q);
        assert!(back.value().approx_eq(e.value(), 1e-5));
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn half_turn_wraps_to_negative_pi() {
        let q = Quaternion::from(AxisAngle::new(Vec3::UP, Radian::new(PI)));
        assert!(q.w.abs() < 1e-6);
        assert!((q.theta().radians() - PI).abs() < 1e-5);
        assert!((q.alpha().radians() - HALF_PI).abs() < 1e-5);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Quaternion::new(1.0, 2.0, 3.0, 4.0)), "[1, (2, 3, 4)]");
    }
}
