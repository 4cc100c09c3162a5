use crate::scalar::{self, DEG_TO_RAD, PI, RAD_TO_DEG, TWO_PI};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An angle in radians.
///
/// Unit-tagged so a bare `f32` is never silently read as an angle; build one
/// with [`Radian::new`] or convert from a [`Degree`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Radian(f32);

/// An angle in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Degree(f32);

impl Radian {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0 * RAD_TO_DEG
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(scalar::abs(self.0))
    }

    #[inline]
    pub fn sin(self) -> f32 {
        scalar::sin(self.0)
    }

    #[inline]
    pub fn cos(self) -> f32 {
        scalar::cos(self.0)
    }

    #[inline]
    pub fn tan(self) -> f32 {
        scalar::tan(self.0)
    }

    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        scalar::sin_cos(self.0)
    }

    /// Wrap into the principal range, see [`wrap_pi`].
    #[inline]
    pub fn wrap_pi(self) -> Self {
        Self(wrap_pi(self.0))
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        scalar::approx_eq(self.0, other.0, eps)
    }
}

impl Degree {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.0 * DEG_TO_RAD
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn sin(self) -> f32 {
        Radian::from(self).sin()
    }

    #[inline]
    pub fn cos(self) -> f32 {
        Radian::from(self).cos()
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        scalar::approx_eq(self.0, other.0, eps)
    }
}

/// Maps any angle into the principal range: `theta - 2pi * floor((theta + pi) / 2pi)`.
///
/// Every canonicalization routine builds on this. Note that the floor-based
/// form sends exactly `+pi` to `-pi`.
#[inline]
pub fn wrap_pi(theta: f32) -> f32 {
    theta - TWO_PI * scalar::floor((theta + PI) / TWO_PI)
}

/// `atan2` with `atan2(0, 0) == 0` instead of an implementation-defined value.
#[inline]
pub fn atan2(y: f32, x: f32) -> Radian {
    if x == 0.0 && y == 0.0 {
        Radian(0.0)
    } else {
        Radian(scalar::atan2(y, x))
    }
}

#[inline]
pub fn asin(x: f32) -> Radian {
    Radian(scalar::asin(x))
}

#[inline]
pub fn acos(x: f32) -> Radian {
    Radian(scalar::acos(x))
}

#[inline]
pub fn atan(x: f32) -> Radian {
    Radian(scalar::atan(x))
}

impl From<Degree> for Radian {
    #[inline]
    fn from(d: Degree) -> Self {
        Radian(d.radians())
    }
}

impl From<Radian> for Degree {
    #[inline]
    fn from(r: Radian) -> Self {
        Degree(r.degrees())
    }
}

impl PartialEq<Degree> for Radian {
    fn eq(&self, other: &Degree) -> bool {
        self.0 == other.radians()
    }
}

impl PartialOrd<Degree> for Radian {
    fn partial_cmp(&self, other: &Degree) -> Option<Ordering> {
        self.0.partial_cmp(&other.radians())
    }
}

// Same-unit and mixed-unit arithmetic. The result keeps the unit of the
// left operand.
macro_rules! impl_angle_ops {
    ($t:ident, $other:ident, $own:ident) => {
        impl Add for $t {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { $t(self.0 + rhs.0) }
        }

        impl Sub for $t {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { $t(self.0 - rhs.0) }
        }

        impl Add<$other> for $t {
            type Output = Self;
            #[inline] fn add(self, rhs: $other) -> Self { $t(self.0 + rhs.$own()) }
        }

        impl Sub<$other> for $t {
            type Output = Self;
            #[inline] fn sub(self, rhs: $other) -> Self { $t(self.0 - rhs.$own()) }
        }

        impl Neg for $t {
            type Output = Self;
            #[inline] fn neg(self) -> Self { $t(-self.0) }
        }

        impl Mul<f32> for $t {
            type Output = Self;
            #[inline] fn mul(self, rhs: f32) -> Self { $t(self.0 * rhs) }
        }

        impl Mul<$t> for f32 {
            type Output = $t;
            #[inline] fn mul(self, rhs: $t) -> $t { $t(self * rhs.0) }
        }

        impl Div<f32> for $t {
            type Output = Self;
            #[inline] fn div(self, rhs: f32) -> Self {
                debug_assert!(rhs != 0.0, "angle divided by zero");
                $t(self.0 / rhs)
            }
        }

        impl AddAssign for $t {
            #[inline] fn add_assign(&mut self, rhs: Self) { self.0 += rhs.0; }
        }

        impl SubAssign for $t {
            #[inline] fn sub_assign(&mut self, rhs: Self) { self.0 -= rhs.0; }
        }

        impl AddAssign<$other> for $t {
            #[inline] fn add_assign(&mut self, rhs: $other) { self.0 += rhs.$own(); }
        }

        impl SubAssign<$other> for $t {
            #[inline] fn sub_assign(&mut self, rhs: $other) { self.0 -= rhs.$own(); }
        }

        impl MulAssign<f32> for $t {
            #[inline] fn mul_assign(&mut self, rhs: f32) { self.0 *= rhs; }
        }

        impl DivAssign<f32> for $t {
            #[inline] fn div_assign(&mut self, rhs: f32) {
                debug_assert!(rhs != 0.0, "angle divided by zero");
                self.0 /= rhs;
            }
        }
    };
}

impl_angle_ops!(Radian, Degree, radians);
impl_angle_ops!(Degree, Radian, degrees);

// Radian-by-radian products and quotients are kept for the formulas that
// scale one angle by another (e.g. slerp's `t * omega`).
impl Mul for Radian {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Radian(self.0 * rhs.0) }
}

impl Mul<Degree> for Radian {
    type Output = Self;
    #[inline] fn mul(self, rhs: Degree) -> Self { Radian(self.0 * rhs.radians()) }
}

impl Div for Radian {
    type Output = Self;
    #[inline] fn div(self, rhs: Self) -> Self { Radian(self.0 / rhs.0) }
}

impl Div<Degree> for Radian {
    type Output = Self;
    #[inline] fn div(self, rhs: Degree) -> Self { Radian(self.0 / rhs.radians()) }
}

impl MulAssign for Radian {
    #[inline] fn mul_assign(&mut self, rhs: Self) { self.0 *= rhs.0; }
}

impl DivAssign for Radian {
    #[inline] fn div_assign(&mut self, rhs: Self) { self.0 /= rhs.0; }
}

impl fmt::Display for Radian {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Radian:{}", self.0)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Degree:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use crate::scalar::{EPSILON_6, HALF_PI};

    #[test]
    fn conversion_both_ways() {
        let d = Degree::from(Radian::new(PI));
        assert!((d.degrees() - 180.0).abs() < EPSILON_6);

        let r = Radian::from(Degree::new(180.0));
        assert!((r.radians() - PI).abs() < EPSILON_6);

        let r: Radian = Degree::new(90.0).into();
        assert!((r.radians() - HALF_PI).abs() < EPSILON_6);
    }

    #[test]
    fn mixed_unit_arithmetic() {
        let r1 = Radian::new(2.0);
        let r2 = Radian::new(1.0);
        let d = Degree::new(180.0);

        assert!(((r1 + r2).radians() - 3.0).abs() < EPSILON_6);
        assert!(((r1 + d).radians() - (2.0 + PI)).abs() < EPSILON_6);
        assert!(((r1 - r2).radians() - 1.0).abs() < EPSILON_6);
        assert!(((r1 - d).radians() - (2.0 - PI)).abs() < EPSILON_6);
        assert!(((r1 * 2.0).radians() - 4.0).abs() < EPSILON_6);
        assert!(((r1 / 2.0).radians() - 1.0).abs() < EPSILON_6);
        assert!(((-r1).radians() + 2.0).abs() < EPSILON_6);

        let sum = Degree::new(90.0) + Radian::new(HALF_PI);
        assert!((sum.degrees() - 180.0).abs() < 1e-4);

        let mut acc = Radian::new(1.0);
        acc += Degree::new(180.0);
        acc -= Radian::new(PI);
        acc *= 3.0;
        assert!((acc.radians() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn comparisons() {
        assert!(Radian::new(1.0) < Radian::new(2.0));
        assert!(Degree::new(-10.0) < Degree::new(10.0));
        assert!(Radian::new(PI) > Degree::new(90.0));
    }

    #[test]
    fn wrap_pi_range() {
        assert!((wrap_pi(3.0 * PI / 2.0) + HALF_PI).abs() < 1e-5);
        assert!((wrap_pi(-3.0 * PI / 2.0) - HALF_PI).abs() < 1e-5);
        assert!((wrap_pi(1.0) - 1.0).abs() < EPSILON_6);
        assert!((wrap_pi(10.0 * TWO_PI + 0.5) - 0.5).abs() < 1e-4);
        for i in -50..50 {
            let w = wrap_pi(i as f32 * 0.37);
            assert!(w >= -PI - 1e-5 && w <= PI + 1e-5, "{} out of range", w);
        }
    }

    #[test]
    fn atan2_origin_is_zero() {
        assert_eq!(atan2(0.0, 0.0), Radian::ZERO);
        assert!((atan2(1.0, 0.0).radians() - HALF_PI).abs() < EPSILON_6);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Radian::new(1.5)), "Radian:1.5");
        assert_eq!(format!("{}", Degree::new(45.0)), "Degree:45");
    }
}
