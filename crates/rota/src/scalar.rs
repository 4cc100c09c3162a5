//! Float dispatch and tolerance helpers.
//!
//! Every transcendental call in the crate goes through this module so the
//! same code builds against `std` or, for `no_std` targets, against `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("rota needs either the `std` or the `libm` feature for float math");

pub const PI: f32 = core::f32::consts::PI;
pub const HALF_PI: f32 = core::f32::consts::FRAC_PI_2;
pub const TWO_PI: f32 = core::f32::consts::TAU;

pub const DEG_TO_RAD: f32 = PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Tolerance tiers for approximate comparisons.
pub const EPSILON_3: f32 = 1e-3;
pub const EPSILON_4: f32 = 1e-4;
pub const EPSILON_5: f32 = 1e-5;
pub const EPSILON_6: f32 = 1e-6;
pub const EPSILON_7: f32 = 1e-7;

/// Absolute-tolerance comparison: `|a - b| < eps`.
#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    abs(a - b) < eps
}

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn abs(x: f32) -> f32 {
        x.abs()
    }
    #[inline(always)]
    pub fn sin(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn asin(x: f32) -> f32 {
        x.asin()
    }
    #[inline(always)]
    pub fn acos(x: f32) -> f32 {
        x.acos()
    }
    #[inline(always)]
    pub fn atan(x: f32) -> f32 {
        x.atan()
    }
    #[inline(always)]
    pub fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn floor(x: f32) -> f32 {
        x.floor()
    }
    #[inline(always)]
    pub fn ceil(x: f32) -> f32 {
        x.ceil()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn abs(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn sin(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn cos(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn tan(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn asin(x: f32) -> f32 {
        libm::asinf(x)
    }
    #[inline(always)]
    pub fn acos(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn atan(x: f32) -> f32 {
        libm::atanf(x)
    }
    #[inline(always)]
    pub fn atan2(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn floor(x: f32) -> f32 {
        libm::floorf(x)
    }
    #[inline(always)]
    pub fn ceil(x: f32) -> f32 {
        libm::ceilf(x)
    }
}

pub use float_ops::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_tiers() {
        let base = 1.0f32;
        assert!(approx_eq(base, base + EPSILON_3 * 0.9, EPSILON_3));
        assert!(!approx_eq(base, base + EPSILON_3 * 1.1, EPSILON_3));
        assert!(approx_eq(base, base + EPSILON_4 * 0.9, EPSILON_4));
        assert!(!approx_eq(base, base + EPSILON_4 * 1.1, EPSILON_4));
        assert!(approx_eq(base, base + EPSILON_5 * 0.9, EPSILON_5));
        assert!(!approx_eq(base, base + EPSILON_5 * 1.1, EPSILON_5));
        assert!(approx_eq(base, base + EPSILON_6 * 0.9, EPSILON_6));
        assert!(!approx_eq(base, base + EPSILON_6 * 1.5, EPSILON_6));
    }

    #[test]
    fn float_dispatch() {
        assert_eq!(sqrt(4.0), 2.0);
        assert_eq!(abs(-3.0), 3.0);
        assert_eq!(floor(-0.5), -1.0);
        let (s, c) = sin_cos(0.0);
        assert_eq!((s, c), (0.0, 1.0));
    }
}
