//! rota: 3D math primitives for orientation work
//!
//! Vectors, row-major matrices, unit-tagged angles and the usual rotation
//! representations (Euler angles, axis-angle, exponential map, quaternion,
//! orientation matrix) with conversions between them.
//!
//! # Conventions
//! - Everything is `f32` and `Copy`.
//! - Vectors are row vectors: transform with `v * M`, and `A * B` applies
//!   `A` first.
//! - Euler angles are head (about +Y), pitch (about +X), bank (about +Z),
//!   and are always stored in canonical form.
//! - Nothing here fails at runtime. Degenerate input gets a fixed answer
//!   (normalizing zero returns zero, inverting a singular matrix returns
//!   `ZERO`), and `try_inverse` is there for callers who want to branch.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod scalar;
mod angle;
mod vec2;
mod vec3;
mod vec4;
mod mat2;
mod mat3;
mod mat4;
mod euler;
mod axis_angle;
mod quat;
mod orientation;
mod polar;

pub use angle::{acos, asin, atan, atan2, wrap_pi, Degree, Radian};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use euler::Euler;
pub use axis_angle::{AxisAngle, ExponentialMap};
pub use quat::Quaternion;
pub use orientation::{euler_to_quaternion, quaternion_to_euler, OrientationMatrix};
pub use polar::{Polar2, Polar3};

#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: #[repr(C)] or #[repr(transparent)] over f32 only, no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Radian);
    impl_pod!(Degree);
    impl_pod!(Vec2);
    impl_pod!(Vec3);
    impl_pod!(Vec4);
    impl_pod!(Mat2);
    impl_pod!(Mat3);
    impl_pod!(Mat4);
    impl_pod!(Quaternion);

    // ExponentialMap wraps Vec3 transparently
    unsafe impl bytemuck::TransparentWrapper<Vec3> for ExponentialMap {}
}
