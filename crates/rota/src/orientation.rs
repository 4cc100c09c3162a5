//! Orientation matrices and the conversion graph between Euler angles,
//! quaternions and matrices.
//!
//! All conversions follow the head-pitch-bank convention: head about +Y,
//! pitch about +X, bank about +Z, applied in that order to the object.

use crate::angle::{self, Radian};
use crate::scalar::{self, EPSILON_6, HALF_PI};
use crate::{Euler, Mat3, Quaternion, Vec3};
use core::fmt;

// |sin(pitch)| above this is treated as looking straight up or down.
const GIMBAL_SIN_PITCH: f32 = 0.9999;

// +-pi/2 with the sign of `sp`.
#[inline]
fn pole_pitch(sp: f32) -> Radian {
    Radian::new(if sp < 0.0 { -HALF_PI } else { HALF_PI })
}

/// Orthogonal matrix taking object-space row vectors to upright space.
///
/// The rows are the object's right, up and forward axes expressed in
/// upright space. The transpose maps back.
#[derive(Clone, Copy, Debug)]
pub struct OrientationMatrix(Mat3);

impl OrientationMatrix {
    pub const IDENTITY: Self = Self(Mat3::IDENTITY);

    /// Wraps an object-to-upright matrix. Debug builds check orthogonality.
    pub fn new(to_upright: Mat3) -> Self {
        debug_assert!(
            to_upright.is_orthogonal(),
            "OrientationMatrix built from a non-orthogonal matrix: {}",
            to_upright
        );
        Self(to_upright)
    }

    /// From the object's basis vectors `p`, `q`, `r` in upright space.
    pub fn from_rows(p: Vec3, q: Vec3, r: Vec3) -> Self {
        Self::new(Mat3::from_rows(p, q, r))
    }

    #[inline]
    pub fn to_upright_space(&self, v: Vec3) -> Vec3 {
        v * self.0
    }

    #[inline]
    pub fn to_object_space(&self, v: Vec3) -> Vec3 {
        v * self.0.transpose()
    }

    #[inline]
    pub fn to_upright_matrix(&self) -> Mat3 {
        self.0
    }

    #[inline]
    pub fn to_object_matrix(&self) -> Mat3 {
        self.0.transpose()
    }

    pub fn to_euler(&self) -> Euler {
        let m = &self.0;
        let sp = -m[7];

        if scalar::abs(sp) > GIMBAL_SIN_PITCH {
            log::trace!("OrientationMatrix::to_euler: gimbal lock, sin(pitch) = {}", sp);
            // Pinned to the pole, bank folded into head
            let head = angle::atan2(-m[2], m[0]);
            Euler::new(head, pole_pitch(sp), Radian::ZERO)
        } else {
            let pitch = angle::asin(sp);
            let head = angle::atan2(m[6], m[8]);
            let bank = angle::atan2(m[1], m[4]);
            Euler::new(head, pitch, bank)
        }
    }

    /// Largest-component extraction: recovers whichever of `w, x, y, z` has
    /// the greatest magnitude from the diagonal, then the rest from the
    /// off-diagonal sums and differences.
    pub fn to_quaternion(&self) -> Quaternion {
        let m = &self.0;

        let four_sq_minus_one = [
            m[0] + m[4] + m[8],
            m[0] - m[4] - m[8],
            m[4] - m[0] - m[8],
            m[8] - m[0] - m[4],
        ];

        let mut biggest = 0;
        for i in 1..4 {
            if four_sq_minus_one[i] > four_sq_minus_one[biggest] {
                biggest = i;
            }
        }

        let big = scalar::sqrt(four_sq_minus_one[biggest] + 1.0) * 0.5;
        let mult = 0.25 / big;

        match biggest {
            0 => Quaternion::new(big, (m[5] - m[7]) * mult, (m[6] - m[2]) * mult, (m[1] - m[3]) * mult),
            1 => Quaternion::new((m[5] - m[7]) * mult, big, (m[1] + m[3]) * mult, (m[6] + m[2]) * mult),
            2 => Quaternion::new((m[6] - m[2]) * mult, (m[1] + m[3]) * mult, big, (m[5] + m[7]) * mult),
            _ => Quaternion::new((m[1] - m[3]) * mult, (m[6] + m[2]) * mult, (m[5] + m[7]) * mult, big),
        }
    }

    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq(&other.0, eps)
    }
}

impl Default for OrientationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for OrientationMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON_6)
    }
}

impl From<Euler> for OrientationMatrix {
    fn from(e: Euler) -> Self {
        let (sh, ch) = e.head().sin_cos();
        let (sp, cp) = e.pitch().sin_cos();
        let (sb, cb) = e.bank().sin_cos();
        Self(Mat3::new(
            ch * cb + sh * sp * sb,
            sb * cp,
            -sh * cb + ch * sp * sb,
            -ch * sb + sh * sp * cb,
            cb * cp,
            sb * sh + ch * sp * cb,
            sh * cp,
            -sp,
            ch * cp,
        ))
    }
}

impl From<Quaternion> for OrientationMatrix {
    fn from(q: Quaternion) -> Self {
        let Quaternion { w, x, y, z } = q;
        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        Self(Mat3::new(
            1.0 - 2.0 * y2 - 2.0 * z2,
            2.0 * xy + 2.0 * wz,
            2.0 * xz - 2.0 * wy,
            2.0 * xy - 2.0 * wz,
            1.0 - 2.0 * x2 - 2.0 * z2,
            2.0 * yz + 2.0 * wx,
            2.0 * xz + 2.0 * wy,
            2.0 * yz - 2.0 * wx,
            1.0 - 2.0 * x2 - 2.0 * y2,
        ))
    }
}

impl From<OrientationMatrix> for Euler {
    fn from(m: OrientationMatrix) -> Self {
        m.to_euler()
    }
}

impl From<OrientationMatrix> for Quaternion {
    fn from(m: OrientationMatrix) -> Self {
        m.to_quaternion()
    }
}

impl From<OrientationMatrix> for Mat3 {
    fn from(m: OrientationMatrix) -> Self {
        m.0
    }
}

impl fmt::Display for OrientationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Object-to-upright quaternion for a head-pitch-bank triple.
pub fn euler_to_quaternion(e: &Euler) -> Quaternion {
    let (sh, ch) = (e.head() / 2.0).sin_cos();
    let (sp, cp) = (e.pitch() / 2.0).sin_cos();
    let (sb, cb) = (e.bank() / 2.0).sin_cos();
    Quaternion::new(
        ch * cp * cb + sh * sp * sb,
        ch * sp * cb + sh * cp * sb,
        sh * cp * cb - ch * sp * sb,
        ch * cp * sb - sh * sp * cb,
    )
}

/// Canonical head-pitch-bank triple for a unit quaternion.
pub fn quaternion_to_euler(q: &Quaternion) -> Euler {
    let Quaternion { w, x, y, z } = *q;
    let sp = -2.0 * (y * z - w * x);

    if scalar::abs(sp) > GIMBAL_SIN_PITCH {
        log::trace!("quaternion_to_euler: gimbal lock, sin(pitch) = {}", sp);
        // Looking straight up or down: bank is folded into head.
        let pitch = pole_pitch(sp);
        let head = angle::atan2(-x * z + w * y, 0.5 - y * y - z * z);
        Euler::new(head, pitch, Radian::ZERO)
    } else {
        let pitch = angle::asin(sp);
        let head = angle::atan2(x * z + w * y, 0.5 - x * x - y * y);
        let bank = angle::atan2(x * y + w * z, 0.5 - x * x - z * z);
        Euler::new(head, pitch, bank)
    }
}

impl From<Euler> for Quaternion {
    fn from(e: Euler) -> Self {
        euler_to_quaternion(&e)
    }
}

impl From<Quaternion> for Euler {
    fn from(q: Quaternion) -> Self {
        quaternion_to_euler(&q)
    }
}
