use crate::scalar::{self, EPSILON_6};
use crate::{Radian, Vec3};
use core::fmt;

/// Rotation by `angle` about a unit `axis`.
///
/// The axis is normalized and the angle wrapped into the principal range on
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle {
    axis: Vec3,
    angle: Radian,
}

impl AxisAngle {
    /// Zero rotation, reported about +X.
    pub const IDENTITY: Self = Self { axis: Vec3::RIGHT, angle: Radian::ZERO };

    pub fn new(axis: Vec3, angle: impl Into<Radian>) -> Self {
        Self { axis: axis.normalized(), angle: angle.into().wrap_pi() }
    }

    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    #[inline]
    pub fn angle(&self) -> Radian {
        self.angle
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Axis: {}, Angle: {}]", self.axis, self.angle)
    }
}

/// Rotation vector: the unit axis scaled by the angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct ExponentialMap(Vec3);

impl ExponentialMap {
    #[inline]
    pub const fn new(e: Vec3) -> Self {
        Self(e)
    }

    #[inline]
    pub fn value(&self) -> Vec3 {
        self.0
    }

    /// Rotation angle, `|e|`.
    #[inline]
    pub fn angle(&self) -> Radian {
        Radian::new(self.0.length())
    }

    /// Unit rotation axis, or the zero vector for the zero rotation.
    pub fn axis(&self) -> Vec3 {
        let len = self.0.length();
        if scalar::approx_eq(len, 0.0, EPSILON_6) {
            return Vec3::ZERO;
        }
        self.0 / len
    }

    pub fn to_axis_angle(&self) -> AxisAngle {
        let len = self.0.length();
        if scalar::approx_eq(len, 0.0, EPSILON_6) {
            return AxisAngle::IDENTITY;
        }
        AxisAngle::new(self.0 / len, Radian::new(len))
    }
}

impl From<AxisAngle> for ExponentialMap {
    fn from(aa: AxisAngle) -> Self {
        Self(aa.axis * aa.angle.radians())
    }
}

impl From<ExponentialMap> for AxisAngle {
    fn from(e: ExponentialMap) -> Self {
        e.to_axis_angle()
    }
}

impl fmt::Display for ExponentialMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
