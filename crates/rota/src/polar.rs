//! Polar (2D) and spherical (3D) coordinates in canonical form.

use crate::angle::{self, wrap_pi};
use crate::scalar::{self, EPSILON_6, HALF_PI, PI, TWO_PI};
use crate::{Radian, Vec2, Vec3};
use core::fmt;

// Spherical pitch within this fraction of +-pi/2 counts as gimbal lock.
const GIMBAL_PITCH: f32 = HALF_PI * 0.9999;

/// Wraps a heading only when it is actually out of range, so in-range
/// values keep their exact bits.
#[inline]
fn canonical_heading(heading: f32) -> f32 {
    if scalar::abs(heading) > PI {
        wrap_pi(heading)
    } else {
        heading
    }
}

/// 2D polar coordinates: non-negative radius and heading measured from +X
/// toward +Y.
#[derive(Clone, Copy, Debug, Default)]
pub struct Polar2 {
    radius: f32,
    heading: Radian,
}

impl Polar2 {
    pub fn new(radius: f32, heading: impl Into<Radian>) -> Self {
        let mut r = radius;
        let mut h = heading.into().radians();

        if r == 0.0 {
            h = 0.0;
        } else {
            if r < 0.0 {
                r = -r;
                h += PI;
            }
            h = canonical_heading(h);
        }

        Self { radius: r, heading: Radian::new(h) }
    }

    /// Polar form of a Cartesian point. Points within 1e-6 of the origin map
    /// to the origin.
    pub fn from_cartesian(p: Vec2) -> Self {
        let r = p.length();
        if r < EPSILON_6 {
            return Self::default();
        }
        Self::new(r, angle::atan2(p.y, p.x))
    }

    pub fn to_cartesian(&self) -> Vec2 {
        let (s, c) = self.heading.sin_cos();
        Vec2::new(self.radius * c, self.radius * s)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn heading(&self) -> Radian {
        self.heading
    }

    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        scalar::approx_eq(self.radius, other.radius, eps) && self.heading.approx_eq(other.heading, eps)
    }
}

impl PartialEq for Polar2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON_6)
    }
}

impl From<Vec2> for Polar2 {
    fn from(p: Vec2) -> Self {
        Self::from_cartesian(p)
    }
}

impl From<Polar2> for Vec2 {
    fn from(p: Polar2) -> Self {
        p.to_cartesian()
    }
}

impl fmt::Display for Polar2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Radius: {}, Head: {}]", self.radius, self.heading)
    }
}

/// Spherical coordinates: radius, heading about +Y measured from +Z toward
/// +X, and pitch measured downward (positive pitch points toward -Y).
#[derive(Clone, Copy, Debug, Default)]
pub struct Polar3 {
    radius: f32,
    heading: Radian,
    pitch: Radian,
}

impl Polar3 {
    pub fn new(radius: f32, heading: impl Into<Radian>, pitch: impl Into<Radian>) -> Self {
        let mut r = radius;
        let mut h = heading.into().radians();
        let mut p = pitch.into().radians();

        if r == 0.0 {
            h = 0.0;
            p = 0.0;
        } else {
            if r < 0.0 {
                r = -r;
                h += PI;
                p = -p;
            }

            if scalar::abs(p) > HALF_PI {
                // Offset by 90 degrees and wrap into [0, 2pi)
                p += HALF_PI;
                p -= scalar::floor(p / TWO_PI) * TWO_PI;
                if p > PI {
                    // Over the pole: turn around
                    h += PI;
                    p = 3.0 * PI / 2.0 - p;
                } else {
                    p -= HALF_PI;
                }
            }

            if scalar::abs(p) >= GIMBAL_PITCH {
                h = 0.0;
            } else {
                h = canonical_heading(h);
            }
        }

        Self { radius: r, heading: Radian::new(h), pitch: Radian::new(p) }
    }

    /// Spherical form of a Cartesian point. Points within 1e-6 of the origin
    /// map to the origin.
    pub fn from_cartesian(v: Vec3) -> Self {
        let r = v.length();
        if r < EPSILON_6 {
            return Self::default();
        }
        let heading = angle::atan2(v.x, v.z);
        let pitch = angle::asin((-v.y / r).clamp(-1.0, 1.0));
        Self::new(r, heading, pitch)
    }

    pub fn to_cartesian(&self) -> Vec3 {
        let (sh, ch) = self.heading.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(self.radius * cp * sh, -self.radius * sp, self.radius * cp * ch)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn heading(&self) -> Radian {
        self.heading
    }

    #[inline]
    pub fn pitch(&self) -> Radian {
        self.pitch
    }

    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        scalar::approx_eq(self.radius, other.radius, eps)
            && self.heading.approx_eq(other.heading, eps)
            && self.pitch.approx_eq(other.pitch, eps)
    }
}

impl PartialEq for Polar3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON_6)
    }
}

impl From<Vec3> for Polar3 {
    fn from(v: Vec3) -> Self {
        Self::from_cartesian(v)
    }
}

impl From<Polar3> for Vec3 {
    fn from(p: Polar3) -> Self {
        p.to_cartesian()
    }
}

impl fmt::Display for Polar3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Radius: {}, Head: {}, Pitch: {}]", self.radius, self.heading, self.pitch)
    }
}
