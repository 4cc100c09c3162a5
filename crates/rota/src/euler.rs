use crate::angle::wrap_pi;
use crate::scalar::{self, EPSILON_6, EPSILON_7, HALF_PI, PI};
use crate::Radian;
use core::fmt;

/// Head-pitch-bank orientation (intrinsic Y, then X, then Z).
///
/// Always canonical: head and bank lie in the principal range, pitch in
/// `[-pi/2, pi/2]`, and in gimbal lock (pitch at +-pi/2) all of the
/// rotation about the vertical is carried by head with bank at zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euler {
    head: Radian,
    pitch: Radian,
    bank: Radian,
}

// Angles compared modulo 2pi, so -pi and +pi are the same heading.
#[inline]
fn same_angle(a: Radian, b: Radian, eps: f32) -> bool {
    scalar::abs(wrap_pi(a.radians() - b.radians())) < eps
}

impl Euler {
    pub const IDENTITY: Self = Self { head: Radian::ZERO, pitch: Radian::ZERO, bank: Radian::ZERO };

    /// Builds the canonical triple equivalent to `(head, pitch, bank)`.
    pub fn new(head: impl Into<Radian>, pitch: impl Into<Radian>, bank: impl Into<Radian>) -> Self {
        let mut head = wrap_pi(head.into().radians());
        let mut pitch = wrap_pi(pitch.into().radians());
        let mut bank = wrap_pi(bank.into().radians());

        // Fold pitch back into [-pi/2, pi/2] by turning around.
        if pitch > HALF_PI {
            pitch = PI - pitch;
            head = wrap_pi(head + PI);
            bank = wrap_pi(bank + PI);
        } else if pitch < -HALF_PI {
            pitch = -PI - pitch;
            head = wrap_pi(head + PI);
            bank = wrap_pi(bank + PI);
        }

        // Gimbal lock: bank and head rotate about the same axis.
        if scalar::abs(scalar::abs(pitch) - HALF_PI) < EPSILON_7 {
            head = wrap_pi(head + bank);
            bank = 0.0;
        }

        Self { head: Radian::new(head), pitch: Radian::new(pitch), bank: Radian::new(bank) }
    }

    #[inline]
    pub fn head(&self) -> Radian {
        self.head
    }

    #[inline]
    pub fn pitch(&self) -> Radian {
        self.pitch
    }

    #[inline]
    pub fn bank(&self) -> Radian {
        self.bank
    }

    /// Angle-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        same_angle(self.head, other.head, eps)
            && same_angle(self.pitch, other.pitch, eps)
            && same_angle(self.bank, other.bank, eps)
    }
}

impl PartialEq for Euler {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON_6)
    }
}

impl fmt::Display for Euler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Head: {}, pitch: {}, bank: {}]", self.head, self.pitch, self.bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use crate::Degree;

    #[test]
    fn canonical_angles_unchanged() {
        let e = Euler::new(Radian::new(PI / 4.0), Radian::new(PI / 8.0), Radian::new(PI / 6.0));
        assert!(e.head().approx_eq(Radian::new(PI / 4.0), EPSILON_7));
        assert!(e.pitch().approx_eq(Radian::new(PI / 8.0), EPSILON_7));
        assert!(e.bank().approx_eq(Radian::new(PI / 6.0), EPSILON_7));

        let again = Euler::new(e.head(), e.pitch(), e.bank());
        assert_eq!(again, e);
    }

    #[test]
    fn pitch_above_half_pi_flips() {
        let e = Euler::new(Radian::ZERO, Radian::new(3.0 * PI / 4.0), Radian::ZERO);
        assert!(e.pitch().approx_eq(Radian::new(PI / 4.0), EPSILON_6));
        assert!(e.head().approx_eq(Radian::new(wrap_pi(PI)), EPSILON_6));
        assert!(e.bank().approx_eq(Radian::new(wrap_pi(PI)), EPSILON_6));
    }

    #[test]
    fn pitch_below_half_pi_flips() {
        let e = Euler::new(Radian::ZERO, Radian::new(-3.0 * PI / 4.0), Radian::ZERO);
        assert!(e.pitch().approx_eq(Radian::new(-PI / 4.0), EPSILON_6));
        assert!(e.head().approx_eq(Radian::new(wrap_pi(PI)), EPSILON_6));
        assert!(e.bank().approx_eq(Radian::new(wrap_pi(PI)), EPSILON_6));
    }

    #[test]
    fn flip_in_degrees() {
        let e = Euler::new(Degree::new(0.0), Degree::new(135.0), Degree::new(0.0));
        assert_eq!(e, Euler::new(Degree::new(180.0), Degree::new(45.0), Degree::new(180.0)));
    }

    #[test]
    fn gimbal_lock_moves_bank_into_head() {
        let bank = Radian::from(Degree::new(10.0));
        let e = Euler::new(Radian::ZERO, Radian::new(HALF_PI), bank);
        assert!(e.pitch().approx_eq(Radian::new(HALF_PI), EPSILON_7));
        assert!(e.head().approx_eq(bank, EPSILON_7));
        assert_eq!(e.bank(), Radian::ZERO);
    }

    #[test]
    fn gimbal_threshold_is_tight() {
        let (head, bank) = (Radian::new(0.2), Radian::new(0.5));

        let near = Euler::new(head, Radian::new(HALF_PI - 1e-5), bank);
        assert_eq!(near.bank(), bank);
        assert_eq!(near.head(), head);

        let locked = Euler::new(head, Radian::new(HALF_PI - 5e-8), bank);
        assert_eq!(locked.bank(), Radian::ZERO);
        assert!(locked.head().approx_eq(Radian::new(0.7), 1e-6));
    }

    #[test]
    fn canonical_ranges() {
        for i in -20..20 {
            let t = i as f32;
            let e = Euler::new(Radian::new(t * 0.91), Radian::new(t * 0.53), Radian::new(t * -1.37));
            assert!(e.head().radians().abs() <= PI + 1e-6);
            assert!(e.bank().radians().abs() <= PI + 1e-6);
            assert!(e.pitch().radians().abs() <= HALF_PI + 1e-6);
        }
    }

    #[test]
    fn plus_and_minus_pi_heading_are_equal() {
        let a = Euler::new(Radian::new(PI - 2e-7), Radian::ZERO, Radian::ZERO);
        let b = Euler::new(Radian::new(-PI + 2e-7), Radian::ZERO, Radian::ZERO);
        assert_eq!(a, b);
    }

    #[test]
    fn display() {
        let s = format!("{}", Euler::IDENTITY);
        assert_eq!(s, "[Head: Radian:0, pitch: Radian:0, bank: Radian:0]");
    }
}
