//! Unit-tagged angle types
//!
//! Survey logs carry inclination and azimuth in degrees while every
//! trigonometric call needs radians. Keeping the two as distinct types makes
//! a missing conversion a compile error instead of a wrong trajectory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// An angle in degrees, as read from a survey log or reported to a caller.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// An angle in radians, used for all trigonometry.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Degrees {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Radians {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[must_use]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl From<f64> for Degrees {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degrees_to_radians() {
        assert!((Degrees(180.0).to_radians().value() - PI).abs() < 1e-15);
        assert!((Degrees(90.0).to_radians().value() - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert!((Radians(PI).to_degrees().value() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_radian_arithmetic() {
        let diff = Radians(1.5) - Radians(0.5);
        assert!((diff.value() - 1.0).abs() < 1e-15);
        let sum = Radians(1.5) + Radians(0.5);
        assert!((sum.value() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Degrees(45.5)).unwrap();
        assert_eq!(json, "45.5");
    }
}
