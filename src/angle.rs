//! Normalised rotation values.
//!
//! As an absolute direction, 0° points along the x-axis and 90° along the y-axis.

use std::{
    f64::consts::TAU,
    ops::{Add, Sub},
};

/// A geometric angle.
///
/// The raw value is kept in degrees without normalisation. Every read normalises it into
/// `[0, 360)` degrees or `[0, 2π)` radians.
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    raw_degrees: f64,
}

impl Angle {
    pub const fn from_degrees(degrees: f64) -> Self {
        Self {
            raw_degrees: degrees,
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self {
            raw_degrees: radians.to_degrees(),
        }
    }

    /// Direction of the vector `(dx, dy)`. The zero vector has no direction.
    pub fn from_components(dx: f64, dy: f64) -> Option<Self> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        // Axis-aligned vectors get exact values.
        let degrees = if dx == 0.0 {
            if dy > 0.0 {
                90.0
            } else {
                270.0
            }
        } else if dy == 0.0 {
            if dx > 0.0 {
                0.0
            } else {
                180.0
            }
        } else {
            dy.atan2(dx).to_degrees()
        };

        Some(Self::from_degrees(degrees))
    }

    /// The angle in degrees, within `[0, 360)`.
    pub fn degrees(&self) -> f64 {
        normalised(self.raw_degrees, 360.0)
    }

    /// The angle in radians, within `[0, 2π)`.
    pub fn radians(&self) -> f64 {
        let radians = self.degrees().to_radians();
        if radians >= TAU {
            0.0
        } else {
            radians
        }
    }

    /// The same direction turned by half a revolution.
    pub fn opposite(&self) -> Self {
        *self + Angle::from_degrees(180.0)
    }
}

/// Wraps `value` into `[0, period)`.
pub(crate) fn normalised(value: f64, period: f64) -> f64 {
    let value = value.rem_euclid(period);

    // rem_euclid rounds tiny negative values up to the period itself.
    if value >= period {
        value - period
    } else {
        value
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.radians() == other.radians()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::from_degrees(self.degrees() + rhs.degrees())
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::from_degrees(self.degrees() - rhs.degrees())
    }
}
