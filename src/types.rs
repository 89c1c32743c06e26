//! Angular units and the exact factors between them.
//!
//! Conversions are closed-form multiplications through degrees; nothing is
//! iterated or approximated.

use std::fmt;
use std::str::FromStr;

use crate::consts::{INV_RAD, RAD};
use crate::errors::AngleError;

/// The unit an angle magnitude is expressed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// 360 per turn
    #[default]
    Degrees,
    /// 2π per turn
    Radians,
    /// 1 per turn
    Turns,
    /// Multiples of π, 2 per turn
    Pis,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Degrees, Unit::Radians, Unit::Turns, Unit::Pis];

    /// Look a unit up by its stable integer code.
    pub fn from_code(code: u32) -> Result<Unit, AngleError> {
        match code {
            0 => Ok(Unit::Degrees),
            1 => Ok(Unit::Radians),
            2 => Ok(Unit::Turns),
            3 => Ok(Unit::Pis),
            other => Err(AngleError::InvalidUnit {
                code: other.to_string(),
            }),
        }
    }

    /// Stable integer code (degrees 0, radians 1, turns 2, pis 3)
    pub fn code(self) -> u32 {
        match self {
            Unit::Degrees => 0,
            Unit::Radians => 1,
            Unit::Turns => 2,
            Unit::Pis => 3,
        }
    }

    /// Name of the accessor property that reads and writes this unit.
    pub fn property(self) -> &'static str {
        match self {
            Unit::Degrees => "degrees",
            Unit::Radians => "radians",
            Unit::Turns => "turns",
            Unit::Pis => "pis",
        }
    }

    /// How many degrees one of this unit spans.
    #[inline]
    pub fn degrees_per_unit(self) -> f64 {
        match self {
            Unit::Degrees => 1.0,
            Unit::Radians => INV_RAD,
            Unit::Turns => 360.0,
            Unit::Pis => 180.0,
        }
    }

    /// How many of this unit fit in one degree.
    #[inline]
    pub fn units_per_degree(self) -> f64 {
        match self {
            Unit::Degrees => 1.0,
            Unit::Radians => RAD,
            Unit::Turns => 1.0 / 360.0,
            Unit::Pis => 1.0 / 180.0,
        }
    }

    /// Convert `value` expressed in `self` into `target`.
    ///
    /// Same-unit conversion returns `value` untouched.
    #[inline]
    pub fn convert(self, value: f64, target: Unit) -> f64 {
        if self == target {
            value
        } else {
            value * self.degrees_per_unit() * target.units_per_degree()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

impl TryFrom<u32> for Unit {
    type Error = AngleError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Unit::from_code(code)
    }
}

impl FromStr for Unit {
    type Err = AngleError;

    /// Accepts the plain names, a few common abbreviations and the
    /// `KAU_` prefixed constant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix("KAU_").unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" => Ok(Unit::Degrees),
            "radians" | "radian" | "rad" => Ok(Unit::Radians),
            "turns" | "turn" => Ok(Unit::Turns),
            "pis" | "pi" => Ok(Unit::Pis),
            _ => Err(AngleError::InvalidUnit {
                code: s.to_string(),
            }),
        }
    }
}
