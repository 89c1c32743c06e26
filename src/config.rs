//! Construction options.
//!
//! Each options struct starts from the documented defaults; `with_*`
//! setters change one field and `build` validates everything at once.

use crate::angle::Angle;
use crate::arc::Arc;
use crate::consts::INV_SQRT_PI;
use crate::errors::AngleError;
use crate::frangle::Frangle;
use crate::types::Unit;

/// Options for an [`Angle`]: zero degrees by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleOptions {
    pub angle: f64,
    pub units: Unit,
}

impl Default for AngleOptions {
    fn default() -> Self {
        AngleOptions {
            angle: 0.0,
            units: Unit::Degrees,
        }
    }
}

impl AngleOptions {
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_units(mut self, units: Unit) -> Self {
        self.units = units;
        self
    }

    /// Set the units from a raw code, failing with `InvalidUnit`.
    pub fn with_unit_code(self, code: u32) -> Result<Self, AngleError> {
        Ok(self.with_units(Unit::from_code(code)?))
    }

    pub fn build(self) -> Angle {
        Angle::new(self.angle, self.units)
    }
}

/// Options for an [`Arc`]: zero degrees at radius 1 by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcOptions {
    pub angle: f64,
    pub units: Unit,
    pub radius: f64,
}

impl Default for ArcOptions {
    fn default() -> Self {
        ArcOptions {
            angle: 0.0,
            units: Unit::Degrees,
            radius: 1.0,
        }
    }
}

impl ArcOptions {
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_units(mut self, units: Unit) -> Self {
        self.units = units;
        self
    }

    pub fn with_unit_code(self, code: u32) -> Result<Self, AngleError> {
        Ok(self.with_units(Unit::from_code(code)?))
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn build(self) -> Result<Arc, AngleError> {
        Arc::new(Angle::new(self.angle, self.units), self.radius)
    }
}

/// Options for a [`Frangle`].
///
/// Defaults: 120 frames starting at frame 0, midpoint 0.5 (no easing),
/// monocyclic, and a radius of `1/√π` so the full disc has unit area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrangleOptions {
    pub frames: i32,
    pub frame: i32,
    pub midpoint: f64,
    pub mono: bool,
    pub radius: f64,
}

impl Default for FrangleOptions {
    fn default() -> Self {
        FrangleOptions {
            frames: 120,
            frame: 0,
            midpoint: 0.5,
            mono: true,
            radius: INV_SQRT_PI,
        }
    }
}

impl FrangleOptions {
    pub fn with_frames(mut self, frames: i32) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_frame(mut self, frame: i32) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_midpoint(mut self, midpoint: f64) -> Self {
        self.midpoint = midpoint;
        self
    }

    pub fn with_mono(mut self, mono: bool) -> Self {
        self.mono = mono;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn build(self) -> Result<Frangle, AngleError> {
        Frangle::new(
            self.frames,
            self.frame,
            self.midpoint,
            self.mono,
            self.radius,
        )
    }
}
