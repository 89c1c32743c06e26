//! Frame angles: a frame index eased into an angle.
//!
//! A frangle owns an arc whose angle is never written directly. It is
//! re-derived from the normalized position `t`, the easing exponent and
//! the monocycle flag after every successful parameter write, before the
//! setter returns.

use crate::angle::{Angle, AngleLike, polcosine, polsine};
use crate::arc::{Arc, Circular, validate_radius};
use crate::consts::INV_SQRT_PI;
use crate::easing::{angle_from_t, angle_monocycle_from_t, midpoint_shift};
use crate::errors::AngleError;
use crate::log::debug;

/// The animation parameter a write touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Frames,
    Frame,
    Midpoint,
    Monocycle,
    T,
}

impl Param {
    /// Whether `t` must be recomputed from `frame / frames`.
    #[inline]
    pub fn retimes(self) -> bool {
        matches!(self, Param::Frames | Param::Frame)
    }
}

/// A frame-indexed, eased angle.
#[derive(Clone, Copy, Debug)]
pub struct Frangle {
    arc: Arc,
    frames: i32,
    frame: i32,
    midpoint: f64,
    exponent: f64,
    t: f64,
    monocycle: bool,
}

impl Frangle {
    /// Build a frangle and derive its first angle.
    ///
    /// `frames` must be positive, `midpoint` strictly inside (0, 1) and
    /// `radius` positive. `frame` may be any integer.
    pub fn new(
        frames: i32,
        frame: i32,
        midpoint: f64,
        monocycle: bool,
        radius: f64,
    ) -> Result<Frangle, AngleError> {
        let frames = validate_frames(frames)?;
        let radius = validate_radius(radius)?;
        let exponent = midpoint_shift(midpoint)?;
        let mut frangle = Frangle {
            arc: Arc::unchecked(Angle::ZERO, radius),
            frames,
            frame,
            midpoint,
            exponent,
            t: 0.0,
            monocycle,
        };
        frangle.refresh(Param::Frame);
        Ok(frangle)
    }

    pub fn frames(&self) -> i32 {
        self.frames
    }

    pub fn frame(&self) -> i32 {
        self.frame
    }

    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// Power-law exponent derived from the midpoint.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn is_monocycle(&self) -> bool {
        self.monocycle
    }

    /// Alias of [`Frangle::is_monocycle`].
    pub fn mono(&self) -> bool {
        self.monocycle
    }

    pub fn set_frames(&mut self, frames: i32) -> Result<(), AngleError> {
        self.frames = validate_frames(frames)?;
        self.refresh(Param::Frames);
        Ok(())
    }

    /// Any integer is a valid frame; positions outside `0..frames` continue
    /// the periodic curve.
    pub fn set_frame(&mut self, frame: i32) {
        self.frame = frame;
        self.refresh(Param::Frame);
    }

    pub fn set_midpoint(&mut self, midpoint: f64) -> Result<(), AngleError> {
        self.exponent = midpoint_shift(midpoint)?;
        self.midpoint = midpoint;
        self.refresh(Param::Midpoint);
        Ok(())
    }

    pub fn set_monocycle(&mut self, monocycle: bool) {
        self.monocycle = monocycle;
        self.refresh(Param::Monocycle);
    }

    /// Alias of [`Frangle::set_monocycle`].
    pub fn set_mono(&mut self, monocycle: bool) {
        self.set_monocycle(monocycle);
    }

    /// Override `t` directly; it stays overridden until the next write to
    /// `frame` or `frames`.
    pub fn set_t(&mut self, t: f64) -> Result<(), AngleError> {
        if !t.is_finite() {
            return Err(AngleError::NonFinite { property: "t" });
        }
        self.t = t;
        self.refresh(Param::T);
        Ok(())
    }

    /// Re-establish `angle = f(t, exponent, monocycle)` after a write.
    fn refresh(&mut self, changed: Param) {
        if changed.retimes() {
            self.t = f64::from(self.frame) / f64::from(self.frames);
        }
        let angle = if self.monocycle {
            angle_monocycle_from_t(self.t, self.exponent)
        } else {
            angle_from_t(self.t, self.exponent)
        };
        self.arc = self.arc.with_angle(angle);
        debug!(
            ?changed,
            frame = self.frame,
            frames = self.frames,
            t = self.t,
            exponent = self.exponent,
            turns = angle.turns(),
            "frangle recalculated"
        );
    }
}

fn validate_frames(frames: i32) -> Result<i32, AngleError> {
    if frames > 0 {
        Ok(frames)
    } else {
        Err(AngleError::InvalidFrameCount { value: frames })
    }
}

impl Default for Frangle {
    /// 120 frames, frame 0, linear easing, monocyclic, unit-area radius.
    fn default() -> Self {
        let mut frangle = Frangle {
            arc: Arc::unchecked(Angle::ZERO, INV_SQRT_PI),
            frames: 120,
            frame: 0,
            midpoint: 0.5,
            exponent: 1.0,
            t: 0.0,
            monocycle: true,
        };
        frangle.refresh(Param::Frame);
        frangle
    }
}

impl AngleLike for Frangle {
    fn angle(&self) -> Angle {
        self.arc.angle()
    }

    fn angle_mut(&mut self, property: &'static str) -> Result<&mut Angle, AngleError> {
        Err(AngleError::ReadOnlyDerivedProperty { property })
    }

    fn kind(&self) -> &'static str {
        "Frangle"
    }

    /// Monocyclic frangles already carry the ease in their folded angle,
    /// so the half-angle transform applies to it directly.
    fn polsin(&self) -> f64 {
        if self.monocycle {
            (1.0 - self.fcos(0.5)) / 2.0
        } else {
            polsine(self.radians())
        }
    }

    fn polcos(&self) -> f64 {
        if self.monocycle {
            (1.0 + self.fcos(0.5)) / 2.0
        } else {
            polcosine(self.radians())
        }
    }
}

impl Circular for Frangle {
    fn radius(&self) -> f64 {
        self.arc.radius()
    }

    fn set_radius(&mut self, radius: f64) -> Result<(), AngleError> {
        self.arc.set_radius(radius)
    }
}
