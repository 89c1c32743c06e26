//! Power-law easing of a normalized frame position.
//!
//! A position `t` is split into whole cycles and a fraction. Only the
//! fraction is warped, so the curve repeats once per cycle and stays
//! defined for negative positions and positions past the last frame.

use crate::angle::Angle;
use crate::errors::AngleError;
use crate::types::Unit;

/// Map an easing midpoint in (0, 1) to its power-law exponent.
///
/// The exponent `e` satisfies `0.5^e == midpoint`: a curve warped with it
/// passes through `midpoint` half way through the cycle. `0.5` maps to 1
/// (no warp); small midpoints give large exponents, midpoints near 1 give
/// exponents near 0.
pub fn midpoint_shift(midpoint: f64) -> Result<f64, AngleError> {
    if !(midpoint > 0.0 && midpoint < 1.0) {
        return Err(AngleError::InvalidMidpoint { value: midpoint });
    }
    Ok(midpoint.ln() / 0.5f64.ln())
}

/// Fractional part in `[0, 1)`, also for negative input.
#[inline]
pub fn fract_turn(turns: f64) -> f64 {
    let f = turns - turns.floor();
    // -1e-17 - floor(-1e-17) rounds up to exactly 1.0
    if f >= 1.0 { 0.0 } else { f }
}

/// Fold a turn count into a single there-and-back cycle in `[0, 1]`.
///
/// The first half of every turn rises from 0 to 1 at double speed, the
/// second half falls back. Whole turns all map to 0.
#[inline]
pub fn monocycle_turns(turns: f64) -> f64 {
    let f = fract_turn(turns);
    if f <= 0.5 { 2.0 * f } else { 2.0 * (1.0 - f) }
}

/// Warp `t` through `exponent`, in turns.
#[inline]
pub fn warp(t: f64, exponent: f64) -> f64 {
    let whole = t.floor();
    let f = fract_turn(t);
    whole + f.powf(exponent)
}

/// Eased angle for position `t`, one turn per cycle.
pub fn angle_from_t(t: f64, exponent: f64) -> Angle {
    Angle::new(warp(t, exponent), Unit::Turns)
}

/// Eased angle for position `t`, folded through the monocycle.
pub fn angle_monocycle_from_t(t: f64, exponent: f64) -> Angle {
    Angle::new(monocycle_turns(warp(t, exponent)), Unit::Turns)
}
