//! Numeric constants and stateless scaling helpers.
//!
//! Kappa is the handle length, as a fraction of the radius, of the cubic
//! Bézier that best approximates a quarter circle.

use std::f64::consts::{FRAC_2_SQRT_PI, FRAC_PI_2, SQRT_2};

pub const PI: f64 = std::f64::consts::PI;
pub const INV_PI: f64 = std::f64::consts::FRAC_1_PI;
pub const TAU: f64 = std::f64::consts::TAU;
pub const INV_TAU: f64 = 1.0 / TAU;
/// Radians per degree
pub const RAD: f64 = PI / 180.0;
/// Degrees per radian
pub const INV_RAD: f64 = 180.0 / PI;
/// 4(√2 − 1)/3
pub const KAPPA: f64 = 4.0 * (SQRT_2 - 1.0) / 3.0;
pub const INV_KAPPA: f64 = 1.0 / KAPPA;
pub const COMP_KAPPA: f64 = 1.0 - KAPPA;
pub const INV_COMP_KAPPA: f64 = 1.0 / COMP_KAPPA;
/// Radius of the disc with unit area
pub const INV_SQRT_PI: f64 = FRAC_2_SQRT_PI / 2.0;

#[inline]
pub fn pi(x: f64) -> f64 {
    x * PI
}

#[inline]
pub fn div_pi(x: f64) -> f64 {
    x * INV_PI
}

#[inline]
pub fn tau(x: f64) -> f64 {
    x * TAU
}

#[inline]
pub fn div_tau(x: f64) -> f64 {
    x * INV_TAU
}

/// Multiply by π/2.
#[inline]
pub fn half_pi(x: f64) -> f64 {
    x * FRAC_PI_2
}

/// Divide by π/2.
#[inline]
pub fn div_half_pi(x: f64) -> f64 {
    x / FRAC_PI_2
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * RAD
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * INV_RAD
}

#[inline]
pub fn pis_to_degrees(pis: f64) -> f64 {
    pis * 180.0
}

#[inline]
pub fn degrees_to_pis(degrees: f64) -> f64 {
    degrees / 180.0
}

#[inline]
pub fn degrees_to_turns(degrees: f64) -> f64 {
    degrees / 360.0
}

#[inline]
pub fn turns_to_degrees(turns: f64) -> f64 {
    turns * 360.0
}

/// Bézier handle length for a quarter circle of the given radius.
#[inline]
pub fn tangent_from_radius(radius: f64) -> f64 {
    radius * KAPPA
}

/// Radius of the quarter circle whose Bézier handle has this length.
#[inline]
pub fn radius_from_tangent(tangent: f64) -> f64 {
    tangent * INV_KAPPA
}

/// Distance from the handle tip to the corner of the bounding square.
#[inline]
pub fn tangent_to_radius(radius: f64) -> f64 {
    radius * COMP_KAPPA
}

/// Absolute coordinate of a quarter-circle handle tip starting at `start`.
#[inline]
pub fn absolute_tangent(start: f64, radius: f64) -> f64 {
    start + radius * KAPPA
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn kappa_value() {
        assert!((KAPPA - 0.552_284_749_830_793_5).abs() < EPS);
        assert!((KAPPA * INV_KAPPA - 1.0).abs() < EPS);
        assert!((COMP_KAPPA * INV_COMP_KAPPA - 1.0).abs() < EPS);
    }

    #[test]
    fn unit_disc_radius() {
        assert!((PI * INV_SQRT_PI * INV_SQRT_PI - 1.0).abs() < EPS);
    }

    #[test]
    fn scaling_pairs_invert() {
        let x = 1.234;
        assert!((div_pi(pi(x)) - x).abs() < EPS);
        assert!((div_tau(tau(x)) - x).abs() < EPS);
        assert!((div_half_pi(half_pi(x)) - x).abs() < EPS);
        assert!((radians_to_degrees(degrees_to_radians(x)) - x).abs() < EPS);
        assert!((degrees_to_pis(pis_to_degrees(x)) - x).abs() < EPS);
        assert!((degrees_to_turns(turns_to_degrees(x)) - x).abs() < EPS);
        assert!((radius_from_tangent(tangent_from_radius(x)) - x).abs() < EPS);
    }

    #[test]
    fn tangent_helpers() {
        assert!((tangent_from_radius(2.0) + tangent_to_radius(2.0) - 2.0).abs() < EPS);
        assert!((absolute_tangent(10.0, 1.0) - (10.0 + KAPPA)).abs() < EPS);
        assert!((degrees_to_radians(180.0) - PI).abs() < EPS);
    }
}
