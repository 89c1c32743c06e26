//! Circular arcs: an angle swept at a positive radius.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use glam::{DVec2, dvec2};

use crate::angle::{Angle, AngleLike, versine};
use crate::errors::AngleError;

/// Reject anything that is not a finite, strictly positive radius.
pub(crate) fn validate_radius(radius: f64) -> Result<f64, AngleError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(radius)
    } else {
        Err(AngleError::InvalidRadius { value: radius })
    }
}

/// An angle with a radius; the radius is always strictly positive.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    angle: Angle,
    radius: f64,
}

impl Arc {
    pub fn new(angle: Angle, radius: f64) -> Result<Arc, AngleError> {
        Ok(Arc {
            angle,
            radius: validate_radius(radius)?,
        })
    }

    /// Create an arc without validating the radius (const-friendly).
    /// Use `new` for caller-provided values.
    #[inline]
    pub(crate) const fn unchecked(angle: Angle, radius: f64) -> Arc {
        Arc { angle, radius }
    }

    /// The same radius around a different angle.
    ///
    /// Every arithmetic result built from an arc goes through here, so the
    /// left operand's radius always carries over.
    pub fn with_angle(self, angle: Angle) -> Arc {
        Arc {
            angle,
            radius: self.radius,
        }
    }

    pub fn checked_div(self, divisor: f64) -> Result<Arc, AngleError> {
        Ok(self.with_angle(self.angle.checked_div(divisor)?))
    }

    pub fn floor_div(self, divisor: f64) -> Result<Arc, AngleError> {
        Ok(self.with_angle(self.angle.floor_div(divisor)?))
    }

    pub fn pow(self, exponent: f64, normalize: bool) -> Arc {
        self.with_angle(self.angle.pow(exponent, normalize))
    }
}

impl Default for Arc {
    fn default() -> Self {
        Arc::unchecked(Angle::ZERO, 1.0)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at radius {}", self.angle, self.radius)
    }
}

impl AngleLike for Arc {
    fn angle(&self) -> Angle {
        self.angle
    }

    fn angle_mut(&mut self, _property: &'static str) -> Result<&mut Angle, AngleError> {
        Ok(&mut self.angle)
    }

    fn kind(&self) -> &'static str {
        "Arc"
    }
}

/// Circular geometry derived from an angle and a radius.
///
/// The sweep starts on the positive x axis and runs counter-clockwise for
/// positive angles.
pub trait Circular: AngleLike {
    fn radius(&self) -> f64;

    /// Replace the radius. Non-positive or non-finite values are rejected
    /// and leave the radius unchanged.
    fn set_radius(&mut self, radius: f64) -> Result<(), AngleError>;

    /// Arc length, `r·θ`.
    fn length(&self) -> f64 {
        self.radius() * self.radians()
    }

    /// Chord length, `2r·sin(θ/2)`.
    fn chord(&self) -> f64 {
        2.0 * self.radius() * (0.5 * self.radians()).sin()
    }

    /// Circular sector area, `r²θ/2`.
    fn area(&self) -> f64 {
        0.5 * self.radius() * self.radius() * self.radians()
    }

    /// `r·versin(θ)`
    fn sagitta(&self) -> f64 {
        self.radius() * versine(self.radians())
    }

    /// Point at `fraction` of the sweep on the circle around `center`.
    fn point_at(&self, center: DVec2, fraction: f64) -> DVec2 {
        let theta = fraction * self.radians();
        center + self.radius() * dvec2(theta.cos(), theta.sin())
    }

    /// Start and end of the sweep around `center`.
    fn end_points(&self, center: DVec2) -> (DVec2, DVec2) {
        (self.point_at(center, 0.0), self.point_at(center, 1.0))
    }

    /// Length of each Bézier handle, `4/3·tan(θ/4)·r`.
    ///
    /// For a quarter turn this is `KAPPA·r`.
    fn handle_length(&self) -> f64 {
        4.0 / 3.0 * (0.25 * self.radians()).tan() * self.radius()
    }

    /// Cubic Bézier approximation of the arc: start, two handles, end.
    ///
    /// Accurate for sweeps up to a quarter turn; split longer arcs first.
    fn cubic_bezier(&self, center: DVec2) -> [DVec2; 4] {
        let theta = self.radians();
        let h = self.handle_length();
        let (start, end) = self.end_points(center);
        let start_tangent = DVec2::Y;
        let end_tangent = dvec2(-theta.sin(), theta.cos());
        [start, start + h * start_tangent, end - h * end_tangent, end]
    }
}

impl Circular for Arc {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn set_radius(&mut self, radius: f64) -> Result<(), AngleError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }
}

// ============================================================================
// Operators (results keep the left arc's radius)
// ============================================================================

impl<R: AngleLike> Add<R> for Arc {
    type Output = Arc;
    fn add(self, rhs: R) -> Arc {
        self.with_angle(self.angle.sum(&rhs))
    }
}

impl<R: AngleLike> Sub<R> for Arc {
    type Output = Arc;
    fn sub(self, rhs: R) -> Arc {
        self.with_angle(self.angle.difference(&rhs))
    }
}

impl<R: AngleLike> AddAssign<R> for Arc {
    fn add_assign(&mut self, rhs: R) {
        self.angle = self.angle.sum(&rhs);
    }
}

impl<R: AngleLike> SubAssign<R> for Arc {
    fn sub_assign(&mut self, rhs: R) {
        self.angle = self.angle.difference(&rhs);
    }
}

impl Mul<f64> for Arc {
    type Output = Arc;
    fn mul(self, rhs: f64) -> Arc {
        self.with_angle(self.angle.scaled(rhs))
    }
}

impl Mul<Arc> for f64 {
    type Output = Arc;
    fn mul(self, rhs: Arc) -> Arc {
        rhs.with_angle(rhs.angle.scaled(self))
    }
}

impl MulAssign<f64> for Arc {
    fn mul_assign(&mut self, rhs: f64) {
        self.angle = self.angle.scaled(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::KAPPA;
    use crate::types::Unit;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-9;

    #[test]
    fn radius_must_be_positive() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Arc::new(Angle::ZERO, bad),
                Err(AngleError::InvalidRadius { .. })
            ));
        }
        assert!(Arc::new(Angle::ZERO, 0.001).is_ok());
    }

    #[test]
    fn failed_radius_write_leaves_value() {
        let mut arc = Arc::new(Angle::from_degrees(10.0), 2.0).expect("valid arc");
        assert_eq!(
            arc.set_radius(0.0),
            Err(AngleError::InvalidRadius { value: 0.0 })
        );
        assert_eq!(arc.radius(), 2.0);
        arc.set_radius(3.5).expect("positive radius");
        assert_eq!(arc.radius(), 3.5);
    }

    #[test]
    fn half_turn_measures() {
        let arc = Arc::new(Angle::from_degrees(180.0), 2.0).expect("valid arc");
        assert!((arc.length() - TAU).abs() < EPS);
        assert!((arc.chord() - 4.0).abs() < EPS);
        assert!((arc.area() - TAU).abs() < EPS);
        assert!((arc.sagitta() - 4.0).abs() < EPS);
    }

    #[test]
    fn chord_never_exceeds_diameter() {
        let r = 1.5;
        for step in 0..=72 {
            let arc = Arc::new(Angle::from_degrees(step as f64 * 5.0), r).expect("valid arc");
            assert!(arc.chord() <= 2.0 * r + EPS, "step {step}");
        }
        let half = Arc::new(Angle::from_radians(PI), r).expect("valid arc");
        assert!((half.chord() - 2.0 * r).abs() < EPS);
    }

    #[test]
    fn quarter_turn_handle_is_kappa() {
        let arc = Arc::new(Angle::from_radians(FRAC_PI_2), 2.0).expect("valid arc");
        assert!((arc.handle_length() - 2.0 * KAPPA).abs() < EPS);

        let [p0, p1, p2, p3] = arc.cubic_bezier(DVec2::ZERO);
        assert!((p0 - dvec2(2.0, 0.0)).length() < EPS);
        assert!((p1 - dvec2(2.0, 2.0 * KAPPA)).length() < EPS);
        assert!((p2 - dvec2(2.0 * KAPPA, 2.0)).length() < EPS);
        assert!((p3 - dvec2(0.0, 2.0)).length() < EPS);
    }

    #[test]
    fn end_points_around_center() {
        let arc = Arc::new(Angle::from_turns(0.5), 1.0).expect("valid arc");
        let (start, end) = arc.end_points(dvec2(1.0, 1.0));
        assert!((start - dvec2(2.0, 1.0)).length() < EPS);
        assert!((end - dvec2(0.0, 1.0)).length() < EPS);
        let mid = arc.point_at(dvec2(1.0, 1.0), 0.5);
        assert!((mid - dvec2(1.0, 2.0)).length() < EPS);
    }

    #[test]
    fn operators_copy_left_radius() {
        let left = Arc::new(Angle::from_degrees(30.0), 4.0).expect("valid arc");
        let right = Arc::new(Angle::from_degrees(60.0), 9.0).expect("valid arc");

        let sum = left + right;
        assert_eq!(sum.radius(), 4.0);
        assert!((sum.degrees() - 90.0).abs() < EPS);

        let diff = left - Angle::from_degrees(10.0);
        assert_eq!(diff.radius(), 4.0);

        let scaled = 2.0 * left;
        assert_eq!(scaled.radius(), 4.0);
        assert!((scaled.degrees() - 60.0).abs() < EPS);

        let divided = left.checked_div(3.0).expect("non-zero divisor");
        assert_eq!(divided.radius(), 4.0);
        assert_eq!(divided.unit(), Unit::Degrees);

        let raised = left.pow(1.0, true);
        assert_eq!(raised.radius(), 4.0);
    }

    #[test]
    fn in_place_operators_keep_radius() {
        let mut arc = Arc::new(Angle::from_degrees(30.0), 4.0).expect("valid arc");
        arc += Angle::from_degrees(30.0);
        arc -= Angle::from_degrees(15.0);
        arc *= 2.0;
        assert!((arc.degrees() - 90.0).abs() < EPS);
        assert_eq!(arc.radius(), 4.0);
    }

    #[test]
    fn default_is_unit_radius() {
        let arc = Arc::default();
        assert_eq!(arc.radius(), 1.0);
        assert_eq!(arc.degrees(), 0.0);
    }

    #[test]
    fn display() {
        let arc = Arc::new(Angle::from_degrees(45.0), 2.0).expect("valid arc");
        assert_eq!(arc.to_string(), "45 degrees at radius 2");
    }
}
