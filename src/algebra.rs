//! Arithmetic over any angle-shaped value.
//!
//! The concrete types implement the std operators they support directly
//! (`Frangle` implements none). The free functions here serve callers that
//! only know the operands at run time: each one lists the variants it
//! accepts and answers `UnsupportedOperand` for the rest, which callers can
//! tell apart from a hard failure with [`AngleError::is_not_applicable`].
//!
//! Results take the left operand's concrete type; an `Arc` result keeps
//! the left operand's radius. In-place forms compute the new angle first
//! and only then write it, so a failure leaves the target untouched.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::angle::{Angle, AngleLike};
use crate::arc::{Arc, Circular};
use crate::errors::AngleError;
use crate::frangle::Frangle;
use crate::log::trace;
use crate::types::Unit;

/// One of the three angle-shaped value types.
#[enum_dispatch(AngleLike)]
#[derive(Clone, Copy, Debug)]
pub enum AnyAngle {
    Angle,
    Arc,
    Frangle,
}

impl AnyAngle {
    /// The radius, for the variants that have one.
    pub fn radius(&self) -> Option<f64> {
        match self {
            AnyAngle::Angle(_) => None,
            AnyAngle::Arc(arc) => Some(arc.radius()),
            AnyAngle::Frangle(frangle) => Some(frangle.radius()),
        }
    }
}

/// A right-hand (or, for multiplication, either-hand) operand.
#[derive(Clone, Copy, Debug)]
pub enum Operand {
    Angle(AnyAngle),
    Number(f64),
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Operand::Angle(a) => a.kind(),
            Operand::Number(_) => "number",
        }
    }

    fn number(&self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            Operand::Angle(_) => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(f64::from(n))
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Number(n as f64)
    }
}

impl From<AnyAngle> for Operand {
    fn from(a: AnyAngle) -> Self {
        Operand::Angle(a)
    }
}

impl From<Angle> for Operand {
    fn from(a: Angle) -> Self {
        Operand::Angle(a.into())
    }
}

impl From<Arc> for Operand {
    fn from(a: Arc) -> Self {
        Operand::Angle(a.into())
    }
}

impl From<Frangle> for Operand {
    fn from(f: Frangle) -> Self {
        Operand::Angle(f.into())
    }
}

fn unsupported(op: &'static str, lhs: &'static str, rhs: &'static str) -> AngleError {
    AngleError::UnsupportedOperand { op, lhs, rhs }
}

/// Build a fresh value of `lhs`'s type around `f(lhs.angle())`.
fn derive(
    lhs: &AnyAngle,
    op: &'static str,
    rhs: &'static str,
    f: impl FnOnce(Angle) -> Result<Angle, AngleError>,
) -> Result<AnyAngle, AngleError> {
    match lhs {
        AnyAngle::Angle(a) => Ok(AnyAngle::Angle(f(*a)?)),
        AnyAngle::Arc(arc) => Ok(AnyAngle::Arc(arc.with_angle(f(arc.angle())?))),
        AnyAngle::Frangle(_) => Err(unsupported(op, lhs.kind(), rhs)),
    }
}

/// Replace `lhs`'s angle with `f(lhs.angle())` in place.
fn update(
    lhs: &mut AnyAngle,
    op: &'static str,
    rhs: &'static str,
    f: impl FnOnce(Angle) -> Result<Angle, AngleError>,
) -> Result<(), AngleError> {
    if let AnyAngle::Frangle(_) = lhs {
        return Err(unsupported(op, lhs.kind(), rhs));
    }
    let next = f(lhs.angle())?;
    *lhs.angle_mut("angle")? = next;
    Ok(())
}

fn angle_operand<'a>(
    lhs: &AnyAngle,
    op: &'static str,
    rhs: &'a Operand,
) -> Result<&'a AnyAngle, AngleError> {
    match rhs {
        Operand::Angle(a) => Ok(a),
        Operand::Number(_) => Err(unsupported(op, lhs.kind(), rhs.kind())),
    }
}

fn number_operand(lhs: &AnyAngle, op: &'static str, rhs: &Operand) -> Result<f64, AngleError> {
    rhs.number()
        .ok_or_else(|| unsupported(op, lhs.kind(), rhs.kind()))
}

// ============================================================================
// Addition and subtraction
// ============================================================================

pub fn add(lhs: &AnyAngle, rhs: &Operand) -> Result<AnyAngle, AngleError> {
    let addend = angle_operand(lhs, "+", rhs)?;
    trace!(lhs = lhs.kind(), rhs = addend.kind(), "add");
    derive(lhs, "+", rhs.kind(), |a| Ok(a.sum(addend)))
}

pub fn add_assign(lhs: &mut AnyAngle, rhs: &Operand) -> Result<(), AngleError> {
    let addend = angle_operand(lhs, "+=", rhs)?;
    update(lhs, "+=", rhs.kind(), |a| Ok(a.sum(addend)))
}

pub fn sub(lhs: &AnyAngle, rhs: &Operand) -> Result<AnyAngle, AngleError> {
    let subtrahend = angle_operand(lhs, "-", rhs)?;
    trace!(lhs = lhs.kind(), rhs = subtrahend.kind(), "sub");
    derive(lhs, "-", rhs.kind(), |a| Ok(a.difference(subtrahend)))
}

pub fn sub_assign(lhs: &mut AnyAngle, rhs: &Operand) -> Result<(), AngleError> {
    let subtrahend = angle_operand(lhs, "-=", rhs)?;
    update(lhs, "-=", rhs.kind(), |a| Ok(a.difference(subtrahend)))
}

// ============================================================================
// Scaling
// ============================================================================

/// Multiply an angle by a number, with the angle on either side.
pub fn mul(lhs: &Operand, rhs: &Operand) -> Result<AnyAngle, AngleError> {
    let (angle, factor) = match (lhs, rhs) {
        (Operand::Angle(a), Operand::Number(k)) | (Operand::Number(k), Operand::Angle(a)) => {
            (a, *k)
        }
        _ => return Err(unsupported("*", lhs.kind(), rhs.kind())),
    };
    trace!(angle = angle.kind(), factor, "mul");
    derive(angle, "*", "number", |a| Ok(a.scaled(factor)))
}

pub fn mul_assign(lhs: &mut AnyAngle, rhs: &Operand) -> Result<(), AngleError> {
    let factor = number_operand(lhs, "*=", rhs)?;
    update(lhs, "*=", rhs.kind(), |a| Ok(a.scaled(factor)))
}

pub fn div(lhs: &AnyAngle, rhs: &Operand) -> Result<AnyAngle, AngleError> {
    let divisor = number_operand(lhs, "/", rhs)?;
    derive(lhs, "/", rhs.kind(), |a| a.checked_div(divisor))
}

pub fn div_assign(lhs: &mut AnyAngle, rhs: &Operand) -> Result<(), AngleError> {
    let divisor = number_operand(lhs, "/=", rhs)?;
    update(lhs, "/=", rhs.kind(), |a| a.checked_div(divisor))
}

pub fn floor_div(lhs: &AnyAngle, rhs: &Operand) -> Result<AnyAngle, AngleError> {
    let divisor = number_operand(lhs, "//", rhs)?;
    derive(lhs, "//", rhs.kind(), |a| a.floor_div(divisor))
}

pub fn floor_div_assign(lhs: &mut AnyAngle, rhs: &Operand) -> Result<(), AngleError> {
    let divisor = number_operand(lhs, "//=", rhs)?;
    update(lhs, "//=", rhs.kind(), |a| a.floor_div(divisor))
}

// ============================================================================
// Power
// ============================================================================

/// Raise the angle as a turn count; see [`Angle::pow`].
pub fn pow(base: &AnyAngle, exponent: &Operand, normalize: bool) -> Result<AnyAngle, AngleError> {
    let e = number_operand(base, "**", exponent)?;
    trace!(base = base.kind(), exponent = e, normalize, "pow");
    derive(base, "**", exponent.kind(), |a| Ok(a.pow(e, normalize)))
}

pub fn pow_assign(base: &mut AnyAngle, exponent: &Operand, normalize: bool) -> Result<(), AngleError> {
    let e = number_operand(base, "**=", exponent)?;
    update(base, "**=", exponent.kind(), |a| Ok(a.pow(e, normalize)))
}

// ============================================================================
// Ordering
// ============================================================================

/// Compare by degrees. Any angle-shaped value may appear on either side,
/// including a `Frangle`; numbers are not comparable.
pub fn compare(lhs: &AnyAngle, rhs: &Operand) -> Result<Option<Ordering>, AngleError> {
    let other = angle_operand(lhs, "<=>", rhs)?;
    Ok(lhs.degrees().partial_cmp(&other.degrees()))
}

macro_rules! impl_degree_ordering {
    ($($ty:ty),* $(,)?) => {$(
        impl<R: AngleLike> PartialEq<R> for $ty {
            fn eq(&self, other: &R) -> bool {
                self.in_unit(Unit::Degrees) == other.in_unit(Unit::Degrees)
            }
        }

        impl<R: AngleLike> PartialOrd<R> for $ty {
            fn partial_cmp(&self, other: &R) -> Option<Ordering> {
                self.in_unit(Unit::Degrees)
                    .partial_cmp(&other.in_unit(Unit::Degrees))
            }
        }
    )*};
}

impl_degree_ordering!(Angle, Arc, Frangle, AnyAngle);

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn deg(d: f64) -> AnyAngle {
        Angle::from_degrees(d).into()
    }

    fn arc(d: f64, r: f64) -> AnyAngle {
        Arc::new(Angle::from_degrees(d), r).expect("valid arc").into()
    }

    fn frangle() -> AnyAngle {
        Frangle::new(10, 5, 0.5, false, 1.0).expect("valid frangle").into()
    }

    // ==================== Addition ====================

    #[test]
    fn add_keeps_left_type_and_radius() {
        let sum = add(&arc(30.0, 3.0), &deg(60.0).into()).expect("arc + angle");
        assert!(matches!(sum, AnyAngle::Arc(_)));
        assert_eq!(sum.radius(), Some(3.0));
        assert!((sum.degrees() - 90.0).abs() < EPS);

        let sum = add(&deg(30.0), &arc(60.0, 3.0).into()).expect("angle + arc");
        assert!(matches!(sum, AnyAngle::Angle(_)));
        assert_eq!(sum.radius(), None);
    }

    #[test]
    fn frangle_may_be_added_but_not_added_to() {
        let sum = add(&deg(10.0), &frangle().into()).expect("angle + frangle");
        assert!((sum.degrees() - 190.0).abs() < EPS);

        let err = add(&frangle(), &deg(10.0).into()).expect_err("frangle + angle");
        assert!(err.is_not_applicable());
        assert_eq!(
            err,
            AngleError::UnsupportedOperand { op: "+", lhs: "Frangle", rhs: "Angle" }
        );
    }

    #[test]
    fn add_rejects_numbers() {
        let err = add(&deg(10.0), &1.0.into()).expect_err("angle + number");
        assert!(err.is_not_applicable());
        let err = sub(&deg(10.0), &Operand::from(1i32)).expect_err("angle - number");
        assert!(err.is_not_applicable());
    }

    #[test]
    fn half_turns_wrap_to_zero() {
        let mut sum = add(&deg(180.0), &deg(180.0).into()).expect("angle + angle");
        sum.normalize(false).expect("angles normalize");
        assert!(sum.degrees().abs() < EPS);
    }

    #[test]
    fn in_place_add_and_sub() {
        let mut a = arc(10.0, 2.0);
        add_assign(&mut a, &deg(50.0).into()).expect("arc += angle");
        sub_assign(&mut a, &deg(20.0).into()).expect("arc -= angle");
        assert!((a.degrees() - 40.0).abs() < EPS);
        assert_eq!(a.radius(), Some(2.0));

        let mut f = frangle();
        let before = f.degrees();
        assert!(add_assign(&mut f, &deg(5.0).into()).is_err());
        assert!(sub_assign(&mut f, &deg(5.0).into()).is_err());
        assert_eq!(f.degrees(), before);
    }

    // ==================== Scaling ====================

    #[test]
    fn multiply_on_either_side() {
        let left = mul(&arc(30.0, 5.0).into(), &3i32.into()).expect("arc * 3");
        let right = mul(&Operand::from(3.0), &arc(30.0, 5.0).into()).expect("3 * arc");
        assert!((left.degrees() - 90.0).abs() < EPS);
        assert!((right.degrees() - 90.0).abs() < EPS);
        assert_eq!(right.radius(), Some(5.0));
    }

    #[test]
    fn multiply_rejects_frangle_and_pairs_of_angles() {
        assert!(mul(&frangle().into(), &2.0.into()).expect_err("frangle * 2").is_not_applicable());
        assert!(mul(&deg(1.0).into(), &deg(1.0).into()).expect_err("angle * angle").is_not_applicable());
        assert!(mul(&2.0.into(), &3.0.into()).expect_err("number * number").is_not_applicable());

        let mut f = frangle();
        assert!(mul_assign(&mut f, &2.0.into()).is_err());
    }

    #[test]
    fn in_place_multiply() {
        let mut a = deg(15.0);
        mul_assign(&mut a, &Operand::from(4i64)).expect("angle *= 4");
        assert!((a.degrees() - 60.0).abs() < EPS);
    }

    #[test]
    fn division_and_floor_division() {
        let q = div(&deg(-7.0), &2.0.into()).expect("angle / 2");
        assert!((q.degrees() + 3.5).abs() < EPS);
        let q = floor_div(&deg(-7.0), &2.0.into()).expect("angle // 2");
        assert_eq!(q.degrees(), -4.0);
    }

    #[test]
    fn division_by_zero_leaves_dividend() {
        let mut a = arc(90.0, 2.0);
        for result in [div_assign(&mut a, &0.0.into()), floor_div_assign(&mut a, &0i32.into())] {
            assert!(matches!(result, Err(AngleError::DivisionByZero { .. })));
        }
        assert_eq!(a.degrees(), 90.0);
        assert!(matches!(
            div(&a, &0.0.into()),
            Err(AngleError::DivisionByZero { op: "/" })
        ));
        assert!(matches!(
            floor_div(&a, &0.0.into()),
            Err(AngleError::DivisionByZero { op: "//" })
        ));
    }

    #[test]
    fn division_rejects_frangle_before_zero_check() {
        let err = div(&frangle(), &0.0.into()).expect_err("frangle / 0");
        assert!(err.is_not_applicable());
    }

    // ==================== Power ====================

    #[test]
    fn power_with_and_without_normalization() {
        let p = pow(&arc(540.0, 2.0), &2i32.into(), true).expect("arc ** 2");
        assert!((p.turns() - 0.25).abs() < EPS);
        assert_eq!(p.radius(), Some(2.0));

        let p = pow(&deg(540.0), &2i32.into(), false).expect("angle ** 2");
        assert!((p.turns() - 2.25).abs() < EPS);

        let mut a = deg(180.0);
        pow_assign(&mut a, &3.0.into(), true).expect("angle **= 3");
        assert!((a.turns() - 0.125).abs() < EPS);

        assert!(pow(&frangle(), &2i32.into(), true).expect_err("frangle ** 2").is_not_applicable());
        assert!(pow(&deg(1.0), &deg(1.0).into(), true).expect_err("angle ** angle").is_not_applicable());
    }

    // ==================== Ordering ====================

    #[test]
    fn compares_by_degrees_across_units() {
        let quarter = Angle::from_turns(0.25);
        assert!(quarter < Angle::from_degrees(91.0));
        assert!(quarter > Angle::from_radians(1.0));
        assert!(quarter == Angle::from_degrees(90.0));
        assert!(Angle::from_pis(1.0) >= Arc::new(Angle::from_degrees(180.0), 2.0).expect("valid arc"));

        assert_eq!(compare(&deg(10.0), &deg(20.0).into()), Ok(Some(Ordering::Less)));
        assert_eq!(compare(&frangle(), &deg(180.0).into()), Ok(Some(Ordering::Equal)));
        assert!(compare(&deg(10.0), &10.0.into()).expect_err("angle <=> number").is_not_applicable());
    }

    #[test]
    fn dispatch_reaches_frangle_overrides() {
        let f: AnyAngle = Frangle::new(10, 3, 0.4, true, 1.0).expect("valid frangle").into();
        assert!((f.polsin() - (1.0 - f.fcos(0.5)) / 2.0).abs() < EPS);
        let mut g = f;
        assert!(matches!(
            g.set_turns(0.5),
            Err(AngleError::ReadOnlyDerivedProperty { property: "turns" })
        ));
        assert_eq!(f.kind(), "Frangle");
    }
}
