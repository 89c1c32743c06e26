//! The `Angle` value type and the trigonometric family shared by every
//! angle-shaped type.
//!
//! An angle is a magnitude tagged with the unit it was last written in.
//! Reading any unit converts on the fly; writing a unit stores the value
//! verbatim and switches the tag to that unit.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use enum_dispatch::enum_dispatch;

use crate::consts::TAU;
use crate::easing::{fract_turn, monocycle_turns};
use crate::errors::AngleError;
use crate::log::trace;
use crate::types::Unit;

/// A magnitude and the unit it is expressed in. Unrestricted: may be
/// negative or exceed a full turn until normalized.
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle {
    magnitude: f64,
    unit: Unit,
}

impl Angle {
    pub const ZERO: Angle = Angle::new(0.0, Unit::Degrees);

    #[inline]
    pub const fn new(magnitude: f64, unit: Unit) -> Angle {
        Angle { magnitude, unit }
    }

    /// Create an angle from a raw unit code (see [`Unit::from_code`]).
    pub fn with_unit_code(magnitude: f64, code: u32) -> Result<Angle, AngleError> {
        Ok(Angle::new(magnitude, Unit::from_code(code)?))
    }

    #[inline]
    pub const fn from_degrees(degrees: f64) -> Angle {
        Angle::new(degrees, Unit::Degrees)
    }

    #[inline]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle::new(radians, Unit::Radians)
    }

    #[inline]
    pub const fn from_turns(turns: f64) -> Angle {
        Angle::new(turns, Unit::Turns)
    }

    #[inline]
    pub const fn from_pis(pis: f64) -> Angle {
        Angle::new(pis, Unit::Pis)
    }

    /// The same angle re-expressed in another unit.
    pub fn to_unit(self, unit: Unit) -> Angle {
        Angle::new(self.unit.convert(self.magnitude, unit), unit)
    }

    /// Sum in this angle's unit.
    pub fn sum(self, rhs: &impl AngleLike) -> Angle {
        Angle::new(self.magnitude + rhs.in_unit(self.unit), self.unit)
    }

    /// Difference in this angle's unit.
    pub fn difference(self, rhs: &impl AngleLike) -> Angle {
        Angle::new(self.magnitude - rhs.in_unit(self.unit), self.unit)
    }

    pub fn scaled(self, factor: f64) -> Angle {
        Angle::new(self.magnitude * factor, self.unit)
    }

    /// Divide the magnitude, rejecting a zero divisor.
    pub fn checked_div(self, divisor: f64) -> Result<Angle, AngleError> {
        if divisor == 0.0 {
            return Err(AngleError::DivisionByZero { op: "/" });
        }
        Ok(Angle::new(self.magnitude / divisor, self.unit))
    }

    /// Divide the magnitude and floor the quotient (toward negative infinity).
    pub fn floor_div(self, divisor: f64) -> Result<Angle, AngleError> {
        if divisor == 0.0 {
            return Err(AngleError::DivisionByZero { op: "//" });
        }
        Ok(Angle::new((self.magnitude / divisor).floor(), self.unit))
    }

    /// Raise the angle, taken as a turn count, to `exponent`.
    ///
    /// Negative turn counts keep their sign (`-|x|^e`). With `normalize`
    /// the result is reduced into the first turn. The unit is kept.
    pub fn pow(self, exponent: f64, normalize: bool) -> Angle {
        let turns = self.unit.convert(self.magnitude, Unit::Turns);
        let mut raised = turns.signum() * turns.abs().powf(exponent);
        if normalize {
            raised = fract_turn(raised);
        }
        trace!(turns, exponent, raised, "angle power");
        Angle::new(Unit::Turns.convert(raised, self.unit), self.unit)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

// ============================================================================
// Trigonometric family
// ============================================================================

#[inline]
pub(crate) fn versine(x: f64) -> f64 {
    1.0 - x.cos()
}

#[inline]
pub(crate) fn vercosine(x: f64) -> f64 {
    1.0 + x.cos()
}

/// `(1 - cos(x/2)) / 2`
#[inline]
pub(crate) fn polsine(x: f64) -> f64 {
    (1.0 - (0.5 * x).cos()) / 2.0
}

/// `(1 + cos(x/2)) / 2`
#[inline]
pub(crate) fn polcosine(x: f64) -> f64 {
    (1.0 + (0.5 * x).cos()) / 2.0
}

/// Read access to an angle plus every query derived from it.
///
/// Implementors supply the underlying [`Angle`] and decide whether it may
/// be written; everything else is provided. The `f`-prefixed queries apply
/// a factor to the angle first, the `mono` queries evaluate against
/// [`AngleLike::monocycle`] instead of the stored angle.
#[enum_dispatch]
pub trait AngleLike {
    /// Copy of the underlying angle.
    fn angle(&self) -> Angle;

    /// Mutable access for setters, or the reason the angle is not writable.
    /// `property` names the accessor being written, for error reporting.
    fn angle_mut(&mut self, property: &'static str) -> Result<&mut Angle, AngleError>;

    /// Concrete type name, used in operand errors.
    fn kind(&self) -> &'static str;

    fn magnitude(&self) -> f64 {
        self.angle().magnitude
    }

    fn unit(&self) -> Unit {
        self.angle().unit
    }

    fn in_unit(&self, unit: Unit) -> f64 {
        let a = self.angle();
        a.unit.convert(a.magnitude, unit)
    }

    fn degrees(&self) -> f64 {
        self.in_unit(Unit::Degrees)
    }

    fn radians(&self) -> f64 {
        self.in_unit(Unit::Radians)
    }

    fn turns(&self) -> f64 {
        self.in_unit(Unit::Turns)
    }

    fn pis(&self) -> f64 {
        self.in_unit(Unit::Pis)
    }

    /// Store `value` verbatim in `unit`; the angle stays in `unit` until
    /// another unit is written. Returns the new unit.
    fn set_in(&mut self, unit: Unit, value: f64) -> Result<Unit, AngleError> {
        let angle = self.angle_mut(unit.property())?;
        *angle = Angle::new(value, unit);
        Ok(unit)
    }

    fn set_degrees(&mut self, degrees: f64) -> Result<Unit, AngleError> {
        self.set_in(Unit::Degrees, degrees)
    }

    fn set_radians(&mut self, radians: f64) -> Result<Unit, AngleError> {
        self.set_in(Unit::Radians, radians)
    }

    fn set_turns(&mut self, turns: f64) -> Result<Unit, AngleError> {
        self.set_in(Unit::Turns, turns)
    }

    fn set_pis(&mut self, pis: f64) -> Result<Unit, AngleError> {
        self.set_in(Unit::Pis, pis)
    }

    /// Rewrite the stored magnitude in canonical form, keeping the unit.
    ///
    /// Plain normalization reduces into the first turn `[0, 1)`; the
    /// monocyclic form folds through [`AngleLike::monocycle`].
    fn normalize(&mut self, monocyclic: bool) -> Result<(), AngleError> {
        let canonical = if monocyclic {
            self.monocycle()
        } else {
            Unit::Turns.convert(fract_turn(self.turns()), self.unit())
        };
        let angle = self.angle_mut("angle")?;
        angle.magnitude = canonical;
        Ok(())
    }

    /// The monocyclic canonical value in the angle's own unit, without
    /// touching the stored angle.
    fn monocycle(&self) -> f64 {
        Unit::Turns.convert(monocycle_turns(self.turns()), self.unit())
    }

    fn sin(&self) -> f64 {
        self.radians().sin()
    }

    fn cos(&self) -> f64 {
        self.radians().cos()
    }

    fn fsin(&self, factor: f64) -> f64 {
        (factor * self.radians()).sin()
    }

    fn fcos(&self, factor: f64) -> f64 {
        (factor * self.radians()).cos()
    }

    fn versin(&self) -> f64 {
        versine(self.radians())
    }

    fn haversin(&self) -> f64 {
        versine(self.radians()) / 2.0
    }

    fn vercos(&self) -> f64 {
        vercosine(self.radians())
    }

    fn havercos(&self) -> f64 {
        vercosine(self.radians()) / 2.0
    }

    fn polsin(&self) -> f64 {
        polsine(self.radians())
    }

    fn polcos(&self) -> f64 {
        polcosine(self.radians())
    }

    fn fversin(&self, factor: f64) -> f64 {
        versine(factor * self.radians())
    }

    fn fhaversin(&self, factor: f64) -> f64 {
        versine(factor * self.radians()) / 2.0
    }

    fn fvercos(&self, factor: f64) -> f64 {
        vercosine(factor * self.radians())
    }

    fn fhavercos(&self, factor: f64) -> f64 {
        vercosine(factor * self.radians()) / 2.0
    }

    fn fpolsin(&self, factor: f64) -> f64 {
        polsine(factor * self.radians())
    }

    fn fpolcos(&self, factor: f64) -> f64 {
        polcosine(factor * self.radians())
    }

    /// The monocycle in radians.
    fn mono_radians(&self) -> f64 {
        monocycle_turns(self.turns()) * TAU
    }

    fn monosin(&self) -> f64 {
        self.mono_radians().sin()
    }

    fn monocos(&self) -> f64 {
        self.mono_radians().cos()
    }

    fn monoversin(&self) -> f64 {
        versine(self.mono_radians())
    }

    fn monohaversin(&self) -> f64 {
        versine(self.mono_radians()) / 2.0
    }

    fn monovercos(&self) -> f64 {
        vercosine(self.mono_radians())
    }

    fn monohavercos(&self) -> f64 {
        vercosine(self.mono_radians()) / 2.0
    }

    fn monopolsin(&self) -> f64 {
        polsine(self.mono_radians())
    }

    fn monopolcos(&self) -> f64 {
        polcosine(self.mono_radians())
    }

    fn fmonosin(&self, factor: f64) -> f64 {
        (factor * self.mono_radians()).sin()
    }

    fn fmonocos(&self, factor: f64) -> f64 {
        (factor * self.mono_radians()).cos()
    }

    fn fmonoversin(&self, factor: f64) -> f64 {
        versine(factor * self.mono_radians())
    }

    fn fmonohaversin(&self, factor: f64) -> f64 {
        versine(factor * self.mono_radians()) / 2.0
    }

    fn fmonovercos(&self, factor: f64) -> f64 {
        vercosine(factor * self.mono_radians())
    }

    fn fmonohavercos(&self, factor: f64) -> f64 {
        vercosine(factor * self.mono_radians()) / 2.0
    }

    fn fmonopolsin(&self, factor: f64) -> f64 {
        polsine(factor * self.mono_radians())
    }

    fn fmonopolcos(&self, factor: f64) -> f64 {
        polcosine(factor * self.mono_radians())
    }
}

impl AngleLike for Angle {
    fn angle(&self) -> Angle {
        *self
    }

    fn angle_mut(&mut self, _property: &'static str) -> Result<&mut Angle, AngleError> {
        Ok(self)
    }

    fn kind(&self) -> &'static str {
        "Angle"
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<R: AngleLike> Add<R> for Angle {
    type Output = Angle;
    fn add(self, rhs: R) -> Angle {
        self.sum(&rhs)
    }
}

impl<R: AngleLike> Sub<R> for Angle {
    type Output = Angle;
    fn sub(self, rhs: R) -> Angle {
        self.difference(&rhs)
    }
}

impl<R: AngleLike> AddAssign<R> for Angle {
    fn add_assign(&mut self, rhs: R) {
        *self = self.sum(&rhs);
    }
}

impl<R: AngleLike> SubAssign<R> for Angle {
    fn sub_assign(&mut self, rhs: R) {
        *self = self.difference(&rhs);
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        self.scaled(rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs.scaled(self)
    }
}

impl MulAssign<f64> for Angle {
    fn mul_assign(&mut self, rhs: f64) {
        self.magnitude *= rhs;
    }
}

// NOTE: Div is intentionally NOT implemented as a trait.
// Use Angle::checked_div() / Angle::floor_div(), which reject a zero divisor.

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::new(-self.magnitude, self.unit)
    }
}
