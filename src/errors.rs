//! Error types with diagnostic codes using miette
//!
//! Every failure carries the offending value or property name so callers
//! can report it without re-deriving context.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by construction, mutation and arithmetic on angle values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("invalid unit code {code}")]
    #[diagnostic(
        code(frangle::invalid_unit),
        help("units must be degrees (0), radians (1), turns (2) or pis (3)")
    )]
    InvalidUnit { code: String },

    #[error("radius must be a positive number, got {value}")]
    #[diagnostic(code(frangle::invalid_radius))]
    InvalidRadius { value: f64 },

    #[error("frame count must be a positive integer, got {value}")]
    #[diagnostic(code(frangle::invalid_frame_count))]
    InvalidFrameCount { value: i32 },

    #[error("midpoint must lie strictly between 0 and 1, got {value}")]
    #[diagnostic(code(frangle::invalid_midpoint))]
    InvalidMidpoint { value: f64 },

    #[error("{property} must be a finite number")]
    #[diagnostic(code(frangle::non_finite))]
    NonFinite { property: &'static str },

    #[error("division by zero in {op}")]
    #[diagnostic(code(frangle::division_by_zero))]
    DivisionByZero { op: &'static str },

    #[error("Frangle.{property} is a read-only derived property")]
    #[diagnostic(
        code(frangle::read_only),
        help("set the frame, frames or t of the frangle instead")
    )]
    ReadOnlyDerivedProperty { property: &'static str },

    #[error("unsupported operand types for {op}: {lhs} and {rhs}")]
    #[diagnostic(code(frangle::unsupported_operand))]
    UnsupportedOperand {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
}

impl AngleError {
    /// True when the operation simply does not apply to these operands.
    ///
    /// Hosts with operator overloading use this to try the reflected
    /// operation before reporting a type error of their own.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, AngleError::UnsupportedOperand { .. })
    }
}
