//! Angles, circular arcs and frangles.
//!
//! - [`Angle`]: a magnitude tagged with its [`Unit`], readable in any unit.
//! - [`Arc`]: an angle at a positive radius, with circular geometry.
//! - [`Frangle`]: an arc whose angle is derived from an animation frame,
//!   eased through a power law and optionally folded into a there-and-back
//!   cycle.
//!
//! ```
//! use frangle::{AngleLike, Frangle};
//!
//! let mut f = Frangle::new(120, 0, 0.5, true, 1.0)?;
//! f.set_frame(30);
//! assert!((f.degrees() - 180.0).abs() < 1e-9);
//! # Ok::<(), frangle::AngleError>(())
//! ```

// Logging macros must be declared before the modules that use them
mod log;

pub mod angle;
pub mod arc;
pub mod config;
pub mod consts;
pub mod easing;
pub mod errors;
pub mod frangle;
pub mod types;

// Dispatches over the AngleLike trait declared in `angle`
pub mod algebra;

pub use algebra::{AnyAngle, Operand};
pub use angle::{Angle, AngleLike};
pub use arc::{Arc, Circular};
pub use config::{AngleOptions, ArcOptions, FrangleOptions};
pub use consts::{
    COMP_KAPPA, INV_COMP_KAPPA, INV_KAPPA, INV_PI, INV_RAD, INV_SQRT_PI, INV_TAU, KAPPA, PI, RAD,
    TAU,
};
pub use easing::midpoint_shift;
pub use errors::AngleError;
pub use frangle::{Frangle, Param};
pub use types::Unit;
