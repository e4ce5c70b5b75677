//! at-core: numeric foundation for atherm.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - cubic (closed-form cubic root solver)
//! - error (shared error types)

pub mod cubic;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use cubic::{CubicRoots, solve_cubic};
pub use error::{AtError, AtResult, ErrorKind};
pub use numeric::*;
pub use units::*;
