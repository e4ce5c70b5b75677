//! at-gas: gas parameter model for the real-gas toolkit.
//!
//! Provides:
//! - Constant (critical) and dynamic (state-dependent) gas parameters
//! - Phase tags
//! - Component mixtures and critical-constant averaging rules
//! - Natural gas properties by GOST 30319.3 (AGA8-92DC)
//!
//! # Example
//!
//! ```
//! use at_gas::{NgComponent, NgComposition, NgGost};
//!
//! let composition = NgComposition::new(
//!     vec![(NgComponent::Methane, 0.96), (NgComponent::Ethane, 0.04)],
//!     true,
//! )
//! .unwrap();
//! let gas = NgGost::new(composition).unwrap();
//! let state = gas.state(5.0e6, 300.0).unwrap();
//! assert!(state.z < 1.0);
//! ```

pub mod averaging;
pub mod error;
pub mod mixture;
pub mod ng_gost;
mod ng_gost_tables;
pub mod parameters;
pub mod phase;

pub use averaging::{AveragingRule, average};
pub use error::{GasError, GasResult};
pub use mixture::{Component, ComponentMix, MIX_FRACTION_EPS};
pub use ng_gost::{
    GOST_GAS_CONSTANT, NgComponent, NgComposition, NgGost, NgGostState, PseudoCritical,
    ResidualTerms, is_within_limits,
};
pub use parameters::{ConstParameters, DynParameters, DynSetup, GasState, StatePoint};
pub use phase::Phase;
