//! at-models: real-gas equations of state and phase diagrams.
//!
//! Provides:
//! - Redlich-Kwong, Redlich-Kwong-Soave and Peng-Robinson cubic models
//! - Maxwell equal-area binodal curves with a shared, session-owned cache
//! - An NG-GOST model over the GOST 30319.3 natural gas correlation
//! - Calculation configuration, text rows and state logs
//!
//! # Example
//!
//! ```
//! use at_gas::{ConstParameters, DynParameters, Phase, StatePoint};
//! use at_models::{CalculationConfig, CalculationSession, ModelKind, RealGasModel};
//!
//! let session = CalculationSession::new(CalculationConfig::default()).unwrap();
//! let methane = ConstParameters::new(0.00617, 4.641e6, 190.66, 0.016043, 0.011).unwrap();
//! let start = DynParameters::new(1750.0, 2275.0, 0.0, StatePoint::new(0.16, 1.0e6, 314.0).unwrap())
//!     .unwrap();
//!
//! let mut model = session.create(ModelKind::PengRobinson, methane, start).unwrap();
//! model.set_volume(2.0e6, 300.0).unwrap();
//! assert_eq!(model.state().phase, Phase::Gas);
//! ```

pub mod binodal;
pub mod config;
pub mod cubic_model;
pub mod eos;
pub mod error;
pub mod model;
pub mod ng_gost_model;
pub mod peng_robinson;
pub mod phase_diagram;
pub mod redlich_kwong;
pub mod report;
pub mod session;

pub use binodal::{BinodalCurve, BinodalPoint, BranchEnthalpy};
pub use config::{BinodalConfig, CalculationConfig};
pub use cubic_model::CubicModel;
pub use eos::{Alpha, CubicEos, EosConstants, EosKind};
pub use error::{ModelError, ModelResult};
pub use model::{GasModel, ModelKind, RealGasModel};
pub use ng_gost_model::NgGostModel;
pub use phase_diagram::{PhaseDiagram, REDUCED_TEMPERATURES, maxwell_curve};
pub use report::StateLog;
pub use session::CalculationSession;
