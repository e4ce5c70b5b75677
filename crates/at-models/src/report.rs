//! Fixed-width text rows and serialisable state logs.

use crate::error::{ModelError, ModelResult};
use at_gas::{ConstParameters, DynParameters, Phase};
use serde::Serialize;

pub const PARAMETERS_HEAD: &str =
    "   pressure    volume   density  temperat   cv       cp       u\n";

/// One row under [`PARAMETERS_HEAD`].
pub fn parameters_row(dynamics: &DynParameters) -> String {
    let point = &dynamics.point;
    format!(
        "{:12.1} {:8.4} {:8.2} {:8.2} {:8.2} {:8.2} {:8.2}\n",
        point.pressure,
        point.volume,
        point.density(),
        point.temperature,
        dynamics.heat_cap_vol,
        dynamics.heat_cap_pres,
        dynamics.internal_energy,
    )
}

pub fn const_parameters(constants: &ConstParameters) -> String {
    format!(
        "  Critical pnt: p={:12.1}; v={:8.4}; t={:8.2}\n  Others: mol_m={:6.3} R={:8.3} ac_f={:6.4}\n",
        constants.p_k(),
        constants.v_k(),
        constants.t_k(),
        constants.molar_mass(),
        constants.r(),
        constants.acentric(),
    )
}

/// Snapshot handed to a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateLog {
    pub dynamics: DynParameters,
    /// u + p·v
    pub enthalpy: f64,
    pub phase: String,
}

impl StateLog {
    pub fn new(dynamics: &DynParameters, phase: Phase) -> Self {
        Self {
            dynamics: *dynamics,
            enthalpy: dynamics.enthalpy(),
            phase: phase.label().to_string(),
        }
    }

    pub fn to_json(&self) -> ModelResult<String> {
        serde_json::to_string(self)
            .map_err(|e| ModelError::calculation(format!("state log serialisation: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use at_gas::StatePoint;

    fn dynamics() -> DynParameters {
        let point = StatePoint::new(0.16, 1.0e6, 314.0).unwrap();
        DynParameters::new(1750.0, 2275.0, 12.5, point).unwrap()
    }

    #[test]
    fn row_is_fixed_width() {
        let row = parameters_row(&dynamics());
        assert_eq!(row, "   1000000.0   0.1600     6.25   314.00  1750.00  2275.00    12.50\n");
    }

    #[test]
    fn constants_block() {
        let constants = ConstParameters::new(0.00617, 4.641e6, 190.66, 0.016043, 0.011).unwrap();
        let text = const_parameters(&constants);
        assert!(text.starts_with("  Critical pnt: p=   4641000.0; v=  0.0062; t=  190.66\n"));
        assert!(text.contains("mol_m= 0.016"));
        assert!(text.contains("ac_f=0.0110"));
    }

    #[test]
    fn state_log_json_carries_phase_label_and_enthalpy() {
        let log = StateLog::new(&dynamics(), Phase::LiqSteam);
        assert!((log.enthalpy - (12.5 + 1.0e6 * 0.16)).abs() < 1e-9);
        let json = log.to_json().unwrap();
        assert!(json.contains("\"phase\":\"LIQ_STEAM\""));
        assert!(json.contains("\"enthalpy\""));
    }
}
