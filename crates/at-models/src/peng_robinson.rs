//! Peng-Robinson constants: `δ1,2 = 1 ± √2`, `Zc ≈ 0.3074`.

use crate::eos::EosConstants;
use std::f64::consts::SQRT_2;

pub const CONSTANTS: EosConstants = EosConstants {
    omega_a: 0.457_235_53,
    omega_b: 0.077_796_07,
    delta1: 1.0 + SQRT_2,
    delta2: 1.0 - SQRT_2,
    z_c: 0.307_401_31,
};

/// Slope of `√α` against `√Tr`.
pub fn kappa(acentric: f64) -> f64 {
    0.37464 + 1.54226 * acentric - 0.26992 * acentric * acentric
}
