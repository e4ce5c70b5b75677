//! GOST 30319.3 integration tests.
//!
//! Physical trends over the whole envelope of the correlation; tabulated
//! reference values live next to the solver.

use at_gas::{GasError, NgComponent, NgComposition, NgGost};
use proptest::prelude::*;

fn gas(items: Vec<(NgComponent, f64)>) -> NgGost {
    NgGost::new(NgComposition::new(items, true).unwrap()).unwrap()
}

fn lean_gas() -> NgGost {
    gas(vec![
        (NgComponent::Methane, 0.965),
        (NgComponent::Ethane, 0.018),
        (NgComponent::Propane, 0.0045),
        (NgComponent::NButane, 0.001),
        (NgComponent::Nitrogen, 0.003),
        (NgComponent::CarbonDioxide, 0.0085),
    ])
}

#[test]
fn density_increases_with_pressure() {
    let gas = lean_gas();
    let t = 290.0;
    let rho: Vec<f64> = [1.0e6, 2.0e6, 4.0e6, 8.0e6]
        .iter()
        .map(|p| 1.0 / gas.state(*p, t).unwrap().volume)
        .collect();
    for pair in rho.windows(2) {
        assert!(pair[0] < pair[1], "rho = {rho:?}");
    }
    // slightly more than doubling: the gas is compressed more easily than ideal
    let ratio = rho[1] / rho[0];
    assert!(ratio > 2.0 && ratio < 2.1, "density ratio = {ratio}");
}

#[test]
fn compressibility_recovers_with_temperature() {
    let gas = lean_gas();
    let z_cold = gas.state(6.0e6, 260.0).unwrap().z;
    let z_warm = gas.state(6.0e6, 340.0).unwrap().z;
    assert!(z_cold < z_warm, "z(260 K) = {z_cold}, z(340 K) = {z_warm}");
}

#[test]
fn carbon_dioxide_makes_gas_less_ideal() {
    let sweet = gas(vec![(NgComponent::Methane, 0.99), (NgComponent::Nitrogen, 0.01)]);
    let sour = gas(vec![
        (NgComponent::Methane, 0.84),
        (NgComponent::CarbonDioxide, 0.15),
        (NgComponent::Nitrogen, 0.01),
    ]);
    let z_sweet = sweet.state(5.0e6, 300.0).unwrap().z;
    let z_sour = sour.state(5.0e6, 300.0).unwrap().z;
    assert!(z_sour < z_sweet, "z sweet = {z_sweet}, z sour = {z_sour}");
}

#[test]
fn molar_mass_follows_composition() {
    let gas = lean_gas();
    assert!(gas.molar_mass() > 16.5 && gas.molar_mass() < 17.5);
    assert!((gas.specific_gas_constant() - 8314.51 / gas.molar_mass()).abs() < 1e-9);
}

#[test]
fn outside_envelope_is_rejected() {
    let gas = lean_gas();
    let err = gas.state(4.0e7, 300.0).unwrap_err();
    assert!(matches!(err, GasError::OutOfRange { .. }), "{err}");
    let err = gas.state(1.0e6, 360.0).unwrap_err();
    assert!(matches!(err, GasError::OutOfRange { .. }), "{err}");
}

#[test]
fn dense_corner_of_envelope_solves() {
    let gas = lean_gas();
    for t in [250.0, 275.0, 300.0, 325.0, 350.0] {
        for p in [8.0e6, 1.2e7, 1.6e7, 2.0e7, 2.5e7, 3.0e7] {
            let state = gas
                .state(p, t)
                .unwrap_or_else(|e| panic!("no solution at {p} Pa, {t} K: {e}"));
            assert!(state.z > 0.6 && state.z < 1.0, "z = {} at {p} Pa, {t} K", state.z);
            assert!(state.heat_cap_vol > 0.0 && state.isentropic_exponent > 1.0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solves_everywhere_inside_envelope(p in 1.5e5..2.9e7_f64, t in 251.0..349.0_f64) {
        let gas = lean_gas();
        let state = gas.state(p, t).unwrap();
        prop_assert!(state.z > 0.6 && state.z < 1.1, "z = {}", state.z);
        prop_assert!(state.heat_cap_pres > state.heat_cap_vol);
        prop_assert!(state.sound_speed > 250.0 && state.sound_speed < 750.0);
        prop_assert!(state.heat_cap_vol > 1000.0 && state.heat_cap_vol < 3000.0);
        let back = gas.state_at_volume(state.volume, t).unwrap();
        prop_assert!(((back.pressure - p) / p).abs() < 1e-5);
    }
}
