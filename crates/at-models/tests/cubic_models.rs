//! End-to-end checks of the cubic models through a calculation session.

use at_core::numeric::{Tolerances, nearly_equal};
use at_gas::{ConstParameters, DynParameters, Phase, StatePoint};
use at_models::{CalculationConfig, CalculationSession, GasModel, ModelKind, RealGasModel};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn methane() -> ConstParameters {
    ConstParameters::new(0.00617, 4.641e7, 190.66, 0.016043, 0.011).unwrap()
}

fn baseline() -> DynParameters {
    DynParameters::new(1750.0, 2275.0, 0.0, StatePoint::new(0.16, 1.0e6, 314.0).unwrap()).unwrap()
}

fn session() -> CalculationSession {
    CalculationSession::new(CalculationConfig::default()).unwrap()
}

#[test]
fn methane_peng_robinson_gas_state() {
    init_tracing();
    let session = session();
    let mut model = session
        .create(ModelKind::PengRobinson, methane(), baseline())
        .unwrap();

    model.set_volume(1.0e6, 314.0).unwrap();

    let state = model.state();
    assert_eq!(state.phase, Phase::Gas);
    assert!(state.point.volume > 0.0);
    let dynamics = model.dynamics();
    assert!(dynamics.heat_cap_pres > dynamics.heat_cap_vol);
    assert!(model.is_valid());
    assert!(model.previous_point().is_some());
}

#[test]
fn every_cubic_model_reaches_the_same_gas_state() {
    let session = session();
    for kind in [
        ModelKind::RedlichKwong,
        ModelKind::RedlichKwongSoave,
        ModelKind::PengRobinson,
    ] {
        let mut model = session.create(kind, methane(), baseline()).unwrap();
        model.set_volume(2.0e6, 300.0).unwrap();
        let ideal = methane().r() * 300.0 / 2.0e6;
        let v = model.state().point.volume;
        // a dilute gas stays within a few percent of the ideal volume
        assert!(((v - ideal) / ideal).abs() < 0.05, "{}: v = {v}", kind.name());
        assert_eq!(model.kind(), kind);
    }
}

#[test]
fn set_pressure_inverts_volume() {
    let session = session();
    let mut model = session
        .create(ModelKind::RedlichKwongSoave, methane(), baseline())
        .unwrap();
    let v = model.volume(3.0e6, 320.0).unwrap();
    model.set_pressure(v, 320.0).unwrap();
    assert!(nearly_equal(
        model.state().point.pressure,
        3.0e6,
        Tolerances::new(0.0, 1e-7)
    ));
}

#[test]
fn isothermal_updates_are_additive() {
    let session = session();
    let model = session
        .create(ModelKind::PengRobinson, methane(), baseline())
        .unwrap();
    let constants = *model.constants();
    let t = 314.0;
    let a = DynParameters {
        point: StatePoint::new(model.volume(1.0e6, t).unwrap(), 1.0e6, t).unwrap(),
        ..baseline()
    };
    let b_point = StatePoint::new(model.volume(4.0e6, t).unwrap(), 4.0e6, t).unwrap();
    let c_point = StatePoint::new(model.volume(8.0e6, t).unwrap(), 8.0e6, t).unwrap();

    let via_b = model
        .update_dyn_params(&a, b_point, &constants)
        .and_then(|b| model.update_dyn_params(&b, c_point, &constants))
        .unwrap();
    let direct = model.update_dyn_params(&a, c_point, &constants).unwrap();

    let tol = Tolerances::new(1e-9, 1e-7);
    assert!(nearly_equal(via_b.internal_energy, direct.internal_energy, tol));
    assert!(nearly_equal(via_b.heat_cap_vol, direct.heat_cap_vol, tol));
    assert!(nearly_equal(via_b.heat_cap_pres, direct.heat_cap_pres, tol));
}

#[test]
fn compression_lowers_internal_energy() {
    let session = session();
    let mut model = session
        .create(ModelKind::PengRobinson, methane(), baseline())
        .unwrap();
    model.set_volume(1.0e6, 314.0).unwrap();
    let u_low = model.dynamics().internal_energy;
    model.set_volume(1.0e7, 314.0).unwrap();
    // attraction lowers u as the gas is compressed at constant T
    assert!(model.dynamics().internal_energy < u_low);
}

#[test]
fn liquid_branch_below_critical_temperature() {
    let session = session();
    let constants = ConstParameters::new(0.00617, 4.641e6, 190.66, 0.016043, 0.011).unwrap();
    let mut model = session
        .create(ModelKind::PengRobinson, constants, baseline())
        .unwrap();

    model.set_volume(2.0e6, 130.0).unwrap();
    assert_eq!(model.state().phase, Phase::Liquid);
    assert!(model.state().point.volume < constants.v_k());

    model.set_volume(2.0e5, 185.0).unwrap();
    assert_eq!(model.state().phase, Phase::Gas);
}

#[test]
fn rows_and_logs_follow_the_live_state() {
    let session = session();
    let mut model = session
        .create(ModelKind::PengRobinson, methane(), baseline())
        .unwrap();
    model.set_volume(1.0e6, 314.0).unwrap();

    let row = model.parameters_string();
    assert!(row.starts_with("   1000000.0"));
    assert!(row.ends_with('\n'));
    assert!(GasModel::parameters_string_head().contains("temperat"));
    assert!(model.const_parameters_string().contains("Critical pnt"));

    let log = model.state_log();
    assert_eq!(log.phase, "GAS");
    let json = log.to_json().unwrap();
    assert!(json.contains("\"heat_cap_pres\""));
}
