//! Binodal curves through the shared cache.

use at_core::ErrorKind;
use at_gas::{ConstParameters, Phase};
use at_models::{BinodalConfig, EosKind, PhaseDiagram};
use proptest::prelude::*;
use std::sync::OnceLock;

const KINDS: [EosKind; 3] = [
    EosKind::RedlichKwong,
    EosKind::RedlichKwongSoave,
    EosKind::PengRobinson,
];

fn shared() -> &'static PhaseDiagram {
    static DIAGRAM: OnceLock<PhaseDiagram> = OnceLock::new();
    DIAGRAM.get_or_init(PhaseDiagram::default)
}

fn constants(acentric: f64) -> ConstParameters {
    ConstParameters::new(0.0049, 4.872e6, 305.32, 0.03007, acentric).unwrap()
}

#[test]
fn identical_keys_compute_once() {
    let diagram = PhaseDiagram::new(BinodalConfig::default()).unwrap();
    let first = diagram.curve(EosKind::PengRobinson, &constants(0.099)).unwrap();
    let second = diagram.curve(EosKind::PengRobinson, &constants(0.099)).unwrap();
    assert_eq!(first, second);
    assert_eq!(diagram.computations(), 1);
}

#[test]
fn nearby_acentric_factors_share_a_curve() {
    let diagram = PhaseDiagram::default();
    diagram.curve(EosKind::RedlichKwongSoave, &constants(0.09900)).unwrap();
    diagram.curve(EosKind::RedlichKwongSoave, &constants(0.09902)).unwrap();
    assert_eq!(diagram.computations(), 1);
    diagram.curve(EosKind::RedlichKwongSoave, &constants(0.1)).unwrap();
    assert_eq!(diagram.computations(), 2);
}

#[test]
fn erase_forces_recomputation() {
    let diagram = PhaseDiagram::default();
    diagram.curve(EosKind::PengRobinson, &constants(0.2)).unwrap();
    assert!(diagram.erase(EosKind::PengRobinson, 0.2));
    assert!(!diagram.erase(EosKind::PengRobinson, 0.2));
    diagram.curve(EosKind::PengRobinson, &constants(0.2)).unwrap();
    assert_eq!(diagram.computations(), 2);
    diagram.clear();
    assert!(diagram.is_empty());
}

#[test]
fn branches_widen_as_temperature_drops() {
    for kind in KINDS {
        let curve = shared().curve(kind, &constants(0.099)).unwrap();
        assert!(curve.len() > 5, "{}: {} points", kind.name(), curve.len());
        for pair in curve.points().windows(2) {
            let (hot, cold) = (pair[0], pair[1]);
            assert!(cold.temperature < hot.temperature);
            assert!(cold.pressure < hot.pressure);
            assert!(cold.liquid_volume <= hot.liquid_volume, "{}", kind.name());
            assert!(cold.vapour_volume >= hot.vapour_volume, "{}", kind.name());
        }
    }
}

#[test]
fn curve_is_rescaled_to_the_critical_point() {
    let c = constants(0.099);
    let curve = shared().curve(EosKind::PengRobinson, &c).unwrap();
    let critical = curve.critical();
    assert_eq!(critical.temperature, c.t_k());
    assert_eq!(critical.pressure, c.p_k());
    assert_eq!(critical.liquid_volume, c.v_k());
    assert_eq!(critical.vapour_volume, c.v_k());
}

#[test]
fn non_positive_acentric_factor_is_rejected() {
    let err = PhaseDiagram::default()
        .curve(EosKind::PengRobinson, &constants(0.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Initialization);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn supercritical_or_gas_above_critical_temperature(
        acentric in 0.01..0.99_f64,
        v in 1e-4..1.0_f64,
        p_ratio in 0.01..5.0_f64,
        t_ratio in 1.0..3.0_f64,
        kind in prop::sample::select(KINDS.to_vec()),
    ) {
        let c = constants(acentric);
        let curve = shared().curve(kind, &c).unwrap();
        let (p, t) = (p_ratio * c.p_k(), t_ratio * c.t_k());
        let expected = if p >= c.p_k() { Phase::Scf } else { Phase::Gas };
        prop_assert_eq!(curve.classify(v, p, t), expected);
    }
}
