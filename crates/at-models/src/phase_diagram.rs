//! Binodal curves by the Maxwell equal-area construction, and their cache.
//!
//! For each reduced temperature of a fixed grid the saturation pressure is
//! searched on the reduced equation until the area under the isotherm
//! between the outer volume roots matches the rectangle `p·(v_g − v_l)`.
//! Curves are computed once per (model, acentric factor) key, stored in
//! reduced form and handed out rescaled to the caller's critical point.

use crate::binodal::{BinodalCurve, BinodalPoint};
use crate::config::BinodalConfig;
use crate::eos::{CubicEos, EosKind};
use crate::error::{ModelError, ModelResult};
use at_gas::{AveragingRule, ComponentMix, ConstParameters, average};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{info, warn};

/// Reduced temperatures of the binodal samples, hottest first.
pub const REDUCED_TEMPERATURES: [f64; 11] =
    [0.97, 0.95, 0.92, 0.9, 0.87, 0.85, 0.8, 0.75, 0.7, 0.6, 0.5];

/// Points next to the critical point start with a finer pressure step.
const NEAR_CRITICAL_POINTS: usize = 4;

/// Outer roots closer than this are one root.
const DISTINCT_ROOTS_EPS: f64 = 1e-4;

/// Acentric factors are keyed at this resolution.
const ACENTRIC_QUANTUM: f64 = 1e-4;

/// Search the reduced binodal curve of `eos` (a reduced equation).
pub fn maxwell_curve(eos: &CubicEos, config: &BinodalConfig) -> BinodalCurve {
    let mut samples = Vec::with_capacity(REDUCED_TEMPERATURES.len());
    for (index, &t) in REDUCED_TEMPERATURES.iter().enumerate() {
        match search_point(eos, t, index, config) {
            Some(point) => samples.push(point),
            None => warn!(
                model = eos.kind().name(),
                reduced_temperature = t,
                "binodal point not solved, dropped"
            ),
        }
    }
    BinodalCurve::from_samples(BinodalPoint::REDUCED_CRITICAL, samples)
}

fn search_point(
    eos: &CubicEos,
    t: f64,
    index: usize,
    config: &BinodalConfig,
) -> Option<BinodalPoint> {
    let mut p = t.powi(3).max(0.01);
    let mut step = 0.002 * p;
    if index < NEAR_CRITICAL_POINTS {
        step *= 0.1;
    }
    let mut last_direction = 0.0;

    for _ in 0..config.max_iterations {
        let roots = eos.admissible_roots(p, t).ok()?;
        let direction = if roots.len() < 3 {
            // outside the two-phase window: a liquid-like root means p is too high
            let v = roots[roots.len() - 1];
            if v <= 1.0 { -1.0 } else { 1.0 }
        } else {
            let (v_liquid, v_vapour) = (roots[0], roots[2]);
            if (v_vapour - v_liquid).abs() < DISTINCT_ROOTS_EPS {
                return None;
            }
            let rectangle = p * (v_vapour - v_liquid);
            let area = eos.pressure_integral(v_liquid, v_vapour, t);
            let diff = (rectangle - area) / rectangle;
            if diff.abs() < config.area_tolerance {
                return Some(BinodalPoint {
                    temperature: t,
                    pressure: p,
                    liquid_volume: v_liquid,
                    vapour_volume: v_vapour,
                });
            }
            if diff > 0.0 { -1.0 } else { 1.0 }
        };

        if last_direction != 0.0 {
            if direction != last_direction {
                step *= 0.5;
            } else {
                step *= 1.5;
            }
        }
        last_direction = direction;

        if p + direction * step <= 0.0 {
            p *= 0.5;
        } else {
            p += direction * step;
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CurveKey {
    kind: EosKind,
    acentric: i64,
}

impl CurveKey {
    fn new(kind: EosKind, acentric: f64) -> Self {
        Self {
            kind,
            acentric: (acentric / ACENTRIC_QUANTUM).round() as i64,
        }
    }
}

/// Session-owned cache of reduced binodal curves.
///
/// The first request of a key computes the curve while other requests of
/// the same key wait for it; different keys compute independently.
#[derive(Debug, Default)]
pub struct PhaseDiagram {
    config: BinodalConfig,
    curves: Mutex<HashMap<CurveKey, Arc<OnceLock<BinodalCurve>>>>,
    computations: AtomicUsize,
}

impl PhaseDiagram {
    pub fn new(config: BinodalConfig) -> ModelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            curves: Mutex::new(HashMap::new()),
            computations: AtomicUsize::new(0),
        })
    }

    /// Binodal curve of `kind` rescaled to the critical point of `constants`.
    pub fn curve(&self, kind: EosKind, constants: &ConstParameters) -> ModelResult<BinodalCurve> {
        let (v_k, p_k, t_k, acentric) = (
            constants.v_k(),
            constants.p_k(),
            constants.t_k(),
            constants.acentric(),
        );
        for (what, value) in [
            ("critical volume", v_k),
            ("critical pressure", p_k),
            ("critical temperature", t_k),
            ("acentric factor", acentric),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ModelError::phase_diagram(format!(
                    "{what} must be positive, got {value}"
                )));
            }
        }
        Ok(self.reduced_curve(kind, acentric).rescaled(v_k, p_k, t_k))
    }

    /// Binodal curve of a mixture, averaged under `rule` first.
    pub fn mixture_curve(
        &self,
        kind: EosKind,
        mix: &ComponentMix,
        rule: AveragingRule,
    ) -> ModelResult<BinodalCurve> {
        let constants = average(mix, rule).map_err(|err| ModelError::PhaseDiagram {
            what: format!("{} mixture binodal", kind.name()),
            source: Some(Box::new(err)),
        })?;
        self.curve(kind, &constants)
    }

    fn reduced_curve(&self, kind: EosKind, acentric: f64) -> BinodalCurve {
        let key = CurveKey::new(kind, acentric);
        let slot = {
            let mut curves = self.curves.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(curves.entry(key).or_default())
        };
        slot.get_or_init(|| {
            self.computations.fetch_add(1, Ordering::SeqCst);
            let eos = CubicEos::reduced(kind, key.acentric as f64 * ACENTRIC_QUANTUM);
            let curve = maxwell_curve(&eos, &self.config);
            info!(
                model = kind.name(),
                acentric,
                points = curve.len(),
                "binodal curve computed"
            );
            curve
        })
        .clone()
    }

    /// Number of Maxwell searches run so far.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::SeqCst)
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.curves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evict one key; returns whether it was cached.
    pub fn erase(&self, kind: EosKind, acentric: f64) -> bool {
        self.curves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&CurveKey::new(kind, acentric))
            .is_some()
    }

    pub fn clear(&self) {
        self.curves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
