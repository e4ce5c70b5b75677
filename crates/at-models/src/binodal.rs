//! Binodal (liquid/vapour coexistence) curves and phase classification.

use at_core::numeric::lerp;
use at_gas::Phase;
use serde::{Deserialize, Serialize};

/// One coexistence sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinodalPoint {
    pub temperature: f64,
    pub pressure: f64,
    /// Left (liquid) branch volume.
    pub liquid_volume: f64,
    /// Right (vapour) branch volume.
    pub vapour_volume: f64,
}

impl BinodalPoint {
    pub const REDUCED_CRITICAL: BinodalPoint = BinodalPoint {
        temperature: 1.0,
        pressure: 1.0,
        liquid_volume: 1.0,
        vapour_volume: 1.0,
    };

    fn is_positive(&self) -> bool {
        [
            self.temperature,
            self.pressure,
            self.liquid_volume,
            self.vapour_volume,
        ]
        .iter()
        .all(|x| x.is_finite() && *x > 0.0)
    }
}

/// Coexistence samples, critical point first, temperatures descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinodalCurve {
    points: Vec<BinodalPoint>,
}

impl BinodalCurve {
    /// Curve from solved samples: non-positive samples are dropped (order
    /// kept) and `critical` is put in front.
    pub fn from_samples(critical: BinodalPoint, samples: Vec<BinodalPoint>) -> Self {
        let mut points = Vec::with_capacity(samples.len() + 1);
        points.push(critical);
        points.extend(samples.into_iter().filter(BinodalPoint::is_positive));
        Self { points }
    }

    pub fn points(&self) -> &[BinodalPoint] {
        &self.points
    }

    pub fn critical(&self) -> BinodalPoint {
        self.points[0]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true: the critical point is always present.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Copy with volumes, pressures and temperatures multiplied by the factors.
    pub fn rescaled(&self, volume: f64, pressure: f64, temperature: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| BinodalPoint {
                    temperature: p.temperature * temperature,
                    pressure: p.pressure * pressure,
                    liquid_volume: p.liquid_volume * volume,
                    vapour_volume: p.vapour_volume * volume,
                })
                .collect(),
        }
    }

    /// Saturation pressure at `t`, linear in temperature between samples.
    ///
    /// `None` at or above the critical temperature and below the last sample.
    pub fn saturation_pressure(&self, t: f64) -> Option<f64> {
        if t >= self.critical().temperature {
            return None;
        }
        self.points.windows(2).find_map(|pair| {
            let (hot, cold) = (pair[0], pair[1]);
            if t <= hot.temperature && t >= cold.temperature {
                let frac = (t - cold.temperature) / (hot.temperature - cold.temperature);
                Some(lerp(cold.pressure, hot.pressure, frac))
            } else {
                None
            }
        })
    }

    /// Phase of the state (v, p, t) relative to this curve.
    pub fn classify(&self, v: f64, p: f64, t: f64) -> Phase {
        let critical = self.critical();
        if t >= critical.temperature {
            return if p >= critical.pressure {
                Phase::Scf
            } else {
                Phase::Gas
            };
        }

        let Some(idx) = (1..self.points.len()).find(|&i| self.points[i].pressure <= p) else {
            // below every sampled pressure: only the volume tells
            return if v <= critical.liquid_volume {
                Phase::LiqSteam
            } else {
                Phase::Gas
            };
        };

        let (upper, lower) = (self.points[idx - 1], self.points[idx]);
        let frac = (p - lower.pressure) / (upper.pressure - lower.pressure);
        let v_left = lerp(lower.liquid_volume, upper.liquid_volume, frac);
        let v_right = lerp(lower.vapour_volume, upper.vapour_volume, frac);
        if v < critical.liquid_volume {
            if v < v_left {
                Phase::Liquid
            } else {
                Phase::LiqSteam
            }
        } else if v > v_right {
            Phase::Gas
        } else {
            Phase::LiqSteam
        }
    }
}

/// Enthalpy `u + p·v` along both branches of a curve, one value per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchEnthalpy {
    pub liquid: Vec<f64>,
    pub vapour: Vec<f64>,
}
