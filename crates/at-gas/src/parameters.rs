//! Constant and dynamic gas parameters and the (v, p, T) state point.

use crate::error::{GasError, GasResult};
use crate::phase::Phase;
use at_core::numeric::{ensure_finite, ensure_positive};
use at_core::units::{
    Pressure, SpecVolume, Temperature, constants::GAS_CONSTANT, k, m3_per_kg, pa,
};
use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// Critical point and molecular constants of a gas or effective mixture.
///
/// Validated once at construction and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstParameters {
    v_k: f64,
    p_k: f64,
    t_k: f64,
    molar_mass: f64,
    r: f64,
    acentric: f64,
}

impl ConstParameters {
    /// Build from critical volume [m³/kg], pressure [Pa], temperature [K],
    /// molar mass [kg/mol] and acentric factor.
    ///
    /// The specific gas constant is derived as `R_universal / molar_mass`.
    pub fn new(v_k: f64, p_k: f64, t_k: f64, molar_mass: f64, acentric: f64) -> GasResult<Self> {
        let v_k = ensure_positive(v_k, "critical volume")?;
        let p_k = ensure_positive(p_k, "critical pressure")?;
        let t_k = ensure_positive(t_k, "critical temperature")?;
        let molar_mass = ensure_positive(molar_mass, "molar mass")?;
        let acentric = ensure_finite(acentric, "acentric factor")?;
        let r = ensure_positive(GAS_CONSTANT / molar_mass, "gas constant")?;
        Ok(Self {
            v_k,
            p_k,
            t_k,
            molar_mass,
            r,
            acentric,
        })
    }

    /// Critical volume [m³/kg].
    pub fn v_k(&self) -> f64 {
        self.v_k
    }

    /// Critical pressure [Pa].
    pub fn p_k(&self) -> f64 {
        self.p_k
    }

    /// Critical temperature [K].
    pub fn t_k(&self) -> f64 {
        self.t_k
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn acentric(&self) -> f64 {
        self.acentric
    }

    pub fn critical_point(&self) -> StatePoint {
        StatePoint {
            volume: self.v_k,
            pressure: self.p_k,
            temperature: self.t_k,
        }
    }
}

/// Specific volume [m³/kg], pressure [Pa] and temperature [K].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub volume: f64,
    pub pressure: f64,
    pub temperature: f64,
}

impl StatePoint {
    pub fn new(volume: f64, pressure: f64, temperature: f64) -> GasResult<Self> {
        Ok(Self {
            volume: ensure_positive(volume, "volume")?,
            pressure: ensure_positive(pressure, "pressure")?,
            temperature: ensure_positive(temperature, "temperature")?,
        })
    }

    pub fn from_si(volume: SpecVolume, pressure: Pressure, temperature: Temperature) -> GasResult<Self> {
        use uom::si::{
            pressure::pascal, specific_volume::cubic_meter_per_kilogram,
            thermodynamic_temperature::kelvin,
        };
        Self::new(
            volume.get::<cubic_meter_per_kilogram>(),
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )
    }

    pub fn volume_si(&self) -> SpecVolume {
        m3_per_kg(self.volume)
    }

    pub fn pressure_si(&self) -> Pressure {
        pa(self.pressure)
    }

    pub fn temperature_si(&self) -> Temperature {
        k(self.temperature)
    }

    /// Mass density [kg/m³].
    pub fn density(&self) -> f64 {
        1.0 / self.volume
    }
}

/// Which dynamic values were derived by a model rather than supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynSetup(u8);

impl DynSetup {
    pub const NONE: DynSetup = DynSetup(0);
    pub const HEAT_CAP_VOL: DynSetup = DynSetup(0x01);
    pub const HEAT_CAP_PRES: DynSetup = DynSetup(0x02);
    pub const INTERNAL_ENERGY: DynSetup = DynSetup(0x04);
    pub const BETA_KR: DynSetup = DynSetup(0x08);
    pub const ALL: DynSetup = DynSetup(0x0f);

    pub fn contains(self, other: DynSetup) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for DynSetup {
    type Output = DynSetup;

    fn bitor(self, rhs: DynSetup) -> DynSetup {
        DynSetup(self.0 | rhs.0)
    }
}

/// Heat capacities [J/(kg·K)], internal energy [J/kg] and the isobaric
/// expansion coefficient β [1/K] at `point`.
///
/// Models advance these by path integrals from the previous point, so the
/// order of updates matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynParameters {
    pub heat_cap_vol: f64,
    pub heat_cap_pres: f64,
    pub internal_energy: f64,
    pub beta_kr: f64,
    pub point: StatePoint,
    pub setup: DynSetup,
}

impl DynParameters {
    /// Baseline values supplied by a property source for `point`.
    pub fn new(
        heat_cap_vol: f64,
        heat_cap_pres: f64,
        internal_energy: f64,
        point: StatePoint,
    ) -> GasResult<Self> {
        let heat_cap_vol = ensure_positive(heat_cap_vol, "heat capacity at constant volume")?;
        let heat_cap_pres = ensure_positive(heat_cap_pres, "heat capacity at constant pressure")?;
        let internal_energy = ensure_finite(internal_energy, "internal energy")?;
        let point = StatePoint::new(point.volume, point.pressure, point.temperature)?;
        Ok(Self {
            heat_cap_vol,
            heat_cap_pres,
            internal_energy,
            beta_kr: 0.0,
            point,
            setup: DynSetup::NONE,
        })
    }

    /// Heat capacity ratio cp/cv.
    pub fn adiabatic_index(&self) -> f64 {
        self.heat_cap_pres / self.heat_cap_vol
    }

    /// Specific enthalpy `u + p·v` [J/kg].
    pub fn enthalpy(&self) -> f64 {
        self.internal_energy + self.point.pressure * self.point.volume
    }

    /// Mole-fraction weighted combination of component values at `point`.
    pub fn weighted<'a, I>(parts: I, point: StatePoint) -> GasResult<Self>
    where
        I: IntoIterator<Item = (f64, &'a DynParameters)>,
    {
        let mut out = DynParameters {
            heat_cap_vol: 0.0,
            heat_cap_pres: 0.0,
            internal_energy: 0.0,
            beta_kr: 0.0,
            point,
            setup: DynSetup::NONE,
        };
        let mut any = false;
        for (fraction, part) in parts {
            out.heat_cap_vol += fraction * part.heat_cap_vol;
            out.heat_cap_pres += fraction * part.heat_cap_pres;
            out.internal_energy += fraction * part.internal_energy;
            out.beta_kr += fraction * part.beta_kr;
            out.setup = out.setup | part.setup;
            any = true;
        }
        if !any {
            return Err(GasError::init("no components to average dynamic parameters"));
        }
        Ok(out)
    }
}

/// Live state of a model instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasState {
    pub point: StatePoint,
    pub phase: Phase,
}
