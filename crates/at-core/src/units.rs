// at-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, SpecificVolume as UomSpecificVolume,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type SpecVolume = UomSpecificVolume;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m3_per_kg(v: f64) -> SpecVolume {
    use uom::si::specific_volume::cubic_meter_per_kilogram;
    SpecVolume::new::<cubic_meter_per_kilogram>(v)
}

pub mod constants {
    /// Universal gas constant [J/(mol·K)].
    pub const GAS_CONSTANT: f64 = 8.314_462_618;
}
