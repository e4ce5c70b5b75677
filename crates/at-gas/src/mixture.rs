//! Gas mixtures described by per-component parameters and mole fractions.

use crate::error::{GasError, GasResult};
use crate::parameters::{ConstParameters, DynParameters};

/// Allowed deviation of the mole-fraction sum from 1.
pub const MIX_FRACTION_EPS: f64 = 1e-3;

/// One mixture component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub fraction: f64,
    pub constants: ConstParameters,
    pub dynamics: DynParameters,
}

impl Component {
    pub fn new(fraction: f64, constants: ConstParameters, dynamics: DynParameters) -> Self {
        Self {
            fraction,
            constants,
            dynamics,
        }
    }
}

/// Ordered list of components whose mole fractions sum to one.
///
/// Fractions are checked, never normalized: a composition that does not add
/// up is an input error.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMix {
    components: Vec<Component>,
}

impl ComponentMix {
    pub fn new(components: Vec<Component>) -> GasResult<Self> {
        if components.is_empty() {
            return Err(GasError::init("empty gas mixture"));
        }
        let mut sum = 0.0;
        for c in &components {
            if !c.fraction.is_finite() || c.fraction <= 0.0 {
                return Err(GasError::init(format!(
                    "mole fraction must be positive, got {}",
                    c.fraction
                )));
            }
            sum += c.fraction;
        }
        if (sum - 1.0).abs() > MIX_FRACTION_EPS {
            return Err(GasError::init(format!(
                "mole fractions sum to {sum}, expected 1"
            )));
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter()
    }

    /// Component constants with mutable access to their dynamic parameters.
    pub fn dynamics_mut(
        &mut self,
    ) -> impl Iterator<Item = (&ConstParameters, &mut DynParameters)> + '_ {
        self.components
            .iter_mut()
            .map(|c| (&c.constants, &mut c.dynamics))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::StatePoint;

    fn component(fraction: f64) -> Component {
        let constants = ConstParameters::new(0.00617, 4.641e6, 190.66, 0.016043, 0.011).unwrap();
        let point = StatePoint::new(0.16, 1e6, 314.0).unwrap();
        let dynamics = DynParameters::new(1750.0, 2275.0, 0.0, point).unwrap();
        Component::new(fraction, constants, dynamics)
    }

    #[test]
    fn accepts_sum_within_tolerance() {
        let mix = ComponentMix::new(vec![component(0.600005), component(0.4)]).unwrap();
        assert_eq!(mix.len(), 2);
        assert!(ComponentMix::new(vec![component(1.0)]).is_ok());
    }

    #[test]
    fn rejects_bad_sums() {
        assert!(ComponentMix::new(vec![component(0.25), component(0.25)]).is_err());
        assert!(ComponentMix::new(vec![component(0.75), component(0.75)]).is_err());
    }

    #[test]
    fn rejects_empty_and_non_positive() {
        assert!(ComponentMix::new(vec![]).is_err());
        assert!(ComponentMix::new(vec![component(0.0), component(1.0)]).is_err());
        assert!(ComponentMix::new(vec![component(-0.1), component(1.1)]).is_err());
        assert!(ComponentMix::new(vec![component(f64::NAN)]).is_err());
    }
}
