//! Float helpers shared by the equations of state and the binodal solver.

use crate::AtError;

/// Scalar type of every thermodynamic quantity.
pub type Real = f64;

/// Comparison window for state parameters: values closer than `abs`, or
/// closer than `rel` times the larger magnitude, are the same.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }
}

/// `true` when `a` and `b` fall inside the `tol` window.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Rejects NaN and infinities coming out of a state calculation.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AtError> {
    if !v.is_finite() {
        return Err(AtError::NonFinite { what, value: v });
    }
    Ok(v)
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, AtError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(AtError::InvalidArg { what })
    }
}

/// Linear interpolation between `a` (at 0) and `b` (at 1).
#[inline]
pub fn lerp(a: Real, b: Real, frac: Real) -> Real {
    a + (b - a) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_volumes_compare_relatively() {
        // methane critical volume, m³/kg
        let tol = Tolerances::new(0.0, 1e-6);
        assert!(nearly_equal(0.00617, 0.006_170_005, tol));
        assert!(!nearly_equal(0.00617, 0.00618, tol));
    }

    #[test]
    fn pressures_near_zero_compare_absolutely() {
        let tol = Tolerances::new(1e-3, 0.0);
        assert!(nearly_equal(0.0, 5e-4, tol));
        assert!(!nearly_equal(1.0e5, 1.0e5 + 1.0, tol));
    }

    #[test]
    fn non_finite_state_value_is_reported() {
        let err = ensure_finite(Real::NAN, "heat capacity").unwrap_err();
        assert!(matches!(err, AtError::NonFinite { what: "heat capacity", .. }));
        assert_eq!(ensure_finite(-40.0, "internal energy").unwrap(), -40.0);
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.0, "critical pressure").is_err());
        assert!(ensure_positive(-1.0, "critical pressure").is_err());
        assert!(ensure_positive(Real::INFINITY, "critical pressure").is_err());
        assert_eq!(ensure_positive(2.5, "critical pressure").unwrap(), 2.5);
    }

    #[test]
    fn lerp_between_binodal_nodes() {
        // saturation temperature between two tabulated reduced pressures
        assert_eq!(lerp(150.0, 160.0, 0.0), 150.0);
        assert_eq!(lerp(150.0, 160.0, 1.0), 160.0);
        assert_eq!(lerp(150.0, 160.0, 0.25), 152.5);
    }
}
