//! Closed-form (Cardano / trigonometric) solver for real cubic equations.
//!
//! `a0·x³ + a1·x² + a2·x + a3 = 0` is normalised to `x³ + a·x² + b·x + c`,
//! shifted to the depressed form `t³ + p·t + q` and solved from the sign of
//! the discriminant `(q/2)² + (p/3)³`:
//! - positive: one real root (Cardano)
//! - zero or negative: three real roots, repeated roots allowed (Viète)

use crate::error::{AtError, AtResult};
use crate::numeric::{Real, ensure_finite};
use std::f64::consts::PI;

/// Leading coefficient below this fraction of the largest one is treated as zero.
const LEADING_COEF_EPS: Real = 1e-12;

/// Real roots of a cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubicRoots {
    One(Real),
    /// Sorted ascending.
    Three([Real; 3]),
}

impl CubicRoots {
    pub fn has_single_root(&self) -> bool {
        matches!(self, CubicRoots::One(_))
    }

    pub fn as_slice(&self) -> &[Real] {
        match self {
            CubicRoots::One(x) => std::slice::from_ref(x),
            CubicRoots::Three(xs) => xs,
        }
    }

    pub fn smallest(&self) -> Real {
        match self {
            CubicRoots::One(x) => *x,
            CubicRoots::Three(xs) => xs[0],
        }
    }

    pub fn largest(&self) -> Real {
        match self {
            CubicRoots::One(x) => *x,
            CubicRoots::Three(xs) => xs[2],
        }
    }
}

/// Solve `coefs[0]·x³ + coefs[1]·x² + coefs[2]·x + coefs[3] = 0`.
pub fn solve_cubic(coefs: [Real; 4]) -> AtResult<CubicRoots> {
    for c in coefs {
        ensure_finite(c, "cubic coefficient")?;
    }
    let scale = coefs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    let [a0, a1, a2, a3] = coefs;
    if scale == 0.0 || a0.abs() <= LEADING_COEF_EPS * scale {
        return Err(AtError::Degenerate {
            what: "leading cubic coefficient is zero",
        });
    }

    let a = a1 / a0;
    let b = a2 / a0;
    let c = a3 / a0;
    let shift = a / 3.0;
    let p = b - a * a / 3.0;
    let q = 2.0 * a * a * a / 27.0 - a * b / 3.0 + c;
    let disc = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    let roots = if disc > 0.0 {
        // pick the sign that avoids cancellation, recover the partner via u·v = -p/3
        let s = disc.sqrt();
        let w = if q > 0.0 { -q / 2.0 - s } else { -q / 2.0 + s };
        let u = w.cbrt();
        let v = if u != 0.0 { -p / (3.0 * u) } else { 0.0 };
        CubicRoots::One(u + v - shift)
    } else if p == 0.0 {
        CubicRoots::Three([-shift; 3])
    } else {
        let r = 2.0 * (-p / 3.0).sqrt();
        let cos_arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let phi = cos_arg.acos() / 3.0;
        let mut xs = [0.0; 3];
        for (k, x) in xs.iter_mut().enumerate() {
            *x = r * (phi - 2.0 * PI * k as Real / 3.0).cos() - shift;
        }
        xs.sort_by(|l, r| l.total_cmp(r));
        CubicRoots::Three(xs)
    };

    for x in roots.as_slice() {
        ensure_finite(*x, "cubic root")?;
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances::new(1e-9, 1e-9);

    #[test]
    fn three_integer_roots() {
        // (x-1)(x-2)(x-3)
        let roots = solve_cubic([1.0, -6.0, 11.0, -6.0]).unwrap();
        let CubicRoots::Three(xs) = roots else {
            panic!("expected three roots, got {roots:?}");
        };
        assert!(nearly_equal(xs[0], 1.0, TOL), "{xs:?}");
        assert!(nearly_equal(xs[1], 2.0, TOL), "{xs:?}");
        assert!(nearly_equal(xs[2], 3.0, TOL), "{xs:?}");
    }

    #[test]
    fn single_real_root() {
        // x³ - 1 has one real root and a complex pair
        let roots = solve_cubic([1.0, 0.0, 0.0, -1.0]).unwrap();
        assert!(roots.has_single_root());
        assert!(nearly_equal(roots.largest(), 1.0, TOL));
    }

    #[test]
    fn triple_root() {
        // (x-2)³
        let roots = solve_cubic([1.0, -6.0, 12.0, -8.0]).unwrap();
        assert_eq!(roots, CubicRoots::Three([2.0, 2.0, 2.0]));
    }

    #[test]
    fn non_unit_leading_coefficient() {
        // 2(x+1)(x-0.5)(x-4)
        let roots = solve_cubic([2.0, -7.0, -5.0, 4.0]).unwrap();
        let xs = roots.as_slice();
        assert_eq!(xs.len(), 3);
        assert!(nearly_equal(xs[0], -1.0, TOL), "{xs:?}");
        assert!(nearly_equal(xs[1], 0.5, TOL), "{xs:?}");
        assert!(nearly_equal(xs[2], 4.0, TOL), "{xs:?}");
    }

    #[test]
    fn zero_leading_coefficient_is_error() {
        let err = solve_cubic([0.0, 1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AtError::Degenerate { .. }));
        assert!(solve_cubic([0.0; 4]).is_err());
    }

    #[test]
    fn non_finite_coefficient_is_error() {
        let err = solve_cubic([1.0, f64::NAN, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, AtError::NonFinite { .. }));
        assert!(solve_cubic([1.0, 0.0, f64::INFINITY, 1.0]).is_err());
    }
}
