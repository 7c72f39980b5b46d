//! 2x2 unitaries of the single-qubit gate kinds, for equivalence tests.

use num_complex::Complex64;
use std::f64::consts::PI;

use qcodec_ir::{GateKind, PowerBase};

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub(crate) data: [Complex64; 4],
}

fn re(v: f64) -> Complex64 {
    Complex64::new(v, 0.0)
}

fn im(v: f64) -> Complex64 {
    Complex64::new(0.0, v)
}

impl Unitary2x2 {
    pub(crate) fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    fn diag(phase: f64) -> Self {
        Self::new(re(1.0), re(0.0), re(0.0), Complex64::from_polar(1.0, phase))
    }

    pub(crate) fn h() -> Self {
        let s = 1.0 / 2.0_f64.sqrt();
        Self::new(re(s), re(s), re(s), re(-s))
    }

    pub(crate) fn x() -> Self {
        Self::new(re(0.0), re(1.0), re(1.0), re(0.0))
    }

    pub(crate) fn y() -> Self {
        Self::new(re(0.0), im(-1.0), im(1.0), re(0.0))
    }

    pub(crate) fn z() -> Self {
        Self::diag(PI)
    }

    pub(crate) fn rx(theta: f64) -> Self {
        let (s, c) = (theta / 2.0).sin_cos();
        Self::new(re(c), im(-s), im(-s), re(c))
    }

    pub(crate) fn ry(theta: f64) -> Self {
        let (s, c) = (theta / 2.0).sin_cos();
        Self::new(re(c), re(-s), re(s), re(c))
    }

    pub(crate) fn rz(theta: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, -theta / 2.0),
            re(0.0),
            re(0.0),
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// Matrix product `self · other`.
    pub(crate) fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Matrix of a single-qubit kind with a constant parameter.
    ///
    /// Powers follow the convention `Z^t = diag(1, e^{iπt})`, with the other
    /// bases obtained by conjugation.
    pub(crate) fn for_kind(kind: &GateKind) -> Option<Self> {
        let value = kind.parameter().and_then(|p| p.as_constant());
        Some(match kind {
            GateKind::X => Self::x(),
            GateKind::Y => Self::y(),
            GateKind::Z => Self::z(),
            GateKind::H => Self::h(),
            GateKind::S => Self::diag(PI / 2.0),
            GateKind::Sdg => Self::diag(-PI / 2.0),
            GateKind::T => Self::diag(PI / 4.0),
            GateKind::Tdg => Self::diag(-PI / 4.0),
            GateKind::Rx(_) => Self::rx(value?),
            GateKind::Ry(_) => Self::ry(value?),
            GateKind::Rz(_) => Self::rz(value?),
            GateKind::Phase(_) => Self::diag(value?),
            GateKind::Power { base, .. } => {
                let zt = Self::diag(PI * value?);
                match base {
                    PowerBase::Z => zt,
                    PowerBase::X => Self::h().mul(&zt).mul(&Self::h()),
                    PowerBase::Y => {
                        let xt = Self::h().mul(&zt).mul(&Self::h());
                        Self::diag(PI / 2.0).mul(&xt).mul(&Self::diag(-PI / 2.0))
                    }
                    PowerBase::H => Self::ry(PI / 4.0).mul(&zt).mul(&Self::ry(-PI / 4.0)),
                }
            }
            GateKind::Swap | GateKind::ExpPauli { .. } | GateKind::Trotterized { .. } => {
                return None;
            }
        })
    }

    /// Check equality up to a global phase.
    pub(crate) fn approx_eq_up_to_phase(&self, other: &Self, tol: f64) -> bool {
        let pivot = (0..4)
            .max_by(|&i, &j| self.data[i].norm().total_cmp(&self.data[j].norm()))
            .unwrap_or(0);
        if other.data[pivot].norm() < tol {
            return false;
        }
        let phase = self.data[pivot] / other.data[pivot];
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - phase * b).norm() < tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_y_is_i_x_z() {
        let xz = Unitary2x2::x().mul(&Unitary2x2::z());
        assert!(Unitary2x2::y().approx_eq_up_to_phase(&xz, TOL));
    }

    #[test]
    fn test_phase_is_rz_up_to_phase() {
        let p = Unitary2x2::for_kind(&GateKind::Phase(0.37.into())).unwrap();
        assert!(p.approx_eq_up_to_phase(&Unitary2x2::rz(0.37), TOL));
    }

    #[test]
    fn test_integer_powers() {
        let z1 = Unitary2x2::for_kind(&GateKind::Power {
            base: PowerBase::Z,
            exponent: 1.0.into(),
        })
        .unwrap();
        assert!(z1.approx_eq_up_to_phase(&Unitary2x2::z(), TOL));

        for (base, expected) in [
            (PowerBase::X, Unitary2x2::x()),
            (PowerBase::Y, Unitary2x2::y()),
            (PowerBase::H, Unitary2x2::h()),
        ] {
            let m = Unitary2x2::for_kind(&GateKind::Power {
                base,
                exponent: 1.0.into(),
            })
            .unwrap();
            assert!(m.approx_eq_up_to_phase(&expected, TOL), "{base:?}");
        }
    }

    #[test]
    fn test_symbolic_has_no_matrix() {
        assert!(Unitary2x2::for_kind(&GateKind::Rx("a".into())).is_none());
    }
}
