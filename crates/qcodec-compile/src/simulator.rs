//! Dense state-vector simulation for checking rewrites.
//!
//! Qubit `q` is bit `q` of the basis-state index.

use num_complex::Complex64;

use qcodec_ir::{Circuit, Gate, GateKind, Pauli};

use crate::unitary::Unitary2x2;

const TOL: f64 = 1e-9;

pub(crate) struct StateVector {
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// A reproducible pseudo-random normalized state.
    pub(crate) fn seeded(num_qubits: usize, seed: u64) -> Self {
        let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let mut next = || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        };
        let mut amplitudes: Vec<Complex64> = (0..1usize << num_qubits)
            .map(|_| Complex64::new(next(), next()))
            .collect();
        let norm = amplitudes.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt();
        for a in &mut amplitudes {
            *a /= norm;
        }
        Self { amplitudes }
    }

    fn control_mask(gate: &Gate) -> usize {
        gate.controls().iter().fold(0, |m, c| m | (1 << c.index()))
    }

    pub(crate) fn apply(&mut self, gate: &Gate) {
        let cmask = Self::control_mask(gate);
        match gate.kind() {
            GateKind::Swap => {
                let (a, b) = (gate.targets()[0].index(), gate.targets()[1].index());
                for i in 0..self.amplitudes.len() {
                    if i & cmask == cmask && (i >> a) & 1 == 1 && (i >> b) & 1 == 0 {
                        let j = i ^ (1 << a) ^ (1 << b);
                        self.amplitudes.swap(i, j);
                    }
                }
            }
            GateKind::ExpPauli { paulis, angle } => {
                let angle = angle.as_constant().expect("constant angle");
                self.apply_exp_pauli(gate, paulis, angle, cmask);
            }
            GateKind::Trotterized { .. } => panic!("Trotterized gates are not simulated"),
            kind => {
                let m = Unitary2x2::for_kind(kind).expect("constant single-qubit gate");
                for target in gate.targets() {
                    let bit = 1 << target.index();
                    for i in 0..self.amplitudes.len() {
                        if i & cmask == cmask && i & bit == 0 {
                            let j = i | bit;
                            let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
                            self.amplitudes[i] = m.data[0] * a + m.data[1] * b;
                            self.amplitudes[j] = m.data[2] * a + m.data[3] * b;
                        }
                    }
                }
            }
        }
    }

    fn apply_exp_pauli(&mut self, gate: &Gate, paulis: &[Pauli], angle: f64, cmask: usize) {
        let flip = gate
            .targets()
            .iter()
            .zip(paulis)
            .filter(|(_, p)| **p != Pauli::Z)
            .fold(0usize, |m, (q, _)| m | (1 << q.index()));

        // P|ψ⟩ for the Pauli string P
        let mut applied = vec![Complex64::new(0.0, 0.0); self.amplitudes.len()];
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let mut factor = Complex64::new(1.0, 0.0);
            for (q, p) in gate.targets().iter().zip(paulis) {
                let set = (i >> q.index()) & 1 == 1;
                factor *= match (p, set) {
                    (Pauli::X, _) => Complex64::new(1.0, 0.0),
                    (Pauli::Y, false) => Complex64::new(0.0, 1.0),
                    (Pauli::Y, true) => Complex64::new(0.0, -1.0),
                    (Pauli::Z, false) => Complex64::new(1.0, 0.0),
                    (Pauli::Z, true) => Complex64::new(-1.0, 0.0),
                };
            }
            applied[i ^ flip] += factor * amp;
        }

        let (s, c) = (angle / 2.0).sin_cos();
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & cmask == cmask {
                *amp = *amp * c - Complex64::new(0.0, s) * applied[i];
            }
        }
    }

    pub(crate) fn run(mut self, circuit: &Circuit) -> Self {
        for gate in circuit {
            self.apply(gate);
        }
        self
    }

    pub(crate) fn equivalent_up_to_phase(&self, other: &Self) -> bool {
        let pivot = (0..self.amplitudes.len())
            .max_by(|&i, &j| {
                self.amplitudes[i]
                    .norm()
                    .total_cmp(&self.amplitudes[j].norm())
            })
            .unwrap_or(0);
        if other.amplitudes[pivot].norm() < TOL {
            return false;
        }
        let phase = self.amplitudes[pivot] / other.amplitudes[pivot];
        (phase.norm() - 1.0).abs() < TOL
            && self
                .amplitudes
                .iter()
                .zip(&other.amplitudes)
                .all(|(a, b)| (a - phase * b).norm() < TOL)
    }
}

/// Assert that two circuits act identically up to a global phase.
///
/// Checks the action on a few random states, which a single global phase
/// must explain for all of them at once; the states are compared pairwise
/// and also through their superposition.
pub(crate) fn assert_equivalent(expected: &Circuit, actual: &Circuit) {
    let n = expected.num_qubits().max(actual.num_qubits());
    let mut phases = Vec::new();
    for seed in 1..=3 {
        let lhs = StateVector::seeded(n, seed).run(expected);
        let rhs = StateVector::seeded(n, seed).run(actual);
        assert!(
            lhs.equivalent_up_to_phase(&rhs),
            "circuits differ on seed {seed}:\nexpected {expected:?}\nactual {actual:?}"
        );
        let pivot = lhs
            .amplitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
            .map_or(0, |(i, _)| i);
        phases.push(lhs.amplitudes[pivot] / rhs.amplitudes[pivot]);
    }
    for phase in &phases[1..] {
        assert!(
            (phase - phases[0]).norm() < 1e-7,
            "circuits differ by a state-dependent phase"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcodec_ir::QubitId;

    #[test]
    fn test_seeded_is_normalized() {
        let s = StateVector::seeded(3, 7);
        let norm: f64 = s.amplitudes.iter().map(Complex64::norm_sqr).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exp_pauli_single_z_is_rz() {
        let a = Circuit::empty()
            .exp_pauli([(QubitId(0), Pauli::Z)], 0.7)
            .unwrap();
        let b = Circuit::empty().rz(0.7, QubitId(0)).unwrap();
        assert_equivalent(&a, &b);
    }

    #[test]
    fn test_exp_pauli_single_y_is_ry() {
        let a = Circuit::empty()
            .exp_pauli([(QubitId(1), Pauli::Y)], 1.3)
            .unwrap();
        let b = Circuit::empty().ry(1.3, QubitId(1)).unwrap();
        assert_equivalent(&a, &b);
    }

    #[test]
    fn test_swap_is_three_cnots() {
        let a = Circuit::empty().swap(QubitId(0), QubitId(2)).unwrap();
        let b = Circuit::empty()
            .cx(QubitId(0), QubitId(2))
            .unwrap()
            .cx(QubitId(2), QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(2))
            .unwrap();
        assert_equivalent(&a, &b);
    }

    #[test]
    #[should_panic(expected = "circuits differ")]
    fn test_detects_difference() {
        let a = Circuit::empty().x(QubitId(0)).unwrap();
        let b = Circuit::empty().z(QubitId(0)).unwrap();
        assert_equivalent(&a, &b);
    }

    #[test]
    #[should_panic(expected = "circuits differ")]
    fn test_detects_relative_phase() {
        let a = Circuit::empty().s(QubitId(0)).unwrap();
        let b = Circuit::empty().z(QubitId(0)).unwrap();
        assert_equivalent(&a, &b);
    }
}
