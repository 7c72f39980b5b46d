//! Rewrites of Pauli-string exponentials.

use std::f64::consts::FRAC_PI_2;

use qcodec_ir::{Gate, GateKind, Pauli, QubitId};

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{bare, on};

/// Expands a Trotterized generator into `steps` repetitions of its terms,
/// each term exponentiated with angle `angle · coefficient / steps`.
pub struct Trotterize;

impl Pass for Trotterize {
    fn name(&self) -> &'static str {
        "Trotterize"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.trotterized
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::Trotterized {
            terms,
            angle,
            steps,
        } = gate.kind()
        else {
            return Ok(None);
        };

        let mut step = Vec::with_capacity(terms.len());
        for term in terms.iter().filter(|t| !t.paulis.is_empty()) {
            let (targets, paulis): (Vec<QubitId>, Vec<Pauli>) = term.paulis.iter().copied().unzip();
            let kind = GateKind::ExpPauli {
                paulis,
                angle: angle.scaled(term.coefficient / f64::from(*steps)),
            };
            step.push(Gate::new(kind, targets, gate.controls().iter().copied())?);
        }

        let expanded = std::iter::repeat_n(step, *steps as usize).flatten().collect();
        Ok(Some(expanded))
    }
}

/// Rewrites a one-qubit Pauli exponential into the matching rotation.
pub struct GeneralizedRotation;

impl Pass for GeneralizedRotation {
    fn name(&self) -> &'static str {
        "GeneralizedRotation"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.generalized_rotation
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::ExpPauli { paulis, angle } = gate.kind() else {
            return Ok(None);
        };
        let [pauli] = paulis.as_slice() else {
            return Ok(None);
        };
        let kind = match pauli {
            Pauli::X => GateKind::Rx(angle.clone()),
            Pauli::Y => GateKind::Ry(angle.clone()),
            Pauli::Z => GateKind::Rz(angle.clone()),
        };
        Ok(Some(vec![gate.with_kind(kind)?]))
    }
}

/// Decomposes exp(-i·θ/2·P) into a basis change onto Z, a CNOT parity
/// ladder and a single Rz carrying the controls.
///
/// Uncontrolled gates need `exponential_pauli`, controlled ones need
/// `controlled_exponential_pauli`.
pub struct ExponentialPauli;

impl ExponentialPauli {
    fn basis_change(qubit: QubitId, pauli: Pauli, into_z: bool) -> CompileResult<Option<Gate>> {
        let kind = match pauli {
            Pauli::X => GateKind::H,
            Pauli::Y if into_z => GateKind::Rx(FRAC_PI_2.into()),
            Pauli::Y => GateKind::Rx((-FRAC_PI_2).into()),
            Pauli::Z => return Ok(None),
        };
        Ok(Some(bare(kind, qubit)?))
    }
}

impl Pass for ExponentialPauli {
    fn name(&self) -> &'static str {
        "ExponentialPauli"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.exponential_pauli || config.controlled_exponential_pauli
    }

    fn rewrite(&self, gate: &Gate, config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::ExpPauli { paulis, angle } = gate.kind() else {
            return Ok(None);
        };
        let allowed = if gate.is_controlled() {
            config.controlled_exponential_pauli
        } else {
            config.exponential_pauli
        };
        if !allowed {
            return Ok(None);
        }

        let qubits = gate.targets();
        let mut ladder = Vec::with_capacity(qubits.len().saturating_sub(1));
        for pair in qubits.windows(2) {
            ladder.push(on(GateKind::X, pair[1], [pair[0]])?);
        }

        let mut out = Vec::new();
        for (&q, &p) in qubits.iter().zip(paulis) {
            out.extend(Self::basis_change(q, p, true)?);
        }
        out.extend(ladder.iter().cloned());
        if let Some(&last) = qubits.last() {
            out.push(on(
                GateKind::Rz(angle.clone()),
                last,
                gate.controls().iter().copied(),
            )?);
        }
        out.extend(ladder.into_iter().rev());
        for (&q, &p) in qubits.iter().zip(paulis) {
            out.extend(Self::basis_change(q, p, false)?);
        }
        Ok(Some(out))
    }
}
