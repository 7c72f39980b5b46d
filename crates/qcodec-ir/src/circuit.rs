//! Circuits as ordered compositions of gates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::IrResult;
use crate::gate::{Gate, GateKind, Pauli, PowerBase};
use crate::parameter::Parameter;
use crate::qubit::QubitId;

/// A quantum circuit.
///
/// A circuit is an ordered sequence of gates plus an optional declared
/// register width. It is built only by ordered composition: every method
/// that adds gates consumes the circuit and returns the extended value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Gates in application order.
    gates: Vec<Gate>,
    /// Register width declared independently of the gates (e.g. by a `qreg`).
    #[serde(default)]
    declared_qubits: u32,
}

impl Circuit {
    /// Create a circuit with no gates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return this circuit with a declared width of at least `num_qubits`.
    #[must_use]
    pub fn with_qubits(mut self, num_qubits: u32) -> Self {
        self.declared_qubits = self.declared_qubits.max(num_qubits);
        self
    }

    /// Append one gate after all existing gates.
    #[must_use]
    pub fn append(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    /// Append all gates of `other` after the gates of this circuit.
    #[must_use]
    pub fn compose(mut self, other: Circuit) -> Self {
        self.gates.extend(other.gates);
        self.declared_qubits = self.declared_qubits.max(other.declared_qubits);
        self
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Append a gate built from its parts.
    pub fn gate(
        self,
        kind: GateKind,
        targets: impl IntoIterator<Item = QubitId>,
        controls: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<Self> {
        Ok(self.append(Gate::new(kind, targets, controls)?))
    }

    /// Append `kind` on `target` controlled by `controls`.
    pub fn controlled(
        self,
        kind: GateKind,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<Self> {
        Ok(self.append(Gate::controlled(kind, controls, target)?))
    }

    /// Apply Pauli-X gate.
    pub fn x(self, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::X, [qubit], [])
    }

    /// Apply Pauli-Y gate.
    pub fn y(self, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Y, [qubit], [])
    }

    /// Apply Pauli-Z gate.
    pub fn z(self, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Z, [qubit], [])
    }

    /// Apply Hadamard gate.
    pub fn h(self, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::H, [qubit], [])
    }

    /// Apply S gate.
    pub fn s(self, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::S, [qubit], [])
    }

    /// Apply T gate.
    pub fn t(self, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::T, [qubit], [])
    }

    /// Apply Rx rotation.
    pub fn rx(self, theta: impl Into<Parameter>, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Rx(theta.into()), [qubit], [])
    }

    /// Apply Ry rotation.
    pub fn ry(self, theta: impl Into<Parameter>, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Ry(theta.into()), [qubit], [])
    }

    /// Apply Rz rotation.
    pub fn rz(self, theta: impl Into<Parameter>, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Rz(theta.into()), [qubit], [])
    }

    /// Apply phase gate.
    pub fn phase(self, lambda: impl Into<Parameter>, qubit: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Phase(lambda.into()), [qubit], [])
    }

    /// Apply CNOT gate.
    pub fn cx(self, control: QubitId, target: QubitId) -> IrResult<Self> {
        self.gate(GateKind::X, [target], [control])
    }

    /// Apply controlled-Z gate.
    pub fn cz(self, control: QubitId, target: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Z, [target], [control])
    }

    /// Apply Toffoli gate.
    pub fn ccx(self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<Self> {
        self.gate(GateKind::X, [target], [c1, c2])
    }

    /// Apply SWAP gate.
    pub fn swap(self, q1: QubitId, q2: QubitId) -> IrResult<Self> {
        self.gate(GateKind::Swap, [q1, q2], [])
    }

    /// Apply `base` raised to `exponent`.
    pub fn power(
        self,
        base: PowerBase,
        exponent: impl Into<Parameter>,
        qubit: QubitId,
    ) -> IrResult<Self> {
        self.gate(
            GateKind::Power {
                base,
                exponent: exponent.into(),
            },
            [qubit],
            [],
        )
    }

    /// Apply exp(-i·angle/2·P) for the Pauli string `paulis`.
    pub fn exp_pauli(
        self,
        paulis: impl IntoIterator<Item = (QubitId, Pauli)>,
        angle: impl Into<Parameter>,
    ) -> IrResult<Self> {
        let (targets, paulis): (Vec<QubitId>, Vec<Pauli>) = paulis.into_iter().unzip();
        self.gate(
            GateKind::ExpPauli {
                paulis,
                angle: angle.into(),
            },
            targets,
            [],
        )
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Iterate over the gates in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Set of qubits referenced by any gate.
    pub fn qubits(&self) -> BTreeSet<QubitId> {
        self.gates.iter().flat_map(Gate::qubits).collect()
    }

    /// Register width declared independently of the gates.
    pub fn declared_qubits(&self) -> u32 {
        self.declared_qubits
    }

    /// Register width: the largest referenced index plus one, or the
    /// declared width if that is larger.
    pub fn num_qubits(&self) -> usize {
        let used = self
            .gates
            .iter()
            .flat_map(Gate::qubits)
            .map(|q| q.index() + 1)
            .max()
            .unwrap_or(0);
        used.max(self.declared_qubits as usize)
    }

    /// Names of all variables referenced by gate parameters.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for gate in &self.gates {
            if let Some(p) = gate.parameter() {
                p.collect_symbols(&mut set);
            }
        }
        set
    }
}

impl std::ops::Add for Circuit {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
            declared_qubits: 0,
        }
    }
}

impl IntoIterator for Circuit {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::empty();
        assert!(circuit.is_empty());
        assert_eq!(circuit.num_qubits(), 0);
        assert!(circuit.qubits().is_empty());
    }

    #[test]
    fn test_num_qubits_is_max_index_plus_one() {
        let circuit = Circuit::empty()
            .x(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(3))
            .unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(
            circuit.qubits().into_iter().collect::<Vec<_>>(),
            vec![QubitId(0), QubitId(3)]
        );
    }

    #[test]
    fn test_declared_width() {
        let circuit = Circuit::empty().with_qubits(5).x(QubitId(1)).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.declared_qubits(), 5);

        let wider = circuit.x(QubitId(7)).unwrap();
        assert_eq!(wider.num_qubits(), 8);
    }

    #[test]
    fn test_append_preserves_order() {
        let circuit = Circuit::empty()
            .h(QubitId(0))
            .unwrap()
            .x(QubitId(1))
            .unwrap()
            .h(QubitId(0))
            .unwrap();
        let names: Vec<_> = circuit.iter().map(Gate::name).collect();
        assert_eq!(names, vec!["H", "X", "H"]);
    }

    #[test]
    fn test_compose() {
        let a = Circuit::empty().x(QubitId(0)).unwrap();
        let b = Circuit::empty().with_qubits(3).z(QubitId(1)).unwrap();
        let c = a + b;
        assert_eq!(c.len(), 2);
        assert_eq!(c.gates()[1].name(), "Z");
        assert_eq!(c.num_qubits(), 3);
    }

    #[test]
    fn test_variables() {
        let circuit = Circuit::empty()
            .rx(Parameter::symbol("a"), QubitId(0))
            .unwrap()
            .rz(PI / 2.0, QubitId(0))
            .unwrap()
            .phase(Parameter::symbol("b") + Parameter::symbol("a"), QubitId(1))
            .unwrap();
        assert_eq!(
            circuit.variables().into_iter().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_exp_pauli_builder() {
        let circuit = Circuit::empty()
            .exp_pauli([(QubitId(0), Pauli::X), (QubitId(2), Pauli::Y)], 0.5)
            .unwrap();
        let gate = &circuit.gates()[0];
        assert_eq!(gate.targets(), &[QubitId(0), QubitId(2)]);
        assert!(matches!(gate.kind(), GateKind::ExpPauli { paulis, .. } if paulis == &[Pauli::X, Pauli::Y]));
    }

    #[test]
    fn test_from_iterator() {
        let gates = vec![
            Gate::single(GateKind::X, QubitId(0)).unwrap(),
            Gate::single(GateKind::Y, QubitId(1)).unwrap(),
        ];
        let circuit: Circuit = gates.clone().into_iter().collect();
        assert_eq!(circuit.gates(), gates.as_slice());
    }

    #[test]
    fn test_invalid_gate_propagates() {
        assert!(Circuit::empty().cx(QubitId(1), QubitId(1)).is_err());
    }
}
