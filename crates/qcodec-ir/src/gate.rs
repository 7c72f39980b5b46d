//! Quantum gate types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::parameter::Parameter;
use crate::qubit::QubitId;

/// A single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

/// Base gate of a [`GateKind::Power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerBase {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
}

/// One weighted Pauli string of a Trotterized generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Pauli operator per qubit; qubits not listed carry the identity.
    pub paulis: Vec<(QubitId, Pauli)>,
    /// Real weight of this term in the generator.
    pub coefficient: f64,
}

impl PauliTerm {
    /// Create a weighted Pauli string.
    pub fn new(paulis: impl IntoIterator<Item = (QubitId, Pauli)>, coefficient: f64) -> Self {
        Self {
            paulis: paulis.into_iter().collect(),
            coefficient,
        }
    }
}

/// The internal gate vocabulary.
///
/// The first eleven kinds are primitives that serialize directly. The rest
/// are composites that a basis compiler has to rewrite before export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Rotation around X axis.
    Rx(Parameter),
    /// Rotation around Y axis.
    Ry(Parameter),
    /// Rotation around Z axis.
    Rz(Parameter),

    /// Phase gate diag(1, e^{iλ}).
    Phase(Parameter),
    /// A Pauli or Hadamard gate raised to a real exponent.
    Power {
        /// The gate being exponentiated.
        base: PowerBase,
        /// The exponent.
        exponent: Parameter,
    },
    /// Exchange of the two target qubits.
    Swap,
    /// exp(-i·angle/2·P) for the Pauli string P, one Pauli per target.
    ExpPauli {
        /// Pauli operator for each target, in target order.
        paulis: Vec<Pauli>,
        /// Rotation angle.
        angle: Parameter,
    },
    /// exp(-i·angle/2·Σ c_k P_k), to be approximated by Trotter steps.
    Trotterized {
        /// Weighted Pauli strings of the generator.
        terms: Vec<PauliTerm>,
        /// Rotation angle.
        angle: Parameter,
        /// Number of Trotter steps.
        steps: u32,
    },
}

impl GateKind {
    /// Canonical identifier of this kind.
    ///
    /// Names are compared case-insensitively at the text boundary.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::H => "H",
            GateKind::S => "S",
            GateKind::Sdg => "Sdg",
            GateKind::T => "T",
            GateKind::Tdg => "Tdg",
            GateKind::Rx(_) => "Rx",
            GateKind::Ry(_) => "Ry",
            GateKind::Rz(_) => "Rz",
            GateKind::Phase(_) => "Phase",
            GateKind::Power { .. } => "Power",
            GateKind::Swap => "Swap",
            GateKind::ExpPauli { .. } => "ExpPauli",
            GateKind::Trotterized { .. } => "Trotterized",
        }
    }

    /// Check if this kind belongs to the serializable primitive vocabulary.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            GateKind::X
                | GateKind::Y
                | GateKind::Z
                | GateKind::H
                | GateKind::S
                | GateKind::Sdg
                | GateKind::T
                | GateKind::Tdg
                | GateKind::Rx(_)
                | GateKind::Ry(_)
                | GateKind::Rz(_)
        )
    }

    /// Check if this kind acts independently on every one of its targets.
    pub fn is_single_qubit(&self) -> bool {
        !matches!(
            self,
            GateKind::Swap | GateKind::ExpPauli { .. } | GateKind::Trotterized { .. }
        )
    }

    /// The real parameter of this kind, if it has one.
    pub fn parameter(&self) -> Option<&Parameter> {
        match self {
            GateKind::Rx(p) | GateKind::Ry(p) | GateKind::Rz(p) | GateKind::Phase(p) => Some(p),
            GateKind::Power { exponent, .. } => Some(exponent),
            GateKind::ExpPauli { angle, .. } | GateKind::Trotterized { angle, .. } => Some(angle),
            _ => None,
        }
    }
}

/// A gate applied to target qubits, conditioned on control qubits.
///
/// Gates are immutable values; the constructors enforce that targets and
/// controls are disjoint and free of duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GateRecord", into = "GateRecord")]
pub struct Gate {
    kind: GateKind,
    targets: Vec<QubitId>,
    controls: Vec<QubitId>,
}

impl Gate {
    /// Create a gate, validating its qubit operands.
    pub fn new(
        kind: GateKind,
        targets: impl IntoIterator<Item = QubitId>,
        controls: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<Self> {
        let gate = Self {
            kind,
            targets: targets.into_iter().collect(),
            controls: controls.into_iter().collect(),
        };
        gate.validate()?;
        Ok(gate)
    }

    /// Create an uncontrolled gate on one target.
    pub fn single(kind: GateKind, target: QubitId) -> IrResult<Self> {
        Self::new(kind, [target], [])
    }

    /// Create a gate on one target with the given controls.
    pub fn controlled(
        kind: GateKind,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<Self> {
        Self::new(kind, [target], controls)
    }

    /// Create a Trotterized gate whose targets are the qubits of its terms.
    pub fn trotterized(
        terms: Vec<PauliTerm>,
        angle: impl Into<Parameter>,
        steps: u32,
        controls: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<Self> {
        let targets = term_qubits(&terms);
        Self::new(
            GateKind::Trotterized {
                terms,
                angle: angle.into(),
                steps,
            },
            targets,
            controls,
        )
    }

    fn validate(&self) -> IrResult<()> {
        let gate_name = self.kind.name();
        if self.targets.is_empty() {
            return Err(IrError::EmptyTargets {
                gate_name: gate_name.into(),
            });
        }

        let mut seen = BTreeSet::new();
        for &qubit in &self.targets {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.into(),
                });
            }
        }
        let mut seen_controls = BTreeSet::new();
        for &qubit in &self.controls {
            if seen.contains(&qubit) {
                return Err(IrError::ControlTargetOverlap {
                    qubit,
                    gate_name: gate_name.into(),
                });
            }
            if !seen_controls.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.into(),
                });
            }
        }

        match &self.kind {
            GateKind::Swap if self.targets.len() != 2 => Err(IrError::ArityMismatch {
                gate_name: gate_name.into(),
                expected: 2,
                got: self.targets.len(),
            }),
            GateKind::ExpPauli { paulis, .. } if paulis.len() != self.targets.len() => {
                Err(IrError::ArityMismatch {
                    gate_name: gate_name.into(),
                    expected: paulis.len(),
                    got: self.targets.len(),
                })
            }
            GateKind::Trotterized { terms, steps, .. } => {
                if *steps == 0 {
                    return Err(IrError::InvalidGate {
                        gate_name: gate_name.into(),
                        reason: "at least one Trotter step is required".into(),
                    });
                }
                let expected = term_qubits(terms);
                let got: BTreeSet<QubitId> = self.targets.iter().copied().collect();
                if expected.iter().copied().collect::<BTreeSet<_>>() != got {
                    return Err(IrError::ArityMismatch {
                        gate_name: gate_name.into(),
                        expected: expected.len(),
                        got: self.targets.len(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// The gate kind.
    #[inline]
    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    /// Canonical identifier of the gate kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Target qubits, in order.
    #[inline]
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Control qubits, in insertion order.
    #[inline]
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    /// The real parameter of the gate, if any.
    pub fn parameter(&self) -> Option<&Parameter> {
        self.kind.parameter()
    }

    /// Check if the gate has at least one control.
    pub fn is_controlled(&self) -> bool {
        !self.controls.is_empty()
    }

    /// All qubits touched by the gate: controls first, then targets.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().chain(self.targets.iter()).copied()
    }

    /// Names of the variables the gate parameter refers to.
    pub fn variables(&self) -> BTreeSet<String> {
        self.parameter().map(Parameter::symbols).unwrap_or_default()
    }

    /// Return this gate with `extra` appended to its controls.
    pub fn with_controls(&self, extra: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        Self::new(
            self.kind.clone(),
            self.targets.iter().copied(),
            self.controls.iter().copied().chain(extra),
        )
    }

    /// Return a gate of another kind on the same qubits.
    pub fn with_kind(&self, kind: GateKind) -> IrResult<Self> {
        Self::new(kind, self.targets.iter().copied(), self.controls.iter().copied())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(p) = self.parameter() {
            write!(f, "({p})")?;
        }
        write!(f, "(target={}", format_qubits(&self.targets))?;
        if self.is_controlled() {
            write!(f, ", control={}", format_qubits(&self.controls))?;
        }
        write!(f, ")")
    }
}

fn format_qubits(qubits: &[QubitId]) -> String {
    let names: Vec<String> = qubits.iter().map(ToString::to_string).collect();
    format!("({})", names.join(", "))
}

/// Qubits of a Trotterized generator, in first-appearance order.
fn term_qubits(terms: &[PauliTerm]) -> Vec<QubitId> {
    let mut seen = BTreeSet::new();
    terms
        .iter()
        .flat_map(|term| term.paulis.iter().map(|(q, _)| *q))
        .filter(|q| seen.insert(*q))
        .collect()
}

/// Serialized form of a [`Gate`]; deserialization re-runs validation.
#[derive(Serialize, Deserialize)]
struct GateRecord {
    kind: GateKind,
    targets: Vec<QubitId>,
    #[serde(default)]
    controls: Vec<QubitId>,
}

impl TryFrom<GateRecord> for Gate {
    type Error = IrError;

    fn try_from(record: GateRecord) -> IrResult<Self> {
        Gate::new(record.kind, record.targets, record.controls)
    }
}

impl From<Gate> for GateRecord {
    fn from(gate: Gate) -> Self {
        Self {
            kind: gate.kind,
            targets: gate.targets,
            controls: gate.controls,
        }
    }
}
