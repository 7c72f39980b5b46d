//! Error types for the IR crate.

use std::collections::BTreeSet;

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate was built without any target qubit.
    #[error("Gate '{gate_name}' requires at least one target qubit")]
    EmptyTargets {
        /// Name of the gate.
        gate_name: String,
    },

    /// The same qubit appears twice among targets or among controls.
    #[error("Duplicate qubit {qubit} in gate '{gate_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },

    /// A qubit is used both as control and as target.
    #[error("Qubit {qubit} is both control and target of gate '{gate_name}'")]
    ControlTargetOverlap {
        /// The overlapping qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },

    /// Gate requires a different number of targets.
    #[error("Gate '{gate_name}' requires {expected} targets, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of targets.
        expected: usize,
        /// Actual number of targets provided.
        got: usize,
    },

    /// Gate operands are inconsistent with its kind.
    #[error("Invalid gate '{gate_name}': {reason}")]
    InvalidGate {
        /// Name of the gate.
        gate_name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A parameter refers to variables that have no value.
    #[error("Unresolved parameter variables: {}", format_symbols(.0))]
    UnresolvedParameter(BTreeSet<String>),

    /// A parameter expression divides by zero.
    #[error("Division by zero while evaluating parameter '{0}'")]
    DivisionByZero(String),
}

/// Render a symbol set as `{a, b}`.
pub(crate) fn format_symbols(symbols: &BTreeSet<String>) -> String {
    let names: Vec<&str> = symbols.iter().map(String::as_str).collect();
    format!("{{{}}}", names.join(", "))
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
