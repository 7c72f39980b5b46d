//! Error types for the OpenQASM 2.0 codec.

use std::collections::BTreeSet;
use std::path::PathBuf;

use qcodec_compile::CompileError;
use qcodec_ir::IrError;
use thiserror::Error;

/// Errors that can occur while exporting or importing OpenQASM 2.0.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QasmError {
    /// A parametrized circuit was exported without values for its variables.
    #[error("Missing values for variables {}", format_names(.0))]
    MissingVariables(BTreeSet<String>),

    /// A compiled gate has more controls than OpenQASM 2.0 can express.
    #[error("Gate {gate} has {controls} controls; at most 2 are supported")]
    UnsupportedControlArity {
        /// The offending gate.
        gate: String,
        /// Its number of controls.
        controls: usize,
    },

    /// The version or include directive is missing or wrong.
    #[error("Malformed header: expected `{expected}`, found `{found}`")]
    MalformedHeader {
        /// The directive that was required.
        expected: &'static str,
        /// The line found instead.
        found: String,
    },

    /// A statement the importer refuses to interpret.
    #[error("Unsupported operation `{statement}`: {reason}")]
    UnsupportedOperation {
        /// The statement, verbatim.
        statement: String,
        /// Why it was refused.
        reason: &'static str,
    },

    /// A qubit argument does not have the `reg[index]` shape.
    #[error("Cannot parse arguments of `{statement}`: {reason}")]
    ArgumentParseError {
        /// The statement, verbatim.
        statement: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Only OpenQASM 2.0 is supported.
    #[error("Unsupported OpenQASM version '{0}'; only 2.0 is supported")]
    UnsupportedVersion(String),

    /// A gate outside the primitive vocabulary reached the serializer.
    #[error("Gate {0} has no OpenQASM 2.0 form; compile the circuit first")]
    UnsupportedGate(String),

    /// A parameter resolved to NaN or infinity.
    #[error("Parameter of gate {gate} resolved to non-finite value {value}")]
    InvalidParameter {
        /// The offending gate.
        gate: String,
        /// The resolved value.
        value: f64,
    },

    /// A custom gate body contains another brace block.
    #[error("Nested braces in definition of gate '{name}' are not supported")]
    NestedGateDefinition {
        /// Name of the gate being defined.
        name: String,
    },

    /// A custom gate definition has no closing brace.
    #[error("Definition of gate '{name}' is not terminated by '}}'")]
    UnterminatedGateDefinition {
        /// Name of the gate being defined.
        name: String,
    },

    /// A custom gate definition header cannot be read.
    #[error("Malformed gate definition: `{0}`")]
    MalformedGateDefinition(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// The basis compiler failed.
    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    /// Error from the IR crate.
    #[error("Circuit error: {0}")]
    Ir(#[from] IrError),
}

fn format_names(names: &BTreeSet<String>) -> String {
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    format!("{{{}}}", names.join(", "))
}

/// Result type for codec operations.
pub type QasmResult<T> = Result<T, QasmError>;
