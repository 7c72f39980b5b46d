//! Error types for the compilation crate.

use qcodec_ir::IrError;
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// A pass could not rewrite a gate.
    #[error("Pass '{pass}' failed on gate {gate}: {source}")]
    PassFailed {
        /// Name of the failing pass.
        pass: &'static str,
        /// The gate being rewritten.
        gate: String,
        /// Underlying cause.
        #[source]
        source: Box<CompileError>,
    },
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
