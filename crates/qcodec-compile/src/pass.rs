//! Pass trait for gate-local rewrites.

use qcodec_ir::{Circuit, Gate};

use crate::config::CompilerConfig;
use crate::error::{CompileError, CompileResult};

/// A compilation pass that rewrites gates one at a time.
///
/// Every pass in qcodec is local: it looks at a single gate and either keeps
/// it or replaces it by an equivalent sequence. The default [`run`](Pass::run)
/// walks the circuit once in order and splices the replacements in place.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &'static str;

    /// Check if the capability flag for this pass is set.
    fn enabled(&self, config: &CompilerConfig) -> bool;

    /// Rewrite one gate.
    ///
    /// Returns `None` to keep the gate unchanged.
    fn rewrite(&self, gate: &Gate, config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>>;

    /// Run the pass over every gate of `circuit`.
    fn run(&self, circuit: Circuit, config: &CompilerConfig) -> CompileResult<Circuit> {
        let mut output = Circuit::empty().with_qubits(circuit.declared_qubits());
        for gate in circuit {
            let replacement =
                self.rewrite(&gate, config)
                    .map_err(|source| CompileError::PassFailed {
                        pass: self.name(),
                        gate: gate.to_string(),
                        source: Box::new(source),
                    })?;
            output = match replacement {
                Some(gates) => gates.into_iter().fold(output, Circuit::append),
                None => output.append(gate),
            };
        }
        Ok(output)
    }
}
