//! The basis compiler contract and its standard pass pipeline.

use tracing::{debug, info, instrument};

use qcodec_ir::Circuit;

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{
    CcMax, ControlledPhase, ControlledRotation, ExponentialPauli, GeneralizedRotation,
    HadamardPower, MultiControl, MultiTarget, PhaseToRz, PhaseToZ, Power, RyAsXz, SwapExpansion,
    ToffoliExpansion, Trotterize, YAsXz,
};

/// Rewrites a circuit into an equivalent one that only uses the gate forms
/// permitted by a [`CompilerConfig`].
///
/// The input is never modified. Implementations must preserve the circuit's
/// unitary up to a global phase.
pub trait BasisCompiler {
    /// Compile `circuit` under the capability policy `config`.
    fn compile(&self, circuit: &Circuit, config: &CompilerConfig) -> CompileResult<Circuit>;
}

/// The default basis compiler: a fixed sequence of local rewrite passes.
pub struct StandardCompiler {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl StandardCompiler {
    /// Create the compiler with the full pass pipeline.
    ///
    /// Order matters: multi-target gates are split first so that every later
    /// pass sees one target, and each pass only produces forms that a later
    /// pass (or the primitive vocabulary) accepts.
    pub fn new() -> Self {
        let passes: Vec<Box<dyn Pass>> = vec![
            Box::new(MultiTarget),
            Box::new(Trotterize),
            Box::new(GeneralizedRotation),
            Box::new(ExponentialPauli),
            Box::new(HadamardPower),
            Box::new(Power),
            Box::new(SwapExpansion),
            Box::new(MultiControl),
            Box::new(PhaseToZ),
            Box::new(ControlledPhase),
            Box::new(ControlledRotation),
            Box::new(CcMax),
            Box::new(ToffoliExpansion),
            Box::new(PhaseToRz),
            Box::new(YAsXz),
            Box::new(RyAsXz),
        ];
        Self { passes }
    }

    /// Names of the passes, in execution order.
    pub fn pass_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.passes.iter().map(|p| p.name())
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the compiler has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for StandardCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl BasisCompiler for StandardCompiler {
    #[instrument(skip(self, circuit, config))]
    fn compile(&self, circuit: &Circuit, config: &CompilerConfig) -> CompileResult<Circuit> {
        info!(
            "Compiling circuit with {} gates on {} qubits",
            circuit.len(),
            circuit.num_qubits()
        );

        let mut current = circuit.clone();
        for pass in &self.passes {
            if pass.enabled(config) {
                debug!("Running pass: {}", pass.name());
                current = pass.run(current, config)?;
                debug!("Pass {} completed, gates: {}", pass.name(), current.len());
            } else {
                debug!("Skipping pass: {}", pass.name());
            }
        }

        info!("Compilation finished with {} gates", current.len());
        Ok(current)
    }
}
