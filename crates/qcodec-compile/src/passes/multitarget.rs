//! Splitting of multi-target gates.

use qcodec_ir::Gate;

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;

/// Splits a single-qubit kind applied to several targets into one gate per
/// target, each carrying the original controls.
pub struct MultiTarget;

impl Pass for MultiTarget {
    fn name(&self) -> &'static str {
        "MultiTarget"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.multitarget
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if !gate.kind().is_single_qubit() || gate.targets().len() < 2 {
            return Ok(None);
        }
        let split = gate
            .targets()
            .iter()
            .map(|&t| Gate::new(gate.kind().clone(), [t], gate.controls().iter().copied()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(split))
    }
}
