//! Rewrites for ZX-calculus targets, which have no Y axis.

use qcodec_ir::{Gate, GateKind};

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{bare, single_target};

/// Rewrites Y as X·Z and controlled Y as S-conjugated controlled X.
pub struct YAsXz;

impl Pass for YAsXz {
    fn name(&self) -> &'static str {
        "YAsXz"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.y_gate
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if *gate.kind() != GateKind::Y {
            return Ok(None);
        }
        let Some(target) = single_target(gate) else {
            return Ok(None);
        };
        let out = if gate.is_controlled() {
            vec![
                bare(GateKind::Sdg, target)?,
                gate.with_kind(GateKind::X)?,
                bare(GateKind::S, target)?,
            ]
        } else {
            vec![bare(GateKind::Z, target)?, bare(GateKind::X, target)?]
        };
        Ok(Some(out))
    }
}

/// Rewrites Ry(θ) as S-conjugated Rx(θ), keeping the controls on Rx.
pub struct RyAsXz;

impl Pass for RyAsXz {
    fn name(&self) -> &'static str {
        "RyAsXz"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.ry_gate
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::Ry(theta) = gate.kind() else {
            return Ok(None);
        };
        let Some(target) = single_target(gate) else {
            return Ok(None);
        };
        Ok(Some(vec![
            bare(GateKind::Sdg, target)?,
            gate.with_kind(GateKind::Rx(theta.clone()))?,
            bare(GateKind::S, target)?,
        ]))
    }
}
