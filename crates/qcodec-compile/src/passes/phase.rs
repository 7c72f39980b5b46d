//! Rewrites of phase gates.

use std::f64::consts::PI;

use qcodec_ir::{Gate, GateKind};

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;

/// Tolerance when recognising a phase of π.
const EPSILON: f64 = 1e-12;

/// Rewrites a constant phase of π into Z, keeping the controls.
pub struct PhaseToZ;

impl Pass for PhaseToZ {
    fn name(&self) -> &'static str {
        "PhaseToZ"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.phase_to_z
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::Phase(lambda) = gate.kind() else {
            return Ok(None);
        };
        match lambda.as_constant() {
            Some(v) if (v - PI).abs() < EPSILON => Ok(Some(vec![gate.with_kind(GateKind::Z)?])),
            _ => Ok(None),
        }
    }
}

/// Rewrites an uncontrolled phase gate into Rz, which differs only by a
/// global phase.
pub struct PhaseToRz;

impl Pass for PhaseToRz {
    fn name(&self) -> &'static str {
        "PhaseToRz"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.phase
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        match gate.kind() {
            GateKind::Phase(lambda) if !gate.is_controlled() => {
                Ok(Some(vec![gate.with_kind(GateKind::Rz(lambda.clone()))?]))
            }
            _ => Ok(None),
        }
    }
}
