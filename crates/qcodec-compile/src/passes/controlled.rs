//! Rewrites that remove or reduce controls.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use qcodec_ir::{Gate, GateKind, Parameter, QubitId};

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{bare, on, single_target};

/// Expands SWAP into three CNOTs. Controls are attached to the middle CNOT
/// only, which yields a Fredkin gate for one control.
pub struct SwapExpansion;

impl Pass for SwapExpansion {
    fn name(&self) -> &'static str {
        "SwapExpansion"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.swap
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if *gate.kind() != GateKind::Swap {
            return Ok(None);
        }
        let &[a, b] = gate.targets() else {
            return Ok(None);
        };
        let outer = on(GateKind::X, a, [b])?;
        let middle = on(
            GateKind::X,
            b,
            gate.controls().iter().copied().chain([a]),
        )?;
        Ok(Some(vec![outer.clone(), middle, outer]))
    }
}

/// Rewrites X with two or more controls as H-conjugated multi-controlled
/// phase of π.
pub struct MultiControl;

impl Pass for MultiControl {
    fn name(&self) -> &'static str {
        "MultiControl"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.multicontrol
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if *gate.kind() != GateKind::X || gate.controls().len() < 2 {
            return Ok(None);
        }
        let Some(target) = single_target(gate) else {
            return Ok(None);
        };
        Ok(Some(vec![
            bare(GateKind::H, target)?,
            gate.with_kind(GateKind::Phase(Parameter::pi()))?,
            bare(GateKind::H, target)?,
        ]))
    }
}

/// Decomposes controlled phase gates, including controlled S, Sdg, T and
/// Tdg, into CNOTs and uncontrolled phases.
///
/// One control is peeled off at a time:
/// `C_{K,c}P(λ) = C_K P(λ/2)_c · C_{K,c}X · C_K P(-λ/2)_t · C_{K,c}X · C_K P(λ/2)_t`,
/// and the same rule is applied to the remaining `C_K P` gates.
pub struct ControlledPhase;

impl ControlledPhase {
    fn lambda(kind: &GateKind) -> Option<Parameter> {
        Some(match kind {
            GateKind::Phase(p) => p.clone(),
            GateKind::S => FRAC_PI_2.into(),
            GateKind::Sdg => (-FRAC_PI_2).into(),
            GateKind::T => FRAC_PI_4.into(),
            GateKind::Tdg => (-FRAC_PI_4).into(),
            _ => return None,
        })
    }

    fn decompose(
        lambda: &Parameter,
        controls: &[QubitId],
        target: QubitId,
        out: &mut Vec<Gate>,
    ) -> CompileResult<()> {
        let Some((&last, rest)) = controls.split_last() else {
            out.push(bare(GateKind::Phase(lambda.clone()), target)?);
            return Ok(());
        };
        let half = lambda.scaled(0.5);
        let cnot = on(GateKind::X, target, controls.iter().copied())?;

        Self::decompose(&half, rest, last, out)?;
        out.push(cnot.clone());
        Self::decompose(&lambda.scaled(-0.5), rest, target, out)?;
        out.push(cnot);
        Self::decompose(&half, rest, target, out)
    }
}

impl Pass for ControlledPhase {
    fn name(&self) -> &'static str {
        "ControlledPhase"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.controlled_phase
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if !gate.is_controlled() {
            return Ok(None);
        }
        let (Some(lambda), Some(target)) = (Self::lambda(gate.kind()), single_target(gate)) else {
            return Ok(None);
        };
        let mut out = Vec::new();
        Self::decompose(&lambda, gate.controls(), target, &mut out)?;
        Ok(Some(out))
    }
}

/// Decomposes controlled Rx, Ry and Rz into uncontrolled half-angle
/// rotations interleaved with controlled X.
///
/// Symbolic angles are left alone in gradient mode.
pub struct ControlledRotation;

impl ControlledRotation {
    fn z_or_y(
        rotation: fn(Parameter) -> GateKind,
        theta: &Parameter,
        controls: &[QubitId],
        target: QubitId,
    ) -> CompileResult<Vec<Gate>> {
        let cnot = on(GateKind::X, target, controls.iter().copied())?;
        Ok(vec![
            bare(rotation(theta.scaled(0.5)), target)?,
            cnot.clone(),
            bare(rotation(theta.scaled(-0.5)), target)?,
            cnot,
        ])
    }
}

impl Pass for ControlledRotation {
    fn name(&self) -> &'static str {
        "ControlledRotation"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.controlled_rotation
    }

    fn rewrite(&self, gate: &Gate, config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let Some(target) = single_target(gate).filter(|_| gate.is_controlled()) else {
            return Ok(None);
        };
        let controls = gate.controls();
        let out = match gate.kind() {
            GateKind::Rx(theta) | GateKind::Ry(theta) | GateKind::Rz(theta)
                if config.gradient_mode && theta.is_symbolic() =>
            {
                return Ok(None);
            }
            GateKind::Rz(theta) => Self::z_or_y(GateKind::Rz, theta, controls, target)?,
            GateKind::Ry(theta) => Self::z_or_y(GateKind::Ry, theta, controls, target)?,
            GateKind::Rx(theta) => {
                let mut out = vec![bare(GateKind::H, target)?];
                out.extend(Self::z_or_y(GateKind::Rz, theta, controls, target)?);
                out.push(bare(GateKind::H, target)?);
                out
            }
            _ => return Ok(None),
        };
        Ok(Some(out))
    }
}

/// Rewrites doubly-controlled Z and Y as conjugated Toffoli gates.
pub struct CcMax;

impl Pass for CcMax {
    fn name(&self) -> &'static str {
        "CcMax"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.cc_max
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if gate.controls().len() != 2 {
            return Ok(None);
        }
        let Some(target) = single_target(gate) else {
            return Ok(None);
        };
        let (before, after) = match gate.kind() {
            GateKind::Z => (GateKind::H, GateKind::H),
            GateKind::Y => (GateKind::Sdg, GateKind::S),
            _ => return Ok(None),
        };
        Ok(Some(vec![
            bare(before, target)?,
            gate.with_kind(GateKind::X)?,
            bare(after, target)?,
        ]))
    }
}

/// Expands the Toffoli gate into the standard Clifford+T network of six
/// CNOTs, seven T/Tdg and two H gates.
pub struct ToffoliExpansion;

impl Pass for ToffoliExpansion {
    fn name(&self) -> &'static str {
        "ToffoliExpansion"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.toffoli
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        if *gate.kind() != GateKind::X {
            return Ok(None);
        }
        let (&[a, b], Some(c)) = (gate.controls(), single_target(gate)) else {
            return Ok(None);
        };
        let cx = |control: QubitId, target: QubitId| on(GateKind::X, target, [control]);
        Ok(Some(vec![
            bare(GateKind::H, c)?,
            cx(b, c)?,
            bare(GateKind::Tdg, c)?,
            cx(a, c)?,
            bare(GateKind::T, c)?,
            cx(b, c)?,
            bare(GateKind::Tdg, c)?,
            cx(a, c)?,
            bare(GateKind::T, b)?,
            bare(GateKind::T, c)?,
            bare(GateKind::H, c)?,
            cx(a, b)?,
            bare(GateKind::T, a)?,
            bare(GateKind::Tdg, b)?,
            cx(a, b)?,
        ]))
    }
}
