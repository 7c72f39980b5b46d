//! Rewrites of fractional gate powers.
//!
//! Powers use the convention `Z^t = diag(1, e^{iπt})`; the other bases are
//! conjugations of it, so a controlled power only needs its controls on the
//! central phase gate.

use std::f64::consts::{FRAC_PI_4, PI};

use qcodec_ir::{Gate, GateKind, PowerBase};

use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{bare, on, single_target};

/// Rewrites `H^t` as `Ry(π/4) · Z^t · Ry(-π/4)`.
pub struct HadamardPower;

impl Pass for HadamardPower {
    fn name(&self) -> &'static str {
        "HadamardPower"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.hadamard_power
    }

    fn rewrite(&self, gate: &Gate, _config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::Power {
            base: PowerBase::H,
            exponent,
        } = gate.kind()
        else {
            return Ok(None);
        };
        let Some(target) = single_target(gate) else {
            return Ok(None);
        };

        let z_power = GateKind::Power {
            base: PowerBase::Z,
            exponent: exponent.clone(),
        };
        Ok(Some(vec![
            bare(GateKind::Ry((-FRAC_PI_4).into()), target)?,
            on(z_power, target, gate.controls().iter().copied())?,
            bare(GateKind::Ry(FRAC_PI_4.into()), target)?,
        ]))
    }
}

/// Rewrites Pauli powers into conjugated phase gates.
///
/// Uncontrolled powers need `power`, controlled ones `controlled_power`.
pub struct Power;

impl Pass for Power {
    fn name(&self) -> &'static str {
        "Power"
    }

    fn enabled(&self, config: &CompilerConfig) -> bool {
        config.power || config.controlled_power
    }

    fn rewrite(&self, gate: &Gate, config: &CompilerConfig) -> CompileResult<Option<Vec<Gate>>> {
        let GateKind::Power { base, exponent } = gate.kind() else {
            return Ok(None);
        };
        let allowed = if gate.is_controlled() {
            config.controlled_power
        } else {
            config.power
        };
        let Some(target) = single_target(gate).filter(|_| allowed) else {
            return Ok(None);
        };

        let phase = on(
            GateKind::Phase(exponent.scaled(PI)),
            target,
            gate.controls().iter().copied(),
        )?;
        let out = match base {
            PowerBase::Z => vec![phase],
            PowerBase::X => vec![bare(GateKind::H, target)?, phase, bare(GateKind::H, target)?],
            PowerBase::Y => vec![
                bare(GateKind::Sdg, target)?,
                bare(GateKind::H, target)?,
                phase,
                bare(GateKind::H, target)?,
                bare(GateKind::S, target)?,
            ],
            PowerBase::H => return Ok(None),
        };
        Ok(Some(out))
    }
}
