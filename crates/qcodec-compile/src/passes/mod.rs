//! Built-in rewrite passes.
//!
//! Every pass is a unit struct implementing [`Pass`](crate::Pass) and is
//! gated by one or two [`CompilerConfig`](crate::CompilerConfig) flags.

mod controlled;
mod multitarget;
mod pauli;
mod phase;
mod power;
mod zx;

pub use controlled::{
    CcMax, ControlledPhase, ControlledRotation, MultiControl, SwapExpansion, ToffoliExpansion,
};
pub use multitarget::MultiTarget;
pub use pauli::{ExponentialPauli, GeneralizedRotation, Trotterize};
pub use phase::{PhaseToRz, PhaseToZ};
pub use power::{HadamardPower, Power};
pub use zx::{RyAsXz, YAsXz};

use qcodec_ir::{Gate, GateKind, IrResult, QubitId};

/// `kind` on `target` with `controls`.
pub(crate) fn on(
    kind: GateKind,
    target: QubitId,
    controls: impl IntoIterator<Item = QubitId>,
) -> IrResult<Gate> {
    Gate::controlled(kind, controls, target)
}

/// Uncontrolled `kind` on `target`.
pub(crate) fn bare(kind: GateKind, target: QubitId) -> IrResult<Gate> {
    Gate::single(kind, target)
}

/// The single target of a gate that has already been split per target.
///
/// Returns `None` for gates that still carry several targets, which passes
/// leave untouched.
pub(crate) fn single_target(gate: &Gate) -> Option<QubitId> {
    match gate.targets() {
        [target] => Some(*target),
        _ => None,
    }
}
