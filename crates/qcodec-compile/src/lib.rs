//! qcodec Basis Compiler
//!
//! This crate reduces circuits written in the open qcodec gate vocabulary to
//! the closed primitive vocabulary that the OpenQASM 2.0 exporter can
//! serialize: single-qubit primitives (`X`, `Y`, `Z`, `H`, `S`, `Sdg`, `T`,
//! `Tdg`, `Rx`, `Ry`, `Rz`) carrying at most the controls the caller allows.
//!
//! # Architecture
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌──────────────────┐
//! │ StandardCompiler │ ◄── CompilerConfig (capability flags + ZX overrides)
//! └──────────────────┘
//!       │
//!       ├── MultiTarget
//!       ├── Trotterize / GeneralizedRotation / ExponentialPauli
//!       ├── HadamardPower / Power
//!       ├── SwapExpansion / MultiControl
//!       ├── PhaseToZ / ControlledPhase / ControlledRotation
//!       ├── CcMax / ToffoliExpansion
//!       ├── PhaseToRz
//!       └── YAsXz / RyAsXz (ZX mode only)
//!       │
//!       ▼
//! Output Circuit (primitive vocabulary)
//! ```
//!
//! Each pass rewrites gates locally and runs once, in the order shown, when
//! its capability flag is set. Every rewrite is exact up to a global phase.
//! Gates with more than two controls are never reduced; it is up to the
//! consumer to reject them.
//!
//! # Example
//!
//! ```rust
//! use qcodec_compile::{BasisCompiler, CompilerConfig, StandardCompiler};
//! use qcodec_ir::{Circuit, QubitId};
//!
//! let circuit = Circuit::empty().swap(QubitId(0), QubitId(1)).unwrap();
//!
//! let compiled = StandardCompiler::new()
//!     .compile(&circuit, &CompilerConfig::qasm2_export())
//!     .unwrap();
//!
//! // SWAP = three CNOTs
//! assert_eq!(compiled.len(), 3);
//! assert!(compiled.iter().all(|g| g.kind().is_primitive()));
//! ```

mod config;
mod error;
mod manager;
mod pass;
pub mod passes;

#[cfg(test)]
mod simulator;
#[cfg(test)]
mod unitary;

pub use config::{CompilerConfig, ZxOverrides};
pub use error::{CompileError, CompileResult};
pub use manager::{BasisCompiler, StandardCompiler};
pub use pass::Pass;
