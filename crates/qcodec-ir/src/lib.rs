//! qcodec Circuit Representation
//!
//! This crate provides the value types that flow through the qcodec
//! OpenQASM 2.0 bridge: circuits, gates, parameters and variable assignments.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered sequence of immutable [`Gate`] values. Circuits
//! are never mutated in place; every builder method consumes the circuit and
//! returns the extended one, so building a circuit is a fold over gates.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit by its index
//! - **Gates**: [`GateKind`] is the internal gate vocabulary, [`Gate`] binds a
//!   kind to its targets and controls
//! - **Parameters**: [`Parameter`] is a real-valued expression that may refer to
//!   symbolic variables, resolved against [`Variables`]
//! - **Circuit**: [`Circuit`] ordered composition of gates
//!
//! # Example: Building a Circuit
//!
//! ```rust
//! use qcodec_ir::{Circuit, QubitId};
//!
//! let circuit = Circuit::empty()
//!     .h(QubitId(0)).unwrap()
//!     .cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.len(), 2);
//! assert_eq!(circuit.num_qubits(), 2);
//! ```
//!
//! # Example: Parametrized Circuit
//!
//! ```rust
//! use qcodec_ir::{Circuit, Parameter, QubitId, Variables};
//!
//! let circuit = Circuit::empty()
//!     .rx(Parameter::symbol("theta") * Parameter::constant(0.5), QubitId(0)).unwrap();
//!
//! assert!(circuit.variables().contains("theta"));
//!
//! let variables = Variables::new().with("theta", 1.0);
//! let angle = circuit.gates()[0].parameter().unwrap().evaluate(&variables).unwrap();
//! assert!((angle - 0.5).abs() < 1e-12);
//! ```
//!
//! # Gate Vocabulary
//!
//! | Kind | Targets | Primitive |
//! |------|---------|-----------|
//! | `X`, `Y`, `Z`, `H` | 1 per target | yes |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 per target | yes |
//! | `Rx`, `Ry`, `Rz` | 1 per target | yes |
//! | `Phase` | 1 per target | no |
//! | `Power` | 1 per target | no |
//! | `Swap` | 2 | no |
//! | `ExpPauli` | any | no |
//! | `Trotterized` | any | no |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod parameter;
pub mod qubit;
pub mod variables;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, Pauli, PauliTerm, PowerBase};
pub use parameter::Parameter;
pub use qubit::QubitId;
pub use variables::Variables;
