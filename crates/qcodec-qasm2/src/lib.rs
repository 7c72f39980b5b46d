//! `OpenQASM` 2.0 Import and Export for qcodec
//!
//! This crate converts qcodec circuits to and from `OpenQASM` 2.0 text.
//!
//! Export compiles the circuit down to the primitive vocabulary with a
//! [`BasisCompiler`](qcodec_compile::BasisCompiler) and writes one statement
//! per gate target. Import cleans the text, classifies each statement and
//! rebuilds the gates it can.
//!
//! # Supported Statements on Import
//!
//! | Statement | Handling | Example |
//! |-----------|----------|---------|
//! | Version / include | required in strict mode | `OPENQASM 2.0;` |
//! | Quantum register | sets the circuit width | `qreg q[3];` |
//! | Pauli gates | rebuilt | `x q[0];` |
//! | `barrier`, `creg`, `measure`, `id` | ignored | `barrier q[0];` |
//! | Other `qelib1.inc` gates, `reset` | accepted, not rebuilt | `cx q[0],q[1];` |
//! | Custom gate definitions | removed | `gate g a { x a; }` |
//! | Custom gate calls, `opaque`, `if` | rejected | `if(c==1) x q[0];` |
//! | Anything else | rejected (strict) / skipped (lenient) | `foo q[0];` |
//!
//! # Example: Export
//!
//! ```rust
//! use qcodec_ir::{Circuit, QubitId};
//! use qcodec_qasm2::{export, ExportOptions};
//!
//! let circuit = Circuit::empty()
//!     .x(QubitId(0)).unwrap()
//!     .cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let qasm = export(&circuit, None, &ExportOptions::default()).unwrap();
//! assert!(qasm.contains("qreg q[2];"));
//! assert!(qasm.contains("cx q[0],q[1];"));
//! ```
//!
//! # Example: Import
//!
//! ```rust
//! use qcodec_qasm2::{import, ImportOptions};
//!
//! let qasm = "OPENQASM 2.0;\ninclude \"qelib1.inc\";\nx q[0];\nbarrier q[0];\nz q[1];";
//! let circuit = import(qasm, &ImportOptions::default()).unwrap();
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! # Example: Parametrized Export
//!
//! ```rust
//! use qcodec_ir::{Circuit, Parameter, QubitId, Variables};
//! use qcodec_qasm2::{export, ExportOptions, QasmError};
//!
//! let circuit = Circuit::empty()
//!     .rx(Parameter::symbol("theta"), QubitId(0)).unwrap();
//!
//! let err = export(&circuit, None, &ExportOptions::default()).unwrap_err();
//! assert!(matches!(err, QasmError::MissingVariables(_)));
//!
//! let vars = Variables::new().with("theta", 0.5);
//! let qasm = export(&circuit, Some(&vars), &ExportOptions::default()).unwrap();
//! assert!(qasm.contains("rx(0.5) q[0];"));
//! ```

mod error;
mod exporter;
mod importer;
mod lexer;
mod options;
mod preprocess;
mod statement;

pub use error::{QasmError, QasmResult};
pub use exporter::{MAX_CONTROLS, emit_compiled, export, export_to_file, export_with};
pub use importer::{import, import_file};
pub use lexer::Token;
pub use options::{ExportOptions, ImportOptions, QasmVersion};
pub use preprocess::{
    CleanedSource, GateDefinition, INCLUDE_DIRECTIVE, VERSION_DIRECTIVE, clean,
};
pub use statement::Statement;
