//! OpenQASM 2.0 import.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument, warn};

use qcodec_ir::{Circuit, Gate, GateKind, Pauli};

use crate::error::{QasmError, QasmResult};
use crate::options::{ImportOptions, QasmVersion};
use crate::preprocess::clean;
use crate::statement::Statement;

/// The single quantum register an import may declare.
#[derive(Debug, Clone)]
struct Register {
    name: String,
    size: u32,
}

/// Fold state of an import: the circuit built so far and the declared
/// register, if any.
#[derive(Debug, Default)]
struct ImportState {
    circuit: Circuit,
    register: Option<Register>,
}

impl ImportState {
    fn apply(self, statement: Statement, text: &str, strict: bool) -> QasmResult<Self> {
        let unsupported = |reason| QasmError::UnsupportedOperation {
            statement: text.to_string(),
            reason,
        };

        match statement {
            Statement::Ignored(keyword) => {
                debug!("Ignoring `{keyword}` statement");
                Ok(self)
            }
            Statement::QuantumRegister { name, size } => {
                if self.register.is_some() {
                    return Err(unsupported("only one quantum register is supported"));
                }
                Ok(Self {
                    circuit: self.circuit.with_qubits(size),
                    register: Some(Register { name, size }),
                })
            }
            Statement::Pauli {
                axis,
                register,
                target,
            } => {
                if let Some(declared) = &self.register {
                    let reason = if declared.name != register {
                        Some(format!("unknown register '{register}'"))
                    } else if target.0 >= declared.size {
                        Some(format!(
                            "index {} out of range for register '{}' of size {}",
                            target.0, declared.name, declared.size
                        ))
                    } else {
                        None
                    };
                    if let Some(reason) = reason {
                        return Err(QasmError::ArgumentParseError {
                            statement: text.to_string(),
                            reason,
                        });
                    }
                }
                let kind = match axis {
                    Pauli::X => GateKind::X,
                    Pauli::Y => GateKind::Y,
                    Pauli::Z => GateKind::Z,
                };
                Ok(Self {
                    circuit: self.circuit.append(Gate::single(kind, target)?),
                    ..self
                })
            }
            Statement::Unreconstructed(name) => {
                debug!("Gate `{name}` is not reconstructed on import");
                Ok(self)
            }
            Statement::CustomCall(_) => Err(unsupported("custom gate definitions cannot be invoked")),
            Statement::Unsupported => Err(unsupported("not supported by this importer")),
            Statement::Unknown(name) if strict => {
                debug!("Rejecting unknown statement `{name}`");
                Err(unsupported("unknown statement"))
            }
            Statement::Unknown(name) => {
                warn!("Skipping unknown statement `{text}` (leading `{name}`)");
                Ok(self)
            }
        }
    }
}

/// Import OpenQASM 2.0 text into a circuit.
///
/// Only `x`, `y` and `z` gates are rebuilt; a `qreg` declaration sets the
/// circuit width. See [`Statement`] for how every other statement is
/// handled.
///
/// # Errors
///
/// Fails on a malformed header (strict mode), an unsupported or (in strict
/// mode) unknown statement, or a qubit argument that is not `reg[index]`.
#[instrument(skip(text, options), fields(strict = options.strict))]
pub fn import(text: &str, options: &ImportOptions) -> QasmResult<Circuit> {
    QasmVersion::parse(&options.version)?;

    let source = clean(text, options.strict)?;
    let custom: FxHashSet<&str> = source
        .definitions
        .iter()
        .map(|d| d.name.as_str())
        .collect();

    let state = source
        .statements()
        .try_fold(ImportState::default(), |state, text| {
            let statement = Statement::parse(text, &custom)?;
            state.apply(statement, text, options.strict)
        })?;

    info!(
        "Imported {} gates on {} qubits",
        state.circuit.len(),
        state.circuit.num_qubits()
    );
    Ok(state.circuit)
}

/// Read `path` and [`import`] its contents.
pub fn import_file(path: impl AsRef<Path>, options: &ImportOptions) -> QasmResult<Circuit> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| QasmError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import(&text, options)
}
