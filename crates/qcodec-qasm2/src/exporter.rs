//! OpenQASM 2.0 export.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use qcodec_compile::{BasisCompiler, CompilerConfig, StandardCompiler, ZxOverrides};
use qcodec_ir::{Circuit, Gate, IrError, QubitId, Variables};

use crate::error::{QasmError, QasmResult};
use crate::options::{ExportOptions, QasmVersion};
use crate::preprocess::{INCLUDE_DIRECTIVE, VERSION_DIRECTIVE};

/// Most controls a serialized gate may carry.
pub const MAX_CONTROLS: usize = 2;

/// Export a circuit as OpenQASM 2.0 using the [`StandardCompiler`].
///
/// `variables` must bind every variable the circuit's parameters refer to.
///
/// # Errors
///
/// Fails with [`QasmError::MissingVariables`] for an unresolved parameter,
/// [`QasmError::UnsupportedControlArity`] for a gate with more than two
/// controls after compilation, and [`QasmError::UnsupportedVersion`] for a
/// version other than 2.0.
pub fn export(
    circuit: &Circuit,
    variables: Option<&Variables>,
    options: &ExportOptions,
) -> QasmResult<String> {
    export_with(&StandardCompiler::new(), circuit, variables, options)
}

/// Export a circuit as OpenQASM 2.0 using `compiler`.
#[instrument(skip_all, fields(gates = circuit.len(), zx = options.zx_calculus))]
pub fn export_with<C: BasisCompiler + ?Sized>(
    compiler: &C,
    circuit: &Circuit,
    variables: Option<&Variables>,
    options: &ExportOptions,
) -> QasmResult<String> {
    QasmVersion::parse(&options.version)?;

    let unresolved = circuit.variables();
    if !unresolved.is_empty() {
        let missing: BTreeSet<String> = match variables {
            None => unresolved,
            Some(vars) => unresolved
                .into_iter()
                .filter(|name| !vars.contains(name))
                .collect(),
        };
        if !missing.is_empty() {
            return Err(QasmError::MissingVariables(missing));
        }
    }

    let config = CompilerConfig::qasm2_export()
        .with_zx_overrides(ZxOverrides::from_mode(options.zx_calculus));
    let compiled = compiler.compile(circuit, &config)?;
    debug!(
        "Compiled {} gates into {} primitives",
        circuit.len(),
        compiled.len()
    );

    let empty = Variables::new();
    let qasm = emit_compiled(&compiled, variables.unwrap_or(&empty))?;

    if let Some(path) = &options.destination {
        write_file(path, &qasm)?;
    }

    info!(
        "Exported {} statements on {} qubits",
        qasm.lines().count().saturating_sub(4),
        compiled.num_qubits()
    );
    Ok(qasm)
}

/// Export a circuit and write the program to `path`.
///
/// The program is also returned.
pub fn export_to_file(
    circuit: &Circuit,
    variables: Option<&Variables>,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> QasmResult<String> {
    let options = options.clone().with_destination(path.as_ref());
    export(circuit, variables, &options)
}

/// Serialize an already compiled circuit.
///
/// Every gate must be a primitive with at most [`MAX_CONTROLS`] controls.
/// Parameters are resolved against `variables`.
pub fn emit_compiled(circuit: &Circuit, variables: &Variables) -> QasmResult<String> {
    let mut writer = Qasm2Writer::new();
    writer.emit_circuit(circuit, variables)?;
    Ok(writer.output)
}

fn write_file(path: &Path, contents: &str) -> QasmResult<()> {
    debug!("Writing QASM to {}", path.display());
    std::fs::write(path, contents).map_err(|source| QasmError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Line-oriented OpenQASM 2.0 writer.
struct Qasm2Writer {
    output: String,
}

impl Qasm2Writer {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit, variables: &Variables) -> QasmResult<()> {
        self.writeln(VERSION_DIRECTIVE);
        self.writeln(INCLUDE_DIRECTIVE);

        let num_qubits = circuit.num_qubits();
        self.writeln(&format!("qreg q[{num_qubits}];"));
        self.writeln(&format!("creg c[{num_qubits}];"));

        for gate in circuit {
            self.emit_gate(gate, variables)?;
        }
        Ok(())
    }

    fn emit_gate(&mut self, gate: &Gate, variables: &Variables) -> QasmResult<()> {
        let controls = gate.controls();
        if controls.len() > MAX_CONTROLS {
            return Err(QasmError::UnsupportedControlArity {
                gate: gate.to_string(),
                controls: controls.len(),
            });
        }
        if !gate.kind().is_primitive() {
            return Err(QasmError::UnsupportedGate(gate.to_string()));
        }

        let mut token = "c".repeat(controls.len());
        token.push_str(&gate.name().to_lowercase());
        if let Some(param) = gate.parameter() {
            let value = param.evaluate(variables).map_err(|err| match err {
                IrError::UnresolvedParameter(missing) => QasmError::MissingVariables(missing),
                other => QasmError::Ir(other),
            })?;
            if !value.is_finite() {
                return Err(QasmError::InvalidParameter {
                    gate: gate.to_string(),
                    value,
                });
            }
            token.push_str(&format!("({})", format_real(value)));
        }

        let mut prefix = String::new();
        for &control in controls {
            prefix.push_str(&qubit_name(control));
            prefix.push(',');
        }

        // One statement per target, each with every control.
        for &target in gate.targets() {
            self.writeln(&format!("{token} {prefix}{};", qubit_name(target)));
        }
        Ok(())
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn qubit_name(qubit: QubitId) -> String {
    format!("q[{}]", qubit.0)
}

/// Shortest decimal that parses back to `value`, always with a fractional
/// part or an exponent.
fn format_real(value: f64) -> String {
    format!("{value:?}")
}
