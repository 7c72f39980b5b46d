//! Export command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use qcodec_qasm2::{ExportOptions, export, export_to_file};

use super::common::{load_circuit, resolve_variables, write_output};

/// Execute the export command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    zx: bool,
    variables_file: Option<&str>,
    vars: &[String],
    qasm_version: &str,
) -> Result<()> {
    eprintln!(
        "{} Exporting {} to OpenQASM {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(qasm_version).yellow()
    );

    let circuit = load_circuit(input)?;
    eprintln!(
        "  Loaded: {} gates on {} qubits",
        circuit.len(),
        circuit.num_qubits()
    );

    let variables = resolve_variables(variables_file, vars)?;
    if let Some(vars) = &variables {
        debug!("Resolved {} variables", vars.len());
    }

    let options = ExportOptions::default()
        .with_version(qasm_version)
        .with_zx_calculus(zx);

    match output {
        Some(path) => {
            let qasm = export_to_file(&circuit, variables.as_ref(), path, &options)
                .with_context(|| format!("Failed to export {input}"))?;
            eprintln!(
                "{} Wrote {} lines to {}",
                style("✓").green().bold(),
                qasm.lines().count(),
                style(path).green()
            );
        }
        None => {
            let qasm = export(&circuit, variables.as_ref(), &options)
                .with_context(|| format!("Failed to export {input}"))?;
            write_output(None, &qasm)?;
        }
    }

    Ok(())
}
