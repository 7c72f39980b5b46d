//! Import command implementation.

use anyhow::{Context, Result};
use console::style;

use qcodec_qasm2::{ImportOptions, import_file};

use super::common::write_output;

/// Execute the import command.
pub fn execute(input: &str, lenient: bool, output: Option<&str>) -> Result<()> {
    eprintln!(
        "{} Importing {} ({} mode)",
        style("→").cyan().bold(),
        style(input).green(),
        if lenient { "lenient" } else { "strict" }
    );

    let options = ImportOptions::default().with_strict(!lenient);
    let circuit =
        import_file(input, &options).with_context(|| format!("Failed to import {input}"))?;

    let mut json =
        serde_json::to_string_pretty(&circuit).context("Failed to serialize circuit")?;
    json.push('\n');
    write_output(output, &json)?;

    if let Some(path) = output {
        eprintln!(
            "{} Wrote {} gates on {} qubits to {}",
            style("✓").green().bold(),
            circuit.len(),
            circuit.num_qubits(),
            style(path).green()
        );
    }

    Ok(())
}
