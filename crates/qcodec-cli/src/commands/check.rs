//! Check command implementation.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use console::style;

use qcodec_qasm2::{ImportOptions, import_file};

/// Execute the check command.
pub fn execute(input: &str, lenient: bool) -> Result<()> {
    let options = ImportOptions::default().with_strict(!lenient);
    let circuit =
        import_file(input, &options).with_context(|| format!("Failed to import {input}"))?;

    println!("{} {} is valid", style("✓").green().bold(), style(input).green());
    println!("  Qubits: {}", circuit.num_qubits());
    println!("  Gates:  {}", circuit.len());

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for gate in &circuit {
        *counts.entry(gate.name()).or_default() += 1;
    }
    for (name, count) in counts {
        println!("    {:<3} {}", style(name).cyan(), count);
    }

    Ok(())
}
