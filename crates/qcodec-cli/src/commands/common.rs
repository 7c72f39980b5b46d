//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qcodec_ir::{Circuit, Variables};

/// Load a circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" | "" => serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse circuit JSON: {path}")),
        "qasm" => anyhow::bail!("{path} is already QASM; use `qcodec import` to read it"),
        other => anyhow::bail!("Unsupported circuit format '.{other}' (expected .json)"),
    }
}

/// Load variable values from a YAML or JSON file, by extension.
pub fn load_variables(path: &str) -> Result<Variables> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Failed to parse variables YAML: {path}")),
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse variables JSON: {path}")),
        other => anyhow::bail!("Unsupported variables format '.{other}' (expected .yaml or .json)"),
    }
}

/// Parse one `name=value` pair.
pub fn parse_var(pair: &str) -> Result<(String, f64)> {
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid variable '{pair}': expected NAME=VALUE"))?;

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Invalid variable '{pair}': empty name");
    }

    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for variable '{name}'"))?;
    Ok((name.to_string(), value))
}

/// Combine a variables file with `name=value` pairs; pairs win.
///
/// Returns `None` when neither source was given.
pub fn resolve_variables(file: Option<&str>, pairs: &[String]) -> Result<Option<Variables>> {
    if file.is_none() && pairs.is_empty() {
        return Ok(None);
    }

    let mut variables = match file {
        Some(path) => load_variables(path)?,
        None => Variables::new(),
    };
    for pair in pairs {
        let (name, value) = parse_var(pair)?;
        variables.insert(name, value);
    }
    Ok(Some(variables))
}

/// Write `content` to `path`, or print it when no path is given.
pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
