//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - OpenQASM 2.0 import and export",
        style("qcodec").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qcodec-ir       Gate-list circuit representation");
    println!("  qcodec-compile  Basis compiler and rewrite passes");
    println!("  qcodec-qasm2    OpenQASM 2.0 codec");
    println!("  qcodec-cli      Command-line interface");
    println!();
    println!("Supported:  OpenQASM {}", style("2.0").green());
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}
