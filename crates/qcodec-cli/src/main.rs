//! qcodec Command-Line Interface
//!
//! Converts JSON circuit files to OpenQASM 2.0 and back.
//!
//! ```text
//! qcodec export -i circuit.json --var theta=0.5 -o circuit.qasm
//! qcodec import -i circuit.qasm -o circuit.json
//! qcodec check  -i circuit.qasm --lenient
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{check, export, import, version};

/// qcodec - OpenQASM 2.0 import and export for quantum circuits
#[derive(Parser)]
#[command(name = "qcodec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a JSON circuit as OpenQASM 2.0
    Export {
        /// Input circuit (JSON)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Rewrite Y and Ry for ZX-calculus tools
        #[arg(long)]
        zx: bool,

        /// Variable values file (YAML or JSON)
        #[arg(long)]
        variables: Option<String>,

        /// Variable value as name=value (repeatable, overrides the file)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,

        /// OpenQASM version to write
        #[arg(long, default_value = "2.0")]
        qasm_version: String,
    },

    /// Import an OpenQASM 2.0 file as a JSON circuit
    Import {
        /// Input file (QASM)
        #[arg(short, long)]
        input: String,

        /// Tolerate missing header directives and skip unknown statements
        #[arg(long)]
        lenient: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import an OpenQASM 2.0 file and report what was rebuilt
    Check {
        /// Input file (QASM)
        #[arg(short, long)]
        input: String,

        /// Tolerate missing header directives and skip unknown statements
        #[arg(long)]
        lenient: bool,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            zx,
            variables,
            vars,
            qasm_version,
        } => export::execute(
            &input,
            output.as_deref(),
            zx,
            variables.as_deref(),
            &vars,
            &qasm_version,
        ),

        Commands::Import {
            input,
            lenient,
            output,
        } => import::execute(&input, lenient, output.as_deref()),

        Commands::Check { input, lenient } => check::execute(&input, lenient),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
