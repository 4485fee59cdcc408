//! # opgen
//!
//! Command-line front end for the operator source generator.
//!
//! ## Usage
//! ```bash
//! # Render an operator described in a YAML spec file
//! opgen generate ops/resize.yaml -o resize_op.cc
//!
//! # Render a catalog operator to stdout
//! opgen builtin Zero
//!
//! # Show the catalog and the allowed type tags
//! opgen list
//! opgen types
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "opgen",
    about = "Generate TensorFlow custom-op registration sources",
    version
)]
struct Cli {
    /// Path to a YAML generator configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a YAML operator spec and render its source.
    Generate {
        /// Path to the operator spec file.
        spec: PathBuf,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject repeated output indices in shape rules.
        #[arg(long)]
        strict: bool,
    },

    /// Render one of the built-in operators.
    Builtin {
        /// Operator name, as shown by `opgen list`.
        name: String,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in operators.
    List,

    /// List the allowed type tags.
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { spec, output, strict } => {
            commands::generate::execute(cli.config, spec, output, strict)
        }
        Commands::Builtin { name, output } => commands::builtin::execute(cli.config, name, output),
        Commands::List => commands::list::execute(),
        Commands::Types => commands::types::execute(),
    }
}
