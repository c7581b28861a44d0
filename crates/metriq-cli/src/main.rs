mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "metriq",
    version,
    about = "Validation tool for quality metric definitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a metric definition file (formula, thresholds, variables)
    Check {
        /// Path to a metric definition JSON file
        definition_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate and parse a single threshold expression
    Threshold {
        /// Threshold expression, e.g. ">=10/3min"
        expression: String,

        /// Field label used in messages
        #[arg(short, long, default_value = "threshold")]
        label: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect a metric formula
    Formula {
        #[command(subcommand)]
        action: FormulaAction,
    },
}

#[derive(Subcommand)]
enum FormulaAction {
    /// Validate formula syntax
    Validate {
        formula: String,

        /// Accept an empty formula
        #[arg(long)]
        optional: bool,
    },
    /// List the variables a formula references
    Variables { formula: String },
    /// Show which variables the thresholds fix to a constant
    Infer {
        formula: String,

        /// Desired threshold expression
        #[arg(short, long)]
        desired: Option<String>,

        /// Worst-case threshold expression
        #[arg(short, long)]
        worst: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            definition_file,
            output,
        } => commands::check::run(definition_file, &output),
        Commands::Threshold {
            expression,
            label,
            output,
        } => commands::threshold::run(&expression, &label, &output),
        Commands::Formula { action } => match action {
            FormulaAction::Validate { formula, optional } => {
                commands::formula::validate(&formula, optional)
            }
            FormulaAction::Variables { formula } => commands::formula::variables(&formula),
            FormulaAction::Infer {
                formula,
                desired,
                worst,
            } => commands::formula::infer(&formula, desired.as_deref(), worst.as_deref()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
