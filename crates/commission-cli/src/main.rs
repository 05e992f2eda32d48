mod commands;
mod input;
mod logging;
mod output;
mod state;
mod workbook;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculate::{CalculateArgs, ValidateArgs};
use commands::configure::{ConfigureArgs, SelectMonthArgs};
use commands::performance::RecordArgs;
use commands::workbook::{ExportArgs, ImportArgs};

/// Advisor and leader commission payouts
#[derive(Parser)]
#[command(
    name = "commissions",
    version,
    about = "Advisor and leader commission payouts",
    long_about = "Computes monthly advisor commissions from tiered rates, senior bonuses, \
                  goal attainment, the goal-gated leader pool and its split across roles. \
                  Configuration and performance are kept in a local state file and can be \
                  imported from or exported to CSV workbook tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Path of the saved state file
    #[arg(long, default_value = state::DEFAULT_STATE_FILE, global = true)]
    state: String,

    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the commission report
    Calculate(CalculateArgs),
    /// Check the configuration against the save rules
    Validate(ValidateArgs),
    /// Edit and save the configuration
    Configure(ConfigureArgs),
    /// Record an advisor's gross revenue or senior flag
    Record(RecordArgs),
    /// Change the month used for goal tracking
    SelectMonth(SelectMonthArgs),
    /// Import workbook tables into the saved state
    Import(ImportArgs),
    /// Export the saved state (or a template) as workbook tables
    Export(ExportArgs),
    /// Delete the saved state
    Reset,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    let state_path = cli.state.as_str();
    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::calculate::run_calculate(args, state_path),
        Commands::Validate(args) => commands::calculate::run_validate(args, state_path),
        Commands::Configure(args) => commands::configure::run_configure(args, state_path),
        Commands::Record(args) => commands::performance::run_record(args, state_path),
        Commands::SelectMonth(args) => commands::configure::run_select_month(args, state_path),
        Commands::Import(args) => commands::workbook::run_import(args, state_path),
        Commands::Export(args) => commands::workbook::run_export(args, state_path),
        Commands::Reset => commands::workbook::run_reset(state_path),
        Commands::Version => {
            println!("commissions {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
