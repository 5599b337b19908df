use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use budget_ledger::cli::{
    handle_audit_command, handle_chart_command, handle_demo_command, handle_run_command, RunArgs,
};
use budget_ledger::config::{paths::LedgerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Category ledgers with transfers and a text spend chart",
    long_about = "Replays deposits, withdrawals and transfers across named spending \
                  categories, prints each category's ledger, and charts the share of \
                  spending taken by each category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file and print ledgers and the spend chart
    Run(RunArgs),

    /// Replay a scenario file and print only the spend chart
    Chart {
        /// Scenario file (.json, .yaml or .yml)
        file: PathBuf,
    },

    /// Replay the built-in Food/Clothing/Auto walkthrough
    Demo,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings, replacing any existing settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Run(args)) => handle_run_command(&paths, &settings, args)?,
        Some(Commands::Chart { file }) => handle_chart_command(&paths, &settings, &file)?,
        Some(Commands::Demo) => handle_demo_command(&paths, &settings)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&paths, limit)?,
        Some(Commands::Init) => {
            Settings::default().save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("budget-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Strict funds:  {}", settings.strict_funds);
            println!("  Show ledgers:  {}", settings.show_ledgers);
            println!("  Show chart:    {}", settings.show_chart);
        }
        None => {
            println!("budget-ledger - category ledgers and spend charts");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to see an example.");
        }
    }

    Ok(())
}
