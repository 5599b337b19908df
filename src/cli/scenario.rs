//! Scenario CLI commands
//!
//! Replays scenario files into an in-memory budget and prints the ledgers
//! and the spend chart.

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::audit::AuditLogger;
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_ledger_csv, export_ledger_json};
use crate::services::{Budget, Scenario, ScenarioOutcome};

/// Arguments for `budget run`
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Scenario file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Stop at the first withdrawal or transfer refused for lack of funds
    #[arg(long)]
    pub strict: bool,

    /// Don't print the category ledgers
    #[arg(long)]
    pub no_ledgers: bool,

    /// Don't print the spend chart
    #[arg(long)]
    pub no_chart: bool,

    /// Export the ledgers to a CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Export the ledgers to a JSON file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

/// What a run prints, after settings and flags are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub strict: bool,
    pub show_ledgers: bool,
    pub show_chart: bool,
}

impl RunOptions {
    /// Flags can only tighten the settings: they never re-enable output
    pub fn resolve(settings: &Settings, args: &RunArgs) -> Self {
        Self {
            strict: settings.strict_funds || args.strict,
            show_ledgers: settings.show_ledgers && !args.no_ledgers,
            show_chart: settings.show_chart && !args.no_chart,
        }
    }

    fn from_settings(settings: &Settings) -> Self {
        Self::resolve(settings, &RunArgs::default())
    }
}

/// Create an empty budget, audited when the settings ask for it
fn open_budget(paths: &LedgerPaths, settings: &Settings) -> Budget {
    if settings.audit_enabled {
        Budget::with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        Budget::new()
    }
}

/// Render ledgers and chart for a finished run
///
/// Ledgers are separated by a blank line, as is the chart.
pub fn format_run(budget: &Budget, options: RunOptions) -> String {
    let mut sections: Vec<String> = Vec::new();

    if options.show_ledgers {
        sections.extend(budget.categories().iter().map(|c| c.to_string()));
    }
    if options.show_chart {
        sections.push(budget.spend_chart());
    }

    sections.join("\n\n")
}

fn report_rejections(outcome: &ScenarioOutcome) {
    for rejection in &outcome.rejected {
        eprintln!("Warning: step {}: {}", rejection.step, rejection.message);
    }
}

fn replay(
    paths: &LedgerPaths,
    settings: &Settings,
    scenario: &Scenario,
    strict: bool,
) -> LedgerResult<Budget> {
    let mut budget = open_budget(paths, settings);
    let outcome = scenario.apply(&mut budget, strict)?;
    report_rejections(&outcome);
    Ok(budget)
}

fn create_export_file(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle `budget run`
pub fn handle_run_command(
    paths: &LedgerPaths,
    settings: &Settings,
    args: RunArgs,
) -> LedgerResult<()> {
    let options = RunOptions::resolve(settings, &args);
    let scenario = Scenario::from_path(&args.file)?;
    let budget = replay(paths, settings, &scenario, options.strict)?;

    let output = format_run(&budget, options);
    if !output.is_empty() {
        println!("{}", output);
    }

    if let Some(path) = args.csv {
        let mut writer = create_export_file(&path)?;
        export_ledger_csv(budget.categories(), &mut writer)?;
        eprintln!("Ledgers exported to: {}", path.display());
    }

    if let Some(path) = args.json {
        let mut writer = create_export_file(&path)?;
        export_ledger_json(budget.categories(), &mut writer)?;
        eprintln!("Ledgers exported to: {}", path.display());
    }

    Ok(())
}

/// Handle `budget chart`
pub fn handle_chart_command(
    paths: &LedgerPaths,
    settings: &Settings,
    file: &Path,
) -> LedgerResult<()> {
    let scenario = Scenario::from_path(file)?;
    let budget = replay(paths, settings, &scenario, settings.strict_funds)?;
    println!("{}", budget.spend_chart());
    Ok(())
}

/// Handle `budget demo`
pub fn handle_demo_command(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    let options = RunOptions::from_settings(settings);
    // The demo includes a refused withdrawal on purpose
    let budget = replay(paths, settings, &Scenario::demo(), false)?;
    println!("{}", format_run(&budget, options));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_budget() -> Budget {
        let mut budget = Budget::new();
        Scenario::demo().apply(&mut budget, false).unwrap();
        budget
    }

    #[test]
    fn test_resolve_flags_only_tighten() {
        let settings = Settings {
            show_chart: false,
            ..Settings::default()
        };
        let args = RunArgs {
            strict: true,
            no_ledgers: true,
            ..RunArgs::default()
        };

        let options = RunOptions::resolve(&settings, &args);
        assert!(options.strict);
        assert!(!options.show_ledgers);
        assert!(!options.show_chart);
    }

    #[test]
    fn test_format_run_sections() {
        let budget = demo_budget();
        let output = format_run(&budget, RunOptions::from_settings(&Settings::default()));

        assert!(output.starts_with("*************Food*************\n"));
        assert!(output.contains("Total: 923.96\n\n***********Clothing***********\n"));
        assert!(output.contains("Total: 985.00\n\nPercentage spent by category\n"));
        assert!(output.contains("Total: 24.45\n\n*************Auto*************\n"));
        assert!(output.ends_with("        g     "));
    }

    #[test]
    fn test_format_run_chart_only() {
        let budget = demo_budget();
        let options = RunOptions {
            strict: false,
            show_ledgers: false,
            show_chart: true,
        };
        assert_eq!(format_run(&budget, options), budget.spend_chart());
    }

    #[test]
    fn test_format_run_nothing() {
        let options = RunOptions {
            strict: false,
            show_ledgers: false,
            show_chart: false,
        };
        assert!(format_run(&demo_budget(), options).is_empty());
    }
}
