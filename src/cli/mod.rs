//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the service layer.

pub mod audit;
pub mod scenario;

pub use audit::handle_audit_command;
pub use scenario::{
    handle_chart_command, handle_demo_command, handle_run_command, RunArgs, RunOptions,
};
