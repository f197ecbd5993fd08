use std::path::PathBuf;

use clap::Parser;

use terravalet::migration::DEFAULT_LOCAL_STATE;
use terravalet::output::OutputFormat;

/// A simple valet for terraform operations.
///
/// Reads the output of `terraform plan` and generates the up and down
/// `terraform state mv` scripts for resources whose address changed.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the output of terraform plan.
    #[arg(long)]
    pub plan: PathBuf,

    /// Path to the up migration script to generate (NNN_TITLE.up.sh).
    #[arg(long)]
    pub up: PathBuf,

    /// Path to the down migration script to generate (NNN_TITLE.down.sh).
    #[arg(long)]
    pub down: PathBuf,

    /// Path to the local state to modify (both src and dst).
    #[arg(long, env = "TERRAVALET_LOCAL_STATE", default_value = DEFAULT_LOCAL_STATE)]
    pub local_state: String,

    /// Format of the summary printed on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
