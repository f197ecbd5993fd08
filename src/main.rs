mod cli;

use std::fs::File;
use std::io::{BufReader, BufWriter};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use terravalet::output::render_summary;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let plan = File::open(&cli.plan).wrap_err("opening the terraform plan file")?;
    let up = File::create(&cli.up).wrap_err("creating the up file")?;
    let down = File::create(&cli.down).wrap_err("creating the down file")?;

    tracing::debug!(
        plan = %cli.plan.display(),
        up = %cli.up.display(),
        down = %cli.down.display(),
        local_state = %cli.local_state,
        "generating migration"
    );

    let matches = terravalet::generate(
        BufReader::new(plan),
        &cli.local_state,
        &mut BufWriter::new(up),
        &mut BufWriter::new(down),
    )?;

    let summary = render_summary(&matches, cli.format).wrap_err("rendering the summary")?;
    print!("{summary}");

    Ok(())
}
