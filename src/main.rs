use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use jfactorial::{cli::Args, compute, config::Config, logging};

fn run(args: Args) -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    logging::init(&config.log_filter);
    let config = args.resolve(config);
    debug!(?config, "resolved");
    let result = compute(config.default_n, config.mode)
        .with_context(|| format!("cannot compute {}! in {} mode", config.default_n, config.mode))?;
    println!("{}", result);
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
