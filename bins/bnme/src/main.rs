//! `bnme` entry point.
use bnme::cmd::MainCmd;
use clap::Parser;
use eyre::Result;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter, Registry};

fn main() -> Result<()> {
    let cmd = MainCmd::parse();

    let default_level = if cmd.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run()?;

    Ok(())
}
