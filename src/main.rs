use console_life::{
    config::Args,
    draw::{ self, App },
    input::Prompter,
    proc::Field,
};

use std::io::{ stdin, stdout };

use anyhow::{ Context, Result };
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "configuration loaded");

    let mut prompter = Prompter::new(stdin().lock(), stdout());

    let size = prompter.read_size().context("unable to read size")?;
    draw::print_field(&mut stdout(), &Field::new(size)?)?;

    let n = prompter.read_count().context("unable to read coordinate pair count")?;
    let coords = prompter
        .read_coords(n, size)
        .context("unable to read coordinates")?;
    info!(coords = ?coords, "seed accepted");

    let field = Field::seeded(size, &coords)?;
    let mut app = App::new(field)
        .with_delay(args.delay())
        .with_maxgen(args.generations)
        .with_clear(args.clear);
    let phase = app.run(&mut stdout())?;

    info!(?phase, epochs = app.epoch(), "simulation finished");
    Ok(())
}
