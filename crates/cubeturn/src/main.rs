//! 3x3x3 twisty cube simulator for the terminal.

mod cli;
mod net;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    log::debug!("{args:?}");
    cli::exec(args)
}
