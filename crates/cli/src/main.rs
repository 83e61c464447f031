use anyhow::Result;
use clap::Parser;
use env_logger::init;
use vf_displayer_cli::cli::Cli;

fn main() -> Result<()> {
    init();
    Cli::parse().run()
}
