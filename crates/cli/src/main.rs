use anyhow::Result;
use clap::Parser;
use webfont_kit_cli::cli::{Cli, init_logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    cli.command.run()
}
