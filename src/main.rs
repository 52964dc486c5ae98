mod cli;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use pamcan::commands;
use pamcan::terminal;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    pamcan::logging::init(cli.verbose);

    let stdout = std::io::stdout();
    if cli.list {
        let config = commands::list::ListConfig {
            json: cli.json,
            styled: stdout.is_terminal(),
        };
        commands::list::list(&config, stdout.lock())?;
    } else {
        let config = commands::run::RunConfig { width: cli.width };
        commands::run::run(&config, terminal::platform(), stdout.lock())?;
    }

    Ok(())
}
