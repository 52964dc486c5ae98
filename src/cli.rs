use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "pamcan",
    about = "Print a Pam Can sized to fit your terminal",
    version
)]
pub struct Cli {
    /// Render for this many columns instead of querying the terminal.
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<u16>,

    /// List the embedded variants instead of printing one.
    #[arg(long)]
    pub list: bool,

    /// With --list, print JSON.
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Log to stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
