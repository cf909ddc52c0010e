use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stockroom", version, about = "Terminal inventory manager with a local credential store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skip the splash screen and non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive session (login, then inventory)
    Start(StartArgs),
    /// Create the database file and tables, then exit
    Init(InitArgs),
}

#[derive(Args, Clone)]
pub struct StartArgs {
    /// SQLite database path (defaults to the platform data directory)
    #[arg(long)]
    pub db: Option<String>,
}

#[derive(Args, Clone)]
pub struct InitArgs {
    /// SQLite database path (defaults to the platform data directory)
    #[arg(long)]
    pub db: Option<String>,
}
