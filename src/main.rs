use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockroom::cli;
use stockroom::errors::StockroomError;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Start(args) => cli::start::handle_start(args, cli.quiet),
        cli::Commands::Init(args) => cli::init::handle_init(args),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                StockroomError::Database(_) => 2,
                StockroomError::Io(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
