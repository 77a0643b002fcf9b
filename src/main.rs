use cidr_merge::cli::{Cli, Command};
use cidr_merge::config::Config;
use cidr_merge::logging::init_logging;
use cidr_merge::{run_merge, run_test, verdict};
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("Logging disabled: {e}");
    }
    log::info!("#Start main()");

    match run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} {e}", "ERR".on_red());
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Merge(args) => {
            let client = config.http_client()?;
            let summary = run_merge(&args, &client).await?;
            log::info!("#End merge {summary:?}");
        }
        Command::Test(args) => {
            let found = run_test(&args)?;
            println!("{}", verdict(found.as_deref()));
        }
    }
    Ok(())
}
