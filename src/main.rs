use anyhow::Result;
use clap::Parser;
use colored::*;
use reportify::cli::Cli;
use reportify::config::Config;
use reportify::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    // Config file values fill in whatever the CLI left at its default.
    let args = match &args.config {
        Some(path) => Config::from_file(std::path::Path::new(path))?.merge_with_cli(&args),
        None => match Config::from_default_paths()? {
            Some(config) => config.merge_with_cli(&args),
            None => args,
        },
    };

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
