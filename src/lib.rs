pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod generator;
pub mod http_client;
pub mod insights;
pub mod models;
pub mod reporter;
pub mod scorer;

use anyhow::Result;
use cli::Cli;
use colored::*;
use insights::{HttpInsightService, generate_insights};
use reporter::Reporter;
use url::Url;

const ENDPOINT_ENV: &str = "REPORTIFY_INSIGHTS_ENDPOINT";
const API_KEY_ENV: &str = "REPORTIFY_API_KEY";

pub async fn run(args: Cli) -> Result<()> {
    println!(
        "{}",
        "Reportify - SEO Audit Report Generator"
            .bright_cyan()
            .bold()
    );
    println!("{}", "=".repeat(50).bright_blue());
    println!();

    // Validate URL
    if !args.url.starts_with("http://") && !args.url.starts_with("https://") {
        anyhow::bail!("URL must start with http:// or https://");
    }
    Url::parse(&args.url).map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    println!("{} {}", "Auditing:".bright_white().bold(), args.url);
    println!();

    if args.verbose {
        println!("{}", "Synthesizing SEO signals...".bright_yellow());
    }

    let report = analyzer::build_report(&args.url);

    if args.verbose {
        println!("{}", "Analysis complete".bright_green());
        println!();
    }

    // Request AI insights if enabled; failures degrade to the fallback
    // message rather than aborting the report.
    let insight_text = if args.insights {
        if args.verbose {
            println!("{}", "Requesting actionable insights...".bright_yellow());
        }

        let endpoint = args
            .insights_endpoint
            .clone()
            .or_else(|| std::env::var(ENDPOINT_ENV).ok())
            .unwrap_or_default();
        let api_key = args
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok());

        let service = HttpInsightService::new(endpoint, api_key)?;
        Some(generate_insights(&service, &report.on_page, &report.technical).await)
    } else {
        None
    };

    // Output report
    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&report, insight_text.as_deref());
        }
    }

    // Save to file if requested
    if let Some(filename) = args.save {
        Reporter::save_json_report(&report, &filename)?;
    }

    Ok(())
}
