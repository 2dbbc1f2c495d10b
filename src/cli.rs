use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "reportify")]
#[command(about = "A CLI SEO audit report generator", long_about = None)]
pub struct Cli {
    /// The URL to audit
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Request AI-powered actionable insights for the report
    #[arg(short, long)]
    pub insights: bool,

    /// Insight service endpoint (or REPORTIFY_INSIGHTS_ENDPOINT env var)
    #[arg(long)]
    pub insights_endpoint: Option<String>,

    /// Insight service API key (or REPORTIFY_API_KEY env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
