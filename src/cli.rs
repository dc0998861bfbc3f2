use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cu-directory",
    about = "Browse the UCCF Christian Union directory from the terminal",
    version
)]
pub struct Cli {
    /// API endpoint URL (overrides UCCF_API_URL and any config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file [default: ./.cu-directory/config.toml, fallback ~/.config/cu-directory/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Show full detail blocks (description, links, institutions)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
