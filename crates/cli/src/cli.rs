use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "https://www.solartopps.com";

/// Output format for generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: html, json", s)),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {}. Valid options: text, json", s)),
        }
    }
}

/// Generate SEO-formatted blog posts and publish them to WordPress
#[derive(Parser, Debug)]
#[command(name = "postsmith")]
#[command(author = "Postsmith Contributors")]
#[command(version)]
#[command(about = "Generate SEO blog posts and publish them to WordPress", long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log format (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Generator configuration file (default: <config dir>/postsmith/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a blog post for a focus keyword
    Generate(GenerateArgs),
    /// Publish an existing HTML post
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Focus keyword
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Secondary keywords (comma separated or repeated)
    #[arg(long, value_delimiter = ',', value_name = "TERMS")]
    pub secondary: Vec<String>,

    /// Reference material as inline text
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["reference_url", "reference_file"])]
    pub reference_text: Option<String>,

    /// Reference material fetched from a URL
    #[arg(long, value_name = "URL", conflicts_with = "reference_file")]
    pub reference_url: Option<String>,

    /// Reference material read from a UTF-8 text file
    #[arg(long, value_name = "FILE")]
    pub reference_file: Option<PathBuf>,

    /// Custom slug (default: derived from the keyword)
    #[arg(long, value_name = "SLUG")]
    pub slug: Option<String>,

    /// Chart data as label:value pairs, e.g. 2020:15,2021:23
    #[arg(long, value_name = "PAIRS")]
    pub data_points: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (html, json)
    #[arg(short, long, default_value = "html", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// HTTP timeout for --reference-url in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub fetch_timeout: u64,

    /// Publish the generated post after writing it
    #[arg(long)]
    pub publish: bool,

    #[command(flatten)]
    pub publish_options: PublishOptions,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// HTML file to publish
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub publish_options: PublishOptions,
}

#[derive(Args, Debug)]
pub struct PublishOptions {
    /// Post status (draft, publish, future)
    #[arg(long, default_value = "draft", value_name = "STATUS", value_parser = ["draft", "publish", "future"])]
    pub status: String,

    /// Category IDs (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub categories: Vec<u64>,

    /// Tag IDs (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub tags: Vec<u64>,

    /// Build the request without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// WordPress site URL
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "WP_BASE_URL", value_name = "URL")]
    pub base_url: String,

    /// WordPress username
    #[arg(long, env = "WP_USERNAME", value_name = "USER")]
    pub username: Option<String>,

    /// WordPress application password
    #[arg(long, env = "WP_APPLICATION_PASSWORD", hide_env_values = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// HTTP timeout for the publish request in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,
}
