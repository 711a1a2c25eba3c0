pub mod file;

use crate::core::DEFAULT_PAGE_SIZE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use file::FileConfig;
use std::path::PathBuf;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openelectricity.org.au/v4/facilities";

#[derive(Debug, Clone, Parser)]
#[command(name = "facility-browser")]
#[command(about = "Browse power-generation facilities with fuel-type and status filters")]
pub struct CliArgs {
    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long)]
    pub api_token: Option<String>,

    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Fuel-type categories to enable (e.g. Coal,Solar)")]
    pub fuel_type: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Status categories to enable (e.g. Operating)")]
    pub status: Vec<String>,

    #[arg(long, default_value = "0", help = "Page to show, zero-based")]
    pub page: usize,

    #[arg(long, help = "List the available category labels and exit")]
    pub list_categories: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully-resolved settings: command-line flags win over the config file,
/// which wins over the built-in defaults.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub api_endpoint: String,
    pub api_token: Option<String>,
    pub page_size: usize,
}

impl BrowserConfig {
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            api_endpoint: args
                .api_endpoint
                .clone()
                .or_else(|| file.endpoint().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            api_token: args
                .api_token
                .clone()
                .or_else(|| file.token().map(str::to_string)),
            page_size: args
                .page_size
                .or_else(|| file.page_size())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}

impl ConfigProvider for BrowserConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for BrowserConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
