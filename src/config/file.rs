use crate::utils::error::{BrowserError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration file. Anything present here is overridden by
/// an explicit command-line flag.
///
/// ```toml
/// [api]
/// endpoint = "https://api.openelectricity.org.au/v4/facilities"
/// token = "..."
///
/// [display]
/// page_size = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub page_size: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BrowserError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.api.as_ref().and_then(|a| a.endpoint.as_deref())
    }

    pub fn token(&self) -> Option<&str> {
        self.api.as_ref().and_then(|a| a.token.as_deref())
    }

    pub fn page_size(&self) -> Option<usize> {
        self.display.as_ref().and_then(|d| d.page_size)
    }
}
