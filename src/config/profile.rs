use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AuctionError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Search settings loaded from a TOML profile file. A profile fully
/// replaces the CLI search flags, so repeated searches (a keyword watch
/// list) live in version-controllable files instead of shell history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProfile {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub window: WindowConfig,
    pub display: Option<DisplayConfig>,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub app_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub keywords: String,
    pub category_id: Option<String>,
    pub max_price: Option<String>,
    pub entries_per_page: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub hours: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

impl SearchProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AuctionError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AuctionError::ConfigError {
            field: "profile".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` placeholders with environment values, so secrets
/// like the app id stay out of the profile file. Unset variables are left
/// verbatim and caught by validation.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl ConfigProvider for SearchProfile {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn app_id(&self) -> &str {
        &self.api.app_id
    }

    fn keywords(&self) -> &str {
        &self.search.keywords
    }

    fn category_id(&self) -> Option<&str> {
        self.search.category_id.as_deref()
    }

    fn max_price(&self) -> Option<&str> {
        self.search.max_price.as_deref()
    }

    fn entries_per_page(&self) -> usize {
        self.search.entries_per_page.unwrap_or(50)
    }

    fn window_hours(&self) -> i64 {
        self.window.hours
    }

    fn display_zone(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.timezone.as_deref())
            .unwrap_or("UTC")
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }
}

impl Validate for SearchProfile {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.endpoint", &self.api.endpoint)?;
        validation::validate_non_empty_string("api.app_id", &self.api.app_id)?;
        if self.api.app_id.starts_with("${") {
            return Err(AuctionError::ConfigError {
                field: "api.app_id".to_string(),
                reason: format!("Unresolved environment placeholder: {}", self.api.app_id),
            });
        }
        validation::validate_non_empty_string("search.keywords", &self.search.keywords)?;
        validation::validate_positive_number("search.entries_per_page", self.entries_per_page(), 1)?;
        validation::validate_zone("display.timezone", self.display_zone())?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        Ok(())
    }
}
