pub mod profile;
pub mod storage;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "auction-etl")]
#[command(about = "Searches auction listings ending soon and exports them as CSV")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "https://svcs.ebay.com/services/search/FindingService/v1"
    )]
    pub api_endpoint: String,

    /// Finding API application id; falls back to the API_KEY environment
    /// variable when omitted.
    #[arg(long)]
    pub app_id: Option<String>,

    #[arg(long, default_value = "football rookie card")]
    pub keywords: String,

    #[arg(long, default_value = "213")]
    pub category_id: String,

    /// Maximum current price, e.g. "5.00". No price filter when omitted.
    #[arg(long)]
    pub max_price: Option<String>,

    #[arg(long, default_value = "50")]
    pub entries_per_page: usize,

    /// Keep only auctions ending within this many hours from now.
    #[arg(long, default_value = "24")]
    pub window_hours: i64,

    /// IANA timezone used to render end times in the CSV.
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Read search settings from a TOML profile instead of the flags above.
    #[arg(long)]
    pub profile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn app_id(&self) -> &str {
        self.app_id.as_deref().unwrap_or_default()
    }

    fn keywords(&self) -> &str {
        &self.keywords
    }

    fn category_id(&self) -> Option<&str> {
        (!self.category_id.is_empty()).then_some(self.category_id.as_str())
    }

    fn max_price(&self) -> Option<&str> {
        self.max_price.as_deref()
    }

    fn entries_per_page(&self) -> usize {
        self.entries_per_page
    }

    fn window_hours(&self) -> i64 {
        self.window_hours
    }

    fn display_zone(&self) -> &str {
        &self.timezone
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("app_id", self.app_id.as_deref().unwrap_or_default())?;
        validation::validate_non_empty_string("keywords", &self.keywords)?;
        validation::validate_positive_number("entries_per_page", self.entries_per_page, 1)?;
        validation::validate_zone("timezone", &self.timezone)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            api_endpoint: "https://svcs.ebay.com/services/search/FindingService/v1".to_string(),
            app_id: Some("test-app-id".to_string()),
            keywords: "football rookie card".to_string(),
            category_id: "213".to_string(),
            max_price: None,
            entries_per_page: 50,
            window_hours: 24,
            timezone: "UTC".to_string(),
            output_path: "./output".to_string(),
            profile: None,
            verbose: false,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn missing_app_id_fails_validation() {
        let mut config = base_config();
        config.app_id = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_timezone_fails_validation() {
        let mut config = base_config();
        config.timezone = "Nowhere/Special".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_category_means_no_category_filter() {
        let mut config = base_config();
        config.category_id = String::new();
        assert_eq!(ConfigProvider::category_id(&config), None);
    }
}
