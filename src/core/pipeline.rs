use crate::core::{extract, normalize, request, response};
use crate::core::{ConfigProvider, Pipeline, RawItem, Storage, TimeWindow, TransformResult};
use crate::utils::error::{AuctionError, Result};
use reqwest::Client;

const OUTPUT_FILENAME: &str = "auction_items.csv";

/// One auction search run: fetch raw records from the Finding API,
/// normalize and window-filter them, write the survivors as CSV.
///
/// The time window is injected at construction so the whole run is
/// deterministic for a given `now`; nothing below this point reads the
/// wall clock.
pub struct SearchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    window: TimeWindow,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SearchPipeline<S, C> {
    pub fn new(storage: S, config: C, window: TimeWindow) -> Self {
        Self {
            storage,
            config,
            window,
            client: Client::new(),
        }
    }

    fn render_csv(&self, listings: &[crate::core::Listing]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Auction ID", "Title", "Price", "End Time"])?;

        for listing in listings {
            let (end_display, _) =
                normalize::to_zone(listing.end_time, self.config.display_zone())?;
            writer.write_record([
                listing.id.as_str(),
                listing.title.as_str(),
                &listing.price.value.to_string(),
                &end_display,
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AuctionError::ProcessingError {
                message: format!("CSV buffer error: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| AuctionError::ProcessingError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SearchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawItem>> {
        let params = request::search_params(&self.config, &self.window);

        tracing::debug!("making search request to {}", self.config.api_endpoint());
        let http_response = self
            .client
            .get(self.config.api_endpoint())
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("search response status: {}", http_response.status());
        let body: serde_json::Value = http_response.json().await?;
        response::parse_search_response(&body)
    }

    async fn transform(&self, data: Vec<RawItem>) -> Result<TransformResult> {
        let (normalized, skipped) = extract::extract_all(&data)?;
        if skipped > 0 {
            tracing::warn!("skipped {} of {} records", skipped, data.len());
        }

        let listings = crate::core::window::select_in_window(normalized, self.window);
        tracing::debug!("{} listings end inside the window", listings.len());

        let csv_output = self.render_csv(&listings)?;

        Ok(TransformResult {
            listings,
            skipped,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file(OUTPUT_FILENAME, result.csv_output.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AuctionError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        api_endpoint: String,
        display_zone: String,
    }

    impl MockConfig {
        fn new(api_endpoint: String) -> Self {
            Self {
                api_endpoint,
                display_zone: "UTC".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }
        fn app_id(&self) -> &str {
            "test-app-id"
        }
        fn keywords(&self) -> &str {
            "michael jordan"
        }
        fn category_id(&self) -> Option<&str> {
            Some("213")
        }
        fn max_price(&self) -> Option<&str> {
            Some("5.00")
        }
        fn entries_per_page(&self) -> usize {
            50
        }
        fn window_hours(&self) -> i64 {
            24
        }
        fn display_zone(&self) -> &str {
            &self.display_zone
        }
        fn output_path(&self) -> &str {
            "test_output"
        }
    }

    fn day_window() -> TimeWindow {
        TimeWindow::between(
            Utc.with_ymd_and_hms(2024, 8, 16, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 8, 17, 0, 0, 0).unwrap(),
        )
    }

    fn finding_body() -> serde_json::Value {
        serde_json::json!({
            "findItemsAdvancedResponse": [{
                "ack": ["Success"],
                "searchResult": [{
                    "@count": "2",
                    "item": [
                        {
                            "itemId": ["1"],
                            "title": ["Test Card"],
                            "viewItemURL": ["http://x"],
                            "sellingStatus": [{
                                "currentPrice": [{"@currencyId": "USD", "__value__": "2.50"}]
                            }],
                            "listingInfo": [{"endTime": ["2024-08-16T23:59:59.000Z"]}]
                        },
                        {
                            "itemId": ["2"],
                            "title": ["Ends Too Late"],
                            "sellingStatus": [{
                                "currentPrice": [{"__value__": "4.00"}]
                            }],
                            "listingInfo": [{"endTime": ["2024-08-18T12:00:00.000Z"]}]
                        }
                    ]
                }]
            }]
        })
    }

    #[tokio::test]
    async fn extract_parses_finding_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/finding")
                .query_param("OPERATION-NAME", "findItemsAdvanced")
                .query_param("SECURITY-APPNAME", "test-app-id");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(finding_body());
        });

        let pipeline = SearchPipeline::new(
            MockStorage::new(),
            MockConfig::new(server.url("/finding")),
            day_window(),
        );

        let raws = pipeline.extract().await.unwrap();

        api_mock.assert();
        assert_eq!(raws.len(), 2);
        assert_eq!(raws[0].item_id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn extract_surfaces_http_failure_as_api_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/finding");
            then.status(500);
        });

        let pipeline = SearchPipeline::new(
            MockStorage::new(),
            MockConfig::new(server.url("/finding")),
            day_window(),
        );

        let err = pipeline.extract().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, AuctionError::ApiError(_)));
    }

    #[tokio::test]
    async fn transform_filters_to_window_and_renders_csv() {
        let pipeline = SearchPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://unused".to_string()),
            day_window(),
        );

        let raws = response::parse_search_response(&finding_body()).unwrap();
        let result = pipeline.transform(raws).await.unwrap();

        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.listings[0].id, "1");
        assert_eq!(result.skipped, 0);

        let lines: Vec<&str> = result.csv_output.lines().collect();
        assert_eq!(lines[0], "Auction ID,Title,Price,End Time");
        assert_eq!(lines[1], "1,Test Card,2.50,2024-08-16 23:59:59 UTC+0000");
    }

    #[tokio::test]
    async fn transform_skips_unusable_records() {
        let pipeline = SearchPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://unused".to_string()),
            day_window(),
        );

        let mut raws = response::parse_search_response(&finding_body()).unwrap();
        raws[0].end_time = Some(crate::domain::model::EndTimeValue::Text(
            "garbage".to_string(),
        ));

        let result = pipeline.transform(raws).await.unwrap();

        assert_eq!(result.skipped, 1);
        assert!(result.listings.is_empty());
    }

    #[tokio::test]
    async fn load_writes_csv_through_storage() {
        let storage = MockStorage::new();
        let pipeline = SearchPipeline::new(
            storage.clone(),
            MockConfig::new("http://unused".to_string()),
            day_window(),
        );

        let result = TransformResult {
            listings: vec![],
            skipped: 0,
            csv_output: "Auction ID,Title,Price,End Time\n".to_string(),
        };

        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "test_output/auction_items.csv");
        let stored = storage.get_file("auction_items.csv").await.unwrap();
        assert_eq!(stored, b"Auction ID,Title,Price,End Time\n");
    }

    #[tokio::test]
    async fn transform_renders_end_time_in_display_zone() {
        let mut config = MockConfig::new("http://unused".to_string());
        config.display_zone = "America/Los_Angeles".to_string();
        let pipeline = SearchPipeline::new(MockStorage::new(), config, day_window());

        let raws = response::parse_search_response(&finding_body()).unwrap();
        let result = pipeline.transform(raws).await.unwrap();

        assert!(result
            .csv_output
            .contains("2024-08-16 16:59:59 PDT-0700"));
    }
}
