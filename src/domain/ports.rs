use crate::domain::model::{RawItem, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn app_id(&self) -> &str;
    fn keywords(&self) -> &str;
    fn category_id(&self) -> Option<&str>;
    fn max_price(&self) -> Option<&str>;
    fn entries_per_page(&self) -> usize;
    fn window_hours(&self) -> i64;
    fn display_zone(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawItem>>;
    async fn transform(&self, data: Vec<RawItem>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
