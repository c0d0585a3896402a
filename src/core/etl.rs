use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("starting auction search run");

        let raw_data = self.pipeline.extract().await?;
        tracing::info!("fetched {} raw records", raw_data.len());

        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "{} listings in window, {} records skipped",
            result.listings.len(),
            result.skipped
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("output saved to {}", output_path);

        Ok(output_path)
    }
}
