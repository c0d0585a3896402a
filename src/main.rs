use auction_etl::utils::{logger, validation::Validate};
use auction_etl::{
    CliConfig, ConfigProvider, EtlEngine, LocalStorage, SearchPipeline, SearchProfile, TimeWindow,
};
use chrono::{Duration, Utc};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("starting auction-etl");

    if config.app_id.is_none() {
        config.app_id = std::env::var("API_KEY").ok();
    }

    if let Some(path) = config.profile.clone() {
        tracing::debug!("loading search profile from {}", path);
        let profile = SearchProfile::from_file(&path)?;
        run(profile).await
    } else {
        run(config).await
    }
}

async fn run<C>(config: C) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Reference instant for the whole run; everything downstream is
    // deterministic given this value.
    let window = TimeWindow::ending_within(Utc::now(), Duration::hours(config.window_hours()));

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SearchPipeline::new(storage, config, window);
    let engine = EtlEngine::new(pipeline);

    let output_path = engine.run().await?;
    println!("Auction listings saved to: {}", output_path);
    Ok(())
}
