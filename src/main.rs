use anyhow::Result;

use furia_scraper::config::ScraperConfig;
use furia_scraper::module::profile::ProfileScraper;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = ScraperConfig::load_or_default(&config_path)?;

    let _logging_guard =
        furia_scraper::logging::init_logging(&config.log_dir, "furia-scraper", &config.log_level);

    tracing::info!("furia-scraper starting");
    tracing::info!("Output snapshot path: {}", config.output_path);

    let scraper = ProfileScraper::new(config);
    scraper.run().await?;

    tracing::info!("Extraction run complete");
    Ok(())
}
