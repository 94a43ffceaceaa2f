//! Seed command handler

use crate::config::Config;
use crate::db::{Store, seed};

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let summary = seed::seed_sample_data(&store).await?;

    println!("✓ Sample data inserted");
    println!("  Venues:  {}", summary.venues);
    println!("  Artists: {}", summary.artists);
    println!("  Shows:   {}", summary.shows);

    Ok(())
}
