use anyhow::Context;

use parquet_test_data::{FixtureConfig, init_tracing, write_fixture};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = FixtureConfig::default();
    let summary = write_fixture(&config)
        .await
        .with_context(|| format!("failed to write {}", config.output_path().display()))?;

    println!("{}", summary);
    Ok(())
}
