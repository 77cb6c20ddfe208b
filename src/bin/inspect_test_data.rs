use anyhow::Context;
use arrow::util::pretty::pretty_format_batches;
use tracing::info;

use parquet_test_data::query::band_summary_batches;
use parquet_test_data::{FixtureConfig, init_tracing, verify_fixture};

// Reads the file `generate_test_data` left in the current directory.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = FixtureConfig::default().output_path();

    let stats = verify_fixture(&path, None)
        .with_context(|| format!("{} is not valid fixture data", path.display()))?;
    info!(
        rows = stats.rows,
        high = stats.high.rows,
        low = stats.low.rows,
        "fixture verified"
    );

    let batches = band_summary_batches(&path)
        .await
        .context("band summary query failed")?;
    println!("{}", pretty_format_batches(&batches)?);

    Ok(())
}
