use std::path::Path;

use arrow_array::RecordBatch;
use arrow_array::cast::AsArray;
use arrow_array::types::{Int32Type, Int64Type};
use datafusion::prelude::{ParquetReadOptions, SessionContext};
use datafusion::sql::TableReference;
use tracing::debug;

use crate::config::HIGH_BAND_MIN;
use crate::error::{FixtureError, Result};
use crate::generator::Band;

const TABLE_NAME: &str = "fixture";

/// One row of the per-band aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandRow {
    pub band: Band,
    pub rows: i64,
    pub min: i32,
    pub max: i32,
}

fn band_summary_sql() -> String {
    format!(
        "select
            \"IntColumn\" >= {HIGH_BAND_MIN} as is_high,
            count(*) as row_count,
            min(\"IntColumn\") as min_value,
            max(\"IntColumn\") as max_value
        from {TABLE_NAME}
        group by 1
        order by 1 desc"
    )
}

/// Register the parquet file at `path` and run the per-band aggregate over it.
pub async fn band_summary_batches(path: impl AsRef<Path>) -> Result<Vec<RecordBatch>> {
    let ctx = SessionContext::new();
    let location = path.as_ref().to_string_lossy().to_string();
    ctx.register_parquet(
        TableReference::bare(TABLE_NAME),
        &location,
        ParquetReadOptions::default(),
    )
    .await?;

    let sql = band_summary_sql();
    debug!(%location, %sql, "running band summary");
    let df = ctx.sql(&sql).await?;
    Ok(df.collect().await?)
}

/// Per-band row counts and value ranges, high band first. Bands with no rows
/// are left out.
pub async fn band_summary(path: impl AsRef<Path>) -> Result<Vec<BandRow>> {
    let batches = band_summary_batches(path).await?;

    let mut rows = vec![];
    for batch in &batches {
        let mismatch = || FixtureError::SchemaMismatch("unexpected band summary".to_string());
        let is_high = batch.column(0).as_boolean_opt().ok_or_else(mismatch)?;
        let counts = batch
            .column(1)
            .as_primitive_opt::<Int64Type>()
            .ok_or_else(mismatch)?;
        let mins = batch
            .column(2)
            .as_primitive_opt::<Int32Type>()
            .ok_or_else(mismatch)?;
        let maxs = batch
            .column(3)
            .as_primitive_opt::<Int32Type>()
            .ok_or_else(mismatch)?;

        for i in 0..batch.num_rows() {
            rows.push(BandRow {
                band: if is_high.value(i) {
                    Band::High
                } else {
                    Band::Low
                },
                rows: counts.value(i),
                min: mins.value(i),
                max: maxs.value(i),
            });
        }
    }
    Ok(rows)
}
