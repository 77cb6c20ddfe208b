//! Read a fixture back and check it is still the shape consumers expect.

use std::fs::File;
use std::path::Path;

use arrow_array::{Array, RecordBatch};
use arrow_array::cast::AsArray;
use arrow_array::types::Int32Type;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::debug;

use crate::error::{FixtureError, Result};
use crate::generator::Band;
use crate::schema::is_fixture_schema;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BandStats {
    pub rows: usize,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl BandStats {
    fn observe(&mut self, value: i32) {
        self.rows += 1;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureStats {
    pub rows: usize,
    pub high: BandStats,
    pub low: BandStats,
}

impl FixtureStats {
    pub fn band(&self, band: Band) -> &BandStats {
        match band {
            Band::High => &self.high,
            Band::Low => &self.low,
        }
    }

    fn observe_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        let column = batch
            .column(0)
            .as_primitive_opt::<Int32Type>()
            .ok_or_else(|| FixtureError::SchemaMismatch("IntColumn is not Int32".to_string()))?;
        if column.null_count() > 0 {
            return Err(FixtureError::SchemaMismatch("IntColumn contains nulls".to_string()));
        }

        for &value in column.values().iter() {
            let index = self.rows;
            let band = Band::for_index(index);
            if !band.contains(value) {
                return Err(FixtureError::OutOfBand {
                    index,
                    value,
                    min: band.min(),
                    max: band.max(),
                });
            }
            match band {
                Band::High => self.high.observe(value),
                Band::Low => self.low.observe(value),
            }
            self.rows += 1;
        }
        Ok(())
    }
}

fn footer_row_count(num_rows: i64) -> Result<usize> {
    usize::try_from(num_rows)
        .map_err(|_| FixtureError::SchemaMismatch(format!("footer reports {num_rows} rows")))
}

/// Read every row of the fixture at `path`, checking the schema and the band
/// of each value. With `expected_rows` set, the row count must match too.
pub fn verify_fixture(
    path: impl AsRef<Path>,
    expected_rows: Option<usize>,
) -> Result<FixtureStats> {
    let file = File::open(path.as_ref())?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let schema = builder.schema();
    if !is_fixture_schema(schema) {
        return Err(FixtureError::SchemaMismatch(format!("{:?}", schema.fields())));
    }

    let metadata_rows = footer_row_count(builder.metadata().file_metadata().num_rows())?;
    debug!(path = %path.as_ref().display(), rows = metadata_rows, "verifying fixture");

    let mut stats = FixtureStats::default();
    for batch in builder.build()? {
        stats.observe_batch(&batch?)?;
    }

    if stats.rows != metadata_rows {
        return Err(FixtureError::RowCountMismatch {
            expected: metadata_rows,
            actual: stats.rows,
        });
    }
    if let Some(expected) = expected_rows {
        if stats.rows != expected {
            return Err(FixtureError::RowCountMismatch {
                expected,
                actual: stats.rows,
            });
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow_array::Int32Array;
    use parquet::arrow::ArrowWriter;

    use super::*;
    use crate::schema::fixture_schema_ref;

    fn write_values(path: &Path, values: Vec<i32>) {
        let batch =
            RecordBatch::try_new(fixture_schema_ref(), vec![Arc::new(Int32Array::from(values))])
                .unwrap();
        let file = File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn accepts_banded_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.parquet");
        write_values(&path, vec![150, 0, 90, 45, 1, 2, 3, 4, 5, 6, 200, 7]);

        let stats = verify_fixture(&path, Some(12)).unwrap();
        assert_eq!(stats.rows, 12);
        assert_eq!(stats.high.rows, 2);
        assert_eq!(stats.high.min, Some(150));
        assert_eq!(stats.high.max, Some(200));
        assert_eq!(stats.low.rows, 10);
        assert_eq!(stats.band(Band::Low).min, Some(0));
        assert_eq!(stats.band(Band::Low).max, Some(90));
    }

    #[test]
    fn rejects_out_of_band_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.parquet");
        write_values(&path, vec![175, 10, 91]);

        match verify_fixture(&path, None) {
            Err(FixtureError::OutOfBand { index, value, min, max }) => {
                assert_eq!((index, value, min, max), (2, 91, 0, 90));
            }
            other => panic!("expected OutOfBand, got {other:?}"),
        }
    }

    #[test]
    fn rejects_low_value_in_high_band() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.parquet");
        write_values(&path, vec![149]);

        assert!(matches!(
            verify_fixture(&path, None),
            Err(FixtureError::OutOfBand { index: 0, value: 149, .. })
        ));
    }

    #[test]
    fn rejects_wrong_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.parquet");
        write_values(&path, vec![160, 20]);

        assert!(matches!(
            verify_fixture(&path, Some(3)),
            Err(FixtureError::RowCountMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn rejects_foreign_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.parquet");
        let schema = Arc::new(arrow_schema::Schema::new(vec![arrow_schema::Field::new(
            "id",
            arrow_schema::DataType::Int32,
            false,
        )]));
        let batch =
            RecordBatch::try_new(schema.clone(), vec![Arc::new(Int32Array::from(vec![1]))])
                .unwrap();
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        assert!(matches!(
            verify_fixture(&path, None),
            Err(FixtureError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn rejects_null_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nulls.parquet");
        let values = Int32Array::from(vec![Some(160), None, Some(3)]);
        let batch = RecordBatch::try_new(fixture_schema_ref(), vec![Arc::new(values)]).unwrap();
        let mut writer =
            ArrowWriter::try_new(File::create(&path).unwrap(), batch.schema(), None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        assert!(matches!(
            verify_fixture(&path, None),
            Err(FixtureError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn negative_footer_row_count() {
        assert_eq!(footer_row_count(0).unwrap(), 0);
        assert_eq!(footer_row_count(100).unwrap(), 100);
        assert!(matches!(
            footer_row_count(-1),
            Err(FixtureError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            verify_fixture(dir.path().join("absent.parquet"), None),
            Err(FixtureError::Io(_))
        ));
    }
}
