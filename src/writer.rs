use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use arrow_array::RecordBatch;
use object_store::ObjectStore;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use parquet::{
    arrow::async_writer::{AsyncArrowWriter, ParquetObjectWriter},
    basic::Compression,
    file::properties::WriterProperties,
};
use tracing::{debug, info};

use crate::config::FixtureConfig;
use crate::error::Result;
use crate::generator::generate_batch;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteSummary {
    pub file_name: String,
    pub path: PathBuf,
    pub rows: usize,
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", confirmation_message(&self.file_name, self.rows))
    }
}

pub fn confirmation_message(file_name: &str, rows: usize) -> String {
    format!("Successfully created '{}' with {} rows.", file_name, rows)
}

pub fn fixture_writer_properties() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Generate the fixture table described by `config` and write it, replacing
/// whatever file was there before.
pub async fn write_fixture(config: &FixtureConfig) -> Result<WriteSummary> {
    let batch = generate_batch(config)?;
    let rows = batch.num_rows();
    info!(rows, "generated fixture data");

    let object_store = Arc::new(LocalFileSystem::new_with_prefix(&config.directory)?);
    write_batch(
        &batch,
        object_store,
        Path::from(config.file_name.as_str()),
        fixture_writer_properties(),
    )
    .await?;

    let path = config.output_path();
    info!(path = %path.display(), rows, "wrote fixture file");

    Ok(WriteSummary {
        file_name: config.file_name.clone(),
        path,
        rows,
    })
}

pub async fn write_batch(
    batch: &RecordBatch,
    object_store: Arc<dyn ObjectStore>,
    path: Path,
    props: WriterProperties,
) -> Result<()> {
    debug!(%path, rows = batch.num_rows(), "writing parquet");
    let parquet_object_writer = ParquetObjectWriter::new(object_store, path);

    let mut parquet_writer =
        AsyncArrowWriter::try_new(parquet_object_writer, batch.schema(), Some(props))?;

    parquet_writer.write(batch).await?;
    parquet_writer.close().await?;

    Ok(())
}
