use std::path::PathBuf;

pub const ROW_COUNT: usize = 10_000_000;
pub const FILE_NAME: &str = "TEST_DATA.parquet";
pub const COLUMN_NAME: &str = "IntColumn";

/// Every row at a multiple of this stride is drawn from the high band.
pub const HIGH_BAND_STRIDE: usize = 10;

pub const HIGH_BAND_MIN: i32 = 150;
pub const HIGH_BAND_MAX: i32 = 200;
pub const LOW_BAND_MIN: i32 = 0;
pub const LOW_BAND_MAX: i32 = 90;

/// Where and how much fixture data to write.
///
/// `Default` is what `generate_test_data` uses: the constants above, the
/// current directory, and an unseeded generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig {
    pub rows: usize,
    pub directory: PathBuf,
    pub file_name: String,
    pub seed: Option<u64>,
}

impl FixtureConfig {
    pub fn new(rows: usize, directory: impl Into<PathBuf>) -> Self {
        Self {
            rows,
            directory: directory.into(),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            rows: ROW_COUNT,
            directory: PathBuf::from("."),
            file_name: FILE_NAME.to_string(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = FixtureConfig::default();
        assert_eq!(config.rows, 10_000_000);
        assert_eq!(config.file_name, "TEST_DATA.parquet");
        assert_eq!(config.seed, None);
        assert_eq!(config.output_path(), PathBuf::from("./TEST_DATA.parquet"));
    }

    #[test]
    fn builder_overrides() {
        let config = FixtureConfig::new(100, "/tmp/fixtures")
            .with_seed(7)
            .with_file_name("small.parquet");
        assert_eq!(config.rows, 100);
        assert_eq!(config.seed, Some(7));
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/fixtures/small.parquet")
        );
    }
}
