//! Synthetic Parquet fixture data.
//!
//! Writes a single `IntColumn: Int32` table where every tenth row is an
//! outlier in [150, 200] and every other row sits in [0, 90], and reads such
//! files back for verification and aggregation.

pub mod config;
pub mod error;
pub mod generator;
pub mod query;
pub mod schema;
pub mod verify;
pub mod writer;

pub use config::FixtureConfig;
pub use error::{FixtureError, Result};
pub use generator::Band;
pub use verify::{FixtureStats, verify_fixture};
pub use writer::{WriteSummary, confirmation_message, write_fixture};

/// Install the stderr log subscriber the binaries share.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
}
