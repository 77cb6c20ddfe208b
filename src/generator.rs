//! Synthetic fixture values.
//!
//! Every tenth row (0, 10, 20, ...) is an outlier drawn from the high band,
//! the rest come from the low band. Downstream consumers filter and
//! aggregate on that split, so row order matters.

use std::ops::RangeInclusive;
use std::sync::Arc;

use arrow_array::{Int32Array, RecordBatch};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{
    FixtureConfig, HIGH_BAND_MAX, HIGH_BAND_MIN, HIGH_BAND_STRIDE, LOW_BAND_MAX, LOW_BAND_MIN,
};
use crate::error::Result;
use crate::schema::fixture_schema_ref;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    High,
    Low,
}

impl Band {
    pub fn for_index(index: usize) -> Self {
        if index % HIGH_BAND_STRIDE == 0 {
            Band::High
        } else {
            Band::Low
        }
    }

    pub fn min(self) -> i32 {
        match self {
            Band::High => HIGH_BAND_MIN,
            Band::Low => LOW_BAND_MIN,
        }
    }

    pub fn max(self) -> i32 {
        match self {
            Band::High => HIGH_BAND_MAX,
            Band::Low => LOW_BAND_MAX,
        }
    }

    pub fn range(self) -> RangeInclusive<i32> {
        self.min()..=self.max()
    }

    pub fn contains(self, value: i32) -> bool {
        self.range().contains(&value)
    }

    /// Number of rows in this band for a table of `rows` rows.
    pub fn count(self, rows: usize) -> usize {
        let high = rows.div_ceil(HIGH_BAND_STRIDE);
        match self {
            Band::High => high,
            Band::Low => rows - high,
        }
    }
}

/// Seeded when the config carries a seed, OS entropy otherwise.
pub fn fixture_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn generate_values<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> Vec<i32> {
    let high = Uniform::new_inclusive(HIGH_BAND_MIN, HIGH_BAND_MAX);
    let low = Uniform::new_inclusive(LOW_BAND_MIN, LOW_BAND_MAX);

    let mut values = Vec::with_capacity(rows);
    for index in 0..rows {
        let value = match Band::for_index(index) {
            Band::High => high.sample(rng),
            Band::Low => low.sample(rng),
        };
        values.push(value);
    }
    values
}

pub fn generate_column<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> Int32Array {
    Int32Array::from(generate_values(rows, rng))
}

pub fn generate_batch(config: &FixtureConfig) -> Result<RecordBatch> {
    let mut rng = fixture_rng(config.seed);
    debug!(rows = config.rows, seeded = config.seed.is_some(), "generating fixture column");

    let column = generate_column(config.rows, &mut rng);
    let batch = RecordBatch::try_new(fixture_schema_ref(), vec![Arc::new(column)])?;
    Ok(batch)
}
