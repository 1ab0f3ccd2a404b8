use chrono::{Duration as ChronoDuration, NaiveDate, NaiveDateTime};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, RowsmithError};
use crate::generate::value::Value;
use crate::schema::types::{ColumnDefinition, SemanticType};

/// Text length used when a column declares no maximum.
const DEFAULT_TEXT_LENGTH: u32 = 16;

/// Precision used when a numeric column declares none.
const DEFAULT_PRECISION: u32 = 9;

/// Largest precision whose unscaled value still fits an i64.
const MAX_PRECISION: u32 = 18;

/// Temporal values are drawn from a ten-year window after this anchor.
const TEMPORAL_WINDOW_DAYS: i64 = 3653;

const SECONDS_PER_DAY: i64 = 86_400;

/// One value-creation strategy per semantic column type.
///
/// The value at absolute row index `r` is a pure function of
/// `(seed, column, r)`: `create(col, 3, 5)` followed by `create(col, 3, 8)`
/// concatenates to exactly `create(col, 6, 5)`, so batches can resume a
/// previous run without repeating or skipping stream state.
pub trait ValueCreator: std::fmt::Debug {
    /// Fix the pseudo-random stream. Same seed, same output.
    fn set_seed(&mut self, seed: u64);

    /// Produce `row_count` values for `column`, covering absolute row
    /// indices `start_row..start_row + row_count`. Never mutates the column.
    fn create(&self, column: &ColumnDefinition, row_count: usize, start_row: usize) -> Vec<Value>;
}

/// Select the creator for a column's semantic type.
///
/// Exhaustive over the closed enumeration — an `Unknown` type fails here,
/// before any value is generated, rather than surfacing as a missing
/// strategy mid-pipeline.
pub fn creator_for(table: &str, column: &ColumnDefinition) -> Result<Box<dyn ValueCreator>> {
    match &column.semantic_type {
        SemanticType::Text => Ok(Box::new(TextCreator::default())),
        SemanticType::FixedChar => Ok(Box::new(FixedCharCreator::default())),
        SemanticType::Numeric => Ok(Box::new(NumericCreator::default())),
        SemanticType::Temporal => Ok(Box::new(TemporalCreator::default())),
        SemanticType::Unknown(raw) => Err(RowsmithError::UnsupportedColumnType {
            table: table.to_string(),
            column: column.name.clone(),
            raw_type: raw.clone(),
        }),
    }
}

/// Derive the RNG for one absolute row index from the creator seed.
///
/// splitmix64 finalizer over `(seed, row)` — adjacent rows and adjacent
/// seeds land in unrelated streams, and resumption at any `start_row` is
/// exact because no stream state spans rows.
fn row_rng(seed: u64, row: usize) -> StdRng {
    let mut z = seed
        .wrapping_add((row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

/// Variable-length printable strings bounded by the column's max length.
#[derive(Debug, Default)]
pub struct TextCreator {
    seed: u64,
}

impl ValueCreator for TextCreator {
    fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    fn create(&self, column: &ColumnDefinition, row_count: usize, start_row: usize) -> Vec<Value> {
        let max_length = column.max_length.unwrap_or(DEFAULT_TEXT_LENGTH).max(1) as usize;
        (start_row..start_row + row_count)
            .map(|row| {
                let mut rng = row_rng(self.seed, row);
                let target = rng.random_range(1..=max_length);
                let mut text = String::with_capacity(target);
                while text.len() < target {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    let word: String = Word().fake_with_rng(&mut rng);
                    text.push_str(&word);
                }
                text.truncate(target);
                let trimmed = text.trim_end().len();
                text.truncate(trimmed);
                Value::Text(text)
            })
            .collect()
    }
}

/// Fixed-width alphanumeric strings of exactly the declared width.
#[derive(Debug, Default)]
pub struct FixedCharCreator {
    seed: u64,
}

impl ValueCreator for FixedCharCreator {
    fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    fn create(&self, column: &ColumnDefinition, row_count: usize, start_row: usize) -> Vec<Value> {
        let width = column.max_length.unwrap_or(1).max(1) as usize;
        (start_row..start_row + row_count)
            .map(|row| {
                let mut rng = row_rng(self.seed, row);
                let chars: String = (0..width).map(|_| rng.sample(Alphanumeric) as char).collect();
                Value::Text(chars)
            })
            .collect()
    }
}

/// Non-negative decimals clamped into the column's precision and scale.
#[derive(Debug, Default)]
pub struct NumericCreator {
    seed: u64,
}

impl ValueCreator for NumericCreator {
    fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    fn create(&self, column: &ColumnDefinition, row_count: usize, start_row: usize) -> Vec<Value> {
        let precision = column
            .numeric_precision
            .unwrap_or(DEFAULT_PRECISION)
            .clamp(1, MAX_PRECISION);
        let scale = column.numeric_scale.unwrap_or(0).min(precision);
        let max_unscaled = 10i64.pow(precision) - 1;
        (start_row..start_row + row_count)
            .map(|row| {
                let mut rng = row_rng(self.seed, row);
                Value::Decimal {
                    unscaled: rng.random_range(0..=max_unscaled),
                    scale,
                }
            })
            .collect()
    }
}

/// Date-times drawn from a fixed ten-year window.
///
/// The anchor is a constant, not the wall clock: output depends only on the
/// arguments, so a regenerated batch is identical whenever it runs.
#[derive(Debug, Default)]
pub struct TemporalCreator {
    seed: u64,
}

fn temporal_anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl ValueCreator for TemporalCreator {
    fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    fn create(&self, _column: &ColumnDefinition, row_count: usize, start_row: usize) -> Vec<Value> {
        let anchor = temporal_anchor();
        (start_row..start_row + row_count)
            .map(|row| {
                let mut rng = row_rng(self.seed, row);
                let days = rng.random_range(0..TEMPORAL_WINDOW_DAYS);
                let seconds = rng.random_range(0..SECONDS_PER_DAY);
                Value::Timestamp(
                    anchor + ChronoDuration::days(days) + ChronoDuration::seconds(seconds),
                )
            })
            .collect()
    }
}
