//! # Error Types
//!
//! Defines `RowsmithError`, the unified error enum for every failure mode in
//! the generation pipeline. Every variant carries enough context (table name,
//! column name, offending type) to diagnose immediately without digging
//! through logs.

use thiserror::Error;

/// All errors that can occur during row generation.
#[derive(Error, Debug)]
pub enum RowsmithError {
    #[error("Table name is empty (request entry {position})")]
    EmptyTableName { position: usize },

    #[error("Table '{table}' does not exist in the metadata source")]
    TableNotFound { table: String },

    #[error("Column {table}.{column} has unsupported type '{raw_type}': no value creator is registered for it")]
    UnsupportedColumnType {
        table: String,
        column: String,
        raw_type: String,
    },

    #[error("Row count must be positive, got {row_count}")]
    InvalidRowCount { row_count: usize },
}

pub type Result<T> = std::result::Result<T, RowsmithError>;
