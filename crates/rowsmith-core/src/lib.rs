//! Deterministic, metadata-driven synthetic row generation.
//!
//! Given a table's column definitions, produce N rows of plausible values:
//! one creation strategy per semantic column type, reproducible per-column
//! seeding, and row-major assembly of the result. Metadata comes from an
//! external [`schema::MetadataProvider`]; the engine itself talks to no
//! database, filesystem, or UI.

pub mod error;
pub mod generate;
pub mod schema;

// Re-export key types for convenience
pub use error::{Result, RowsmithError};
pub use generate::{GeneratedRow, GenerationEngine, GenerationResult, Value, ValueCreator};
pub use schema::{ColumnDefinition, InMemoryMetadata, MetadataProvider, SemanticType, TableDefinition};
