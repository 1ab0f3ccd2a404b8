//! Table and column metadata: the contract between the external metadata
//! source and the generation engine.

pub mod provider;
pub mod types;

pub use provider::{InMemoryMetadata, MetadataProvider};
pub use types::{ColumnDefinition, SemanticType, TableDefinition};
