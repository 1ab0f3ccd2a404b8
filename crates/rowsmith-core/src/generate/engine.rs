use indexmap::IndexMap;
use tracing::{error, info};

use crate::error::{Result, RowsmithError};
use crate::generate::creators::creator_for;
use crate::generate::value::Value;
use crate::schema::provider::MetadataProvider;

/// One generated row: column name → rendered value, keys in the owning
/// table's column order. An IndexMap (not HashMap) so that iteration and any
/// downstream serialization stay deterministic.
pub type GeneratedRow = IndexMap<String, String>;

/// The rows produced by one `generate` call.
///
/// Rows from multiple requested tables are concatenated into one flat
/// sequence with no boundary marker, matching the documented reference
/// behavior. The per-table spans recorded alongside let callers re-split the
/// flat form via [`GenerationResult::by_table`] without changing it.
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    rows: Vec<GeneratedRow>,
    spans: Vec<TableSpan>,
}

/// The slice of the flat row sequence contributed by one table.
#[derive(Debug, Clone)]
struct TableSpan {
    table: String,
    start: usize,
    len: usize,
}

impl GenerationResult {
    /// All rows, in table-request order and row order within each table.
    pub fn rows(&self) -> &[GeneratedRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<GeneratedRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows grouped per requested table, in request order.
    pub fn by_table(&self) -> impl Iterator<Item = (&str, &[GeneratedRow])> {
        self.spans
            .iter()
            .map(|span| (span.table.as_str(), &self.rows[span.start..span.start + span.len]))
    }
}

/// Orchestrates metadata lookup, per-column value creation, and row
/// assembly. Holds no state across calls: every `generate` invocation
/// returns a fresh result.
pub struct GenerationEngine<M: MetadataProvider> {
    metadata: M,
}

impl<M: MetadataProvider> GenerationEngine<M> {
    pub fn new(metadata: M) -> Self {
        Self { metadata }
    }

    /// Generate `row_count` rows for each named table, in order.
    ///
    /// Each column is generated column-major by the creator for its semantic
    /// type, seeded with the column's zero-based position, then transposed
    /// into row-major records. Fail-fast: any error aborts the whole call
    /// and no partial result is returned.
    pub fn generate(&self, table_names: &[&str], row_count: usize) -> Result<GenerationResult> {
        if row_count == 0 {
            return Err(RowsmithError::InvalidRowCount { row_count });
        }

        let mut result = GenerationResult::default();

        for (position, table_name) in table_names.iter().enumerate() {
            if table_name.trim().is_empty() {
                return Err(RowsmithError::EmptyTableName { position });
            }

            info!("generating {} rows for {}", row_count, table_name);
            let definition = self.metadata.lookup(table_name);
            if definition.is_missing() {
                error!("table {} not found in metadata source", table_name);
                return Err(RowsmithError::TableNotFound {
                    table: table_name.to_string(),
                });
            }

            // Column-major pass: one value sequence per column, seeded by
            // the column's position so every column gets its own stream.
            let mut column_sequences: Vec<Vec<Value>> =
                Vec::with_capacity(definition.columns.len());
            for (index, column) in definition.columns.iter().enumerate() {
                let mut creator = creator_for(&definition.name, column)?;
                creator.set_seed(index as u64);
                column_sequences.push(creator.create(column, row_count, 0));
            }

            // Transpose to row-major records, keys in column order.
            let start = result.rows.len();
            for row_index in 0..row_count {
                let mut row = GeneratedRow::with_capacity(definition.columns.len());
                for (column, sequence) in definition.columns.iter().zip(&column_sequences) {
                    row.insert(column.name.clone(), sequence[row_index].to_string());
                }
                result.rows.push(row);
            }
            result.spans.push(TableSpan {
                table: definition.name.clone(),
                start,
                len: row_count,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::provider::InMemoryMetadata;
    use crate::schema::types::{ColumnDefinition, SemanticType, TableDefinition};

    fn orders_metadata() -> InMemoryMetadata {
        InMemoryMetadata::new().with_table(
            TableDefinition::new("orders")
                .with_column(ColumnDefinition::new("id", SemanticType::Numeric).with_precision(10, 0))
                .with_column(ColumnDefinition::new("note", SemanticType::Text).with_max_length(20))
                .with_column(ColumnDefinition::new("side", SemanticType::FixedChar).with_max_length(1))
                .with_column(ColumnDefinition::new("created_at", SemanticType::Temporal)),
        )
    }

    #[test]
    fn row_count_law_holds() {
        let engine = GenerationEngine::new(orders_metadata());
        let result = engine.generate(&["orders"], 7).unwrap();
        assert_eq!(result.len(), 7);
        for row in result.rows() {
            assert_eq!(row.len(), 4);
            let keys: Vec<_> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, ["id", "note", "side", "created_at"]);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let engine = GenerationEngine::new(orders_metadata());
        let a = engine.generate(&["orders"], 25).unwrap();
        let b = engine.generate(&["orders"], 25).unwrap();
        assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn same_type_columns_get_distinct_streams() {
        let metadata = InMemoryMetadata::new().with_table(
            TableDefinition::new("pairs")
                .with_column(ColumnDefinition::new("left", SemanticType::Numeric).with_precision(12, 0))
                .with_column(ColumnDefinition::new("right", SemanticType::Numeric).with_precision(12, 0)),
        );
        let engine = GenerationEngine::new(metadata);
        let result = engine.generate(&["pairs"], 10).unwrap();

        let lefts: Vec<_> = result.rows().iter().map(|r| r["left"].clone()).collect();
        let rights: Vec<_> = result.rows().iter().map(|r| r["right"].clone()).collect();
        assert_ne!(lefts, rights);
    }

    #[test]
    fn empty_table_name_is_rejected() {
        let engine = GenerationEngine::new(orders_metadata());
        let err = engine.generate(&[""], 3).unwrap_err();
        assert!(matches!(err, RowsmithError::EmptyTableName { position: 0 }));

        let err = engine.generate(&["orders", "  "], 3).unwrap_err();
        assert!(matches!(err, RowsmithError::EmptyTableName { position: 1 }));
    }

    #[test]
    fn unknown_table_is_rejected() {
        let engine = GenerationEngine::new(orders_metadata());
        let err = engine.generate(&["GHOST"], 5).unwrap_err();
        match err {
            RowsmithError::TableNotFound { table } => assert_eq!(table, "GHOST"),
            other => panic!("expected TableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn zero_row_count_is_rejected() {
        let engine = GenerationEngine::new(orders_metadata());
        let err = engine.generate(&["orders"], 0).unwrap_err();
        assert!(matches!(err, RowsmithError::InvalidRowCount { row_count: 0 }));
    }

    #[test]
    fn multi_table_rows_concatenate_flat() {
        let metadata = InMemoryMetadata::new()
            .with_table(
                TableDefinition::new("a")
                    .with_column(ColumnDefinition::new("x", SemanticType::Numeric)),
            )
            .with_table(
                TableDefinition::new("b")
                    .with_column(ColumnDefinition::new("y", SemanticType::Text)),
            );
        let engine = GenerationEngine::new(metadata);
        let result = engine.generate(&["a", "b"], 2).unwrap();

        assert_eq!(result.len(), 4);
        assert!(result.rows()[0].contains_key("x"));
        assert!(result.rows()[1].contains_key("x"));
        assert!(result.rows()[2].contains_key("y"));
        assert!(result.rows()[3].contains_key("y"));
    }

    #[test]
    fn by_table_resplits_the_flat_sequence() {
        let metadata = InMemoryMetadata::new()
            .with_table(
                TableDefinition::new("a")
                    .with_column(ColumnDefinition::new("x", SemanticType::Numeric)),
            )
            .with_table(
                TableDefinition::new("b")
                    .with_column(ColumnDefinition::new("y", SemanticType::Text)),
            );
        let engine = GenerationEngine::new(metadata);
        let result = engine.generate(&["a", "b"], 3).unwrap();

        let groups: Vec<_> = result.by_table().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(groups[0].1.len(), 3);
        assert_eq!(groups[1].0, "b");
        assert_eq!(groups[1].1.len(), 3);
        // Flat sequence and grouped view are the same rows.
        let reassembled: Vec<_> = groups
            .iter()
            .flat_map(|(_, rows)| rows.iter().cloned())
            .collect();
        assert_eq!(reassembled.as_slice(), result.rows());
    }

    #[test]
    fn unsupported_column_aborts_without_partial_result() {
        let metadata = InMemoryMetadata::new()
            .with_table(
                TableDefinition::new("good")
                    .with_column(ColumnDefinition::new("x", SemanticType::Numeric)),
            )
            .with_table(
                TableDefinition::new("bad")
                    .with_column(ColumnDefinition::new(
                        "shape",
                        SemanticType::Unknown("geometry".into()),
                    )),
            );
        let engine = GenerationEngine::new(metadata);
        let err = engine.generate(&["good", "bad"], 2).unwrap_err();
        assert!(matches!(err, RowsmithError::UnsupportedColumnType { .. }));
    }
}
