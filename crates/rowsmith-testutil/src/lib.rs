use rowsmith_core::schema::{ColumnDefinition, InMemoryMetadata, SemanticType, TableDefinition};

/// Metadata for a small trading schema, used across tests and benches.
pub fn exchange_metadata() -> InMemoryMetadata {
    InMemoryMetadata::new()
        .with_table(bitcoin_order_table())
        .with_table(
            TableDefinition::new("TRADE_HISTORY")
                .with_column(
                    ColumnDefinition::new("TRADE_ID", SemanticType::Numeric).with_precision(18, 0),
                )
                .with_column(
                    ColumnDefinition::new("PRICE", SemanticType::Numeric).with_precision(12, 2),
                )
                .with_column(ColumnDefinition::new("EXECUTED_AT", SemanticType::Temporal)),
        )
}

/// One order table with all four semantic column kinds represented.
pub fn bitcoin_order_table() -> TableDefinition {
    TableDefinition::new("BITCOIN_ORDER")
        .with_column(ColumnDefinition::new("ORDER_ID", SemanticType::Numeric).with_precision(10, 0))
        .with_column(ColumnDefinition::new("ORDER_TYPE", SemanticType::FixedChar).with_max_length(1))
        .with_column(ColumnDefinition::new("COMMENT", SemanticType::Text).with_max_length(40))
        .with_column(ColumnDefinition::new("AMOUNT", SemanticType::Numeric).with_precision(16, 8))
        .with_column(ColumnDefinition::new("ORDERED_AT", SemanticType::Temporal))
}

/// A table with N numeric/text column pairs, for throughput benchmarks.
pub fn wide_table(num_columns: usize) -> TableDefinition {
    let mut table = TableDefinition::new("wide");
    for i in 0..num_columns {
        let column = if i % 2 == 0 {
            ColumnDefinition::new(format!("n_{}", i), SemanticType::Numeric).with_precision(12, 2)
        } else {
            ColumnDefinition::new(format!("t_{}", i), SemanticType::Text).with_max_length(24)
        };
        table = table.with_column(column);
    }
    table
}
