use indexmap::IndexMap;

use crate::schema::types::TableDefinition;

/// The metadata collaborator: the one outward call the engine makes.
///
/// A lookup for a name the source does not know returns a definition with no
/// columns; the engine turns that into `TableNotFound`. Implementations are
/// free to re-fetch on every call — the engine caches nothing.
pub trait MetadataProvider {
    fn lookup(&self, table_name: &str) -> TableDefinition;
}

/// In-memory metadata source backed by an ordered table map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadata {
    tables: IndexMap<String, TableDefinition>,
}

impl InMemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, definition: TableDefinition) -> Self {
        self.tables.insert(definition.name.clone(), definition);
        self
    }

    pub fn insert(&mut self, definition: TableDefinition) {
        self.tables.insert(definition.name.clone(), definition);
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl MetadataProvider for InMemoryMetadata {
    fn lookup(&self, table_name: &str) -> TableDefinition {
        self.tables
            .get(table_name)
            .cloned()
            .unwrap_or_else(|| TableDefinition::new(table_name))
    }
}
