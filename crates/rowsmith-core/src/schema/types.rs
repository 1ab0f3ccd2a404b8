use serde::{Deserialize, Serialize};
use std::fmt;

/// Generator-relevant classification of a column, independent of the source
/// database's exact type name.
///
/// `Unknown` carries the raw type string for anything outside the four
/// recognized kinds so the engine can reject it explicitly instead of letting
/// an unresolved strategy fault later in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticType {
    /// Variable-length string (varchar, text)
    Text,
    /// Fixed-width string (char)
    FixedChar,
    /// Decimal-representable number (integer, bigint, numeric, decimal)
    Numeric,
    /// Calendar date or date-time (date, timestamp)
    Temporal,
    /// Unrecognized raw type — rejected at dispatch
    Unknown(String),
}

impl SemanticType {
    /// Classify a raw SQL type name into a semantic type.
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            s if s.starts_with("character varying") || s.starts_with("varchar") => {
                SemanticType::Text
            }
            "text" | "tinytext" | "mediumtext" | "longtext" | "clob" => SemanticType::Text,
            s if s.starts_with("char") || s.starts_with("character(") || s == "character" => {
                SemanticType::FixedChar
            }
            s if s.starts_with("numeric") || s.starts_with("decimal") => SemanticType::Numeric,
            "smallint" | "int2" | "integer" | "int" | "int4" | "mediumint" | "bigint" | "int8" => {
                SemanticType::Numeric
            }
            "date" => SemanticType::Temporal,
            "timestamp" | "timestamp without time zone" | "timestamp with time zone"
            | "timestamptz" | "datetime" => SemanticType::Temporal,
            other => SemanticType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Text => write!(f, "text"),
            SemanticType::FixedChar => write!(f, "char"),
            SemanticType::Numeric => write!(f, "numeric"),
            SemanticType::Temporal => write!(f, "timestamp"),
            SemanticType::Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// A single column in a table definition.
///
/// Read-only to the generation engine; the shape hints (`max_length`,
/// `numeric_precision`, `numeric_scale`) bound what the creators produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub semantic_type: SemanticType,
    pub max_length: Option<u32>,
    pub numeric_precision: Option<u32>,
    pub numeric_scale: Option<u32>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            max_length: None,
            numeric_precision: None,
            numeric_scale: None,
        }
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.numeric_precision = Some(precision);
        self.numeric_scale = Some(scale);
        self
    }
}

/// A table definition: name plus its columns in declaration order.
///
/// Column order is significant — it drives both per-column seeding and the
/// key order of generated rows. An empty column list signals "table not
/// found" to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// True when the metadata source had no table by this name.
    pub fn is_missing(&self) -> bool {
        self.columns.is_empty()
    }
}
