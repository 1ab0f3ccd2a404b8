//! Value creation and row assembly.

pub mod creators;
pub mod engine;
pub mod value;

pub use creators::{creator_for, ValueCreator};
pub use engine::{GeneratedRow, GenerationEngine, GenerationResult};
pub use value::Value;
