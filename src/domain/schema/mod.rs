// ============================================================
// SCHEMA DOMAIN LAYER
// ============================================================
// Core types and value objects for schema discovery
// No I/O, no logging

mod canonical_type;
mod data_type_descriptor;
mod field;
mod sampling_config;
mod table_schema_type;

pub use canonical_type::CanonicalType;
pub use data_type_descriptor::DataTypeDescriptor;
pub use field::{Field, SchemaField};
pub use sampling_config::{SamplingConfig, MAX_CHARS, MAX_ROWS};
pub use table_schema_type::TableSchemaType;
