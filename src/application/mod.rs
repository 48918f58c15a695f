pub mod use_cases;

pub use use_cases::schema_discovery::{DiscoveredSchema, SchemaDiscovery};
pub use use_cases::type_derivation::{
    derive_canonical_type, derive_data_types, hive_type_to_descriptor, sql_type_to_hive_type,
    HiveType,
};
