mod app;
mod application;
mod domain;
mod infrastructure;

pub use crate::app::init_logging;
pub use crate::application::{
    derive_canonical_type, derive_data_types, hive_type_to_descriptor, sql_type_to_hive_type,
    DiscoveredSchema, HiveType, SchemaDiscovery,
};
pub use crate::domain::error::{DiscoveryError, Result};
pub use crate::domain::schema::{
    CanonicalType, DataTypeDescriptor, Field, SamplingConfig, SchemaField, TableSchemaType,
    MAX_CHARS, MAX_ROWS,
};
pub use crate::infrastructure::config::{ConfigService, ENV_PREFIX};
pub use crate::infrastructure::csv::CsvParser;
pub use crate::infrastructure::sampling::{encoding_for_label, extract_sample_lines, BoundedSampler};

/// Re-exported so callers can name encodings without a direct dependency
pub use encoding_rs;
