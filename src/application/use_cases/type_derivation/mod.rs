mod hive_mapping;
mod inference;

pub use hive_mapping::{hive_type_to_descriptor, sql_type_to_hive_type, HiveType};
pub use inference::derive_canonical_type;

use crate::domain::schema::{CanonicalType, SchemaField, TableSchemaType};

/// Derive platform data types for every field that has none yet.
///
/// A declared native type is trusted when it names a canonical type. A
/// declared type that fails to parse becomes `Varchar` directly, without
/// looking at the samples. Fields without a native type are typed from their
/// sample values.
///
/// Fields whose derived type is already set are left untouched, so running
/// this twice over the same fields changes nothing the second time.
pub fn derive_data_types<F: SchemaField>(schema_type: TableSchemaType, fields: &mut [F]) {
    for field in fields.iter_mut() {
        if field.derived_data_type().is_some_and(|t| !t.is_empty()) {
            continue;
        }

        let canonical = resolve_canonical_type(field);

        match schema_type {
            TableSchemaType::Hive => {
                let hive_type = HiveType::from_canonical(canonical).as_str();
                field.set_derived_data_type(hive_type.to_string());
                field.set_data_type_descriptor(hive_type_to_descriptor(Some(hive_type)));
            }
            TableSchemaType::Rdbms => {
                field.set_derived_data_type(canonical.name().to_string());
            }
        }

        tracing::debug!(
            field = field.name(),
            canonical = canonical.name(),
            derived = field.derived_data_type().unwrap_or_default(),
            "derived data type"
        );
    }
}

fn resolve_canonical_type<F: SchemaField>(field: &F) -> CanonicalType {
    match field.native_data_type().filter(|t| !t.is_empty()) {
        Some(native) => native.parse().unwrap_or_else(|_| {
            tracing::warn!(
                field = field.name(),
                native_type = native,
                "Unable to convert data type [{}], will be converted to VARCHAR",
                native
            );
            CanonicalType::Varchar
        }),
        None => derive_canonical_type(field.sample_values()),
    }
}
