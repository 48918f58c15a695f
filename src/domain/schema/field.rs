// ============================================================
// SCHEMA FIELD
// ============================================================
// A discovered column and the accessors derivation works through

use serde::{Deserialize, Serialize};

use super::DataTypeDescriptor;

/// Accessors the type derivation pass needs from a field.
///
/// Implemented by [`Field`]; callers that keep their own field records can
/// implement it to have those enriched in place.
pub trait SchemaField {
    fn name(&self) -> &str;

    /// Type name declared by the source, trusted over inference when parseable
    fn native_data_type(&self) -> Option<&str>;

    /// Observed values, in source order. Empty when nothing was sampled.
    fn sample_values(&self) -> &[String];

    fn derived_data_type(&self) -> Option<&str>;

    fn set_derived_data_type(&mut self, data_type: String);

    fn data_type_descriptor(&self) -> Option<&DataTypeDescriptor>;

    fn set_data_type_descriptor(&mut self, descriptor: DataTypeDescriptor);
}

/// A single column of a discovered table schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_data_type: Option<String>,

    #[serde(default)]
    pub sample_values: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type_descriptor: Option<DataTypeDescriptor>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_native_data_type(mut self, native_data_type: impl Into<String>) -> Self {
        self.native_data_type = Some(native_data_type.into());
        self
    }

    pub fn with_sample_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn push_sample_value(&mut self, value: impl Into<String>) {
        self.sample_values.push(value.into());
    }
}

impl SchemaField for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn native_data_type(&self) -> Option<&str> {
        self.native_data_type.as_deref()
    }

    fn sample_values(&self) -> &[String] {
        &self.sample_values
    }

    fn derived_data_type(&self) -> Option<&str> {
        self.derived_data_type.as_deref()
    }

    fn set_derived_data_type(&mut self, data_type: String) {
        self.derived_data_type = Some(data_type);
    }

    fn data_type_descriptor(&self) -> Option<&DataTypeDescriptor> {
        self.data_type_descriptor.as_ref()
    }

    fn set_data_type_descriptor(&mut self, descriptor: DataTypeDescriptor) {
        self.data_type_descriptor = Some(descriptor);
    }
}
