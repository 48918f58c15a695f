use crate::domain::schema::{CanonicalType, DataTypeDescriptor};

/// Platform type names emitted for the Hive target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HiveType {
    BigInt,
    Double,
    Int,
    Float,
    TinyInt,
    Date,
    Timestamp,
    Boolean,
    Binary,
    String,
}

impl HiveType {
    pub fn from_canonical(canonical: CanonicalType) -> Self {
        match canonical {
            CanonicalType::BigInt => Self::BigInt,
            CanonicalType::Numeric | CanonicalType::Double | CanonicalType::Decimal => {
                Self::Double
            }
            CanonicalType::Integer => Self::Int,
            CanonicalType::Float => Self::Float,
            CanonicalType::TinyInt => Self::TinyInt,
            CanonicalType::Date => Self::Date,
            CanonicalType::Timestamp => Self::Timestamp,
            CanonicalType::Boolean => Self::Boolean,
            CanonicalType::Binary => Self::Binary,
            _ => Self::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigInt => "bigint",
            Self::Double => "double",
            Self::Int => "int",
            Self::Float => "float",
            Self::TinyInt => "tinyint",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Binary => "binary",
            Self::String => "string",
        }
    }

    /// Case-insensitive lookup of an emitted platform type name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bigint" => Some(Self::BigInt),
            "double" => Some(Self::Double),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "tinyint" => Some(Self::TinyInt),
            "date" => Some(Self::Date),
            "timestamp" => Some(Self::Timestamp),
            "boolean" => Some(Self::Boolean),
            "binary" => Some(Self::Binary),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Binary falls outside the plain scalar set and counts as complex.
    pub fn descriptor(&self) -> DataTypeDescriptor {
        match self {
            Self::Boolean | Self::String => DataTypeDescriptor::default(),
            Self::BigInt | Self::Double | Self::Int | Self::Float | Self::TinyInt => {
                DataTypeDescriptor::numeric()
            }
            Self::Date | Self::Timestamp => DataTypeDescriptor::date(),
            Self::Binary => DataTypeDescriptor::complex(),
        }
    }
}

/// Convert a canonical type to its Hive type name. `None` maps to `None`.
pub fn sql_type_to_hive_type(canonical: Option<CanonicalType>) -> Option<&'static str> {
    canonical.map(|t| HiveType::from_canonical(t).as_str())
}

/// Classify a Hive type name.
///
/// Unrecognized names (array, struct, map, ...) are complex, while a missing
/// name yields the all-false descriptor.
pub fn hive_type_to_descriptor(hive_type: Option<&str>) -> DataTypeDescriptor {
    match hive_type {
        None => DataTypeDescriptor::default(),
        Some(name) => HiveType::from_name(name)
            .map(|t| t.descriptor())
            .unwrap_or_else(DataTypeDescriptor::complex),
    }
}
