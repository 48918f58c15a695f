// ============================================================
// CANONICAL TYPE
// ============================================================
// JDBC-style intermediate type used before platform mapping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DiscoveryError;

/// Canonical (JDBC) column type.
///
/// Value-based inference only ever produces `Integer`, `Double` or `Varchar`;
/// every other variant is reachable when a source declares it as a native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CanonicalType {
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    Varchar,
    LongVarchar,
    Date,
    Time,
    Timestamp,
    Binary,
    VarBinary,
    LongVarBinary,
    Null,
    Other,
    JavaObject,
    Distinct,
    Struct,
    Array,
    Blob,
    Clob,
    Ref,
    Datalink,
    Boolean,
    RowId,
    NChar,
    NVarchar,
    LongNVarchar,
    NClob,
    SqlXml,
    RefCursor,
    TimeWithTimezone,
    TimestampWithTimezone,
}

impl CanonicalType {
    pub const ALL: [CanonicalType; 39] = [
        CanonicalType::Bit,
        CanonicalType::TinyInt,
        CanonicalType::SmallInt,
        CanonicalType::Integer,
        CanonicalType::BigInt,
        CanonicalType::Float,
        CanonicalType::Real,
        CanonicalType::Double,
        CanonicalType::Numeric,
        CanonicalType::Decimal,
        CanonicalType::Char,
        CanonicalType::Varchar,
        CanonicalType::LongVarchar,
        CanonicalType::Date,
        CanonicalType::Time,
        CanonicalType::Timestamp,
        CanonicalType::Binary,
        CanonicalType::VarBinary,
        CanonicalType::LongVarBinary,
        CanonicalType::Null,
        CanonicalType::Other,
        CanonicalType::JavaObject,
        CanonicalType::Distinct,
        CanonicalType::Struct,
        CanonicalType::Array,
        CanonicalType::Blob,
        CanonicalType::Clob,
        CanonicalType::Ref,
        CanonicalType::Datalink,
        CanonicalType::Boolean,
        CanonicalType::RowId,
        CanonicalType::NChar,
        CanonicalType::NVarchar,
        CanonicalType::LongNVarchar,
        CanonicalType::NClob,
        CanonicalType::SqlXml,
        CanonicalType::RefCursor,
        CanonicalType::TimeWithTimezone,
        CanonicalType::TimestampWithTimezone,
    ];

    /// Upper-case type name, as written into RDBMS schemas.
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalType::Bit => "BIT",
            CanonicalType::TinyInt => "TINYINT",
            CanonicalType::SmallInt => "SMALLINT",
            CanonicalType::Integer => "INTEGER",
            CanonicalType::BigInt => "BIGINT",
            CanonicalType::Float => "FLOAT",
            CanonicalType::Real => "REAL",
            CanonicalType::Double => "DOUBLE",
            CanonicalType::Numeric => "NUMERIC",
            CanonicalType::Decimal => "DECIMAL",
            CanonicalType::Char => "CHAR",
            CanonicalType::Varchar => "VARCHAR",
            CanonicalType::LongVarchar => "LONGVARCHAR",
            CanonicalType::Date => "DATE",
            CanonicalType::Time => "TIME",
            CanonicalType::Timestamp => "TIMESTAMP",
            CanonicalType::Binary => "BINARY",
            CanonicalType::VarBinary => "VARBINARY",
            CanonicalType::LongVarBinary => "LONGVARBINARY",
            CanonicalType::Null => "NULL",
            CanonicalType::Other => "OTHER",
            CanonicalType::JavaObject => "JAVA_OBJECT",
            CanonicalType::Distinct => "DISTINCT",
            CanonicalType::Struct => "STRUCT",
            CanonicalType::Array => "ARRAY",
            CanonicalType::Blob => "BLOB",
            CanonicalType::Clob => "CLOB",
            CanonicalType::Ref => "REF",
            CanonicalType::Datalink => "DATALINK",
            CanonicalType::Boolean => "BOOLEAN",
            CanonicalType::RowId => "ROWID",
            CanonicalType::NChar => "NCHAR",
            CanonicalType::NVarchar => "NVARCHAR",
            CanonicalType::LongNVarchar => "LONGNVARCHAR",
            CanonicalType::NClob => "NCLOB",
            CanonicalType::SqlXml => "SQLXML",
            CanonicalType::RefCursor => "REF_CURSOR",
            CanonicalType::TimeWithTimezone => "TIME_WITH_TIMEZONE",
            CanonicalType::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
        }
    }

    /// Vendor type code as assigned by `java.sql.Types`.
    pub fn vendor_type_number(&self) -> i32 {
        match self {
            CanonicalType::Bit => -7,
            CanonicalType::TinyInt => -6,
            CanonicalType::SmallInt => 5,
            CanonicalType::Integer => 4,
            CanonicalType::BigInt => -5,
            CanonicalType::Float => 6,
            CanonicalType::Real => 7,
            CanonicalType::Double => 8,
            CanonicalType::Numeric => 2,
            CanonicalType::Decimal => 3,
            CanonicalType::Char => 1,
            CanonicalType::Varchar => 12,
            CanonicalType::LongVarchar => -1,
            CanonicalType::Date => 91,
            CanonicalType::Time => 92,
            CanonicalType::Timestamp => 93,
            CanonicalType::Binary => -2,
            CanonicalType::VarBinary => -3,
            CanonicalType::LongVarBinary => -4,
            CanonicalType::Null => 0,
            CanonicalType::Other => 1111,
            CanonicalType::JavaObject => 2000,
            CanonicalType::Distinct => 2001,
            CanonicalType::Struct => 2002,
            CanonicalType::Array => 2003,
            CanonicalType::Blob => 2004,
            CanonicalType::Clob => 2005,
            CanonicalType::Ref => 2006,
            CanonicalType::Datalink => 70,
            CanonicalType::Boolean => 16,
            CanonicalType::RowId => -8,
            CanonicalType::NChar => -15,
            CanonicalType::NVarchar => -9,
            CanonicalType::LongNVarchar => -16,
            CanonicalType::NClob => 2011,
            CanonicalType::SqlXml => 2009,
            CanonicalType::RefCursor => 2012,
            CanonicalType::TimeWithTimezone => 2013,
            CanonicalType::TimestampWithTimezone => 2014,
        }
    }

    /// Look up a type by its vendor code.
    pub fn from_vendor_type_number(code: i32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.vendor_type_number() == code)
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CanonicalType> for String {
    fn from(value: CanonicalType) -> Self {
        value.name().to_string()
    }
}

impl TryFrom<String> for CanonicalType {
    type Error = DiscoveryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Matches the exact upper-case name only; `"integer"` is rejected.
impl FromStr for CanonicalType {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| DiscoveryError::ParseError(format!("Unknown canonical type: {}", s)))
    }
}
