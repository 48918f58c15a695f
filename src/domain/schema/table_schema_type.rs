use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DiscoveryError;

/// Target platform a discovered schema is derived for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSchemaType {
    /// Hive-like platform: lower-case platform type names plus a category descriptor
    #[default]
    Hive,

    /// Relational target: canonical type names, no descriptor
    Rdbms,
}

impl fmt::Display for TableSchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hive => write!(f, "hive"),
            Self::Rdbms => write!(f, "rdbms"),
        }
    }
}

impl std::str::FromStr for TableSchemaType {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hive" => Ok(Self::Hive),
            "rdbms" => Ok(Self::Rdbms),
            _ => Err(DiscoveryError::ParseError(format!(
                "Unknown table schema type: {}",
                s
            ))),
        }
    }
}
