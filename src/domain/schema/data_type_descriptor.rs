use serde::{Deserialize, Serialize};

/// Coarse category of a derived platform type.
///
/// The flags are independent; nothing prevents a future platform type from
/// setting more than one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeDescriptor {
    pub is_numeric: bool,
    pub is_date: bool,
    /// Array, struct, binary and anything else outside the plain scalar set
    pub is_complex: bool,
}

impl DataTypeDescriptor {
    pub fn numeric() -> Self {
        Self {
            is_numeric: true,
            ..Default::default()
        }
    }

    pub fn date() -> Self {
        Self {
            is_date: true,
            ..Default::default()
        }
    }

    pub fn complex() -> Self {
        Self {
            is_complex: true,
            ..Default::default()
        }
    }

    /// True when no category applies (strings, booleans, unknown input)
    pub fn is_plain(&self) -> bool {
        !self.is_numeric && !self.is_date && !self.is_complex
    }
}
