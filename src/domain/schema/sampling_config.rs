// ============================================================
// SAMPLING CONFIGURATION
// ============================================================
// Limits protecting the sampler from huge or newline-free inputs

use serde::{Deserialize, Serialize};

/// Maximum number of characters decoded from a source before line splitting
pub const MAX_CHARS: usize = 64_000;

/// Exclusive upper bound on the number of sample rows
pub const MAX_ROWS: usize = 1_000;

/// Configuration for bounded sampling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Characters buffered from the stream at most (default: 64000)
    pub max_chars: usize,

    /// Row counts must be strictly below this value (default: 1000)
    pub max_rows: usize,

    /// Rows sampled when the caller does not ask for a count (default: 10)
    pub default_rows: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            max_rows: MAX_ROWS,
            default_rows: 10,
        }
    }
}

impl SamplingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chars == 0 {
            return Err("max_chars must be > 0".to_string());
        }
        if self.max_rows < 2 {
            return Err("max_rows must be >= 2".to_string());
        }
        if self.default_rows == 0 || self.default_rows >= self.max_rows {
            return Err(format!(
                "default_rows must be between 1 and {}",
                self.max_rows - 1
            ));
        }
        Ok(())
    }

    /// Whether `rows` lies in `[1, max_rows)`
    pub fn accepts_rows(&self, rows: usize) -> bool {
        rows >= 1 && rows < self.max_rows
    }
}
