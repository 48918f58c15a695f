// ============================================================
// SCHEMA DISCOVERY USE CASE
// ============================================================
// Orchestrate bounded sampling, sample parsing, and type derivation

use std::io::Read;
use std::time::Instant;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use super::type_derivation::derive_data_types;
use crate::domain::error::{DiscoveryError, Result};
use crate::domain::schema::{Field, SamplingConfig, TableSchemaType};
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::sampling::{encoding_for_label, BoundedSampler};

/// Fields discovered from one source, with derived types applied
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredSchema {
    pub schema_type: TableSchemaType,
    pub fields: Vec<Field>,

    /// Number of sampled lines, header included
    pub sample_lines: usize,

    pub processing_time_ms: u64,
}

impl DiscoveredSchema {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DiscoveryError::Internal(format!("Failed to serialize schema: {}", e)))
    }
}

/// Schema discovery use case
pub struct SchemaDiscovery {
    sampler: BoundedSampler,
    schema_type: TableSchemaType,
    delimiter: Option<u8>,
}

impl SchemaDiscovery {
    pub fn new(config: SamplingConfig, schema_type: TableSchemaType) -> Self {
        Self {
            sampler: BoundedSampler::new(config),
            schema_type,
            delimiter: None,
        }
    }

    /// Fix the delimiter instead of detecting it from the sample
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sample `rows` lines, parse them into fields, and derive their types
    pub fn discover<R: Read>(
        &self,
        reader: R,
        encoding: &'static Encoding,
        rows: usize,
    ) -> Result<DiscoveredSchema> {
        let start = Instant::now();

        let sample = self.sampler.extract_sample_lines(reader, encoding, rows)?;
        let sample_lines = sample.lines().count();

        let mut fields = match self.delimiter {
            Some(delimiter) => CsvParser::new().with_delimiter(delimiter).parse_fields(&sample)?,
            None => CsvParser::parse_fields_auto_detect(&sample)?,
        };

        derive_data_types(self.schema_type, &mut fields);

        tracing::info!(
            schema_type = %self.schema_type,
            fields = fields.len(),
            sample_lines,
            "discovered schema"
        );

        Ok(DiscoveredSchema {
            schema_type: self.schema_type,
            fields,
            sample_lines,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Same as [`discover`](Self::discover) with an encoding label
    pub fn discover_with_label<R: Read>(
        &self,
        reader: R,
        label: &str,
        rows: usize,
    ) -> Result<DiscoveredSchema> {
        let encoding = encoding_for_label(label)?;
        self.discover(reader, encoding, rows)
    }

    /// Discover with the configured default row count
    pub fn discover_default<R: Read>(
        &self,
        reader: R,
        encoding: &'static Encoding,
    ) -> Result<DiscoveredSchema> {
        self.discover(reader, encoding, self.sampler.config().default_rows)
    }
}

impl Default for SchemaDiscovery {
    fn default() -> Self {
        Self::new(SamplingConfig::default(), TableSchemaType::default())
    }
}
