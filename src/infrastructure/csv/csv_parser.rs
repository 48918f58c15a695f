// ============================================================
// CSV SAMPLE PARSER
// ============================================================
// Turn sampled delimited text into fields carrying sample values

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{DiscoveryError, Result};
use crate::domain::schema::Field;

/// Delimited-text parser for sampled lines
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,

    /// Whether the first record names the columns
    has_header: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            has_header: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Without a header, columns are named `col_1`, `col_2`, ...
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Parse sample text into one field per column.
    ///
    /// Each record contributes its i-th value to field i. Records shorter than
    /// the header contribute nothing for the missing columns; values beyond
    /// the header are dropped.
    pub fn parse_fields(&self, content: &str) -> Result<Vec<Field>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records = reader.records();
        let mut fields: Vec<Field> = Vec::new();

        if self.has_header {
            match records.next() {
                Some(header) => {
                    let header = header.map_err(|e| {
                        DiscoveryError::ParseError(format!("Failed to read CSV header: {}", e))
                    })?;
                    fields = header.iter().map(Field::new).collect();
                }
                None => return Ok(fields),
            }
        }

        for (index, result) in records.enumerate() {
            let record = result.map_err(|e| {
                DiscoveryError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            if !self.has_header {
                while fields.len() < record.len() {
                    fields.push(Field::new(format!("col_{}", fields.len() + 1)));
                }
            }

            for (field, value) in fields.iter_mut().zip(record.iter()) {
                field.push_sample_value(value);
            }
        }

        tracing::debug!(columns = fields.len(), "parsed sample fields");
        Ok(fields)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample_lines.is_empty() {
            return best_delimiter;
        }

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Parse with a delimiter detected from the content itself
    pub fn parse_fields_auto_detect(content: &str) -> Result<Vec<Field>> {
        let delimiter = Self::detect_delimiter(content);
        Self::default().with_delimiter(delimiter).parse_fields(content)
    }
}
