// ============================================================
// BOUNDED SAMPLER
// ============================================================
// Decode a capped block of characters and cut it into sample lines

use std::io::{ErrorKind, Read};

use encoding_rs::{CoderResult, Encoding};

use crate::domain::error::{DiscoveryError, Result};
use crate::domain::schema::SamplingConfig;

const READ_CHUNK: usize = 8 * 1024;

/// Extracts a bounded number of lines from a byte stream
pub struct BoundedSampler {
    config: SamplingConfig,
}

impl BoundedSampler {
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Extract up to `rows` lines from `reader`, each terminated with `\n`.
    ///
    /// At most `max_chars` characters are decoded, however large the stream.
    /// Fewer available lines than requested is not an error; a capped block
    /// without any line terminator is (a huge single-line or binary file).
    ///
    /// The reader is not closed; pass `&mut reader` to keep using it.
    pub fn extract_sample_lines<R: Read>(
        &self,
        reader: R,
        encoding: &'static Encoding,
        rows: usize,
    ) -> Result<String> {
        if !self.config.accepts_rows(rows) {
            return Err(DiscoveryError::ValidationError(format!(
                "invalid number of sample rows: {} (expected 1 to {})",
                rows,
                self.config.max_rows - 1
            )));
        }

        let (block, block_chars) = self.read_block(reader, encoding)?;

        let mut sample = String::new();
        let mut lines_read = 0usize;
        for line in split_lines(&block).take(rows) {
            sample.push_str(line);
            sample.push('\n');
            lines_read += 1;
        }

        tracing::debug!(
            encoding = encoding.name(),
            block_chars,
            lines_read,
            "extracted sample lines"
        );

        // Only a capped block without any terminator is unsplittable
        if lines_read <= 1
            && block_chars >= self.config.max_chars
            && !block.contains(|c: char| c == '\n' || c == '\r')
        {
            return Err(DiscoveryError::SamplingError(
                "Failed to detect newlines for sample file.".to_string(),
            ));
        }

        Ok(sample)
    }

    /// Same as [`extract_sample_lines`](Self::extract_sample_lines), resolving
    /// the encoding from a WHATWG label such as `"utf-8"` or `"latin1"`.
    pub fn extract_sample_lines_with_label<R: Read>(
        &self,
        reader: R,
        label: &str,
        rows: usize,
    ) -> Result<String> {
        let encoding = encoding_for_label(label)?;
        self.extract_sample_lines(reader, encoding, rows)
    }

    /// Decode at most `max_chars` characters. Returns the block and its char count.
    fn read_block<R: Read>(
        &self,
        mut reader: R,
        encoding: &'static Encoding,
    ) -> Result<(String, usize)> {
        let max_chars = self.config.max_chars;
        let mut decoder = encoding.new_decoder_with_bom_removal();
        let mut block = String::new();
        let mut chars = 0usize;
        let mut buf = [0u8; READ_CHUNK];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            let last = n == 0;

            let start = block.len();
            let mut input = &buf[..n];
            loop {
                let needed = decoder
                    .max_utf8_buffer_length(input.len())
                    .unwrap_or(input.len() * 3 + 16);
                block.reserve(needed);
                let (result, read, _) = decoder.decode_to_string(input, &mut block, last);
                input = &input[read..];
                if let CoderResult::InputEmpty = result {
                    break;
                }
            }
            chars += block[start..].chars().count();

            if chars >= max_chars {
                if chars > max_chars {
                    let cut = block
                        .char_indices()
                        .nth(max_chars)
                        .map(|(idx, _)| idx)
                        .unwrap_or(block.len());
                    block.truncate(cut);
                }
                return Ok((block, max_chars));
            }

            if last {
                return Ok((block, chars));
            }
        }
    }
}

impl Default for BoundedSampler {
    fn default() -> Self {
        Self::new(SamplingConfig::default())
    }
}

/// Sample with the default limits (64000 chars, fewer than 1000 rows)
pub fn extract_sample_lines<R: Read>(
    reader: R,
    encoding: &'static Encoding,
    rows: usize,
) -> Result<String> {
    BoundedSampler::default().extract_sample_lines(reader, encoding, rows)
}

/// Resolve a WHATWG encoding label
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    if label.trim().is_empty() {
        return Err(DiscoveryError::ValidationError(
            "charset cannot be empty".to_string(),
        ));
    }
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        DiscoveryError::ValidationError(format!("unsupported charset: {}", label))
    })
}

/// Split on `\n`, `\r` or `\r\n`. A trailing terminator does not start an empty line.
fn split_lines(block: &str) -> impl Iterator<Item = &str> {
    let mut rest = block;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(idx) => {
                let line = &rest[..idx];
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_16LE, UTF_8, WINDOWS_1252};
    use std::io::Cursor;

    fn numbered_lines(count: usize) -> String {
        (0..count).map(|i| format!("row{},{}\n", i, i * 2)).collect()
    }

    #[test]
    fn test_returns_exactly_requested_rows() {
        let input = numbered_lines(50);
        let sample = extract_sample_lines(Cursor::new(input), UTF_8, 10).unwrap();

        assert_eq!(sample.lines().count(), 10);
        assert!(sample.starts_with("row0,0\n"));
        assert!(sample.ends_with("row9,18\n"));
    }

    #[test]
    fn test_fewer_lines_than_requested() {
        let sample = extract_sample_lines(Cursor::new("a\nb\nc"), UTF_8, 100).unwrap();
        assert_eq!(sample, "a\nb\nc\n");
    }

    #[test]
    fn test_row_bounds() {
        let err = extract_sample_lines(Cursor::new("a\nb\n"), UTF_8, 0).unwrap_err();
        assert!(matches!(err, DiscoveryError::ValidationError(_)));

        let err = extract_sample_lines(Cursor::new("a\nb\n"), UTF_8, 1000).unwrap_err();
        assert!(matches!(err, DiscoveryError::ValidationError(_)));

        let sample = extract_sample_lines(Cursor::new("only line"), UTF_8, 999).unwrap();
        assert_eq!(sample, "only line\n");
    }

    #[test]
    fn test_single_huge_line_fails() {
        let input = "x".repeat(70_000);
        let err = extract_sample_lines(Cursor::new(input), UTF_8, 10).unwrap_err();

        assert!(matches!(err, DiscoveryError::SamplingError(_)));
        assert!(err.is_io_class());
    }

    #[test]
    fn test_line_exactly_at_cap_fails() {
        let input = "y".repeat(crate::domain::schema::MAX_CHARS);
        let err = extract_sample_lines(Cursor::new(input), UTF_8, 5).unwrap_err();
        assert!(matches!(err, DiscoveryError::SamplingError(_)));
    }

    #[test]
    fn test_single_row_from_capped_multiline_stream() {
        let input: String = (0..20_000).map(|i| format!("row{}\n", i)).collect();
        let sample = extract_sample_lines(Cursor::new(input), UTF_8, 1).unwrap();
        assert_eq!(sample, "row0\n");
    }

    #[test]
    fn test_two_rows_from_capped_multiline_stream() {
        let input: String = (0..20_000).map(|i| format!("row{}\n", i)).collect();
        let sample = extract_sample_lines(Cursor::new(input), UTF_8, 2).unwrap();
        assert_eq!(sample, "row0\nrow1\n");
    }

    #[test]
    fn test_single_row_with_terminator_near_cap() {
        let mut input = "w".repeat(crate::domain::schema::MAX_CHARS - 1);
        input.push('\n');
        input.push_str("tail\n");
        let sample = extract_sample_lines(Cursor::new(input), UTF_8, 1).unwrap();
        assert_eq!(sample.len(), crate::domain::schema::MAX_CHARS);
    }

    #[test]
    fn test_large_stream_with_newlines_is_capped() {
        // ~1.2 MB; only the first 64000 chars are decoded
        let input = numbered_lines(100_000);
        let sample = extract_sample_lines(Cursor::new(input), UTF_8, 999).unwrap();
        assert_eq!(sample.lines().count(), 999);
    }

    #[test]
    fn test_small_cap_truncates_mid_line() {
        let sampler = BoundedSampler::new(SamplingConfig {
            max_chars: 10,
            ..Default::default()
        });
        let sample = sampler
            .extract_sample_lines(Cursor::new("abcd\nefgh\nijkl\n"), UTF_8, 5)
            .unwrap();
        // 10 chars: "abcd\nefgh\n"
        assert_eq!(sample, "abcd\nefgh\n");
    }

    #[test]
    fn test_mixed_line_terminators() {
        let sample = extract_sample_lines(Cursor::new("a\r\nb\rc\nd"), UTF_8, 10).unwrap();
        assert_eq!(sample, "a\nb\nc\nd\n");
    }

    #[test]
    fn test_decodes_with_given_encoding() {
        let (bytes, _, _) = WINDOWS_1252.encode("café,1\nnaïve,2\n");
        let sample = extract_sample_lines(Cursor::new(bytes.into_owned()), WINDOWS_1252, 2).unwrap();
        assert_eq!(sample, "café,1\nnaïve,2\n");

        let utf16: Vec<u8> = "id\n7\n"
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect();
        let sample = extract_sample_lines(Cursor::new(utf16), UTF_16LE, 2).unwrap();
        assert_eq!(sample, "id\n7\n");
    }

    #[test]
    fn test_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"name\nalice\n");
        let sample = extract_sample_lines(Cursor::new(bytes), UTF_8, 2).unwrap();
        assert_eq!(sample, "name\nalice\n");
    }

    #[test]
    fn test_reader_is_left_usable() {
        let mut cursor = Cursor::new("a\nb\n".to_string());
        extract_sample_lines(&mut cursor, UTF_8, 1).unwrap();
        cursor.set_position(0);
        let mut again = String::new();
        cursor.read_to_string(&mut again).unwrap();
        assert_eq!(again, "a\nb\n");
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!(encoding_for_label("UTF-8").unwrap(), UTF_8);
        assert_eq!(encoding_for_label("latin1").unwrap(), WINDOWS_1252);
        assert!(matches!(
            encoding_for_label(""),
            Err(DiscoveryError::ValidationError(_))
        ));
        assert!(matches!(
            encoding_for_label("klingon"),
            Err(DiscoveryError::ValidationError(_))
        ));

        let sampler = BoundedSampler::default();
        let sample = sampler
            .extract_sample_lines_with_label(Cursor::new("h\nv\n"), "utf-8", 1)
            .unwrap();
        assert_eq!(sample, "h\n");
    }

    #[test]
    fn test_empty_stream_yields_empty_sample() {
        let sample = extract_sample_lines(Cursor::new(""), UTF_8, 5).unwrap();
        assert_eq!(sample, "");
    }
}
