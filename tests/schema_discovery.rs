use std::io::Cursor;

use schema_discovery::encoding_rs::UTF_8;
use schema_discovery::{
    derive_canonical_type, derive_data_types, extract_sample_lines, CanonicalType,
    DataTypeDescriptor, DiscoveryError, Field, SchemaField, TableSchemaType, MAX_CHARS,
};

/// Caller-owned field record that is not the crate's own `Field`
#[derive(Default)]
struct Column {
    label: String,
    declared: Option<String>,
    values: Vec<String>,
    hive_type: Option<String>,
    category: Option<DataTypeDescriptor>,
}

impl SchemaField for Column {
    fn name(&self) -> &str {
        &self.label
    }

    fn native_data_type(&self) -> Option<&str> {
        self.declared.as_deref()
    }

    fn sample_values(&self) -> &[String] {
        &self.values
    }

    fn derived_data_type(&self) -> Option<&str> {
        self.hive_type.as_deref()
    }

    fn set_derived_data_type(&mut self, data_type: String) {
        self.hive_type = Some(data_type);
    }

    fn data_type_descriptor(&self) -> Option<&DataTypeDescriptor> {
        self.category.as_ref()
    }

    fn set_data_type_descriptor(&mut self, descriptor: DataTypeDescriptor) {
        self.category = Some(descriptor);
    }
}

#[test]
fn sampling_returns_requested_rows_or_all_available() {
    let input: String = (1..=20).map(|i| format!("{}\n", i)).collect();

    let sample = extract_sample_lines(Cursor::new(input.clone()), UTF_8, 5).unwrap();
    assert_eq!(sample, "1\n2\n3\n4\n5\n");

    let sample = extract_sample_lines(Cursor::new(input), UTF_8, 500).unwrap();
    assert_eq!(sample.lines().count(), 20);
}

#[test]
fn sampling_rejects_out_of_range_rows() {
    for rows in [0, 1000] {
        let err = extract_sample_lines(Cursor::new("a\nb\n"), UTF_8, rows).unwrap_err();
        assert!(matches!(err, DiscoveryError::ValidationError(_)));
    }
    assert!(extract_sample_lines(Cursor::new("one"), UTF_8, 999).is_ok());
}

#[test]
fn sampling_fails_without_newlines_in_window() {
    let input = vec![b'q'; MAX_CHARS + 1];
    let err = extract_sample_lines(Cursor::new(input), UTF_8, 3).unwrap_err();
    assert!(matches!(err, DiscoveryError::SamplingError(_)));
}

#[test]
fn sampling_single_row_from_large_multiline_stream() {
    let input: String = (0..20_000).map(|i| format!("line{}\n", i)).collect();
    let sample = extract_sample_lines(Cursor::new(input), UTF_8, 1).unwrap();
    assert_eq!(sample, "line0\n");
}

#[test]
fn inference_precedence() {
    assert_eq!(derive_canonical_type(&["1", "2", "3"]), CanonicalType::Integer);
    assert_eq!(derive_canonical_type(&["1", "2.5"]), CanonicalType::Double);
    assert_eq!(derive_canonical_type(&["1", "abc"]), CanonicalType::Varchar);
    assert_eq!(derive_canonical_type::<&str>(&[]), CanonicalType::Varchar);
    assert_eq!(derive_canonical_type(&["Nan", "Bob"]), CanonicalType::Varchar);
    assert_eq!(derive_canonical_type(&["NaN", "Infinity"]), CanonicalType::Double);
}

#[test]
fn derivation_over_caller_owned_fields() {
    let mut columns = vec![
        Column {
            label: "id".to_string(),
            declared: Some("INTEGER".to_string()),
            ..Default::default()
        },
        Column {
            label: "n".to_string(),
            declared: Some("garbage".to_string()),
            values: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        },
        Column {
            label: "when".to_string(),
            declared: Some("DATE".to_string()),
            ..Default::default()
        },
    ];

    derive_data_types(TableSchemaType::Hive, &mut columns);

    assert_eq!(columns[0].hive_type.as_deref(), Some("int"));
    assert_eq!(columns[0].category, Some(DataTypeDescriptor::numeric()));
    assert_eq!(columns[1].hive_type.as_deref(), Some("string"));
    assert_eq!(columns[2].category, Some(DataTypeDescriptor::date()));
}

#[test]
fn derivation_is_idempotent() {
    let mut fields = vec![
        Field::new("a").with_sample_values(["1", "2"]),
        Field::new("b").with_sample_values(["x"]),
        Field::new("c").with_native_data_type("BIGINT"),
    ];

    derive_data_types(TableSchemaType::Hive, &mut fields);
    let first = fields.clone();
    derive_data_types(TableSchemaType::Hive, &mut fields);

    assert_eq!(fields, first);
}

#[test]
fn rdbms_never_sets_descriptor() {
    let mut fields = vec![
        Field::new("a").with_sample_values(["1"]),
        Field::new("b").with_native_data_type("BOOLEAN"),
    ];

    derive_data_types(TableSchemaType::Rdbms, &mut fields);

    assert_eq!(fields[0].derived_data_type.as_deref(), Some("INTEGER"));
    assert_eq!(fields[1].derived_data_type.as_deref(), Some("BOOLEAN"));
    assert!(fields.iter().all(|f| f.data_type_descriptor.is_none()));
}
