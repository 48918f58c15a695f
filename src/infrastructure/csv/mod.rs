// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Delimited-text parsing of sampled lines into schema fields

mod csv_parser;

pub use csv_parser::CsvParser;
