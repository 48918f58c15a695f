pub mod error;

// Schema discovery module
pub mod schema;
