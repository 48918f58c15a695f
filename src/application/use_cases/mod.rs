pub mod schema_discovery;
pub mod type_derivation;
