pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

/// Table holding production records (the "productionrecord" collection).
pub const PRODUCTION_TABLE: &str = "production_records";
