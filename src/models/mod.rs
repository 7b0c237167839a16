pub mod production;
pub mod shift;

pub use production::{ProductionInput, ProductionRecord, StoredRecord};
pub use shift::Shift;
