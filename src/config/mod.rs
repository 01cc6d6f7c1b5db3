pub mod schema;

pub use schema::{AcquisitionConfig, Config, RitualConfig, SUPPORTED_LOCALES};
