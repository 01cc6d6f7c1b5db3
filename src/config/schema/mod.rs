mod env_overrides;
mod loader;
mod locale;
mod types;

#[cfg(test)]
mod test_env;

pub use locale::SUPPORTED_LOCALES;
pub use types::{AcquisitionConfig, Config, RitualConfig};
