#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "ko");

pub mod acquirer;
pub mod config;
pub mod error;
pub mod llm;
pub mod ritual;
pub mod ui;

pub use config::Config;
pub use error::{IncineratorError, Result};
