pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::ApiClient;
pub use crate::config::ProbeConfig;
pub use crate::core::runner::ProbeRunner;
pub use crate::utils::error::{ProbeError, Result};
