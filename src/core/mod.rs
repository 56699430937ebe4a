pub mod runner;

pub use crate::domain::model::{ProbeOutcome, ProbeReport, StepResult};
pub use crate::domain::ports::{ConfigProvider, Probe, ProbeContext};
pub use crate::utils::error::Result;
