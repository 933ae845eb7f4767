pub mod artifacts;
pub mod capture;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod reporting;

pub use errors::A11yError;
pub use pipeline::{analyze, Analysis, ReportPipeline};
