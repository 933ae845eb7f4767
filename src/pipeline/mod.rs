pub mod orchestrator;

pub use orchestrator::{analyze, Analysis, PipelineConfig, PipelineOutcome, ReportPipeline};
