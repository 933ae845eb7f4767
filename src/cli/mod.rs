pub mod commands;
pub mod run;
pub mod analyze;
pub mod progress;
pub mod summary;

pub use commands::{Cli, Commands};
