pub mod command;
pub mod runner;

pub use command::CommandSpec;
pub use runner::capture_output;
