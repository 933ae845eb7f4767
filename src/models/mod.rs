pub mod captured_run;
pub mod statistics;
pub mod violation;

pub use captured_run::*;
pub use statistics::*;
pub use violation::*;
