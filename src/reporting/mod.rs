pub mod assembler;
pub mod formatter;
pub mod wcag;

pub use assembler::{render_report, RenderContext};
pub use wcag::wcag_clause;
