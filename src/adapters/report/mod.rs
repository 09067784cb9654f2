//! Report renderers.

mod json;
mod text_table;

pub use json::JsonReportRenderer;
pub use text_table::TextTableRenderer;
