//! Export products handed to presentation consumers
//!
//! The atlas itself performs no I/O while computing; everything a downstream
//! renderer needs lands in an [`AtlasDocument`] built in one pass after the
//! pipeline finishes. The document serializes to JSON as-is, and the
//! companion writers flatten a single state set into CSV rows or render it as
//! a self-contained interactive HTML page.

mod document;
mod html;
mod state_csv;

pub use document::{AtlasDocument, StateRecord, StateSetDocument};
pub use html::{render_page, write_html};
pub use state_csv::write_csv;
