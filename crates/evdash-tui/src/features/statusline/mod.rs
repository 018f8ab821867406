//! Status line feature slice.
//!
//! One row at the bottom: transient messages (import results, rejected
//! actions), a spinner while a background task runs, otherwise key hints and
//! dataset counters.

mod render;
mod state;

pub use render::{render_status_line, spinner_glyph};
pub use state::{STATUS_TTL, StatusKind, StatusLineState, StatusMessage};
