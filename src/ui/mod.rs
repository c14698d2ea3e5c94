//! Terminal presentation: theme and batch progress.

pub mod progress;
pub mod theme;

pub use progress::{waiting_message, BatchProgress};
pub use theme::MenuTheme;
