//! Rendering menus and item-detail views as terminal text.
//!
//! Rendering is pure: data in, styled text plus a match count out. Callers
//! decide what to print.

pub mod detail;
pub mod filter;
pub mod listing;
pub mod menu;

pub use detail::{render_item_detail, RenderedDetail};
pub use filter::ItemFilter;
pub use listing::render_report_listing;
pub use menu::{render_menu, RenderedMenu};
