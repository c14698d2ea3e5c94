//! Menu fetching: the single-menu loader and the batch coordinator.

pub mod batch;
pub mod loader;

pub use batch::BatchFetcher;
pub use loader::{LoadOutcome, MenuLoader, MenuReport};
