//! In-memory menu cache and the in-flight request registry.
//!
//! Both live for the process and are owned by the loader behind one lock;
//! nothing here is a module-level global.

pub mod inflight;
pub mod store;

pub use inflight::{InFlightRegistry, RequestKey};
pub use store::{CachedMenu, MenuCache};
