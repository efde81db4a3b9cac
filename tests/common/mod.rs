//! Common test infrastructure
//!
//! Fixture datasets and an in-memory fetcher so `DataManager` can be loaded
//! without touching the network.

mod fetcher;
mod fixtures;

pub use fetcher::MemoryFetcher;
pub use fixtures::*;
