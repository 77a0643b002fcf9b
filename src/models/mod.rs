//! Domain models for CIDR aggregation.
//!
//! - [`Network`] - canonical IPv4 prefix with parsing and mask helpers

mod network;

// Re-export public types
pub use network::{block_size, get_cidr_mask, Network, ParseNetworkError, MAX_LENGTH};
