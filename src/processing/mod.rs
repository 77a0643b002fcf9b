//! Prefix list processing logic.
//!
//! - [`aggregate`] - Sibling-merge aggregation to a fixed point
//! - [`membership`] - First-match address lookup and named block extraction

mod aggregate;
mod membership;

// Re-export public functions
pub use aggregate::{aggregate, is_sibling, merge_pair, merge_pass};
pub use membership::{extract_block, find_containing};
