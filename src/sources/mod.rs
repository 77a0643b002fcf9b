//! Prefix sources: local files, HTTP(S) URLs and literal arguments.
//!
//! - [`reader`] - Line splitting and file reading
//! - [`http`] - URL fetching
//! - [`collect`] - Best-effort accumulation into a network set

mod collect;
mod http;
mod reader;

// Re-export public types and functions
pub use collect::{collect, sources_from_args, CollectReport, FailedSource, Source};
pub use http::fetch_url_lines;
pub use reader::{read_file_lines, read_lines};
