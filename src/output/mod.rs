//! Output formatting for aggregated prefix lists.
//!
//! - [`txt`] - One prefix per line
//! - [`nft`] - nftables `define` block

mod nft;
mod txt;

pub use nft::write_nft;
pub use txt::write_txt;

use crate::models::Network;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Layout of a prefix list file, for both writing and reading back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListFormat {
    /// One prefix per line
    #[default]
    Txt,
    /// nftables `define <name> = { ... }` block
    Nft,
}

/// Render `networks` in `format`. `name` is only used by [`ListFormat::Nft`].
pub fn write_list<W: Write>(
    w: &mut W,
    format: ListFormat,
    name: &str,
    networks: &[Network],
) -> std::io::Result<()> {
    match format {
        ListFormat::Txt => write_txt(w, networks),
        ListFormat::Nft => write_nft(w, name, networks),
    }
}

/// Create (or truncate) `path` and write `networks` to it.
pub fn write_list_file<P: AsRef<Path>>(
    path: P,
    format: ListFormat,
    name: &str,
    networks: &[Network],
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| format!("Failed to create output file {}: {e}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_list(&mut w, format, name, networks)
        .and_then(|_| w.flush())
        .map_err(|e| format!("Failed to write output file {}: {e}", path.display()))?;
    log::info!(
        "Wrote {} networks to {} ({format:?})",
        networks.len(),
        path.display()
    );
    Ok(())
}
