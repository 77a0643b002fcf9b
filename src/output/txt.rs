//! Plain list output: one prefix per line.

use crate::models::Network;
use std::io::Write;

pub fn write_txt<W: Write>(w: &mut W, networks: &[Network]) -> std::io::Result<()> {
    for network in networks {
        writeln!(w, "{network}")?;
    }
    Ok(())
}
