//! nftables named-set output.
//!
//! ```text
//! define netlist = {
//!     10.0.0.0/24,
//!     192.168.0.0/16
//! }
//! ```

use crate::models::Network;
use std::io::Write;

const INDENT: &str = "    ";

pub fn write_nft<W: Write>(w: &mut W, name: &str, networks: &[Network]) -> std::io::Result<()> {
    writeln!(w, "define {name} = {{")?;
    for (i, network) in networks.iter().enumerate() {
        let sep = if i + 1 == networks.len() { "" } else { "," };
        writeln!(w, "{INDENT}{network}{sep}")?;
    }
    writeln!(w, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, networks: &[Network]) -> String {
        let mut out = Vec::new();
        write_nft(&mut out, name, networks).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_nft() {
        let networks = vec![
            Network::parse("10.0.0.0/24").unwrap(),
            Network::parse("192.168.0.0/16").unwrap(),
        ];
        assert_eq!(
            render("netlist", &networks),
            "define netlist = {\n    10.0.0.0/24,\n    192.168.0.0/16\n}\n"
        );
    }

    #[test]
    fn test_write_nft_single() {
        let networks = vec![Network::parse("10.0.0.0/8").unwrap()];
        assert_eq!(
            render("blocked", &networks),
            "define blocked = {\n    10.0.0.0/8\n}\n"
        );
    }

    #[test]
    fn test_write_nft_empty() {
        assert_eq!(render("netlist", &[]), "define netlist = {\n}\n");
    }
}
