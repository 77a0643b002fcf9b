//! Address membership testing against prefix lists.
//!
//! Lists are scanned in order and the first containing prefix wins, so a
//! caller that wants order-independent answers should aggregate first.

use crate::models::Network;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Matches the opening line of a named set: `define <name> = {`.
static DEFINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_define_regex() -> &'static Regex {
    DEFINE_REGEX.get_or_init(|| {
        Regex::new(r"^define\s+([^\s={]+)(?:\s|=|\{|$)").expect("Invalid Regex")
    })
}

/// Name declared by a `define <name> ...` line, if the line is one.
fn define_name(line: &str) -> Option<&str> {
    get_define_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Slice the entries of the block `define <name> = { ... }` out of `lines`.
///
/// Entries are trimmed and lose one trailing comma. The block ends at the
/// first line that is exactly `}`. An absent block gives an empty list.
pub fn extract_block<S: AsRef<str>>(lines: &[S], name: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut inside = false;

    for line in lines {
        let line = line.as_ref().trim();
        if !inside {
            if define_name(line) == Some(name) {
                log::debug!("Found block 'define {name}'");
                inside = true;
            }
            continue;
        }
        if line == "}" {
            return entries;
        }
        let entry = line.strip_suffix(',').unwrap_or(line).trim();
        if !entry.is_empty() {
            entries.push(entry.to_string());
        }
    }

    if inside {
        log::warn!("Block 'define {name}' has no closing brace");
    } else {
        log::warn!("Block 'define {name}' not found");
    }
    entries
}

/// Return the first entry of `list` whose range contains `ip`.
///
/// Entries that do not parse as IPv4 CIDR are skipped.
pub fn find_containing<S: AsRef<str>>(list: &[S], ip: Ipv4Addr) -> Option<&str> {
    list.iter().map(|s| s.as_ref()).find(|entry| match Network::parse(entry) {
        Ok(network) => network.contains(ip),
        Err(e) => {
            log::trace!("skip entry: {e}");
            false
        }
    })
}
