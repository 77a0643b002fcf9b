//! Sibling-merge aggregation of IPv4 prefixes.
//!
//! Repeatedly folds pairs of sibling blocks (the two halves of one parent
//! block) into their parent until a pass no longer shrinks the list.
//! Containment is not absorbed: `10.0.0.0/24` and `10.0.0.0/25` both survive.

use crate::models::Network;
use std::collections::BTreeSet;

/// True when `a` and `b` are the two children of one parent block.
///
/// Both must have the same prefix length `p >= 1` and their bases must differ
/// exactly in bit `32 - p`. Adjacent blocks that straddle a parent boundary
/// (`10.0.0.128/25`, `10.0.1.0/25`) are not siblings.
pub fn is_sibling(a: &Network, b: &Network) -> bool {
    let p = a.prefix_len();
    if p == 0 || p != b.prefix_len() {
        return false;
    }
    let size = 1u32 << (32 - p);
    a.base() ^ b.base() == size
}

/// Merge two networks into their shared parent, if they are siblings.
pub fn merge_pair(a: &Network, b: &Network) -> Option<Network> {
    if !is_sibling(a, b) {
        return None;
    }
    a.parent()
}

/// One first-fit pass over `candidates`.
///
/// Candidates are sorted and exact duplicates dropped. Each candidate is
/// merged into the first already placed element it is a sibling of, or
/// appended when there is none. A merged element is not revisited in the
/// same pass.
pub fn merge_pass(mut candidates: Vec<Network>) -> Vec<Network> {
    candidates.sort_unstable();
    candidates.dedup();

    let mut result: Vec<Network> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let merged = result
            .iter()
            .enumerate()
            .find_map(|(i, placed)| merge_pair(placed, &candidate).map(|m| (i, m)));
        match merged {
            Some((i, parent)) => {
                log::trace!("merge {} + {} => {parent}", result[i], candidate);
                result[i] = parent;
            }
            None => result.push(candidate),
        }
    }
    result
}

/// Aggregate a set of networks into the smallest list reachable by sibling
/// merges, sorted ascending by base address.
///
/// The result is the same for any set with the same members, however the
/// set was built.
pub fn aggregate(networks: &BTreeSet<Network>) -> Vec<Network> {
    let mut current: Vec<Network> = networks.iter().copied().collect();
    let mut passes = 0;

    loop {
        let before = current.len();
        current = merge_pass(current);
        passes += 1;
        log::debug!(
            "aggregate pass#{passes}: {before} => {after} networks",
            after = current.len()
        );
        if current.len() == before {
            break;
        }
    }

    current.sort_unstable();
    log::info!(
        "Aggregated {} networks into {} in {passes} pass(es)",
        networks.len(),
        current.len()
    );
    current
}
