//! IPv4 CIDR list aggregation and membership testing.
//!
//! `merge` gathers prefixes from URLs, files and literal arguments, folds
//! sibling blocks into their parents and writes the result as a plain list
//! or an nftables named set. `test` looks an address up in such a list.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod sources;

use cli::{MergeArgs, TestArgs};
use models::Network;
use output::{write_list_file, ListFormat};
use sources::{collect, read_file_lines, sources_from_args};
use std::error::Error;
use std::net::Ipv4Addr;
use std::path::Path;

pub const NOT_FOUND_MESSAGE: &str = "IP not found in any CIDR range";

/// Counters from one `merge` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Distinct networks collected before aggregation.
    pub collected: usize,
    pub skipped_lines: usize,
    pub failed_sources: usize,
    /// Networks written after aggregation.
    pub written: usize,
}

/// Collect, aggregate and write. Only an output failure is an error; source
/// failures are counted in the summary.
pub async fn run_merge(
    args: &MergeArgs,
    client: &reqwest::Client,
) -> Result<MergeSummary, Box<dyn Error>> {
    log::info!("#Start run_merge() out={}", args.out.display());

    let sources = sources_from_args(&args.urls, &args.files, &args.networks);
    let report = collect(client, &sources).await;
    let merged: Vec<Network> = processing::aggregate(&report.networks);

    write_list_file(&args.out, args.format, &args.name, &merged)?;

    Ok(MergeSummary {
        collected: report.networks.len(),
        skipped_lines: report.skipped.len(),
        failed_sources: report.failed.len(),
        written: merged.len(),
    })
}

/// Read a prefix list file, slicing out the named block for
/// [`ListFormat::Nft`].
pub fn load_prefix_list<P: AsRef<Path>>(
    path: P,
    format: ListFormat,
    name: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    let lines = read_file_lines(path)?;
    Ok(match format {
        ListFormat::Txt => lines,
        ListFormat::Nft => processing::extract_block(&lines, name),
    })
}

/// Look `args.ip` up in the list file. `Ok(None)` means no prefix matched;
/// an unparseable address or unreadable file is an error.
pub fn run_test(args: &TestArgs) -> Result<Option<String>, Box<dyn Error>> {
    let ip: Ipv4Addr = args
        .ip
        .trim()
        .parse()
        .map_err(|_| format!("Invalid IP address: '{}'", args.ip))?;

    let list = load_prefix_list(&args.input, args.format, &args.name)?;
    log::debug!(
        "Testing {ip} against {} entries from {}",
        list.len(),
        args.input.display()
    );

    Ok(processing::find_containing(&list, ip).map(str::to_string))
}

/// Line printed for the outcome of `test`.
pub fn verdict(found: Option<&str>) -> String {
    match found {
        Some(prefix) => format!("IP is in: {prefix}"),
        None => NOT_FOUND_MESSAGE.to_string(),
    }
}
