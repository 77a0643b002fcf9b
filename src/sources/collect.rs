//! Best-effort collection of prefixes from many sources.
//!
//! A source that cannot be read is reported and skipped, and a line that is
//! not a valid prefix is counted and dropped. Neither stops the batch.

use super::http::fetch_url_lines;
use super::reader::read_file_lines;
use crate::models::Network;
use colored::Colorize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Where a batch of candidate prefixes comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
    /// A prefix given directly, e.g. on the command line.
    Literal(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "url {url}"),
            Source::File(path) => write!(f, "file {}", path.display()),
            Source::Literal(cidr) => write!(f, "network '{cidr}'"),
        }
    }
}

/// A source that could not be read, with the reason.
#[derive(Debug, Clone)]
pub struct FailedSource {
    pub source: Source,
    pub error: String,
}

/// Everything gathered from a batch of sources.
#[derive(Debug, Default)]
pub struct CollectReport {
    /// Distinct canonical networks.
    pub networks: BTreeSet<Network>,
    /// Lines that did not parse as an IPv4 prefix.
    pub skipped: Vec<String>,
    pub failed: Vec<FailedSource>,
}

impl CollectReport {
    /// Parse `lines` and fold them in. Returns how many were valid.
    pub fn add_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> usize {
        let mut valid = 0;
        for line in lines {
            let line = line.as_ref();
            match Network::parse(line) {
                Ok(network) => {
                    self.networks.insert(network);
                    valid += 1;
                }
                Err(e) => {
                    log::debug!("Skipping invalid prefix: {e}");
                    self.skipped.push(line.trim().to_string());
                }
            }
        }
        valid
    }
}

/// Build the source list from comma-split command line values: URLs first,
/// then files, then literal networks. Empty items are dropped.
pub fn sources_from_args(urls: &[String], files: &[String], networks: &[String]) -> Vec<Source> {
    let non_empty = |s: &&String| !s.trim().is_empty();
    urls.iter()
        .filter(non_empty)
        .map(|u| Source::Url(u.trim().to_string()))
        .chain(
            files
                .iter()
                .filter(non_empty)
                .map(|f| Source::File(PathBuf::from(f.trim()))),
        )
        .chain(
            networks
                .iter()
                .filter(non_empty)
                .map(|n| Source::Literal(n.to_string())),
        )
        .collect()
}

/// Read every source in order and gather their valid prefixes.
pub async fn collect(client: &reqwest::Client, sources: &[Source]) -> CollectReport {
    let mut report = CollectReport::default();

    for source in sources {
        let lines = match source {
            Source::Url(url) => fetch_url_lines(client, url).await,
            Source::File(path) => read_file_lines(path),
            Source::Literal(cidr) => Ok(vec![cidr.clone()]),
        };

        match lines {
            Ok(lines) => {
                let valid = report.add_lines(&lines);
                log::info!(
                    "Read {source}: {valid} valid of {total} lines",
                    total = lines.len()
                );
            }
            Err(e) => {
                log::warn!(
                    "{failed} to read {source}: {e}",
                    failed = "failed".on_red()
                );
                report.failed.push(FailedSource {
                    source: source.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Collected {} distinct networks, skipped {} invalid lines, {} failed sources",
        report.networks.len(),
        report.skipped.len(),
        report.failed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::super::http::test_server::{client, serve_once};
    use super::*;

    #[test]
    fn test_add_lines_dedups_canonical() {
        let mut report = CollectReport::default();
        let valid = report.add_lines(&["10.0.0.5/24", "10.0.0.0/24", "bogus", "10.0.0.0/33"]);
        assert_eq!(valid, 2);
        assert_eq!(report.networks.len(), 1);
        assert_eq!(report.skipped, vec!["bogus", "10.0.0.0/33"]);
    }

    #[test]
    fn test_sources_from_args() {
        let urls = vec!["http://a/".to_string(), "".to_string()];
        let files = vec![" list.txt ".to_string()];
        let networks = vec!["10.0.0.0/8".to_string(), " ".to_string()];
        assert_eq!(
            sources_from_args(&urls, &files, &networks),
            vec![
                Source::Url("http://a/".to_string()),
                Source::File(PathBuf::from("list.txt")),
                Source::Literal("10.0.0.0/8".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_collect_skips_failed_sources() {
        let sources = vec![
            Source::File(PathBuf::from("tests/test_data/does_not_exist.txt")),
            Source::File(PathBuf::from("tests/test_data/source_a.txt")),
            Source::Literal("192.168.0.0/24".to_string()),
            Source::Literal("not-a-cidr".to_string()),
        ];
        let report = collect(&client(), &sources).await;
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].source, sources[0]);
        assert!(report
            .networks
            .contains(&Network::parse("192.168.0.0/24").unwrap()));
        assert!(report.skipped.contains(&"not-a-cidr".to_string()));
    }

    #[tokio::test]
    async fn test_collect_from_url() {
        let ok = serve_once("200 OK", "10.0.0.0/25\n10.0.0.128/25\njunk\n").await;
        let missing = serve_once("500 Internal Server Error", "").await;
        let sources = vec![Source::Url(missing), Source::Url(ok)];
        let report = collect(&client(), &sources).await;
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.networks.len(), 2);
        assert_eq!(report.skipped, vec!["junk"]);
    }
}
