//! Command line arguments.

use crate::config::{DEFAULT_LIST_FILE, DEFAULT_SET_NAME};
use crate::output::ListFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Merge IPv4 CIDR lists into their smallest sibling-merged form, or test an
/// address against such a list.
#[derive(Parser, Debug)]
#[command(name = "cidr-merge", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect prefixes from URLs, files and arguments and write the merged list
    Merge(MergeArgs),
    /// Print the first prefix in a list that contains an IP address
    Test(TestArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_LIST_FILE)]
    pub out: PathBuf,

    /// Output type
    #[arg(short = 't', long = "type", value_enum, default_value_t = ListFormat::Txt)]
    pub format: ListFormat,

    /// Name for the nft define
    #[arg(short, long, default_value = DEFAULT_SET_NAME)]
    pub name: String,

    /// Comma-separated list of URLs
    #[arg(short = 'u', long = "url", value_delimiter = ',')]
    pub urls: Vec<String>,

    /// Comma-separated list of local file paths
    #[arg(short = 'f', long = "file", value_delimiter = ',')]
    pub files: Vec<String>,

    /// Comma-separated CIDR networks
    #[arg(long = "network", visible_alias = "net", value_delimiter = ',')]
    pub networks: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TestArgs {
    /// Input file
    #[arg(short = 'i', long = "in", default_value = DEFAULT_LIST_FILE)]
    pub input: PathBuf,

    /// Input type
    #[arg(short = 't', long = "type", value_enum, default_value_t = ListFormat::Txt)]
    pub format: ListFormat,

    /// Name of the nft define to read
    #[arg(short, long, default_value = DEFAULT_SET_NAME)]
    pub name: String,

    /// IPv4 address to look up
    pub ip: String,
}
