//! CLI command definitions

use clap::{ArgGroup, Parser};
use quorumtool_application::CommandRequest;
use quorumtool_domain::{NameFormat, NodeIdFormat};
use std::path::PathBuf;

/// CLI arguments for quorumtool
///
/// The short flags follow the daemon's own quorum tool. clap's generated
/// help is off: `-h` selects no command, so the dispatcher prints usage.
#[derive(Parser, Debug, Default)]
#[command(name = "quorumtool")]
#[command(version, about = "Show and change the quorum state of a running cluster")]
#[command(disable_help_flag = true)]
#[command(group(
    ArgGroup::new("command")
        .args(["status", "list", "votes", "expected"])
        .multiple(false)
))]
pub struct Cli {
    /// Show quorum status
    #[arg(short = 's')]
    pub status: bool,

    /// List nodes
    #[arg(short = 'l')]
    pub list: bool,

    /// Change the number of votes for a node
    #[arg(short = 'v', value_name = "VOTES", allow_hyphen_values = true)]
    pub votes: Option<String>,

    /// Nodeid of the node for -v (defaults to the local node)
    #[arg(short = 'n', value_name = "NODEID", allow_hyphen_values = true)]
    pub nodeid: Option<String>,

    /// Change expected votes for the cluster
    #[arg(short = 'e', value_name = "EXPECTED", allow_hyphen_values = true)]
    pub expected: Option<String>,

    /// Show nodeids in hexadecimal rather than decimal
    #[arg(short = 'H')]
    pub hex: bool,

    /// Show node IP addresses instead of the resolved name
    #[arg(short = 'i')]
    pub numeric: bool,

    /// Show the help text
    #[arg(short = 'h')]
    pub help: bool,

    /// Verbosity level (--verbose = info, twice = debug, three times = trace)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Give up waiting for a membership event after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub wait_timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Build the dispatcher request. `-H` and `-i` override the
    /// configured formats.
    pub fn command_request(
        &self,
        node_id_format: NodeIdFormat,
        name_format: NameFormat,
    ) -> CommandRequest {
        CommandRequest {
            show_status: self.status,
            show_nodes: self.list,
            votes: self.votes.clone(),
            expected: self.expected.clone(),
            node_id: self.nodeid.clone(),
            node_id_format: if self.hex {
                NodeIdFormat::Hex
            } else {
                node_id_format
            },
            name_format: if self.numeric {
                NameFormat::NumericAddress
            } else {
                name_format
            },
        }
    }
}
