//! Output formatter trait

use quorumtool_domain::{NodeIdFormat, NodeListing, StatusReport};

/// Trait for formatting command reports
pub trait OutputFormatter {
    /// Format the show-status report
    fn format_status(&self, report: &StatusReport) -> String;

    /// Format the node listing
    fn format_nodes(&self, listing: &NodeListing, node_id_format: NodeIdFormat) -> String;
}
