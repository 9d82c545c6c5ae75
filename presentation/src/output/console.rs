//! Console output formatter
//!
//! Labels are padded to a fixed column so scripts that scrape the
//! output keep working.

use crate::output::formatter::OutputFormatter;
use quorumtool_domain::{NodeIdFormat, NodeListing, StatusReport, VoteSummary};
use std::fmt::Write;

/// Width of the `label:` column in the status report
const LABEL_WIDTH: usize = 18;

/// Formats reports as plain text
pub struct ConsoleFormatter {
    version: String,
}

impl ConsoleFormatter {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
        let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_status(&self, report: &StatusReport) -> String {
        let mut out = String::new();
        Self::field(&mut out, "Version:", &self.version);
        Self::field(&mut out, "Nodes:", report.node_count);
        Self::field(&mut out, "Ring ID:", report.ring_id);
        Self::field(&mut out, "Quorum type:", report.quorum_type.label());
        Self::field(
            &mut out,
            "Quorate:",
            if report.quorate { "Yes" } else { "No" },
        );

        if let VoteSummary::Available(info) = &report.votes {
            Self::field(&mut out, "Node votes:", info.node_votes);
            Self::field(&mut out, "Expected votes:", info.node_expected_votes);
            Self::field(&mut out, "Highest expected:", info.highest_expected);
            Self::field(&mut out, "Total votes:", info.total_votes);
            Self::field(
                &mut out,
                "Quorum:",
                format_args!("{} {}", info.quorum_threshold, info.activity_label()),
            );
            Self::field(&mut out, "Flags:", info.flags.render());
        }
        out
    }

    fn format_nodes(&self, listing: &NodeListing, node_id_format: NodeIdFormat) -> String {
        let mut out = String::new();
        if listing.with_votes {
            out.push_str("Nodeid     Votes  Name\n");
        } else {
            out.push_str("Nodeid     Name\n");
        }

        for row in &listing.rows {
            let id = row.node_id.render(node_id_format);
            match row.votes {
                Some(votes) => {
                    let _ = writeln!(out, "{}   {:>3}  {}", id, votes, row.name);
                }
                None => {
                    let _ = writeln!(out, "{}   {}", id, row.name);
                }
            }
        }
        out
    }
}
