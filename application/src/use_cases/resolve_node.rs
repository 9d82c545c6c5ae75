//! Node address resolution
//!
//! Turns a node id into display text using the node's first configured
//! address. Failures never abort a report: they yield an empty string.

use crate::ports::addresses::{AddressDirectory, INTERFACE_MAX, NameResolver};
use quorumtool_domain::{NameFormat, NodeId};
use tracing::debug;

/// Name or numeric address of `node_id`'s first interface, or `""`.
pub async fn resolve_node(
    directory: &mut dyn AddressDirectory,
    resolver: &dyn NameResolver,
    node_id: NodeId,
    format: NameFormat,
) -> String {
    let addrs = match directory.node_addresses(node_id, INTERFACE_MAX).await {
        Ok(addrs) => addrs,
        Err(e) => {
            debug!("No addresses for node {}: {}", node_id, e);
            return String::new();
        }
    };

    let Some(first) = addrs.first() else {
        debug!("Node {} has an empty address list", node_id);
        return String::new();
    };

    match resolver.resolve(*first, format) {
        Ok(name) => name,
        Err(e) => {
            debug!("Could not resolve {} for node {}: {}", first, node_id, e);
            String::new()
        }
    }
}
