//! Node identifiers and their display formats

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit cluster node identifier.
///
/// `NodeId::LOCAL` (0) means "the node this client runs on" for vote queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel meaning the local node
    pub const LOCAL: NodeId = NodeId(0);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn is_local(self) -> bool {
        self == Self::LOCAL
    }

    /// Render the id the way node listings show it.
    ///
    /// Decimal is right-justified to width 4 (`%4u`), hexadecimal is
    /// zero-padded to 4 digits with a `0x` prefix (`0x%04x`).
    pub fn render(self, format: NodeIdFormat) -> String {
        match format {
            NodeIdFormat::Decimal => format!("{:>4}", self.0),
            NodeIdFormat::Hex => format!("0x{:04x}", self.0),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of one membership configuration.
///
/// Two views carrying the same ring id describe identical membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RingId(u64);

impl RingId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How node ids are printed in listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeIdFormat {
    #[default]
    Decimal,
    Hex,
}

/// How node addresses are printed in listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameFormat {
    /// Reverse-resolved host name
    #[default]
    #[serde(rename = "name")]
    DisplayName,
    /// Numeric address, no lookup
    #[serde(rename = "ip")]
    NumericAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_decimal_is_width_four() {
        assert_eq!(NodeId::new(255).render(NodeIdFormat::Decimal), " 255");
        assert_eq!(NodeId::new(1).render(NodeIdFormat::Decimal), "   1");
        assert_eq!(NodeId::new(123456).render(NodeIdFormat::Decimal), "123456");
    }

    #[test]
    fn test_render_hex_is_zero_padded() {
        assert_eq!(NodeId::new(255).render(NodeIdFormat::Hex), "0x00ff");
        assert_eq!(NodeId::new(0x12345).render(NodeIdFormat::Hex), "0x12345");
    }

    #[test]
    fn test_local_sentinel() {
        assert!(NodeId::LOCAL.is_local());
        assert!(!NodeId::new(3).is_local());
    }

    #[test]
    fn test_formats_deserialize_from_config_names() {
        let hex: NodeIdFormat = serde_json::from_str("\"hex\"").unwrap();
        assert_eq!(hex, NodeIdFormat::Hex);
        let ip: NameFormat = serde_json::from_str("\"ip\"").unwrap();
        assert_eq!(ip, NameFormat::NumericAddress);
    }
}
