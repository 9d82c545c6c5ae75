//! Numeric argument parsing.
//!
//! Values given on the command line follow C `strtol(s, &end, 0)` rules:
//! an optional sign, then `0x`/`0X` for hexadecimal, a leading `0` for
//! octal, decimal otherwise. Unlike `strtol`, trailing garbage is rejected.

use crate::cluster::node::NodeId;
use crate::core::error::DomainError;

/// Parse an integer with automatic radix detection.
///
/// Returns `None` when the text is empty, has stray characters, or does
/// not fit in an `i64`.
pub fn parse_c_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the `-v <votes>` value: an integer ≥ 0.
pub fn parse_votes(raw: &str) -> Result<u32, DomainError> {
    parse_c_integer(raw)
        .filter(|v| *v >= 0)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v <= i32::MAX as u32)
        .ok_or_else(|| DomainError::InvalidVotes(raw.to_string()))
}

/// Parse the `-e <expected>` value: an integer > 0.
pub fn parse_expected_votes(raw: &str) -> Result<u32, DomainError> {
    parse_c_integer(raw)
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v <= i32::MAX as u32)
        .ok_or_else(|| DomainError::InvalidExpectedVotes(raw.to_string()))
}

/// Parse the `-n <nodeid>` value: a positive 32-bit node id.
///
/// Zero is reserved for the local-node sentinel and is rejected here.
pub fn parse_node_id(raw: &str) -> Result<NodeId, DomainError> {
    parse_c_integer(raw)
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .map(NodeId::new)
        .ok_or_else(|| DomainError::InvalidNodeId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_hex_and_octal() {
        assert_eq!(parse_c_integer("42"), Some(42));
        assert_eq!(parse_c_integer("0x1f"), Some(31));
        assert_eq!(parse_c_integer("0X1F"), Some(31));
        assert_eq!(parse_c_integer("010"), Some(8));
        assert_eq!(parse_c_integer("0"), Some(0));
        assert_eq!(parse_c_integer("-7"), Some(-7));
        assert_eq!(parse_c_integer("+7"), Some(7));
        assert_eq!(parse_c_integer("  12"), Some(12));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_c_integer(""), None);
        assert_eq!(parse_c_integer("abc"), None);
        assert_eq!(parse_c_integer("12abc"), None);
        assert_eq!(parse_c_integer("0x"), None);
        assert_eq!(parse_c_integer("09"), None);
        assert_eq!(parse_c_integer("--1"), None);
        assert_eq!(parse_c_integer("99999999999999999999"), None);
    }

    #[test]
    fn votes_accept_zero_and_reject_negative() {
        assert_eq!(parse_votes("0"), Ok(0));
        assert_eq!(parse_votes("3"), Ok(3));
        assert_eq!(
            parse_votes("-1"),
            Err(DomainError::InvalidVotes("-1".to_string()))
        );
        assert!(parse_votes("many").is_err());
    }

    #[test]
    fn expected_votes_must_be_positive() {
        assert_eq!(parse_expected_votes("5"), Ok(5));
        assert!(parse_expected_votes("0").is_err());
        assert!(parse_expected_votes("-2").is_err());
    }

    #[test]
    fn node_id_must_be_positive_u32() {
        assert_eq!(parse_node_id("0x10"), Ok(NodeId::new(16)));
        assert_eq!(parse_node_id("4294967295"), Ok(NodeId::new(u32::MAX)));
        assert!(parse_node_id("0").is_err());
        assert!(parse_node_id("-1").is_err());
        assert!(parse_node_id("4294967296").is_err());
    }
}
