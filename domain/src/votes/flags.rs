//! Vote-state flags with a stable display order

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One vote-state flag reported by the vote service.
///
/// Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VoteFlag {
    HasState,
    DisallowedNodes,
    TwoNodeMode,
    Quorate,
}

impl VoteFlag {
    /// Token printed on the `Flags:` line
    pub fn token(&self) -> &'static str {
        match self {
            VoteFlag::HasState => "HasState",
            VoteFlag::DisallowedNodes => "DisallowedNodes",
            VoteFlag::TwoNodeMode => "2Node",
            VoteFlag::Quorate => "Quorate",
        }
    }
}

impl fmt::Display for VoteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for VoteFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HasState" => Ok(VoteFlag::HasState),
            "DisallowedNodes" | "Disallowed" => Ok(VoteFlag::DisallowedNodes),
            "TwoNodeMode" | "TwoNode" | "2Node" => Ok(VoteFlag::TwoNodeMode),
            "Quorate" => Ok(VoteFlag::Quorate),
            other => Err(format!("unknown vote flag: {}", other)),
        }
    }
}

/// Set of active vote flags.
///
/// Iteration always follows [`VoteFlag`] variant order regardless of the
/// order flags were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteFlags(BTreeSet<VoteFlag>);

impl VoteFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, flag: VoteFlag) -> Self {
        self.0.insert(flag);
        self
    }

    pub fn contains(&self, flag: VoteFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = VoteFlag> + '_ {
        self.0.iter().copied()
    }

    /// Render as `Flags:` line content: every token followed by one space.
    pub fn render(&self) -> String {
        self.iter().map(|f| format!("{} ", f.token())).collect()
    }
}

impl FromIterator<VoteFlag> for VoteFlags {
    fn from_iter<I: IntoIterator<Item = VoteFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
