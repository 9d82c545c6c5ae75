//! Cluster membership domain
//!
//! Node identifiers, ring ids, the membership snapshot pushed by the
//! membership service, and the single-slot mailbox it is delivered into.

pub mod mailbox;
pub mod node;
pub mod view;

pub use mailbox::ViewMailbox;
pub use node::{NameFormat, NodeId, NodeIdFormat, RingId};
pub use view::ClusterView;
