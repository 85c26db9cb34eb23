//! Node tree: arena-backed hierarchy with typed node data and queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId, NodeKind, NodeState};
pub use tree::Tree;
