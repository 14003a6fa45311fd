//! View tree handed to the host renderer.
//!
//! A section describes what is on screen as a tree of nodes. Regions the
//! host may locate and hot-edit carry a stable [`Tag`].

mod node;
mod tree;

pub use node::{NodeId, NodeKind, Tag, ViewNode, Visual};
pub use tree::ViewTree;
