//! # SBOM Graph
//!
//! Merge, intersect, filter and compare fragments of a software bill of
//! materials modelled as a directed graph.
//!
//! ## Features
//!
//! - **Set algebra** - add, union and intersect node lists from independent scanners
//! - **Edge sanitation** - no dangling edges, one edge per origin and relationship type
//! - **Splicing** - hang a whole node list below a node of another one
//! - **Filtering** - keep only the components of one purl type
//! - **Structural equality** - order-insensitive comparison of two graphs
//!
//! ## Architecture
//!
//! ```text
//! NodeList
//!     │
//!     ├──> nodes: Vec<Node>          (arena, unique by id)
//!     ├──> edges: Vec<Edge>          (origin id -> destination ids, typed)
//!     └──> root_elements: Vec<id>    (top level entry points)
//!
//! every mutation
//!     ├─ index (id -> node, origin+type -> edges, roots)
//!     ├─ apply the algebra (duplicates tolerated)
//!     └─ clean_edges (drop dangling, collapse per origin+type)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sbom_graph::{Edge, EdgeType, Node, NodeList};
//!
//! let scanner_a = NodeList {
//!     nodes: vec![Node::new("app", "app"), Node::new("libc", "libc6")],
//!     edges: vec![Edge::new(EdgeType::DependsOn, "app", ["libc"])],
//!     root_elements: vec!["app".to_string()],
//! };
//! let scanner_b = NodeList {
//!     nodes: vec![Node::new("libc", "libc6").version("2.36")],
//!     ..Default::default()
//! };
//!
//! let merged = scanner_a.union(&scanner_b);
//! assert_eq!(merged.get_node_by_id("libc").unwrap().version, "2.36");
//! assert_eq!(merged.get_root_nodes().len(), 1);
//! ```

mod error;
mod graph;
mod index;
mod merge;
mod node;
mod query;
mod types;

pub use error::{GraphError, Result};
pub use graph::{filter_by_purl_type, GraphView};
pub use types::{Edge, EdgeType, Identifier, IdentifierType, Node, NodeList, NodeType};
