//! Transient lookup structures over a [`NodeList`].
//!
//! Indexes are rebuilt by every operation that needs them and never stored,
//! so they can not go stale across mutations. Positions point into the
//! `nodes`/`edges` vectors of the list they were built from.

use crate::types::{Edge, EdgeType, Node, NodeList};
use std::collections::{HashMap, HashSet};

/// Node id -> position in `nodes` (last occurrence wins)
pub(crate) type NodeIndex = HashMap<String, usize>;

/// Origin id -> edge type -> positions in `edges`, in list order
pub(crate) type EdgeIndex = HashMap<String, HashMap<EdgeType, Vec<usize>>>;

/// Ids of the top level elements
pub(crate) type RootElementsIndex = HashSet<String>;

impl NodeList {
    pub(crate) fn index_nodes(&self) -> NodeIndex {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect()
    }

    pub(crate) fn index_edges(&self) -> EdgeIndex {
        let mut index = EdgeIndex::new();
        for (i, edge) in self.edges.iter().enumerate() {
            index
                .entry(edge.from.clone())
                .or_default()
                .entry(edge.edge_type)
                .or_default()
                .push(i);
        }
        index
    }

    pub(crate) fn index_root_elements(&self) -> RootElementsIndex {
        self.root_elements.iter().cloned().collect()
    }

    /// Restore the edge invariants.
    ///
    /// Edges whose origin is not a node are dropped. All edges sharing an
    /// (origin, type) pair collapse into one carrying the deduplicated union
    /// of their destinations, minus destinations that are not nodes. Edges
    /// keep the order in which their key first appeared, destinations the
    /// order in which they were first seen.
    pub fn clean_edges(&mut self) {
        let (cleaned, dangling) = collapse_edges(&self.nodes, &self.edges);

        if dangling > 0 || cleaned.len() != self.edges.len() {
            log::debug!(
                "Cleaned edges: {} -> {} ({} dangling)",
                self.edges.len(),
                cleaned.len(),
                dangling
            );
        }

        self.edges = cleaned;
    }
}

/// Returns the sanitized edge list and the number of edges dropped for a
/// missing origin.
fn collapse_edges(nodes: &[Node], edges: &[Edge]) -> (Vec<Edge>, usize) {
    let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let mut slots: HashMap<(&str, EdgeType), usize> = HashMap::new();
    let mut seen: Vec<HashSet<&str>> = Vec::new();
    let mut cleaned: Vec<Edge> = Vec::new();
    let mut dangling = 0;

    for edge in edges {
        if !node_ids.contains(edge.from.as_str()) {
            dangling += 1;
            continue;
        }

        let slot = *slots
            .entry((edge.from.as_str(), edge.edge_type))
            .or_insert_with(|| {
                cleaned.push(Edge {
                    edge_type: edge.edge_type,
                    from: edge.from.clone(),
                    to: Vec::new(),
                });
                seen.push(HashSet::new());
                cleaned.len() - 1
            });

        for to in &edge.to {
            if node_ids.contains(to.as_str()) && seen[slot].insert(to.as_str()) {
                cleaned[slot].to.push(to.clone());
            }
        }
    }

    (cleaned, dangling)
}
