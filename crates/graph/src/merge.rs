use crate::error::{GraphError, Result};
use crate::types::{Edge, EdgeType, NodeList};
use std::collections::HashSet;

impl NodeList {
    /// Combine `other` into this list in place.
    ///
    /// Nodes already present are gap-filled from `other`, new ones are
    /// appended. Destinations of edges sharing (origin, type) are appended
    /// to our first matching edge; the trailing edge cleanup removes the
    /// duplicates this produces.
    pub fn add(&mut self, other: &NodeList) {
        let mut existing_nodes = self.index_nodes();
        for node in &other.nodes {
            match existing_nodes.get(&node.id) {
                Some(&i) => self.nodes[i].augment(node),
                None => {
                    existing_nodes.insert(node.id.clone(), self.nodes.len());
                    self.nodes.push(node.clone());
                }
            }
        }

        let existing_edges = self.index_edges();
        for edge in &other.edges {
            let first = existing_edges
                .get(&edge.from)
                .and_then(|by_type| by_type.get(&edge.edge_type))
                .and_then(|positions| positions.first());

            match first {
                Some(&i) => self.edges[i].to.extend(edge.to.iter().cloned()),
                None => self.edges.push(edge.clone()),
            }
        }

        self.root_elements = merge_root_elements(&self.root_elements, &other.root_elements);

        log::debug!(
            "Added node list: {} nodes, {} edges, {} root elements",
            other.nodes.len(),
            other.edges.len(),
            other.root_elements.len()
        );

        self.clean_edges();
    }

    /// Return a new list with the nodes of both lists.
    ///
    /// Nodes present in both are copied from `self` and overlaid with the
    /// data in `other`, so on conflicting fields `other` wins. Root elements
    /// keep our order first.
    pub fn union(&self, other: &NodeList) -> NodeList {
        let mut ret = NodeList {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            root_elements: Vec::new(),
        };

        let mut node_index = ret.index_nodes();
        for node in &other.nodes {
            match node_index.get(&node.id) {
                Some(&i) => ret.nodes[i].update(node),
                None => {
                    node_index.insert(node.id.clone(), ret.nodes.len());
                    ret.nodes.push(node.clone());
                }
            }
        }

        for edge in &other.edges {
            match ret.get_edge_by_type_mut(&edge.from, edge.edge_type) {
                Some(existing) => append_missing(existing, &edge.to),
                None => ret.edges.push(edge.clone()),
            }
        }

        ret.clean_edges();
        ret.root_elements = merge_root_elements(&self.root_elements, &other.root_elements);

        ret
    }

    /// Return a new list with the nodes present in both lists.
    ///
    /// Each common node is a copy of ours overlaid with `other`'s data and is
    /// a root element when it was one in either list. Edges come from `self`;
    /// `other` can only widen an edge that already exists with the same
    /// origin and type.
    pub fn intersect(&self, other: &NodeList) -> NodeList {
        let roots = self.index_root_elements();
        let other_roots = other.index_root_elements();
        let other_nodes = other.index_nodes();

        let mut ret = NodeList {
            nodes: Vec::new(),
            edges: self.edges.clone(),
            root_elements: Vec::new(),
        };

        let mut taken: HashSet<&str> = HashSet::new();
        for node in &self.nodes {
            let Some(&j) = other_nodes.get(&node.id) else {
                continue;
            };
            if !taken.insert(node.id.as_str()) {
                continue;
            }

            let mut merged = node.clone();
            merged.update(&other.nodes[j]);
            ret.nodes.push(merged);

            if roots.contains(&node.id) || other_roots.contains(&node.id) {
                ret.root_elements.push(node.id.clone());
            }
        }

        for edge in &other.edges {
            if let Some(existing) = ret.get_edge_by_type_mut(&edge.from, edge.edge_type) {
                append_missing(existing, &edge.to);
            }
        }

        ret.clean_edges();

        ret
    }

    /// Hang the root elements of `other` below the node `node_id` using an
    /// edge of `edge_type`, and copy over every node of `other` we do not
    /// have yet. Our own root elements stay untouched.
    ///
    /// An existing edge is extended as is, destinations are not
    /// deduplicated.
    pub fn relate_node_list_at_id(
        &mut self,
        other: &NodeList,
        node_id: &str,
        edge_type: EdgeType,
    ) -> Result<()> {
        let mut present: HashSet<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
        if !present.contains(node_id) {
            return Err(GraphError::NodeNotFound(node_id.to_string()));
        }

        match self.get_edge_by_type_mut(node_id, edge_type) {
            Some(edge) => edge.to.extend(other.root_elements.iter().cloned()),
            None => self.edges.push(Edge {
                edge_type,
                from: node_id.to_string(),
                to: other.root_elements.clone(),
            }),
        }

        for node in &other.nodes {
            if present.insert(node.id.clone()) {
                self.nodes.push(node.clone());
            }
        }

        log::debug!(
            "Related {} root elements at {} ({})",
            other.root_elements.len(),
            node_id,
            edge_type
        );

        Ok(())
    }
}

fn append_missing(edge: &mut Edge, to: &[String]) {
    for id in to {
        if !edge.points_to(id) {
            edge.to.push(id.clone());
        }
    }
}

/// Concatenate both root lists, dropping repeated ids
fn merge_root_elements(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    first
        .iter()
        .chain(second)
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
