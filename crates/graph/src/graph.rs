use crate::types::{EdgeType, Node, NodeList};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use std::collections::{HashMap, HashSet};

impl NodeList {
    /// Remove the nodes with the given ids and every edge touching them
    pub fn remove_nodes<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
        let before = self.nodes.len();
        self.nodes.retain(|n| !ids.contains(&n.id));

        log::debug!("Removed {} nodes", before - self.nodes.len());

        self.clean_edges();
    }

    /// Promote every node that is not the origin of an edge and not already
    /// a root element to a root element.
    pub fn reconnect_orphan_nodes(&mut self) {
        let edge_index = self.index_edges();
        let mut root_index = self.index_root_elements();

        for node in &self.nodes {
            if edge_index.contains_key(&node.id) || root_index.contains(&node.id) {
                continue;
            }
            root_index.insert(node.id.clone());
            self.root_elements.push(node.id.clone());
        }
    }

    /// Return a new list with the nodes whose purl is of type `purl_type`
    /// (`deb`, `npm`, ...), the edges leaving them and the surviving root
    /// elements. Orphaned nodes become root elements.
    ///
    /// Both `pkg:<type>/` and `pkg:/<type>/` are accepted, some SPDX
    /// tooling emits the second form. A blank type yields an empty list.
    pub fn get_nodes_by_purl_type(&self, purl_type: &str) -> NodeList {
        let mut ret = NodeList::new();
        if purl_type.trim().is_empty() {
            return ret;
        }

        let prefix = format!("pkg:{purl_type}/");
        let slashed_prefix = format!("pkg:/{purl_type}/");
        ret.nodes = self
            .nodes
            .iter()
            .filter(|n| {
                let purl = n.purl();
                purl.starts_with(&prefix) || purl.starts_with(&slashed_prefix)
            })
            .cloned()
            .collect();

        let index = ret.index_nodes();
        ret.edges = self
            .edges
            .iter()
            .filter(|e| index.contains_key(&e.from))
            .cloned()
            .collect();
        ret.root_elements = self
            .root_elements
            .iter()
            .filter(|id| index.contains_key(*id))
            .cloned()
            .collect();

        ret.reconnect_orphan_nodes();
        ret.clean_edges();

        ret
    }

    /// Build a petgraph view of the list. Edges to or from unknown ids are
    /// left out.
    pub fn to_digraph(&self) -> GraphView<'_> {
        let mut view = GraphView {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        };

        for node in &self.nodes {
            if view.node_index.contains_key(node.id.as_str()) {
                continue;
            }
            let idx = view.graph.add_node(node);
            view.node_index.insert(node.id.as_str(), idx);
        }

        for edge in &self.edges {
            let Some(&from) = view.node_index.get(edge.from.as_str()) else {
                continue;
            };
            for to in &edge.to {
                if let Some(&to) = view.node_index.get(to.as_str()) {
                    view.graph.add_edge(from, to, edge.edge_type);
                }
            }
        }

        view
    }

    /// Ids of nodes that can not be reached from any root element
    pub fn unreachable_nodes(&self) -> Vec<&str> {
        let view = self.to_digraph();
        let mut reached: HashSet<NodeIndex> = HashSet::new();
        let mut dfs = Dfs::empty(&view.graph);

        for root in &self.root_elements {
            let Some(start) = view.find_node(root) else {
                continue;
            };
            if reached.contains(&start) {
                continue;
            }
            dfs.move_to(start);
            while let Some(idx) = dfs.next(&view.graph) {
                reached.insert(idx);
            }
        }

        self.nodes
            .iter()
            .filter(|n| {
                view.find_node(&n.id)
                    .map_or(true, |idx| !reached.contains(&idx))
            })
            .map(|n| n.id.as_str())
            .collect()
    }
}

/// Return the nodes of `list` matching `purl_type`, or an empty list when
/// there is no list at all.
pub fn filter_by_purl_type(list: Option<&NodeList>, purl_type: &str) -> NodeList {
    list.map(|nl| nl.get_nodes_by_purl_type(purl_type))
        .unwrap_or_default()
}

/// Borrowed directed graph over the nodes of a [`NodeList`]
pub struct GraphView<'a> {
    /// One graph edge per (origin, destination) pair of every list edge
    pub graph: DiGraph<&'a Node, EdgeType>,

    /// Node id -> NodeIndex mapping
    pub node_index: HashMap<&'a str, NodeIndex>,
}

impl GraphView<'_> {
    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
