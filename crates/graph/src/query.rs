use crate::types::{Edge, EdgeType, IdentifierType, Node, NodeList};
use std::collections::{HashMap, HashSet};

impl NodeList {
    /// All nodes whose name equals `name`
    pub fn get_nodes_by_name(&self, name: &str) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.name == name).collect()
    }

    /// First node with the given id
    pub fn get_node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_node_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Nodes carrying an identifier of type `identifier_type` whose value is
    /// exactly `value`, e.g. `(Purl, "pkg:deb/debian/libpam-modules@1.4.0-9+deb11u1?arch=i386")`.
    ///
    /// This is plain string matching, purls or cpes are not parsed.
    pub fn get_nodes_by_identifier(&self, identifier_type: IdentifierType, value: &str) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| {
                n.identifiers
                    .iter()
                    .any(|i| i.identifier_type == identifier_type && i.value == value)
            })
            .collect()
    }

    /// First edge leaving `from` with type `edge_type`
    pub fn get_edge_by_type(&self, from: &str, edge_type: EdgeType) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.edge_type == edge_type)
    }

    pub fn get_edge_by_type_mut(&mut self, from: &str, edge_type: EdgeType) -> Option<&mut Edge> {
        self.edges
            .iter_mut()
            .find(|e| e.from == from && e.edge_type == edge_type)
    }

    /// Nodes listed as root elements, in node list order.
    ///
    /// Root ids without a backing node are skipped, so the result can be
    /// shorter than `root_elements`; see [`NodeList::unresolved_root_elements`].
    pub fn get_root_nodes(&self) -> Vec<&Node> {
        let index = self.index_root_elements();
        let mut ret = Vec::new();
        for node in &self.nodes {
            if index.contains(&node.id) {
                ret.push(node);
                if ret.len() == index.len() {
                    break;
                }
            }
        }

        if ret.len() < index.len() {
            log::warn!(
                "Only {} of {} root elements have a backing node",
                ret.len(),
                index.len()
            );
        }

        ret
    }

    /// Root ids that do not match any node
    pub fn unresolved_root_elements(&self) -> Vec<&str> {
        let ids: HashSet<&str> = self.node_ids().collect();
        self.root_elements
            .iter()
            .map(String::as_str)
            .filter(|id| !ids.contains(id))
            .collect()
    }

    /// Structural equality.
    ///
    /// Root elements and edges are compared order-insensitively (edges by
    /// their flattened form), nodes by id and flattened content. `None` is
    /// never equal to a list.
    pub fn equal(&self, other: Option<&NodeList>) -> bool {
        let Some(other) = other else {
            return false;
        };

        if self.edges.len() != other.edges.len()
            || self.nodes.len() != other.nodes.len()
            || self.root_elements.len() != other.root_elements.len()
        {
            return false;
        }

        if sorted_roots(self) != sorted_roots(other) {
            return false;
        }

        if sorted_flat_edges(self) != sorted_flat_edges(other) {
            return false;
        }

        let nodes = flat_nodes(self);
        let other_nodes = flat_nodes(other);
        if nodes != other_nodes {
            log::info!("Node lists differ:\n{:?}\n{:?}", nodes, other_nodes);
            return false;
        }

        true
    }
}

impl PartialEq for NodeList {
    fn eq(&self, other: &Self) -> bool {
        self.equal(Some(other))
    }
}

impl Eq for NodeList {}

fn sorted_roots(nl: &NodeList) -> Vec<&str> {
    let mut roots: Vec<&str> = nl.root_elements.iter().map(String::as_str).collect();
    roots.sort_unstable();
    roots
}

fn sorted_flat_edges(nl: &NodeList) -> Vec<String> {
    let mut edges: Vec<String> = nl.edges.iter().map(Edge::flat_string).collect();
    edges.sort_unstable();
    edges
}

fn flat_nodes(nl: &NodeList) -> HashMap<&str, String> {
    nl.nodes
        .iter()
        .map(|n| (n.id.as_str(), n.flat_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> NodeList {
        NodeList {
            nodes: vec![
                Node::new("app", "app").purl_identifier("pkg:generic/app@1"),
                Node::new("libc", "libc6")
                    .purl_identifier("pkg:deb/debian/libc6@2.31")
                    .identifier(IdentifierType::Cpe23, "cpe:2.3:a:gnu:glibc:2.31"),
                Node::new("libc-dup", "libc6").purl_identifier("pkg:deb/debian/libc6@2.36"),
            ],
            edges: vec![
                Edge::new(EdgeType::DependsOn, "app", ["libc", "libc-dup"]),
                Edge::new(EdgeType::Contains, "app", ["libc"]),
            ],
            root_elements: vec!["app".into()],
        }
    }

    #[test]
    fn test_lookup_by_name_returns_all_matches() {
        let nl = sample();
        let found: Vec<&str> = nl.get_nodes_by_name("libc6").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(found, vec!["libc", "libc-dup"]);
        assert!(nl.get_nodes_by_name("musl").is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let nl = sample();
        assert_eq!(nl.get_node_by_id("libc").unwrap().name, "libc6");
        assert!(nl.get_node_by_id("nope").is_none());
    }

    #[test]
    fn test_lookup_by_identifier_is_exact() {
        let nl = sample();
        let found = nl.get_nodes_by_identifier(IdentifierType::Purl, "pkg:deb/debian/libc6@2.31");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "libc");

        assert!(nl
            .get_nodes_by_identifier(IdentifierType::Purl, "pkg:deb/debian/libc6")
            .is_empty());
        assert!(nl
            .get_nodes_by_identifier(IdentifierType::Cpe22, "cpe:2.3:a:gnu:glibc:2.31")
            .is_empty());
    }

    #[test]
    fn test_edge_by_type() {
        let nl = sample();
        assert_eq!(
            nl.get_edge_by_type("app", EdgeType::Contains).unwrap().to,
            vec!["libc".to_string()]
        );
        assert!(nl.get_edge_by_type("libc", EdgeType::Contains).is_none());
    }

    #[test]
    fn test_root_nodes_partial_when_unbacked() {
        let mut nl = sample();
        nl.root_elements.push("ghost".into());

        let roots: Vec<&str> = nl.get_root_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(roots, vec!["app"]);
        assert_eq!(nl.unresolved_root_elements(), vec!["ghost"]);
    }

    #[test]
    fn test_equal_is_reflexive_and_order_tolerant() {
        let a = sample();
        assert!(a.equal(Some(&a)));

        let mut b = sample();
        b.nodes.reverse();
        b.edges.reverse();
        b.edges[0].to.reverse();
        assert!(a.equal(Some(&b)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_none_is_false() {
        assert!(!sample().equal(None));
        assert!(!NodeList::new().equal(None));
    }

    #[test]
    fn test_equal_detects_differences() {
        let a = sample();

        let mut b = sample();
        b.nodes[1].version = "2.31".into();
        assert!(!a.equal(Some(&b)));

        let mut c = sample();
        c.root_elements = vec!["libc".into()];
        assert!(!a.equal(Some(&c)));

        let mut d = sample();
        d.edges[1].edge_type = EdgeType::DependsOn;
        assert!(!a.equal(Some(&d)));
    }

    #[test]
    fn test_equal_does_not_reorder_inputs() {
        let mut a = sample();
        a.root_elements = vec!["libc".into(), "app".into()];
        let b = a.clone();
        assert!(a.equal(Some(&b)));
        assert_eq!(a.root_elements, vec!["libc".to_string(), "app".to_string()]);
    }
}
