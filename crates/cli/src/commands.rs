use sbom_graph::{Node, NodeList};
use serde::Serialize;

/// Output of the `roots` subcommand
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootsReport<'a> {
    pub root_nodes: Vec<&'a Node>,

    /// Root ids with no backing node
    pub unresolved: Vec<&'a str>,

    pub unreachable: Vec<&'a str>,
}

impl<'a> RootsReport<'a> {
    pub fn from_node_list(nl: &'a NodeList) -> Self {
        let unresolved = nl.unresolved_root_elements();
        if !unresolved.is_empty() {
            log::warn!("{} root elements have no backing node", unresolved.len());
        }

        Self {
            root_nodes: nl.get_root_nodes(),
            unresolved,
            unreachable: nl.unreachable_nodes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbom_graph::{Edge, EdgeType};

    #[test]
    fn test_roots_report() {
        let nl = NodeList {
            nodes: vec![Node::new("a", "a"), Node::new("b", "b"), Node::new("c", "c")],
            edges: vec![Edge::new(EdgeType::DependsOn, "a", ["b"])],
            root_elements: vec!["a".into(), "ghost".into()],
        };

        let report = RootsReport::from_node_list(&nl);
        assert_eq!(report.root_nodes.len(), 1);
        assert_eq!(report.unresolved, vec!["ghost"]);
        assert_eq!(report.unreachable, vec!["c"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rootNodes"][0]["id"], "a");
    }
}
