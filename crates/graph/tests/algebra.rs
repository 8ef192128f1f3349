use pretty_assertions::assert_eq;
use sbom_graph::{Edge, EdgeType, GraphError, Node, NodeList};
use std::collections::{BTreeSet, HashSet};

/// Every edge points from and to existing nodes and no (origin, type)
/// pair appears twice.
fn assert_integrity(nl: &NodeList) {
    let ids: HashSet<&str> = nl.node_ids().collect();
    let mut keys = HashSet::new();
    for edge in &nl.edges {
        assert!(ids.contains(edge.from.as_str()), "dangling origin in {edge:?}");
        for to in &edge.to {
            assert!(ids.contains(to.as_str()), "dangling destination {to} in {edge:?}");
        }
        assert!(
            keys.insert((edge.from.clone(), edge.edge_type)),
            "duplicate edge key in {edge:?}"
        );
    }
}

fn id_set(nl: &NodeList) -> BTreeSet<String> {
    nl.node_ids().map(String::from).collect()
}

/// Container image scanned by an OS package scanner
fn os_scan() -> NodeList {
    NodeList {
        nodes: vec![
            Node::new("image", "registry.local/app").purl_identifier("pkg:oci/app@sha256:1"),
            Node::new("bash", "bash")
                .version("5.1")
                .purl_identifier("pkg:deb/debian/bash@5.1"),
            Node::new("libc", "libc6")
                .version("2.31")
                .purl_identifier("pkg:deb/debian/libc6@2.31"),
            Node::new("tzdata", "tzdata").purl_identifier("pkg:deb/debian/tzdata@2024a"),
        ],
        edges: vec![
            Edge::new(EdgeType::Contains, "image", ["bash", "libc", "tzdata"]),
            Edge::new(EdgeType::DependsOn, "bash", ["libc"]),
            Edge::new(EdgeType::DependsOn, "bash", ["libc", "ncurses"]),
        ],
        root_elements: vec!["image".into()],
    }
}

/// Same image scanned by a language scanner
fn lang_scan() -> NodeList {
    NodeList {
        nodes: vec![
            Node::new("image", "registry.local/app"),
            Node::new("libc", "libc6")
                .version("2.31-13")
                .license("LGPL-2.1"),
            Node::new("left-pad", "left-pad").purl_identifier("pkg:npm/left-pad@1.3.0"),
        ],
        edges: vec![
            Edge::new(EdgeType::Contains, "image", ["left-pad"]),
            Edge::new(EdgeType::DependsOn, "left-pad", ["libc"]),
        ],
        root_elements: vec!["image".into(), "left-pad".into()],
    }
}

#[test]
fn every_operation_leaves_a_sane_graph() {
    let a = os_scan();
    let b = lang_scan();

    assert_integrity(&a.union(&b));
    assert_integrity(&b.union(&a));
    assert_integrity(&a.intersect(&b));
    assert_integrity(&a.get_nodes_by_purl_type("deb"));

    let mut added = a.clone();
    added.add(&b);
    assert_integrity(&added);

    let mut removed = a.union(&b);
    removed.remove_nodes(["libc"]);
    assert_integrity(&removed);
}

#[test]
fn union_and_intersect_node_sets() {
    let a = os_scan();
    let b = lang_scan();

    let union: BTreeSet<String> = id_set(&a).union(&id_set(&b)).cloned().collect();
    let intersection: BTreeSet<String> = id_set(&a).intersection(&id_set(&b)).cloned().collect();

    assert_eq!(id_set(&a.union(&b)), union);
    assert_eq!(id_set(&a.intersect(&b)), intersection);
    assert_eq!(id_set(&b.intersect(&a)), intersection);
}

#[test]
fn union_keeps_edges_of_both_sides() {
    let u = os_scan().union(&lang_scan());

    assert_eq!(
        u.get_edge_by_type("image", EdgeType::Contains).unwrap().to,
        vec!["bash", "libc", "tzdata", "left-pad"]
    );
    assert_eq!(
        u.get_edge_by_type("bash", EdgeType::DependsOn).unwrap().to,
        vec!["libc"]
    );
    assert_eq!(
        u.get_edge_by_type("left-pad", EdgeType::DependsOn).unwrap().to,
        vec!["libc"]
    );
    assert_eq!(u.root_elements, vec!["image", "left-pad"]);
    assert_eq!(u.get_node_by_id("libc").unwrap().version, "2.31-13");
}

#[test]
fn add_matches_union_structure_but_gap_fills() {
    let mut added = os_scan();
    added.add(&lang_scan());
    let union = os_scan().union(&lang_scan());

    assert_eq!(id_set(&added), id_set(&union));
    let mut added_edges: Vec<String> = added.edges.iter().map(Edge::flat_string).collect();
    let mut union_edges: Vec<String> = union.edges.iter().map(Edge::flat_string).collect();
    added_edges.sort();
    union_edges.sort();
    assert_eq!(added_edges, union_edges);

    // gap-fill keeps the receiver's version, overlay takes the argument's
    assert_eq!(added.get_node_by_id("libc").unwrap().version, "2.31");
    assert_eq!(added.get_node_by_id("libc").unwrap().licenses, vec!["LGPL-2.1"]);
    assert_eq!(union.get_node_by_id("libc").unwrap().version, "2.31-13");
}

#[test]
fn remove_nodes_leaves_no_trace() {
    let mut nl = os_scan().union(&lang_scan());
    let gone = ["libc", "left-pad"];
    nl.remove_nodes(gone);

    for id in gone {
        assert!(nl.get_node_by_id(id).is_none());
        assert!(nl.edges.iter().all(|e| e.from != id && !e.points_to(id)));
    }
}

#[test]
fn sanitation_is_idempotent_after_merges() {
    let mut nl = os_scan();
    nl.add(&lang_scan());
    let once = nl.edges.clone();
    nl.clean_edges();
    assert_eq!(nl.edges, once);
}

#[test]
fn union_with_itself_is_equal() {
    let a = os_scan();
    let mut cleaned = a.clone();
    cleaned.clean_edges();
    assert!(a.union(&a).equal(Some(&cleaned)));
}

#[test]
fn splice_scanner_output_below_a_node() {
    let mut base = os_scan();
    let mut npm = lang_scan();
    npm.root_elements = vec!["left-pad".into()];

    base.relate_node_list_at_id(&npm, "bash", EdgeType::Contains)
        .unwrap();

    assert_eq!(
        base.get_edge_by_type("bash", EdgeType::Contains).unwrap().to,
        vec!["left-pad"]
    );
    assert!(base.get_node_by_id("left-pad").is_some());
    assert_eq!(base.root_elements, vec!["image"]);
    // nodes already present are not merged
    assert_eq!(base.get_node_by_id("libc").unwrap().version, "2.31");

    let err = base
        .relate_node_list_at_id(&npm, "missing", EdgeType::Contains)
        .unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound(id) if id == "missing"));
}

#[test]
fn filtering_reconnects_stranded_nodes() {
    let deb = os_scan().get_nodes_by_purl_type("deb");

    let expected: BTreeSet<String> = ["bash", "libc", "tzdata"].iter().map(|s| s.to_string()).collect();
    assert_eq!(id_set(&deb), expected);
    // image was the only root and is filtered out
    assert_eq!(deb.root_elements, vec!["libc", "tzdata"]);
    assert!(deb.unreachable_nodes().contains(&"bash"));
    assert_integrity(&deb);
}
