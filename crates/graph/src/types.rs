use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Kind of component a node describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    #[default]
    Package,
    File,
}

/// Identifier schemes understood by [`NodeList::get_nodes_by_identifier`].
///
/// Matching is plain string equality, no scheme-specific parsing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// Package URL (`pkg:deb/debian/bash@5.1`)
    Purl,
    Cpe22,
    Cpe23,
    Gitoid,
}

impl IdentifierType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Purl => "purl",
            Self::Cpe22 => "cpe22",
            Self::Cpe23 => "cpe23",
            Self::Gitoid => "gitoid",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "purl" => Ok(Self::Purl),
            "cpe22" => Ok(Self::Cpe22),
            "cpe23" => Ok(Self::Cpe23),
            "gitoid" => Ok(Self::Gitoid),
            other => Err(format!("unknown identifier type: {other}")),
        }
    }
}

/// A typed identifier attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub identifier_type: IdentifierType,
    pub value: String,
}

impl Identifier {
    pub fn new(identifier_type: IdentifierType, value: impl Into<String>) -> Self {
        Self {
            identifier_type,
            value: value.into(),
        }
    }

    pub fn purl(value: impl Into<String>) -> Self {
        Self::new(IdentifierType::Purl, value)
    }
}

/// A software component in the SBOM graph.
///
/// Nodes are addressed by `id`; two nodes with the same id in different
/// lists describe the same logical component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    /// Unique id within a node list
    pub id: String,

    pub node_type: NodeType,

    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub file_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_home: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_download: String,

    /// Declared licenses
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_concluded: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub copyright: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,

    /// Ordered identifier list (purl, cpe, ...)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,

    /// Digest by algorithm name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub hashes: BTreeMap<String, String>,
}

/// Type of relationship between two components
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeType {
    #[default]
    Unknown,
    Amends,
    Ancestor,
    BuildDependency,
    BuildTool,
    Contains,
    ContainedBy,
    Copy,
    DataFile,
    DependencyManifest,
    DependsOn,
    DependencyOf,
    Descendant,
    Describes,
    DescribedBy,
    DevDependency,
    DevTool,
    DistributionArtifact,
    Documentation,
    DynamicLink,
    Example,
    ExpandedFromArchive,
    FileAdded,
    FileDeleted,
    FileModified,
    Generates,
    GeneratedFrom,
    Metafile,
    OptionalComponent,
    OptionalDependency,
    Other,
    Packages,
    Patch,
    Prerequisite,
    PrerequisiteFor,
    ProvidedDependency,
    RequirementFor,
    RuntimeDependency,
    SpecificationFor,
    StaticLink,
    Test,
    TestCase,
    TestDependency,
    TestTool,
    TestedBy,
    Variant,
}

impl EdgeType {
    pub const ALL: [EdgeType; 46] = [
        Self::Unknown,
        Self::Amends,
        Self::Ancestor,
        Self::BuildDependency,
        Self::BuildTool,
        Self::Contains,
        Self::ContainedBy,
        Self::Copy,
        Self::DataFile,
        Self::DependencyManifest,
        Self::DependsOn,
        Self::DependencyOf,
        Self::Descendant,
        Self::Describes,
        Self::DescribedBy,
        Self::DevDependency,
        Self::DevTool,
        Self::DistributionArtifact,
        Self::Documentation,
        Self::DynamicLink,
        Self::Example,
        Self::ExpandedFromArchive,
        Self::FileAdded,
        Self::FileDeleted,
        Self::FileModified,
        Self::Generates,
        Self::GeneratedFrom,
        Self::Metafile,
        Self::OptionalComponent,
        Self::OptionalDependency,
        Self::Other,
        Self::Packages,
        Self::Patch,
        Self::Prerequisite,
        Self::PrerequisiteFor,
        Self::ProvidedDependency,
        Self::RequirementFor,
        Self::RuntimeDependency,
        Self::SpecificationFor,
        Self::StaticLink,
        Self::Test,
        Self::TestCase,
        Self::TestDependency,
        Self::TestTool,
        Self::TestedBy,
        Self::Variant,
    ];

    /// Wire name, identical to the serde representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Amends => "amends",
            Self::Ancestor => "ancestor",
            Self::BuildDependency => "buildDependency",
            Self::BuildTool => "buildTool",
            Self::Contains => "contains",
            Self::ContainedBy => "containedBy",
            Self::Copy => "copy",
            Self::DataFile => "dataFile",
            Self::DependencyManifest => "dependencyManifest",
            Self::DependsOn => "dependsOn",
            Self::DependencyOf => "dependencyOf",
            Self::Descendant => "descendant",
            Self::Describes => "describes",
            Self::DescribedBy => "describedBy",
            Self::DevDependency => "devDependency",
            Self::DevTool => "devTool",
            Self::DistributionArtifact => "distributionArtifact",
            Self::Documentation => "documentation",
            Self::DynamicLink => "dynamicLink",
            Self::Example => "example",
            Self::ExpandedFromArchive => "expandedFromArchive",
            Self::FileAdded => "fileAdded",
            Self::FileDeleted => "fileDeleted",
            Self::FileModified => "fileModified",
            Self::Generates => "generates",
            Self::GeneratedFrom => "generatedFrom",
            Self::Metafile => "metafile",
            Self::OptionalComponent => "optionalComponent",
            Self::OptionalDependency => "optionalDependency",
            Self::Other => "other",
            Self::Packages => "packages",
            Self::Patch => "patch",
            Self::Prerequisite => "prerequisite",
            Self::PrerequisiteFor => "prerequisiteFor",
            Self::ProvidedDependency => "providedDependency",
            Self::RequirementFor => "requirementFor",
            Self::RuntimeDependency => "runtimeDependency",
            Self::SpecificationFor => "specificationFor",
            Self::StaticLink => "staticLink",
            Self::Test => "test",
            Self::TestCase => "testCase",
            Self::TestDependency => "testDependency",
            Self::TestTool => "testTool",
            Self::TestedBy => "testedBy",
            Self::Variant => "variant",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown edge type: {s}"))
    }
}

/// Directed, typed relation from one node to an ordered list of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edge {
    #[serde(rename = "type")]
    pub edge_type: EdgeType,

    /// Origin node id
    pub from: String,

    /// Destination node ids
    pub to: Vec<String>,
}

impl Edge {
    pub fn new<I, S>(edge_type: EdgeType, from: impl Into<String>, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            edge_type,
            from: from.into(),
            to: to.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `id` is one of the destinations
    pub fn points_to(&self, id: &str) -> bool {
        self.to.iter().any(|t| t == id)
    }

    /// Flattened form used for order-insensitive comparison:
    /// `<type>:<from>:<sorted destinations>`
    pub fn flat_string(&self) -> String {
        let mut to: Vec<&str> = self.to.iter().map(String::as_str).collect();
        to.sort_unstable();
        format!("{}:{}:{}", self.edge_type, self.from, to.join(","))
    }
}

/// A fragment of the SBOM graph: nodes, the edges between them and the
/// ids of the top level elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeList {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub root_elements: Vec<String>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node as is. Id uniqueness is the caller's concern.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append an edge as is. Run [`NodeList::clean_edges`] to restore the
    /// edge invariants afterwards.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn add_root_element(&mut self, id: impl Into<String>) {
        self.root_elements.push(id.into());
    }

    /// Ids of all nodes in list order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.root_elements.is_empty()
    }
}
