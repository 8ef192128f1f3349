use crate::types::{Identifier, IdentifierType, Node, NodeType};

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set version
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Builder: set node type
    #[must_use]
    pub const fn node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Builder: add identifier
    #[must_use]
    pub fn identifier(mut self, identifier_type: IdentifierType, value: impl Into<String>) -> Self {
        self.identifiers.push(Identifier::new(identifier_type, value));
        self
    }

    /// Builder: add a purl identifier
    #[must_use]
    pub fn purl_identifier(self, purl: impl Into<String>) -> Self {
        self.identifier(IdentifierType::Purl, purl)
    }

    /// Builder: add license
    #[must_use]
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.licenses.push(license.into());
        self
    }

    /// Builder: add hash
    #[must_use]
    pub fn hash(mut self, algorithm: impl Into<String>, digest: impl Into<String>) -> Self {
        self.hashes.insert(algorithm.into(), digest.into());
        self
    }

    /// First purl identifier of the node, empty when it has none
    pub fn purl(&self) -> &str {
        self.identifiers
            .iter()
            .find(|i| i.identifier_type == IdentifierType::Purl)
            .map(|i| i.value.as_str())
            .unwrap_or_default()
    }

    /// Overlay merge: every non-empty field of `other` replaces ours.
    /// The id is never touched.
    pub fn update(&mut self, other: &Node) {
        self.node_type = other.node_type;
        overlay_string(&mut self.name, &other.name);
        overlay_string(&mut self.version, &other.version);
        overlay_string(&mut self.file_name, &other.file_name);
        overlay_string(&mut self.url_home, &other.url_home);
        overlay_string(&mut self.url_download, &other.url_download);
        overlay_string(&mut self.license_concluded, &other.license_concluded);
        overlay_string(&mut self.copyright, &other.copyright);
        overlay_string(&mut self.description, &other.description);
        overlay_string(&mut self.comment, &other.comment);
        overlay_vec(&mut self.licenses, &other.licenses);
        overlay_vec(&mut self.identifiers, &other.identifiers);
        for (algorithm, digest) in &other.hashes {
            self.hashes.insert(algorithm.clone(), digest.clone());
        }
    }

    /// Gap-fill merge: only fields that are empty here are taken from
    /// `other`. The id and node type are never touched.
    pub fn augment(&mut self, other: &Node) {
        fill_string(&mut self.name, &other.name);
        fill_string(&mut self.version, &other.version);
        fill_string(&mut self.file_name, &other.file_name);
        fill_string(&mut self.url_home, &other.url_home);
        fill_string(&mut self.url_download, &other.url_download);
        fill_string(&mut self.license_concluded, &other.license_concluded);
        fill_string(&mut self.copyright, &other.copyright);
        fill_string(&mut self.description, &other.description);
        fill_string(&mut self.comment, &other.comment);
        fill_vec(&mut self.licenses, &other.licenses);
        fill_vec(&mut self.identifiers, &other.identifiers);
        for (algorithm, digest) in &other.hashes {
            self.hashes
                .entry(algorithm.clone())
                .or_insert_with(|| digest.clone());
        }
    }

    /// Canonical single-line representation used by equality checks
    pub fn flat_string(&self) -> String {
        // Node only holds strings, vectors and a BTreeMap, serialization
        // cannot fail and the output is deterministic.
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn overlay_string(dst: &mut String, src: &str) {
    if !src.is_empty() {
        src.clone_into(dst);
    }
}

fn fill_string(dst: &mut String, src: &str) {
    if dst.is_empty() {
        src.clone_into(dst);
    }
}

fn overlay_vec<T: Clone>(dst: &mut Vec<T>, src: &[T]) {
    if !src.is_empty() {
        *dst = src.to_vec();
    }
}

fn fill_vec<T: Clone>(dst: &mut Vec<T>, src: &[T]) {
    if dst.is_empty() {
        *dst = src.to_vec();
    }
}
