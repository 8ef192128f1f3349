use crate::error::{ReaderError, Result};
use crate::format::Driver;
use crate::options::Options;
use sbom_graph::NodeList;

/// Turns raw document bytes into a node list
pub trait Unserializer {
    fn unserialize(&self, content: &[u8], options: &Options) -> Result<NodeList>;
}

impl Driver {
    pub fn unserializer(&self) -> &'static dyn Unserializer {
        match self {
            Self::NativeJson => &NativeJsonDriver,
            Self::JsonLines => &JsonLinesDriver,
        }
    }
}

/// Parses one serialized [`NodeList`]
pub struct NativeJsonDriver;

impl Unserializer for NativeJsonDriver {
    fn unserialize(&self, content: &[u8], options: &Options) -> Result<NodeList> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return if options.json_options().allow_empty {
                Ok(NodeList::new())
            } else {
                Err(ReaderError::EmptyDocument)
            };
        }

        Ok(serde_json::from_slice(content)?)
    }
}

/// Parses a stream of [`NodeList`] fragments, one per line, merging them
/// in order with [`NodeList::add`].
///
/// Edges are merged after all nodes are known so a fragment may point at
/// nodes defined by a later one.
pub struct JsonLinesDriver;

impl Unserializer for JsonLinesDriver {
    fn unserialize(&self, content: &[u8], options: &Options) -> Result<NodeList> {
        let text = std::str::from_utf8(content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let skip_invalid = options.json_lines_options().skip_invalid_lines;

        let mut ret = NodeList::new();
        let mut pending_edges = Vec::new();
        let mut fragments = 0usize;

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fragment: NodeList = match serde_json::from_str(line) {
                Ok(fragment) => fragment,
                Err(source) if skip_invalid => {
                    log::warn!("Skipping invalid fragment at line {}: {}", i + 1, source);
                    continue;
                }
                Err(source) => return Err(ReaderError::InvalidLine { line: i + 1, source }),
            };

            pending_edges.append(&mut fragment.edges);
            ret.add(&fragment);
            fragments += 1;
        }

        if fragments == 0 {
            return Err(ReaderError::EmptyDocument);
        }

        ret.edges.append(&mut pending_edges);
        ret.clean_edges();

        log::debug!("Merged {} node list fragments", fragments);

        Ok(ret)
    }
}
