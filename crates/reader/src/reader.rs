use crate::error::{ReaderError, Result};
use crate::format::Format;
use crate::options::{FormatOptions, Options, UnserializeOptions};
use crate::sniffer::{ContentSniffer, Sniffer};
use sbom_graph::NodeList;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads node lists from files or streams
pub struct Reader {
    pub options: Options,
    sniffer: Box<dyn Sniffer>,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            sniffer: Box::new(ContentSniffer),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Skip sniffing and always parse as `format`
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.options.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_unserialize_options(mut self, opts: UnserializeOptions) -> Self {
        self.options.unserialize_options = opts;
        self
    }

    #[must_use]
    pub fn with_format_options(mut self, opts: FormatOptions) -> Self {
        self.options.set_format_options(opts);
        self
    }

    #[must_use]
    pub fn with_sniffer(mut self, sniffer: impl Sniffer + 'static) -> Self {
        self.sniffer = Box::new(sniffer);
        self
    }

    /// Format of `content`, honoring a forced format
    pub fn detect_format(&self, content: &[u8]) -> Result<Format> {
        if let Some(format) = self.options.format {
            return Ok(format);
        }
        self.sniffer.sniff(content).ok_or(ReaderError::UnknownFormat)
    }

    /// Parse the file at `path`. The extension decides the format when the
    /// content alone does not.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<NodeList> {
        let path = path.as_ref();
        let content = fs::read(path)?;

        let format = match self.detect_format(&content) {
            Ok(format) => format,
            Err(ReaderError::UnknownFormat) => {
                Format::from_path(path).ok_or(ReaderError::UnknownFormat)?
            }
            Err(e) => return Err(e),
        };

        log::debug!("Reading {} as {}", path.display(), format);

        self.parse_as(&content, format)
    }

    /// Parse a whole stream
    pub fn parse_stream<R: Read>(&self, mut reader: R) -> Result<NodeList> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        let format = self.detect_format(&content)?;
        self.parse_as(&content, format)
    }

    fn parse_as(&self, content: &[u8], format: Format) -> Result<NodeList> {
        self.options.validate()?;

        let mut nl = format
            .driver()
            .unserializer()
            .unserialize(content, &self.options)?;

        let post = self.options.unserialize_options;
        if post.clean_edges {
            nl.clean_edges();
        }
        if post.reconnect_orphans {
            nl.reconnect_orphan_nodes();
        }

        log::info!(
            "Loaded node list: {} nodes, {} edges, {} root elements",
            nl.node_count(),
            nl.edge_count(),
            nl.root_elements.len()
        );

        Ok(nl)
    }
}
