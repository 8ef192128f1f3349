use crate::error::{ReaderError, Result};
use crate::format::{Driver, Format};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for a [`Reader`](crate::Reader)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Force a format instead of sniffing the content
    pub format: Option<Format>,

    /// Post-processing applied to every loaded node list
    pub unserialize_options: UnserializeOptions,

    /// Driver specific options
    format_options: HashMap<Driver, FormatOptions>,
}

impl Options {
    /// Options for `driver`, if any were set
    pub fn get_format_options(&self, driver: Driver) -> Option<&FormatOptions> {
        self.format_options.get(&driver)
    }

    /// Store driver options under the driver they belong to, replacing
    /// previous ones.
    pub fn set_format_options(&mut self, opts: FormatOptions) {
        self.format_options.insert(opts.driver(), opts);
    }

    /// Native JSON options, defaults when unset
    pub fn json_options(&self) -> JsonOptions {
        match self.get_format_options(Driver::NativeJson) {
            Some(FormatOptions::NativeJson(opts)) => opts.clone(),
            _ => JsonOptions::default(),
        }
    }

    /// JSON-lines options, defaults when unset
    pub fn json_lines_options(&self) -> JsonLinesOptions {
        match self.get_format_options(Driver::JsonLines) {
            Some(FormatOptions::JsonLines(opts)) => opts.clone(),
            _ => JsonLinesOptions::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (driver, opts) in &self.format_options {
            if opts.driver() != *driver {
                return Err(ReaderError::invalid_options(format!(
                    "options for {:?} stored under {:?}",
                    opts.driver(),
                    driver
                )));
            }
        }
        Ok(())
    }
}

/// Options of one driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatOptions {
    NativeJson(JsonOptions),
    JsonLines(JsonLinesOptions),
}

impl FormatOptions {
    pub const fn driver(&self) -> Driver {
        match self {
            Self::NativeJson(_) => Driver::NativeJson,
            Self::JsonLines(_) => Driver::JsonLines,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Treat an empty input as an empty node list instead of an error
    pub allow_empty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonLinesOptions {
    /// Log and skip fragments that fail to parse
    pub skip_invalid_lines: bool,
}

/// Clean-up applied to a node list after it was parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnserializeOptions {
    /// Drop dangling edges and collapse duplicates
    pub clean_edges: bool,

    /// Promote nodes without outgoing edges to root elements
    pub reconnect_orphans: bool,
}

impl Default for UnserializeOptions {
    fn default() -> Self {
        Self {
            clean_edges: true,
            reconnect_orphans: false,
        }
    }
}

impl UnserializeOptions {
    /// Keep the document exactly as written
    pub fn verbatim() -> Self {
        Self {
            clean_edges: false,
            reconnect_orphans: false,
        }
    }

    /// Sanitize and make every node reachable from a root element
    pub fn repaired() -> Self {
        Self {
            clean_edges: true,
            reconnect_orphans: true,
        }
    }
}
