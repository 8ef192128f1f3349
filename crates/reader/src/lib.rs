//! # SBOM Reader
//!
//! Loads [`NodeList`](sbom_graph::NodeList)s from disk or any `Read` stream.
//!
//! ## Architecture
//!
//! ```text
//! bytes
//!     │
//!     ├──> Sniffer (or a forced Format)
//!     │
//!     ├──> Driver for the format
//!     │    ├─> native-json: one node list document
//!     │    └─> json-lines: fragments merged with NodeList::add
//!     │
//!     └──> UnserializeOptions (clean edges, reconnect orphans)
//! ```
//!
//! Per-driver options are keyed by the [`Driver`] enum, so options for one
//! backend can never be looked up by another.
//!
//! ## Example
//!
//! ```rust
//! use sbom_reader::{Reader, UnserializeOptions};
//!
//! let doc = r#"{"nodes":[{"id":"a","name":"a"}],"rootElements":["a"]}"#;
//! let nl = Reader::new()
//!     .with_unserialize_options(UnserializeOptions::repaired())
//!     .parse_stream(doc.as_bytes())
//!     .unwrap();
//! assert_eq!(nl.get_root_nodes().len(), 1);
//! ```

mod drivers;
mod error;
mod format;
mod options;
mod reader;
mod sniffer;

pub use drivers::{JsonLinesDriver, NativeJsonDriver, Unserializer};
pub use error::{ReaderError, Result};
pub use format::{Driver, Format};
pub use options::{FormatOptions, JsonLinesOptions, JsonOptions, Options, UnserializeOptions};
pub use reader::Reader;
pub use sniffer::{ContentSniffer, Sniffer};
