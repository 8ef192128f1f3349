use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Document formats the reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// A single serialized node list
    NativeJson,

    /// One node list fragment per line, merged on load
    JsonLines,
}

impl Format {
    /// Driver that parses this format
    pub const fn driver(&self) -> Driver {
        match self {
            Self::NativeJson => Driver::NativeJson,
            Self::JsonLines => Driver::JsonLines,
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::NativeJson),
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NativeJson => "json",
            Self::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "native-json" => Ok(Self::NativeJson),
            "jsonl" | "ndjson" | "json-lines" => Ok(Self::JsonLines),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Reader backend identifier, used as the key of per-driver options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Driver {
    NativeJson,
    JsonLines,
}
