//! Configuration store descriptors

use crate::constants::FILE_URL_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of a configuration source.
///
/// The retriever runtime matches the format name against
/// [`ConfigProcessor::name`](crate::processor::ConfigProcessor::name) to
/// pick a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Yaml,
    Properties,
    Json,
}

impl ConfigFormat {
    /// Infer the format from a path's extension, case-insensitively.
    ///
    /// `.yml` and `.yaml` read as YAML, `.properties` as properties;
    /// anything else, including a path with no extension, defaults to JSON.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".yml") || lower.ends_with(".yaml") {
            ConfigFormat::Yaml
        } else if lower.ends_with(".properties") {
            ConfigFormat::Properties
        } else {
            ConfigFormat::Json
        }
    }

    /// Name the external runtime dispatches on.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Properties => "properties",
            ConfigFormat::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of backing store behind a configuration source.
///
/// This crate only produces file stores; the retriever runtime may define
/// further kinds of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum StoreKind {
    File,
}

/// One configuration input handed to the retriever runtime.
///
/// Descriptors are created up front and never mutated afterwards; the
/// runtime resolves them lazily when it fetches and merges configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    pub kind: StoreKind,
    pub format: ConfigFormat,
    pub path: String,
    pub optional: bool,
}

impl StoreOptions {
    /// Describe a configuration file.
    ///
    /// The format follows the path's extension and a leading `file://`
    /// prefix is stripped. File stores are always optional, so a missing
    /// file contributes nothing instead of failing startup. Any string is
    /// accepted, including an empty one.
    pub fn file(path: impl Into<String>) -> Self {
        let raw = path.into();
        let format = ConfigFormat::from_path(&raw);
        let path = match raw.strip_prefix(FILE_URL_PREFIX) {
            Some(stripped) => stripped.to_string(),
            None => raw,
        };

        StoreOptions {
            kind: StoreKind::File,
            format,
            path,
            optional: true,
        }
    }
}
