//! Configuration loading helpers for the Stratum retriever runtime
//!
//! This crate assembles a prioritized list of configuration stores out of
//! conventional resource files, path lists supplied through a runtime
//! property and an environment variable, and explicitly registered stores.
//! It also defines the [`ConfigProcessor`] contract that format decoders
//! implement; the retriever runtime dispatches raw bytes to a processor by
//! matching a store's format name.

pub mod constants;
pub mod environment;
pub mod error;
pub mod loader;
pub mod processor;
pub mod split;
pub mod store;

// Re-export main types
pub use environment::{Environment, ProcessEnvironment};
pub use error::{BoxError, DecodeError, DecodeResult};
pub use loader::{ConfigurationLoader, ConfigurationLoaderBuilder, Feature};
pub use processor::{ConfigProcessor, JsonObject};
pub use store::{ConfigFormat, StoreKind, StoreOptions};
