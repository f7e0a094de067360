//! Format processor contract
//!
//! The retriever runtime matches a store's format name against
//! [`ConfigProcessor::name`] and hands the raw bytes of that source to the
//! matching processor. Decoded documents all share the JSON object model,
//! whatever format they came from.

use crate::error::DecodeResult;
use async_trait::async_trait;

/// JSON object model every processor decodes into.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Decodes the raw bytes of one configuration source.
#[async_trait]
pub trait ConfigProcessor: Send + Sync {
    /// Format name this processor is registered under, matched against
    /// [`ConfigFormat::as_str`](crate::store::ConfigFormat::as_str).
    fn name(&self) -> &'static str;

    /// Decode one configuration document.
    ///
    /// Parsing may be CPU-bound; implementations run it off the caller's
    /// async context and the caller awaits the result. A failed decode is
    /// reported once and not retried here.
    async fn process(&self, input: &[u8]) -> DecodeResult<JsonObject>;
}
