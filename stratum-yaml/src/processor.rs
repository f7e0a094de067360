//! The YAML configuration processor

use async_trait::async_trait;
use stratum_config::{ConfigProcessor, DecodeError, DecodeResult, JsonObject};
use tokio::task;

use crate::value;

/// Format name this processor is registered under.
pub(crate) const FORMAT: &str = "yaml";

/// Decodes YAML configuration sources.
///
/// Parsing is CPU-bound, so it runs on the blocking pool even though the
/// bytes are already in memory; the caller's async context is never
/// blocked. An in-flight decode cannot be cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlProcessor;

impl YamlProcessor {
    pub fn new() -> Self {
        YamlProcessor
    }
}

#[async_trait]
impl ConfigProcessor for YamlProcessor {
    fn name(&self) -> &'static str {
        FORMAT
    }

    async fn process(&self, input: &[u8]) -> DecodeResult<JsonObject> {
        // the parser does not accept empty input, which still has to
        // decode to an empty document like every other format
        if input.is_empty() {
            return Ok(JsonObject::new());
        }

        let raw = input.to_vec();
        task::spawn_blocking(move || value::decode(&raw))
            .await
            .map_err(|err| DecodeError::Task {
                format: FORMAT,
                source: Box::new(err),
            })?
    }
}
