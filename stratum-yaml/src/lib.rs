//! YAML format support for the Stratum configuration retriever
//!
//! [`YamlProcessor`] decodes raw YAML bytes into the JSON object model,
//! coercing keys to strings and timestamp scalars to instants. The
//! retriever runtime dispatches to it under the format name `"yaml"`.

mod processor;
mod value;

pub use processor::YamlProcessor;
