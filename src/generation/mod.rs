//! Text-generation provider boundary.
//!
//! Provides the [`TextGenerator`] trait and the echoing [`stub`]
//! implementation. The provider is created via [`create_generator`] from
//! configuration; a real LLM client is a drop-in replacement behind the same
//! trait — route handlers never inspect the provider's internals.

pub mod stub;

use anyhow::Result;

/// Trait for producing guidance text from a prompt pair.
///
/// All methods are synchronous — callers in async contexts should use
/// `tokio::task::spawn_blocking`.
pub trait TextGenerator: Send + Sync {
    /// Generate a response for `user_prompt` under `system_prompt`.
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

impl std::fmt::Debug for dyn TextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TextGenerator")
    }
}

/// Create a text-generation provider from config.
///
/// Currently only `"stub"` is supported (truncate-and-echo, no model call).
pub fn create_generator(
    config: &crate::config::GenerationConfig,
) -> Result<Box<dyn TextGenerator>> {
    match config.provider.as_str() {
        "stub" => Ok(Box::new(stub::StubGenerator::new(config))),
        other => anyhow::bail!("unknown generation provider: {other}. Supported: stub"),
    }
}
