//! Truncate-and-echo text generation.
//!
//! Stands in for a real LLM client: ignores the system prompt and returns a
//! canned hard-truth line quoting the start of the user prompt. Useful for
//! development and deterministic tests.

use anyhow::Result;

use crate::config::GenerationConfig;
use crate::generation::TextGenerator;

pub struct StubGenerator {
    max_context_chars: usize,
}

impl StubGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            max_context_chars: config.max_context_chars,
        }
    }
}

impl TextGenerator for StubGenerator {
    fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
        // Truncate on a char boundary, not a byte offset
        let trimmed: String = user_prompt.chars().take(self.max_context_chars).collect();
        Ok(format!(
            "Hard truth: you may be avoiding the highest-leverage action. \
             Name one uncomfortable step and do it today. Context noted: \"{trimmed}\""
        ))
    }
}
