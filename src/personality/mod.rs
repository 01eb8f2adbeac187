//! Personality-aware prompt synthesis.
//!
//! - [`framework`] — static lookup from MBTI/Enneagram/Big-Five codes to
//!   descriptive context lines
//! - [`prompt`] — composes the system prompt sent to the text-generation
//!   provider from the user's tone preference and profile codes

pub mod framework;
pub mod prompt;
