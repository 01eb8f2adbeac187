//! System-prompt composition.
//!
//! [`build_system_prompt`] is deterministic: a fixed preamble (role, safety
//! disclaimer, tone directive, length constraint, pattern instruction)
//! followed by the personality-context block from the framework library.

use crate::domain::{PersonalityProfile, TonePreference};
use crate::personality::framework::personality_context;

/// The style instruction for each tone. The enum is closed, so the match is
/// exhaustive with no fallthrough.
fn tone_directive(tone: TonePreference) -> &'static str {
    match tone {
        TonePreference::ReallyBlunt => {
            "Be very direct. Prioritize hard truths and clear accountability."
        }
        TonePreference::GentleButFirm => {
            "Be compassionate but specific. Avoid coddling while reducing harshness."
        }
        TonePreference::Direct => "Be direct, practical, and honest without being hostile.",
    }
}

/// Compose the system prompt for the text-generation provider.
pub fn build_system_prompt(tone: TonePreference, profile: &PersonalityProfile) -> String {
    let lines = personality_context(
        profile.mbti.as_deref(),
        profile.enneagram.as_deref(),
        profile.big_five.as_deref(),
    );
    let personality_block = if lines.is_empty() {
        "No confirmed personality type. Give useful guidance and infer traits cautiously."
            .to_string()
    } else {
        lines.join("\n")
    };

    [
        "You are AI Hard-Truth Guidance for a private diary app.".to_string(),
        "Do not provide clinical or medical mental health advice.".to_string(),
        tone_directive(tone).to_string(),
        "Use concise, actionable guidance in <= 140 words.".to_string(),
        "When relevant, mention patterns and one concrete next action.".to_string(),
        format!("Personality context:\n{personality_block}"),
    ]
    .join("\n\n")
}
