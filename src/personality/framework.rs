//! Static personality-framework library.
//!
//! Maps framework codes to one-line descriptions used as prompt context.
//! Unknown or absent codes are silently skipped — the lookup never fails.

/// MBTI type descriptions.
fn mbti_description(code: &str) -> Option<&'static str> {
    match code {
        "INTJ" => Some(
            "Strategic, independent, and systems-oriented. Growth edge: empathy in communication and practical diplomacy.",
        ),
        "INFP" => Some(
            "Values-driven and reflective. Growth edge: translating ideals into consistent action under pressure.",
        ),
        "ENTP" => Some(
            "Idea-generative and challenge-seeking. Growth edge: follow-through and avoiding novelty-driven drift.",
        ),
        _ => None,
    }
}

/// Enneagram type descriptions.
fn enneagram_description(code: &str) -> Option<&'static str> {
    match code {
        "1" => Some("Principled and improvement-oriented. Growth edge: easing self-criticism and rigidity."),
        "5" => Some("Analytical and private. Growth edge: emotional expression and acting before certainty is complete."),
        "8" => Some("Assertive and protective. Growth edge: vulnerability and listening before control."),
        _ => None,
    }
}

/// Big Five trait-profile descriptions.
fn big_five_description(code: &str) -> Option<&'static str> {
    match code {
        "OCEAN_HIGH_OPENNESS" => Some(
            "High openness indicates curiosity and abstract thinking. Growth edge: grounding ideas into execution.",
        ),
        _ => None,
    }
}

/// One context line per recognized code, in input order (MBTI, then
/// Enneagram, then Big Five). Empty input yields an empty list.
pub fn personality_context(
    mbti: Option<&str>,
    enneagram: Option<&str>,
    big_five: Option<&str>,
) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(desc) = mbti.and_then(mbti_description) {
        lines.push(format!("MBTI {}: {desc}", mbti.unwrap_or_default()));
    }
    if let Some(desc) = enneagram.and_then(enneagram_description) {
        lines.push(format!("Enneagram {}: {desc}", enneagram.unwrap_or_default()));
    }
    if let Some(desc) = big_five.and_then(big_five_description) {
        lines.push(format!("Big Five {}: {desc}", big_five.unwrap_or_default()));
    }

    lines
}
