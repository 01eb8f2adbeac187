//! Shared record shapes for the journaling domain.
//!
//! Defines [`TonePreference`] (the guidance tone enum), the per-user records
//! ([`PersonalityProfile`], [`UserSettings`]), the journal records
//! ([`JournalEntry`], [`GuidanceMessage`], [`WisdomNugget`]), and
//! [`UserState`], the unit of storage. All wire names are camelCase because
//! the mobile client consumes them directly.

use serde::{Deserialize, Serialize};

/// The three guidance tones a user can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TonePreference {
    /// Direct, practical, honest without hostility. The default.
    Direct,
    /// Maximum directness — hard truths and clear accountability.
    ReallyBlunt,
    /// Compassionate but specific — no coddling, reduced harshness.
    GentleButFirm,
}

impl TonePreference {
    /// Wire-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::ReallyBlunt => "really_blunt",
            Self::GentleButFirm => "gentle_but_firm",
        }
    }
}

impl std::fmt::Display for TonePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TonePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "really_blunt" => Ok(Self::ReallyBlunt),
            "gentle_but_firm" => Ok(Self::GentleButFirm),
            _ => Err(format!(
                "unknown tone: {s}. Supported: direct, really_blunt, gentle_but_firm"
            )),
        }
    }
}

/// Personality-framework codes a user supplied (or skipped) during onboarding.
///
/// Replaced wholesale on every onboarding submit — fields from a previous
/// submit are not merged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbti: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enneagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_five: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_onboarding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferred_suggestion: Option<String>,
}

/// Per-user guidance settings. Replaced wholesale on every settings submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub tone: TonePreference,
    pub dynamic_tone_adaptation: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            tone: TonePreference::Direct,
            dynamic_tone_adaptation: false,
        }
    }
}

/// A free-text diary entry. Immutable once created; guidance is attached at
/// creation time and never changes afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<GuidanceMessage>,
}

/// Generated guidance for one journal entry. Never created standalone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceMessage {
    pub id: String,
    pub entry_id: String,
    pub text: String,
    pub tone: TonePreference,
    pub created_at: String,
}

/// An independently generated short text, derived from the user's most
/// recent entry (or a generic fallback when they have none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WisdomNugget {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: String,
}

/// Everything the service knows about one user. Lazily created on first
/// access, never deleted; lives only as long as the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub profile: PersonalityProfile,
    pub settings: UserSettings,
    /// Newest first.
    pub entries: Vec<JournalEntry>,
    /// Newest first.
    pub wisdom_nuggets: Vec<WisdomNugget>,
}

impl UserState {
    /// Fresh record: empty profile, default settings, empty lists.
    ///
    /// Constructs a new `UserSettings` value per call so no default is ever
    /// shared between users.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Generate a prefixed UUID v7 (time-sortable), e.g. `entry_0192f3…`.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::now_v7())
}

/// Current time as an RFC 3339 string, the wire format for all timestamps.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
