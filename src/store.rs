//! In-memory per-user state store.
//!
//! [`UserStore`] maps user ids to [`UserState`] records, creating a fresh
//! record on first access to any id — unknown users are never an error. All
//! mutation is "replace one field wholesale" or "prepend to one list," each
//! performed under the store mutex within a single call so no lock is ever
//! held across an await point. Concurrent same-user requests that both reach
//! the generation step may interleave their prepends; prepends commute, so
//! this is tolerated rather than serialized.
//!
//! State lives only as long as the process. There is no persistence,
//! eviction, or deletion.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::{
    JournalEntry, PersonalityProfile, UserSettings, UserState, WisdomNugget,
};

#[derive(Default)]
pub struct UserStore {
    users: Mutex<HashMap<String, UserState>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the (lazily created) record for `user_id`.
    fn with_user<T>(&self, user_id: &str, f: impl FnOnce(&mut UserState) -> T) -> T {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        let state = users
            .entry(user_id.to_string())
            .or_insert_with(UserState::new);
        f(state)
    }

    /// Snapshot of the user's current state, creating it if absent.
    /// Idempotent: repeated calls for the same id see the same record.
    pub fn get_or_create(&self, user_id: &str) -> UserState {
        self.with_user(user_id, |state| state.clone())
    }

    /// Replace the user's profile wholesale (no merging with the previous
    /// profile). Returns the stored profile.
    pub fn replace_profile(
        &self,
        user_id: &str,
        profile: PersonalityProfile,
    ) -> PersonalityProfile {
        self.with_user(user_id, |state| {
            state.profile = profile;
            state.profile.clone()
        })
    }

    /// Replace the user's settings wholesale. Returns the stored settings.
    pub fn replace_settings(&self, user_id: &str, settings: UserSettings) -> UserSettings {
        self.with_user(user_id, |state| {
            state.settings = settings;
            state.settings.clone()
        })
    }

    /// Prepend a journal entry (newest first).
    pub fn prepend_entry(&self, user_id: &str, entry: JournalEntry) {
        self.with_user(user_id, |state| state.entries.insert(0, entry));
    }

    /// Entries whose text + guidance text contains `query` case-insensitively,
    /// newest first. An empty query matches everything.
    pub fn entries_matching(&self, user_id: &str, query: &str) -> Vec<JournalEntry> {
        let needle = query.to_lowercase();
        self.with_user(user_id, |state| {
            state
                .entries
                .iter()
                .filter(|entry| {
                    if needle.is_empty() {
                        return true;
                    }
                    let guidance_text = entry
                        .guidance
                        .as_ref()
                        .map(|g| g.text.as_str())
                        .unwrap_or("");
                    let haystack = format!("{} {}", entry.text, guidance_text).to_lowercase();
                    haystack.contains(&needle)
                })
                .cloned()
                .collect()
        })
    }

    /// All entry texts, newest first.
    pub fn entry_texts(&self, user_id: &str) -> Vec<String> {
        self.with_user(user_id, |state| {
            state.entries.iter().map(|e| e.text.clone()).collect()
        })
    }

    /// Text of the most recent entry, if any.
    pub fn latest_entry_text(&self, user_id: &str) -> Option<String> {
        self.with_user(user_id, |state| {
            state.entries.first().map(|e| e.text.clone())
        })
    }

    /// Record the personality suggestion inferred from the user's entries.
    pub fn set_inferred_suggestion(&self, user_id: &str, suggestion: &str) {
        self.with_user(user_id, |state| {
            state.profile.inferred_suggestion = Some(suggestion.to_string());
        });
    }

    /// Prepend a wisdom nugget (newest first).
    pub fn prepend_nugget(&self, user_id: &str, nugget: WisdomNugget) {
        self.with_user(user_id, |state| state.wisdom_nuggets.insert(0, nugget));
    }

    /// The most recently prepended nugget, if any.
    pub fn latest_nugget(&self, user_id: &str) -> Option<WisdomNugget> {
        self.with_user(user_id, |state| state.wisdom_nuggets.first().cloned())
    }

    /// Number of user records created so far.
    pub fn user_count(&self) -> usize {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
