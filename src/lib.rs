//! Hard-truth journaling API.
//!
//! Candor is the backend for a private diary app: the mobile client collects
//! onboarding preferences and free-text entries, and this service keeps
//! per-user state in memory, synthesizes a system prompt from static
//! personality-framework tables and the user's tone preference, forwards the
//! entry to a pluggable text-generation provider, and returns hard-truth
//! guidance plus episodic wisdom nuggets.
//!
//! # Architecture
//!
//! - **Storage**: in-memory map from user id to per-user state, lazily
//!   created on first access — no persistence, state lives with the process
//! - **Generation**: the [`generation::TextGenerator`] trait; the default
//!   provider is a deterministic truncate-and-echo stub, and a real LLM
//!   client is a drop-in replacement
//! - **Transport**: JSON over HTTP via axum
//!
//! # Modules
//!
//! - [`config`] — configuration loading from TOML files and environment variables
//! - [`domain`] — shared record shapes (profile, settings, entries, guidance, nuggets)
//! - [`error`] — the HTTP-facing error type
//! - [`generation`] — text-generation provider boundary and the stub provider
//! - [`personality`] — framework lookup tables and system-prompt composition
//! - [`routes`] — axum router and route handlers
//! - [`server`] — listener setup and graceful shutdown
//! - [`store`] — the in-memory per-user state store

pub mod config;
pub mod domain;
pub mod error;
pub mod generation;
pub mod personality;
pub mod routes;
pub mod server;
pub mod store;
