//! Conversational intake engine for a portfolio site's AI assistant.
//!
//! The engine is a pure in-memory dialogue controller: it classifies
//! free-text visitor messages into intents, answers with pre-authored
//! replies, and runs a guided five-slot lead-intake flow (name, email,
//! project type, budget, timeline). Rendering, voice I/O and navigation
//! belong to the hosting UI; it talks to the engine only through
//! [`Session::submit_turn`] and the read-only state accessors.

pub mod config;
pub mod intent;
pub mod lead;
pub mod message;
pub mod responses;
pub mod session;

pub use config::EngineConfig;
pub use intent::{classify, Intent};
pub use lead::{IntakeState, LeadInfo, LeadIntake};
pub use message::{Message, Role};
pub use responses::{reply_for, QuickAction, GREETING};
pub use session::{ActiveTask, EngineError, Session};
