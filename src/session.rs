//! One conversation session: the turn controller and its state.
//!
//! A session owns the append-only conversation log, the optional active
//! intake, and the processing flag the UI uses to disable input while a
//! reply is pending. One session per UI instance; nothing is shared.

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::intent::{classify, Intent};
use crate::lead::{LeadInfo, LeadIntake};
use crate::message::Message;
use crate::responses::reply_for;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Blank input is rejected before it reaches the log, mirroring the
    /// UI's submit guard.
    #[error("empty input submitted")]
    EmptyInput,
    #[error("invalid engine configuration: {0}")]
    Config(String),
}

/// What the turn controller routes visitor input to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTask {
    None,
    CollectingInfo,
}

pub struct Session {
    id: Uuid,
    config: EngineConfig,
    messages: Vec<Message>,
    intake: Option<LeadIntake>,
    processing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "starting conversation session");
        Self {
            id,
            config,
            messages: Vec::new(),
            intake: None,
            processing: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The conversation scrollback, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn active_task(&self) -> ActiveTask {
        if self.intake.is_some() {
            ActiveTask::CollectingInfo
        } else {
            ActiveTask::None
        }
    }

    /// Lead details collected so far, while an intake is active.
    pub fn lead_info(&self) -> Option<&LeadInfo> {
        self.intake.as_ref().map(|intake| intake.info())
    }

    /// True while a turn is in flight; the UI disables its input field on
    /// this flag.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Submit one visitor turn and produce the assistant's reply.
    ///
    /// The user message is appended immediately; the assistant message is
    /// appended after the configured reply delay, and a reference to it is
    /// returned. Turns are serialized structurally: this takes `&mut self`,
    /// so a second turn cannot start until the previous one has completed
    /// or been dropped. Dropping the returned future mid-delay discards
    /// only the pending reply; the next call resets the processing flag,
    /// so an abandoned turn never wedges the session.
    pub async fn submit_turn(&mut self, input: &str) -> Result<&Message, EngineError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        self.processing = true;
        self.messages.push(Message::user(input));

        let reply = self.route(input);

        // Simulated thinking time before the reply lands in the log.
        tokio::time::sleep(self.config.reply_delay()).await;

        self.messages.push(Message::assistant(reply));
        self.processing = false;

        // Just pushed, so the log is non-empty.
        Ok(self.messages.last().unwrap())
    }

    /// Decide what answers this turn: the active intake if there is one,
    /// otherwise the classifier and the canned-reply table.
    fn route(&mut self, input: &str) -> String {
        if let Some(intake) = self.intake.as_mut() {
            let reply = intake.step(input);
            if intake.is_done() {
                info!(session = %self.id, "lead intake complete, returning to classifier");
                self.intake = None;
            }
            return reply;
        }

        let intent = classify(input);
        debug!(session = %self.id, ?intent, "routing classified turn");

        if intent == Intent::ProjectInquiry {
            info!(session = %self.id, "project inquiry detected, starting lead intake");
            self.intake = Some(LeadIntake::new());
            return LeadIntake::opening_prompt().to_string();
        }

        reply_for(intent).to_string()
    }
}
