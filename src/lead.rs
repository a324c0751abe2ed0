//! Guided lead-intake flow.
//!
//! A five-slot sequential form: name, email, project type, budget,
//! timeline. Slots fill strictly in that order and are never overwritten.
//! The email slot is the only validated one; an invalid email re-prompts
//! without advancing. Completing the timeline slot produces a summary
//! echoing everything collected and ends the flow.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Lead details collected during intake, all unset initially.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

/// Which slot the intake is waiting on. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeState {
    Name,
    Email,
    ProjectType,
    Budget,
    Timeline,
    Done,
}

/// The intake state machine. Created when a project inquiry is detected;
/// dropped by the turn controller once it reaches [`IntakeState::Done`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadIntake {
    state: IntakeState,
    info: LeadInfo,
}

impl Default for LeadIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadIntake {
    pub fn new() -> Self {
        Self {
            state: IntakeState::Name,
            info: LeadInfo::default(),
        }
    }

    /// Reply sent when the intake is first entered.
    pub fn opening_prompt() -> &'static str {
        "I'd be delighted to discuss your project requirements. To help Salman understand your needs better and provide the most relevant solutions, I'll take down a few details. First, may I have your name?"
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    pub fn info(&self) -> &LeadInfo {
        &self.info
    }

    pub fn is_done(&self) -> bool {
        self.state == IntakeState::Done
    }

    /// Feed one visitor answer into the flow and produce the next prompt
    /// (or the final summary). Answers are stored verbatim.
    pub fn step(&mut self, input: &str) -> String {
        match self.state {
            IntakeState::Name => {
                self.info.name = Some(input.to_string());
                self.state = IntakeState::Email;
                info!(name = %input, "intake: name recorded");
                format!(
                    "Thank you, {}! To ensure we can follow up properly, could you please provide your email address?",
                    input
                )
            }
            IntakeState::Email => {
                if !is_plausible_email(input) {
                    info!("intake: rejected implausible email, re-prompting");
                    return "I apologize, but that doesn't appear to be a valid email address. Could you please provide a valid email so we can contact you regarding your project?".to_string();
                }
                self.info.email = Some(input.to_string());
                self.state = IntakeState::ProjectType;
                info!("intake: email recorded");
                "Excellent. Now, to help us understand your needs better, could you please describe the type of project you're interested in? For example, is it web development, design work, AI implementation, or something else?".to_string()
            }
            IntakeState::ProjectType => {
                self.info.project_type = Some(input.to_string());
                self.state = IntakeState::Budget;
                info!("intake: project type recorded");
                "Thank you for that information. To help us provide an appropriate estimate, could you share your approximate budget range for this project?".to_string()
            }
            IntakeState::Budget => {
                self.info.budget = Some(input.to_string());
                self.state = IntakeState::Timeline;
                info!("intake: budget recorded");
                "Great. And finally, what's your expected timeline or deadline for this project? This will help us determine resource availability and delivery schedules.".to_string()
            }
            IntakeState::Timeline => {
                self.info.timeline = Some(input.to_string());
                self.state = IntakeState::Done;
                info!("intake: timeline recorded, flow complete");
                self.summary()
            }
            // A finished intake has been handed back to the classifier;
            // stepping it again just re-emits the summary.
            IntakeState::Done => self.summary(),
        }
    }

    fn summary(&self) -> String {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        format!(
            "Thank you for providing all these details. Here's a summary of the information you've shared:\n\n\
             Name: {}\n\
             Email: {}\n\
             Project Type: {}\n\
             Budget: {}\n\
             Timeline: {}\n\n\
             Salman will review this information and get back to you within 24 hours with a personalized response. In the meantime, is there any additional information about your project that you'd like to share?",
            field(&self.info.name),
            field(&self.info.email),
            field(&self.info.project_type),
            field(&self.info.budget),
            field(&self.info.timeline),
        )
    }
}

/// An address is plausible when it contains both "@" and ".".
fn is_plausible_email(input: &str) -> bool {
    let lower = input.to_lowercase();
    lower.contains('@') && lower.contains('.')
}
