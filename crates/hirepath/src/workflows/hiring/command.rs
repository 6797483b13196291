use serde::{Deserialize, Serialize};

use super::domain::Resolution;

/// Action a reviewer asks the pipeline to take on an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Accept,
    Reject,
    Standby,
    Reopen,
}

impl Action {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::Standby => "Standby",
            Self::Reopen => "Reopen",
        }
    }
}

/// Validation errors raised when constructing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCommand {
    #[error("an accept command requires a reviewer id")]
    MissingReviewer,
    #[error("standby and reject commands require a resolution")]
    MissingResolution,
    #[error("a command requires a non-empty note")]
    MissingNote,
}

/// Immutable, validated instruction fed into the application state machine.
///
/// Construction enforces the per-action requirements; whether the command is
/// legal for the application's current phase is decided later, at dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    action: Action,
    reviewer_id: Option<String>,
    resolution: Option<Resolution>,
    note: String,
}

impl Command {
    pub fn new(
        action: Action,
        reviewer_id: Option<String>,
        resolution: Option<Resolution>,
        note: impl Into<String>,
    ) -> Result<Self, InvalidCommand> {
        let reviewer_id = reviewer_id.filter(|id| !id.is_empty());

        if action == Action::Accept && reviewer_id.is_none() {
            return Err(InvalidCommand::MissingReviewer);
        }
        if matches!(action, Action::Standby | Action::Reject) && resolution.is_none() {
            return Err(InvalidCommand::MissingResolution);
        }

        let note = note.into();
        if note.is_empty() {
            return Err(InvalidCommand::MissingNote);
        }

        Ok(Self {
            action,
            reviewer_id,
            resolution,
            note,
        })
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn reviewer_id(&self) -> Option<&str> {
        self.reviewer_id.as_deref()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}
