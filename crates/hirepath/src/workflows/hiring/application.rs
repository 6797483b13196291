use serde::Serialize;

use super::command::Command;
use super::domain::{
    ApplicationSnapshot, Classification, Phase, Resolution, UnknownClassification, UnknownPhase,
    UnknownResolution,
};
use super::transition::{transition, ResolutionUpdate, UnsupportedTransition};

/// Rejection reasons for constructing or rehydrating an application from
/// inconsistent data. Each variant names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    UnknownPhase(#[from] UnknownPhase),
    #[error(transparent)]
    UnknownClassification(#[from] UnknownClassification),
    #[error(transparent)]
    UnknownResolution(#[from] UnknownResolution),
    #[error("application id must be at least 1")]
    InvalidId,
    #[error("application summary must not be empty")]
    EmptySummary,
    #[error("application note log must not be empty")]
    EmptyNotes,
    #[error("an application in the {} phase requires a reviewer", .0.label())]
    MissingReviewer(Phase),
    #[error("an application in the Review phase must not carry a reviewer")]
    UnexpectedReviewer,
    #[error("an application in the {} phase requires a resolution", .0.label())]
    MissingResolution(Phase),
    #[error("an application in the Review phase must not carry a resolution")]
    UnexpectedResolution,
    #[error("a New application cannot be in the {} phase", .0.label())]
    PrematurePhase(Phase),
}

/// A job application moving through the review pipeline.
///
/// All fields are private; [`Application::apply`] is the only mutator, so
/// reviewer, resolution, classification, and paperwork changes happen
/// exclusively as side effects of a legal transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    id: u32,
    phase: Phase,
    classification: Classification,
    summary: String,
    reviewer: Option<String>,
    paperwork_processed: bool,
    resolution: Option<Resolution>,
    notes: Vec<String>,
}

impl Application {
    /// Open a brand-new application: phase Review, classification New, with
    /// the submission note as the first audit entry.
    pub fn new(
        id: u32,
        summary: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, SnapshotError> {
        let summary = summary.into();
        let note = note.into();

        if id < 1 {
            return Err(SnapshotError::InvalidId);
        }
        if summary.is_empty() {
            return Err(SnapshotError::EmptySummary);
        }
        if note.is_empty() {
            return Err(SnapshotError::EmptyNotes);
        }

        let mut application = Self {
            id,
            phase: Phase::Review,
            classification: Classification::New,
            summary,
            reviewer: None,
            paperwork_processed: false,
            resolution: None,
            notes: Vec::new(),
        };
        application.push_note(&note);
        Ok(application)
    }

    /// Rehydrate a persisted application without replaying its transitions.
    ///
    /// Every invariant that holds after a legal transition is re-checked
    /// here, so a roster loaded from storage is indistinguishable from one
    /// built live. Notes are trusted verbatim and re-prefixed with their
    /// `-` marker.
    pub fn from_snapshot(snapshot: ApplicationSnapshot) -> Result<Self, SnapshotError> {
        let phase = Phase::parse(&snapshot.phase)?;
        let classification = Classification::parse(&snapshot.classification)?;
        let resolution = if snapshot.resolution.is_empty() {
            None
        } else {
            Some(Resolution::parse(&snapshot.resolution)?)
        };
        let reviewer = if snapshot.reviewer.is_empty() {
            None
        } else {
            Some(snapshot.reviewer)
        };

        if snapshot.id < 1 {
            return Err(SnapshotError::InvalidId);
        }
        if snapshot.summary.is_empty() {
            return Err(SnapshotError::EmptySummary);
        }
        if snapshot.notes.is_empty() {
            return Err(SnapshotError::EmptyNotes);
        }

        match phase {
            Phase::Review => {
                if reviewer.is_some() {
                    return Err(SnapshotError::UnexpectedReviewer);
                }
                if resolution.is_some() {
                    return Err(SnapshotError::UnexpectedResolution);
                }
            }
            Phase::Interview | Phase::RefCheck | Phase::Offer => {
                if classification == Classification::New {
                    return Err(SnapshotError::PrematurePhase(phase));
                }
                if reviewer.is_none() {
                    return Err(SnapshotError::MissingReviewer(phase));
                }
            }
            Phase::Waitlist | Phase::Closed => {
                if resolution.is_none() {
                    return Err(SnapshotError::MissingResolution(phase));
                }
            }
        }

        Ok(Self {
            id: snapshot.id,
            phase,
            classification,
            summary: snapshot.summary,
            reviewer,
            paperwork_processed: snapshot.paperwork_processed,
            resolution,
            notes: snapshot
                .notes
                .into_iter()
                .map(|note| format!("-{note}"))
                .collect(),
        })
    }

    /// Run one command through the state machine.
    ///
    /// Dispatch is pure: either the whole transition applies (field updates
    /// plus exactly one note tagged with the phase being entered), or the
    /// application is untouched and the error surfaces to the caller.
    pub fn apply(&mut self, command: &Command) -> Result<(), UnsupportedTransition> {
        let outcome = transition(self.phase, self.classification, command)?;

        if let Some(reviewer) = outcome.reviewer {
            self.reviewer = Some(reviewer);
        }
        match outcome.resolution {
            ResolutionUpdate::Keep => {}
            ResolutionUpdate::Set(resolution) => self.resolution = Some(resolution),
            ResolutionUpdate::Clear => self.resolution = None,
        }
        if let Some(classification) = outcome.classification {
            self.classification = classification;
        }
        if outcome.process_paperwork {
            self.paperwork_processed = true;
        }
        self.phase = outcome.next;
        self.push_note(command.note());
        Ok(())
    }

    // The tag records the phase being entered, so this must run after the
    // phase field is updated.
    fn push_note(&mut self, note: &str) {
        self.notes.push(format!("-[{}] {}", self.phase.label(), note));
    }

    /// Text form of the record: a seven-field `*` header line followed by
    /// the note log, one `-` line per entry.
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "*{},{},{},{},{},{},{}\n",
            self.id,
            self.phase.label(),
            self.classification.label(),
            self.summary,
            self.reviewer.as_deref().unwrap_or(""),
            self.paperwork_processed,
            self.resolution.map(Resolution::label).unwrap_or(""),
        );
        out.push_str(&self.notes.join("\n"));
        out
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn reviewer(&self) -> Option<&str> {
        self.reviewer.as_deref()
    }

    pub fn paperwork_processed(&self) -> bool {
        self.paperwork_processed
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            id: self.id,
            phase: self.phase.label(),
            classification: self.classification.label(),
            summary: self.summary.clone(),
            reviewer: self.reviewer.clone(),
            paperwork_processed: self.paperwork_processed,
            resolution: self.resolution.map(Resolution::label),
            notes: self.notes.clone(),
        }
    }
}

/// Serializable projection of an application for API responses and reports.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    pub id: u32,
    pub phase: &'static str,
    pub classification: &'static str,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    pub paperwork_processed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<&'static str>,
    pub notes: Vec<String>,
}
