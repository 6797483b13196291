use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::application::{Application, SnapshotError};
use super::codec::{self, CodecError};
use super::command::Command;
use super::domain::{Classification, Phase};
use super::roster::Roster;
use super::transition::UnsupportedTransition;

/// Error raised by tracker operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("no application with id {0}")]
    UnknownApplication(u32),
    #[error(transparent)]
    Transition(#[from] UnsupportedTransition),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Context object owning the roster and its persistence.
///
/// Constructed explicitly and passed where needed; there is no process-wide
/// instance. One tracker assumes one writer at a time; callers that share
/// it across tasks wrap it in a coarse lock.
#[derive(Debug, Default)]
pub struct HiringTracker {
    roster: Roster,
}

impl HiringTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a roster file and merge it into the current roster. Records
    /// whose id collides with an existing application are dropped.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, TrackerError> {
        let incoming = codec::load_file(path)?;
        let count = incoming.len();
        self.roster.merge(incoming);
        info!(count, path = %path.display(), "loaded applications");
        Ok(count)
    }

    /// Save every application to the given file, ascending by id.
    pub fn save_to_file(&self, path: &Path) -> Result<(), TrackerError> {
        codec::save_file(path, self.roster.applications())?;
        info!(count = self.roster.len(), path = %path.display(), "saved applications");
        Ok(())
    }

    /// Discard the current roster and start over empty.
    pub fn create_new_roster(&mut self) {
        self.roster = Roster::new();
    }

    pub fn add_application(
        &mut self,
        summary: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<u32, TrackerError> {
        Ok(self.roster.create(summary, note)?)
    }

    pub fn applications(&self) -> &[Application] {
        self.roster.applications()
    }

    pub fn applications_by_classification(
        &self,
        classification: Classification,
    ) -> Vec<&Application> {
        self.roster.by_classification(classification)
    }

    pub fn application(&self, id: u32) -> Option<&Application> {
        self.roster.get(id)
    }

    /// Apply a command to the application with the given id.
    pub fn execute(&mut self, id: u32, command: &Command) -> Result<(), TrackerError> {
        let application = self
            .roster
            .get_mut(id)
            .ok_or(TrackerError::UnknownApplication(id))?;
        if let Err(error) = application.apply(command) {
            warn!(id, %error, "rejected command");
            return Err(error.into());
        }
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<Application, TrackerError> {
        self.roster
            .remove(id)
            .ok_or(TrackerError::UnknownApplication(id))
    }

    /// Counts per phase and per classification, with every bucket present
    /// so the shape is stable for consumers.
    pub fn roster_summary(&self) -> RosterSummary {
        let mut phases: BTreeMap<&'static str, usize> = Phase::ordered()
            .into_iter()
            .map(|phase| (phase.label(), 0))
            .collect();
        let mut classifications: BTreeMap<&'static str, usize> = Classification::ordered()
            .into_iter()
            .map(|classification| (classification.label(), 0))
            .collect();

        for application in self.roster.applications() {
            *phases.entry(application.phase().label()).or_default() += 1;
            *classifications
                .entry(application.classification().label())
                .or_default() += 1;
        }

        RosterSummary {
            total: self.roster.len(),
            phases,
            classifications,
        }
    }
}

/// Aggregate roster counts for reports and the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub phases: BTreeMap<&'static str, usize>,
    pub classifications: BTreeMap<&'static str, usize>,
}
