//! Hiring pipeline: the application state machine, the roster that holds
//! applications, and the surfaces (flat file, HTTP, CSV) a roster moves
//! through.
//!
//! An [`Application`] advances through six phases in response to validated
//! [`Command`]s; every transition appends one entry to the application's
//! audit log. A [`Roster`] keeps applications ordered by id, and a
//! [`tracker::HiringTracker`] owns a roster together with its load/save
//! operations.

pub mod application;
pub mod codec;
pub mod command;
pub mod domain;
pub mod export;
pub mod roster;
pub mod router;
pub mod tracker;
mod transition;

#[cfg(test)]
mod tests;

pub use application::{Application, ApplicationView, SnapshotError};
pub use codec::CodecError;
pub use command::{Action, Command, InvalidCommand};
pub use domain::{
    ApplicationSnapshot, Classification, Phase, Resolution, UnknownClassification, UnknownPhase,
    UnknownResolution,
};
pub use export::{write_roster_csv, ExportError};
pub use roster::Roster;
pub use router::{hiring_router, SharedTracker};
pub use tracker::{HiringTracker, RosterSummary, TrackerError};
pub use transition::UnsupportedTransition;
