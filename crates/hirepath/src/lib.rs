//! HirePath tracks job applications as they move through a fixed review
//! pipeline: Review, Interview, RefCheck, Offer, Waitlist, and Closed.
//!
//! The heart of the library is the [`workflows::hiring`] module: a guarded
//! state machine over a single application, an ordered roster of
//! applications, and the flat-file codec that lets a roster round-trip
//! through storage. [`config`], [`telemetry`], and [`error`] carry the
//! service plumbing used by the API binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
