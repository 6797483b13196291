use std::fs;
use std::path::PathBuf;

use super::common::{accept, accept_with, reject};
use crate::workflows::hiring::domain::{Classification, Phase, Resolution};
use crate::workflows::hiring::tracker::{HiringTracker, TrackerError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hirepath-{}-{}.txt", name, std::process::id()))
}

#[test]
fn execute_applies_a_command_by_id() {
    let mut tracker = HiringTracker::new();
    let id = tracker
        .add_application("Backend engineer opening", "Received application")
        .expect("application created");

    tracker.execute(id, &accept("reviewer1")).expect("accepted");

    let application = tracker.application(id).expect("present");
    assert_eq!(application.phase(), Phase::Interview);
    assert_eq!(application.classification(), Classification::Old);
}

#[test]
fn execute_on_an_unknown_id_is_an_error() {
    let mut tracker = HiringTracker::new();
    match tracker.execute(42, &accept("reviewer1")) {
        Err(TrackerError::UnknownApplication(42)) => {}
        other => panic!("expected an unknown application error, got {other:?}"),
    }
}

#[test]
fn rejected_commands_propagate_the_transition_error() {
    let mut tracker = HiringTracker::new();
    let id = tracker
        .add_application("Backend engineer opening", "note")
        .expect("created");

    match tracker.execute(id, &reject(Resolution::OfferCompleted)) {
        Err(TrackerError::Transition(error)) => assert_eq!(error.phase, Phase::Review),
        other => panic!("expected a transition error, got {other:?}"),
    }
}

#[test]
fn save_and_load_round_trip_through_a_file() {
    let path = temp_path("round-trip");
    let mut tracker = HiringTracker::new();
    tracker
        .add_application("Backend engineer opening", "Received application")
        .expect("created");
    let hired = tracker
        .add_application("Staff engineer opening", "Referred internally")
        .expect("created");
    tracker.execute(hired, &accept("reviewer1")).expect("review");
    tracker.execute(hired, &accept("reviewer1")).expect("interview");
    tracker.execute(hired, &accept("reviewer1")).expect("refcheck");
    tracker
        .execute(hired, &accept_with("reviewer1", Resolution::OfferCompleted))
        .expect("offer");

    tracker.save_to_file(&path).expect("saved");

    let mut reloaded = HiringTracker::new();
    let count = reloaded.load_from_file(&path).expect("loaded");
    assert_eq!(count, 2);
    assert_eq!(reloaded.applications(), tracker.applications());

    let _ = fs::remove_file(&path);
}

#[test]
fn load_merges_without_clobbering_existing_ids() {
    let path = temp_path("merge");
    let mut source = HiringTracker::new();
    source
        .add_application("Persisted opening", "note")
        .expect("created");
    source.save_to_file(&path).expect("saved");

    let mut tracker = HiringTracker::new();
    tracker
        .add_application("Live opening", "note")
        .expect("created");
    let count = tracker.load_from_file(&path).expect("loaded");

    // The incoming id 1 collides with the live application and is dropped.
    assert_eq!(count, 1);
    assert_eq!(tracker.applications().len(), 1);
    assert_eq!(
        tracker.application(1).expect("present").summary(),
        "Live opening"
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn load_from_a_missing_file_is_an_error() {
    let mut tracker = HiringTracker::new();
    let missing = temp_path("does-not-exist");
    let error = tracker.load_from_file(&missing).unwrap_err();
    assert!(error.to_string().starts_with("unable to load file"));
}

#[test]
fn create_new_roster_discards_state() {
    let mut tracker = HiringTracker::new();
    tracker.add_application("Opening", "note").expect("created");
    tracker.create_new_roster();
    assert!(tracker.applications().is_empty());
}

#[test]
fn roster_summary_counts_every_bucket() {
    let mut tracker = HiringTracker::new();
    tracker.add_application("First opening", "note").expect("created");
    let second = tracker
        .add_application("Second opening", "note")
        .expect("created");
    tracker.execute(second, &accept("reviewer1")).expect("review");

    let summary = tracker.roster_summary();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.phases["Review"], 1);
    assert_eq!(summary.phases["Interview"], 1);
    assert_eq!(summary.phases["Closed"], 0);
    assert_eq!(summary.classifications["New"], 1);
    assert_eq!(summary.classifications["Old"], 1);
    assert_eq!(summary.classifications["Hired"], 0);
}
