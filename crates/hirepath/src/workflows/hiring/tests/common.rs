use crate::workflows::hiring::application::Application;
use crate::workflows::hiring::command::{Action, Command};
use crate::workflows::hiring::domain::{ApplicationSnapshot, Resolution};

pub(super) fn new_application() -> Application {
    Application::new(1, "Backend engineer opening", "Received application")
        .expect("valid application")
}

pub(super) fn accept(reviewer: &str) -> Command {
    Command::new(Action::Accept, Some(reviewer.to_owned()), None, "advancing")
        .expect("valid accept command")
}

pub(super) fn accept_with(reviewer: &str, resolution: Resolution) -> Command {
    Command::new(
        Action::Accept,
        Some(reviewer.to_owned()),
        Some(resolution),
        "advancing",
    )
    .expect("valid accept command")
}

pub(super) fn standby(resolution: Resolution) -> Command {
    Command::new(Action::Standby, None, Some(resolution), "parking")
        .expect("valid standby command")
}

pub(super) fn standby_with(reviewer: &str, resolution: Resolution) -> Command {
    Command::new(
        Action::Standby,
        Some(reviewer.to_owned()),
        Some(resolution),
        "parking",
    )
    .expect("valid standby command")
}

pub(super) fn reject(resolution: Resolution) -> Command {
    Command::new(Action::Reject, None, Some(resolution), "declining")
        .expect("valid reject command")
}

pub(super) fn reopen(reviewer: Option<&str>, resolution: Option<Resolution>) -> Command {
    Command::new(
        Action::Reopen,
        reviewer.map(str::to_owned),
        resolution,
        "revisiting",
    )
    .expect("valid reopen command")
}

/// An application parked on the waitlist after its interview.
pub(super) fn waitlisted_after_interview() -> Application {
    let mut application = new_application();
    application
        .apply(&accept("reviewer1"))
        .expect("review accept");
    application
        .apply(&standby_with("reviewer1", Resolution::InterviewCompleted))
        .expect("interview standby");
    application
}

pub(super) fn snapshot() -> ApplicationSnapshot {
    ApplicationSnapshot {
        id: 4,
        phase: "Interview".to_owned(),
        classification: "Old".to_owned(),
        summary: "Site reliability engineer opening".to_owned(),
        reviewer: "reviewer2".to_owned(),
        paperwork_processed: false,
        resolution: String::new(),
        notes: vec![
            "[Review] Received application".to_owned(),
            "[Interview] Phone screen passed".to_owned(),
        ],
    }
}
