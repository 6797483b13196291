use super::command::{Action, Command};
use super::domain::{Classification, Phase, Resolution};

/// Raised when a command is not a legal action for the current phase, or its
/// guard fails. The application is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} is not a valid action for the {} phase", .action.label(), .phase.label())]
pub struct UnsupportedTransition {
    pub phase: Phase,
    pub action: Action,
}

/// Field updates produced by a legal transition. The aggregate applies these
/// after dispatch succeeds, so a guard failure can never mutate anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransitionOutcome {
    pub(crate) next: Phase,
    pub(crate) reviewer: Option<String>,
    pub(crate) resolution: ResolutionUpdate,
    pub(crate) classification: Option<Classification>,
    pub(crate) process_paperwork: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolutionUpdate {
    Keep,
    Set(Resolution),
    /// Entering Review again: an application in Review never carries a
    /// resolution, so the reopen paths erase the stored one.
    Clear,
}

impl TransitionOutcome {
    fn to(next: Phase) -> Self {
        Self {
            next,
            reviewer: None,
            resolution: ResolutionUpdate::Keep,
            classification: None,
            process_paperwork: false,
        }
    }

    fn reviewer(mut self, reviewer: Option<&str>) -> Self {
        self.reviewer = reviewer.map(str::to_owned);
        self
    }

    fn resolve(mut self, resolution: Resolution) -> Self {
        self.resolution = ResolutionUpdate::Set(resolution);
        self
    }

    fn clear_resolution(mut self) -> Self {
        self.resolution = ResolutionUpdate::Clear;
        self
    }

    fn classify(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    fn paperwork(mut self) -> Self {
        self.process_paperwork = true;
        self
    }
}

/// The transition table. Each (phase, action) arm carries its own explicit
/// guard; anything that does not match an arm, including a failed guard,
/// lands on the fatal fallback.
pub(crate) fn transition(
    phase: Phase,
    classification: Classification,
    command: &Command,
) -> Result<TransitionOutcome, UnsupportedTransition> {
    let action = command.action();
    let reviewer = command.reviewer_id();
    let resolution = command.resolution();

    let outcome = match (phase, action) {
        (Phase::Review, Action::Accept) if reviewer.is_some() => TransitionOutcome::to(Phase::Interview)
            .reviewer(reviewer)
            .classify(Classification::Old),
        (Phase::Review, Action::Standby) if resolution == Some(Resolution::ReviewCompleted) => {
            TransitionOutcome::to(Phase::Waitlist).resolve(Resolution::ReviewCompleted)
        }
        (Phase::Review, Action::Reject) if resolution == Some(Resolution::ReviewCompleted) => {
            TransitionOutcome::to(Phase::Closed).resolve(Resolution::ReviewCompleted)
        }

        (Phase::Interview, Action::Accept) if reviewer.is_some() => {
            TransitionOutcome::to(Phase::RefCheck).reviewer(reviewer)
        }
        (Phase::Interview, Action::Standby)
            if reviewer.is_some() && resolution == Some(Resolution::InterviewCompleted) =>
        {
            TransitionOutcome::to(Phase::Waitlist).resolve(Resolution::InterviewCompleted)
        }
        (Phase::Interview, Action::Reject) if resolution == Some(Resolution::InterviewCompleted) => {
            TransitionOutcome::to(Phase::Closed).resolve(Resolution::InterviewCompleted)
        }

        (Phase::RefCheck, Action::Accept) if reviewer.is_some() => TransitionOutcome::to(Phase::Offer)
            .reviewer(reviewer)
            .paperwork(),
        (Phase::RefCheck, Action::Reject)
            if resolution == Some(Resolution::ReferenceCheckCompleted) =>
        {
            TransitionOutcome::to(Phase::Closed).resolve(Resolution::ReferenceCheckCompleted)
        }

        (Phase::Offer, Action::Accept)
            if reviewer.is_some() && resolution == Some(Resolution::OfferCompleted) =>
        {
            TransitionOutcome::to(Phase::Closed)
                .reviewer(reviewer)
                .classify(Classification::Hired)
                .resolve(Resolution::OfferCompleted)
        }
        (Phase::Offer, Action::Reject) if resolution == Some(Resolution::OfferCompleted) => {
            TransitionOutcome::to(Phase::Closed).resolve(Resolution::OfferCompleted)
        }

        (Phase::Waitlist, Action::Reopen)
            if reviewer.is_some() && resolution == Some(Resolution::InterviewCompleted) =>
        {
            TransitionOutcome::to(Phase::RefCheck).reviewer(reviewer).paperwork()
        }
        (Phase::Waitlist, Action::Reopen)
            if resolution == Some(Resolution::ReviewCompleted)
                && classification == Classification::New =>
        {
            TransitionOutcome::to(Phase::Review)
                .classify(Classification::Old)
                .clear_resolution()
        }
        (Phase::Closed, Action::Reopen)
            if resolution == Some(Resolution::ReviewCompleted)
                && classification == Classification::New =>
        {
            TransitionOutcome::to(Phase::Review)
                .classify(Classification::Old)
                .clear_resolution()
        }

        _ => return Err(UnsupportedTransition { phase, action }),
    };

    Ok(outcome)
}
