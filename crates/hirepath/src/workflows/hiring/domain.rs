use serde::{Deserialize, Serialize};

/// Review phase an application currently sits in.
///
/// The six phases are a plain tagged enum; all transition logic lives in the
/// dispatch function of this module's parent, not on the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Review,
    Interview,
    RefCheck,
    Offer,
    Waitlist,
    Closed,
}

impl Phase {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Review,
            Self::Interview,
            Self::RefCheck,
            Self::Offer,
            Self::Waitlist,
            Self::Closed,
        ]
    }

    /// Canonical name used in note tags and the serialized record header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::Interview => "Interview",
            Self::RefCheck => "RefCheck",
            Self::Offer => "Offer",
            Self::Waitlist => "Waitlist",
            Self::Closed => "Closed",
        }
    }

    pub fn parse(name: &str) -> Result<Self, UnknownPhase> {
        Self::ordered()
            .into_iter()
            .find(|phase| phase.label() == name)
            .ok_or_else(|| UnknownPhase(name.to_owned()))
    }
}

/// How far an application has progressed and whether it resulted in a hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    New,
    Old,
    Hired,
}

impl Classification {
    pub const fn ordered() -> [Self; 3] {
        [Self::New, Self::Old, Self::Hired]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Old => "Old",
            Self::Hired => "Hired",
        }
    }

    pub fn parse(name: &str) -> Result<Self, UnknownClassification> {
        Self::ordered()
            .into_iter()
            .find(|classification| classification.label() == name)
            .ok_or_else(|| UnknownClassification(name.to_owned()))
    }
}

/// Which phase's exit condition completed. Required to enter Waitlist or
/// Closed, absent while an application sits in Review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    ReviewCompleted,
    InterviewCompleted,
    ReferenceCheckCompleted,
    OfferCompleted,
}

impl Resolution {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ReviewCompleted,
            Self::InterviewCompleted,
            Self::ReferenceCheckCompleted,
            Self::OfferCompleted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReviewCompleted => "ReviewCompleted",
            Self::InterviewCompleted => "InterviewCompleted",
            Self::ReferenceCheckCompleted => "ReferenceCheckCompleted",
            Self::OfferCompleted => "OfferCompleted",
        }
    }

    pub fn parse(name: &str) -> Result<Self, UnknownResolution> {
        Self::ordered()
            .into_iter()
            .find(|resolution| resolution.label() == name)
            .ok_or_else(|| UnknownResolution(name.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown phase name: {0}")]
pub struct UnknownPhase(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification name: {0}")]
pub struct UnknownClassification(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resolution name: {0}")]
pub struct UnknownResolution(pub String);

/// Raw, unvalidated record of a persisted application.
///
/// Field names mirror the serialized header; empty strings stand in for an
/// absent reviewer or resolution, and notes carry no `-` marker. Validation
/// happens in `Application::from_snapshot`, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSnapshot {
    pub id: u32,
    pub phase: String,
    pub classification: String,
    pub summary: String,
    pub reviewer: String,
    pub paperwork_processed: bool,
    pub resolution: String,
    pub notes: Vec<String>,
}
