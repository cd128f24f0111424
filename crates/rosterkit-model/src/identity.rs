//! Purchaser/attendee reconciliation.

use serde::{Deserialize, Serialize};

/// Four-way judgement of whether the purchaser and the attendee on a
/// ticket are the same individual.
///
/// The classification is a total function of the two non-empty-equality
/// flags: a matching email alone is taken as proof of identity, while a
/// matching name with a different email is called out separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityMatch {
    /// Name and email agree, or the email alone agrees.
    SamePerson,
    /// Names agree but the emails differ.
    SamePersonDifferentEmail,
    /// Neither name nor email agrees.
    PossiblyDifferent,
}

impl IdentityMatch {
    /// Classify from the name-equality and email-equality flags.
    #[must_use]
    pub fn from_flags(name_eq: bool, email_eq: bool) -> Self {
        match (name_eq, email_eq) {
            (_, true) => Self::SamePerson,
            (true, false) => Self::SamePersonDifferentEmail,
            (false, false) => Self::PossiblyDifferent,
        }
    }

    /// The label written to the output CSV.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SamePerson => "同一個人",
            Self::SamePersonDifferentEmail => "同一個人不同Email",
            Self::PossiblyDifferent => "可能不同人",
        }
    }
}
