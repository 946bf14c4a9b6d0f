use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque caller identity, supplied by the host environment.
///
/// The host decides what an identity actually is (an account address, a
/// session principal, ...); this crate only needs it to be hashable, cloneable
/// and comparable so it can key the voter registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for VoterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for VoterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A voter record in the registry.
///
/// `voted_proposal_id` defaults to 0 and is meaningful only while `has_voted`
/// is true; consumers must treat `has_voted` as the authoritative signal
/// rather than trying to distinguish the zero default from a vote for the
/// proposal at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// True once admitted by the administrator.
    pub is_registered: bool,
    /// True once this voter has cast their vote.
    pub has_voted: bool,
    /// Index of the proposal voted for, when `has_voted` is true.
    pub voted_proposal_id: u32,
}

impl Voter {
    /// A freshly admitted voter: registered, not yet voted.
    pub(crate) fn registered() -> Self {
        Self {
            is_registered: true,
            ..Self::default()
        }
    }
}
