use thiserror::Error;

use crate::model::phase::WorkflowPhase;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is terminal: the offending operation is rejected before any
/// mutation, so callers always observe either the full effect or none of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An administrator-only operation was called by somebody else.
    #[error("Unauthorized: caller is not the administrator")]
    Unauthorized,
    /// The state machine is not in the phase the operation requires.
    #[error("Invalid phase: requires {required}, but the election is in {actual}")]
    InvalidPhase {
        required: WorkflowPhase,
        actual: WorkflowPhase,
    },
    /// The caller is not a registered voter.
    #[error("Not a voter: caller is not registered")]
    NotAVoter,
    /// Registration was attempted for an identity already present.
    #[error("Already registered")]
    AlreadyRegistered,
    /// A registered voter attempted a second vote.
    #[error("Already voted")]
    AlreadyVoted,
    /// A proposal was submitted with an empty or blank description.
    #[error("Proposal description must not be empty")]
    EmptyProposal,
    /// The referenced proposal index is out of bounds.
    #[error("Proposal {0} not found")]
    ProposalNotFound(u32),
}
