use std::fmt::{self, Display, Formatter};

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Stages of the single-shot election workflow, in strict forward order.
///
/// Each phase is entered only from its immediate predecessor, by an
/// administrator-triggered transition; nothing ever moves the phase backward.
/// The numeric representation doubles as the persisted wire form, so the
/// derived ordering matches the workflow ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum WorkflowPhase {
    /// The administrator is admitting voters. Initial phase.
    RegisteringVoters = 0,
    /// Registered voters may submit proposals.
    ProposalsRegistering = 1,
    /// Proposal registration has closed; voting has not yet opened.
    ProposalsRegistrationEnded = 2,
    /// Registered voters may cast their single vote.
    VotingSessionStarted = 3,
    /// Voting has closed; votes have not yet been tallied.
    VotingSessionEnded = 4,
    /// Votes are tallied and the winner is final. Terminal phase.
    VotesTallied = 5,
}

impl Display for WorkflowPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::RegisteringVoters => "voter registration",
                Self::ProposalsRegistering => "proposal registration",
                Self::ProposalsRegistrationEnded => "proposal registration ended",
                Self::VotingSessionStarted => "voting session",
                Self::VotingSessionEnded => "voting session ended",
                Self::VotesTallied => "votes tallied",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_workflow() {
        let order = [
            WorkflowPhase::RegisteringVoters,
            WorkflowPhase::ProposalsRegistering,
            WorkflowPhase::ProposalsRegistrationEnded,
            WorkflowPhase::VotingSessionStarted,
            WorkflowPhase::VotingSessionEnded,
            WorkflowPhase::VotesTallied,
        ];
        for pair in order.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn serializes_as_ordinal() {
        let json = serde_json::to_string(&WorkflowPhase::VotingSessionStarted).unwrap();
        assert_eq!(json, "3");
        let phase: WorkflowPhase = serde_json::from_str("5").unwrap();
        assert_eq!(phase, WorkflowPhase::VotesTallied);
    }
}
