use serde::{Deserialize, Serialize};

use crate::model::phase::WorkflowPhase;
use crate::model::voter::VoterId;

/// Informational notifications recorded by [`ElectionState`] operations.
///
/// The host drains these with [`ElectionState::take_events`] and forwards them
/// to whatever observers it has. They are not required for correctness; the
/// state itself is always authoritative.
///
/// [`ElectionState`]: crate::model::election::ElectionState
/// [`ElectionState::take_events`]: crate::model::election::ElectionState::take_events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectionEvent {
    /// A voter was admitted by the administrator.
    VoterRegistered { voter: VoterId },
    /// A proposal was appended at the carried index.
    ProposalRegistered { proposal_id: u32 },
    /// A voter cast their vote for the carried proposal.
    VoteCast { voter: VoterId, proposal_id: u32 },
    /// The workflow advanced. Emitted on every transition.
    PhaseChanged {
        previous: WorkflowPhase,
        current: WorkflowPhase,
    },
}
