use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::event::ElectionEvent;
use crate::model::phase::WorkflowPhase;
use crate::model::proposal::Proposal;
use crate::model::voter::{Voter, VoterId};

/// One single-shot election: the workflow phase, the voter registry, the
/// proposal sequence, and the phase-gated operations that mutate them.
///
/// Every operation takes the caller's identity explicitly. Administrator
/// rights belong to the single identity fixed at construction; voters are
/// whoever the administrator admits while registration is open. There is no
/// reset: to run another election, construct another `ElectionState`.
///
/// The host ledger serializes operations, so each call runs to completion
/// against a consistent snapshot. Every operation checks all of its
/// preconditions before mutating anything, making failures all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionState {
    /// The sole identity allowed to drive phase transitions and registration.
    admin: VoterId,
    /// Current workflow phase. Monotonically non-decreasing.
    phase: WorkflowPhase,
    /// Voter registry, keyed by caller identity.
    voters: HashMap<VoterId, Voter>,
    /// Append-only proposal sequence; a proposal's id is its index.
    proposals: Vec<Proposal>,
    /// Winning proposal index. Meaningful only once the phase is
    /// [`WorkflowPhase::VotesTallied`]; defaults to 0 before that.
    winning_proposal_id: u32,
    /// Journal of notifications not yet drained by the host.
    #[serde(skip)]
    events: Vec<ElectionEvent>,
}

impl ElectionState {
    /// Create a new election administered by `admin`, in the initial
    /// [`WorkflowPhase::RegisteringVoters`] phase.
    pub fn new(admin: VoterId) -> Self {
        info!("new election created, administered by {admin}");
        Self {
            admin,
            phase: WorkflowPhase::RegisteringVoters,
            voters: HashMap::new(),
            proposals: Vec::new(),
            winning_proposal_id: 0,
            events: Vec::new(),
        }
    }

    /// The current workflow phase.
    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// The winning proposal index. Defaults to 0 until tallying has run;
    /// use [`Self::winner`] or check the phase to tell the two apart.
    pub fn winning_proposal_id(&self) -> u32 {
        self.winning_proposal_id
    }

    /// The winning proposal, once votes have been tallied.
    pub fn winner(&self) -> Option<&Proposal> {
        if self.phase == WorkflowPhase::VotesTallied {
            self.proposals.get(self.winning_proposal_id as usize)
        } else {
            None
        }
    }

    /// Whether `caller` holds administrator rights for this election.
    pub fn is_administrator(&self, caller: &VoterId) -> bool {
        *caller == self.admin
    }

    /// Number of proposals registered so far, the GENESIS sentinel included.
    pub fn proposal_count(&self) -> u32 {
        self.proposals.len() as u32
    }

    /// Notifications recorded since the last [`Self::take_events`].
    pub fn events(&self) -> &[ElectionEvent] {
        &self.events
    }

    /// Drain the notification journal, in recording order.
    pub fn take_events(&mut self) -> Vec<ElectionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Admit `identity` as a voter.
    ///
    /// Administrator only, during [`WorkflowPhase::RegisteringVoters`].
    pub fn register_voter(&mut self, caller: &VoterId, identity: VoterId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_phase(WorkflowPhase::RegisteringVoters)?;
        if self.voters.contains_key(&identity) {
            return Err(Error::AlreadyRegistered);
        }
        info!("voter {identity} registered");
        self.voters.insert(identity.clone(), Voter::registered());
        self.events
            .push(ElectionEvent::VoterRegistered { voter: identity });
        Ok(())
    }

    /// Look up the voter record for `identity`.
    ///
    /// Only registered voters may look records up. An identity that was never
    /// registered yields the default record (`is_registered == false`).
    pub fn voter(&self, caller: &VoterId, identity: &VoterId) -> Result<Voter> {
        self.registered_voter(caller)?;
        Ok(self.voters.get(identity).cloned().unwrap_or_default())
    }

    /// Close voter registration and open proposal registration.
    ///
    /// Appends the GENESIS sentinel at index 0 as part of the transition, so
    /// the proposal sequence is never empty from this phase onwards.
    pub fn open_proposals_registration(&mut self, caller: &VoterId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_phase(WorkflowPhase::RegisteringVoters)?;
        self.proposals.push(Proposal::genesis());
        self.set_phase(WorkflowPhase::ProposalsRegistering);
        Ok(())
    }

    /// Append a proposal with the given description, returning its index.
    ///
    /// Registered voters only, during [`WorkflowPhase::ProposalsRegistering`].
    /// Blank descriptions are rejected.
    pub fn add_proposal(&mut self, caller: &VoterId, description: String) -> Result<u32> {
        self.registered_voter(caller)?;
        self.ensure_phase(WorkflowPhase::ProposalsRegistering)?;
        if description.trim().is_empty() {
            return Err(Error::EmptyProposal);
        }
        let proposal_id = self.proposals.len() as u32;
        info!("proposal {proposal_id} registered by {caller}");
        self.proposals.push(Proposal::new(description));
        self.events
            .push(ElectionEvent::ProposalRegistered { proposal_id });
        Ok(proposal_id)
    }

    /// Look up the proposal at `proposal_id`. Registered voters only.
    pub fn proposal(&self, caller: &VoterId, proposal_id: u32) -> Result<&Proposal> {
        self.registered_voter(caller)?;
        self.proposals
            .get(proposal_id as usize)
            .ok_or(Error::ProposalNotFound(proposal_id))
    }

    /// Close proposal registration.
    pub fn close_proposals_registration(&mut self, caller: &VoterId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_phase(WorkflowPhase::ProposalsRegistering)?;
        self.set_phase(WorkflowPhase::ProposalsRegistrationEnded);
        Ok(())
    }

    /// Open the voting session.
    pub fn open_voting_session(&mut self, caller: &VoterId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_phase(WorkflowPhase::ProposalsRegistrationEnded)?;
        self.set_phase(WorkflowPhase::VotingSessionStarted);
        Ok(())
    }

    /// Cast the caller's single vote for the proposal at `proposal_id`.
    ///
    /// Registered voters only, during [`WorkflowPhase::VotingSessionStarted`],
    /// at most once per voter.
    pub fn vote(&mut self, caller: &VoterId, proposal_id: u32) -> Result<()> {
        let voter = self.registered_voter(caller)?;
        self.ensure_phase(WorkflowPhase::VotingSessionStarted)?;
        if voter.has_voted {
            return Err(Error::AlreadyVoted);
        }
        if proposal_id as usize >= self.proposals.len() {
            return Err(Error::ProposalNotFound(proposal_id));
        }
        // All preconditions hold; commit the vote.
        let voter = self.voters.get_mut(caller).ok_or(Error::NotAVoter)?;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        self.proposals[proposal_id as usize].vote_count += 1;
        info!("vote cast by {caller} for proposal {proposal_id}");
        self.events.push(ElectionEvent::VoteCast {
            voter: caller.clone(),
            proposal_id,
        });
        Ok(())
    }

    /// Close the voting session.
    pub fn close_voting_session(&mut self, caller: &VoterId) -> Result<()> {
        self.ensure_admin(caller)?;
        self.ensure_phase(WorkflowPhase::VotingSessionStarted)?;
        self.set_phase(WorkflowPhase::VotingSessionEnded);
        Ok(())
    }

    /// Tally the votes, fixing the winning proposal, and enter the terminal
    /// [`WorkflowPhase::VotesTallied`] phase. Returns the winning index.
    ///
    /// The tally runs synchronously within the transition, so by the time the
    /// new phase is observable the winner is final.
    pub fn tally_votes(&mut self, caller: &VoterId) -> Result<u32> {
        self.ensure_admin(caller)?;
        self.ensure_phase(WorkflowPhase::VotingSessionEnded)?;
        self.winning_proposal_id = self.compute_winner();
        info!("votes tallied, winning proposal {}", self.winning_proposal_id);
        self.set_phase(WorkflowPhase::VotesTallied);
        Ok(self.winning_proposal_id)
    }

    /// Single forward scan; strict improvement moves the winner, ties keep
    /// the earlier index. With no votes cast, GENESIS at index 0 wins.
    fn compute_winner(&self) -> u32 {
        let mut winning_proposal_id = 0;
        let mut highest_count = 0;
        for (index, proposal) in self.proposals.iter().enumerate() {
            if proposal.vote_count > highest_count {
                highest_count = proposal.vote_count;
                winning_proposal_id = index as u32;
            }
        }
        winning_proposal_id
    }

    fn ensure_admin(&self, caller: &VoterId) -> Result<()> {
        if self.is_administrator(caller) {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }

    fn ensure_phase(&self, required: WorkflowPhase) -> Result<()> {
        if self.phase == required {
            Ok(())
        } else {
            Err(Error::InvalidPhase {
                required,
                actual: self.phase,
            })
        }
    }

    fn registered_voter(&self, caller: &VoterId) -> Result<&Voter> {
        self.voters
            .get(caller)
            .filter(|voter| voter.is_registered)
            .ok_or(Error::NotAVoter)
    }

    /// Record a checked forward transition. Callers have already verified the
    /// predecessor phase, keeping the phase monotonically non-decreasing.
    fn set_phase(&mut self, to: WorkflowPhase) {
        let previous = self.phase;
        self.phase = to;
        info!("workflow advanced from {previous} to {to}");
        self.events.push(ElectionEvent::PhaseChanged {
            previous,
            current: to,
        });
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl ElectionState {
        /// A fresh election administered by the example admin.
        pub fn example() -> Self {
            Self::new(VoterId::admin_example())
        }

        /// An election with two voters and two proposals ("P1" at index 1,
        /// "P2" at index 2), advanced to the voting session.
        pub fn voting_example() -> Self {
            let admin = VoterId::admin_example();
            let mut election = Self::example();
            election
                .register_voter(&admin, VoterId::example1())
                .unwrap();
            election
                .register_voter(&admin, VoterId::example2())
                .unwrap();
            election.open_proposals_registration(&admin).unwrap();
            election
                .add_proposal(&VoterId::example1(), "P1".to_string())
                .unwrap();
            election
                .add_proposal(&VoterId::example2(), "P2".to_string())
                .unwrap();
            election.close_proposals_registration(&admin).unwrap();
            election.open_voting_session(&admin).unwrap();
            election
        }
    }
}
