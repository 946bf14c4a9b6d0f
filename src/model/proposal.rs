use serde::{Deserialize, Serialize};

/// Description of the sentinel proposal appended at index 0 the moment
/// proposal registration opens. It guarantees index 0 always exists and, with
/// zero votes, can only win the degenerate election where nobody voted.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// A proposal in the append-only proposal sequence.
///
/// Identity is positional: a proposal's id is its index in the sequence.
/// Immutable after registration closes, except for `vote_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Caller-supplied text. Never empty.
    pub description: String,
    /// Votes received during the voting session.
    pub vote_count: u32,
}

impl Proposal {
    pub(crate) fn new(description: String) -> Self {
        Self {
            description,
            vote_count: 0,
        }
    }

    /// The index-0 sentinel.
    pub(crate) fn genesis() -> Self {
        Self::new(GENESIS_DESCRIPTION.to_string())
    }
}
