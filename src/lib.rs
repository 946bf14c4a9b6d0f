//! Core state machine for a small, trust-anchored voting process.
//!
//! An administrator admits voters, voters submit proposals, each voter casts
//! exactly one vote, and the administrator triggers tallying to produce the
//! winning proposal. All behavior lives in [`ElectionState`]: a single-shot
//! workflow whose phase only ever moves forward, gating every mutation.
//!
//! Transport, persistence, and the administrative identity mechanism are host
//! concerns. The host supplies an opaque caller identity ([`VoterId`]) with
//! every operation; this crate enforces the workflow and data-integrity rules
//! and records informational [`ElectionEvent`]s for the host to forward.

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::election::ElectionState;
pub use model::event::ElectionEvent;
pub use model::phase::WorkflowPhase;
pub use model::proposal::Proposal;
pub use model::voter::{Voter, VoterId};
