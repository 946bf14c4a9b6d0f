pub mod election;
pub mod event;
pub mod phase;
pub mod proposal;
pub mod voter;
