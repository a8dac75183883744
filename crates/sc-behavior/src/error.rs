use sc_agent::ModePreference;
use sc_core::{AgentId, Corridor, Settlement};
use thiserror::Error;

use crate::Leg;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid {what} distribution: {reason}")]
    Distribution {
        what:   &'static str,
        reason: String,
    },

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(
        "failed to classify {agent} ({leg:?}): home={home} location={location} \
         destination={destination} preference={preference} corridor={corridor}"
    )]
    Unclassified {
        agent:       AgentId,
        leg:         Leg,
        home:        Settlement,
        location:    Settlement,
        destination: Settlement,
        preference:  ModePreference,
        corridor:    Corridor,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
