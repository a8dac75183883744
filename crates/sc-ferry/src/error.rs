use sc_core::{AgentId, QueueKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FerryError {
    #[error("{agent} is already queued; cannot join {key}")]
    AlreadyQueued {
        agent: AgentId,
        key:   QueueKey,
    },

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type FerryResult<T> = Result<T, FerryError>;
