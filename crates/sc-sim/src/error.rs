use sc_behavior::BehaviorError;
use sc_core::CoreError;
use sc_ferry::FerryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("ferry error: {0}")]
    Ferry(#[from] FerryError),
}

pub type SimResult<T> = Result<T, SimError>;
