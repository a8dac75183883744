//! The four ferry queues.

use std::collections::VecDeque;

use sc_agent::RunState;
use sc_core::{AgentId, QueueKey};

use crate::{FerryError, FerryResult};

/// One queue slot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct QueuedAgent {
    pub agent: AgentId,
    /// Sailings this agent has watched leave without it.
    pub sailings_waited: u32,
}

/// Four independent FIFO queues, one per [`QueueKey`].
///
/// Membership is mirrored in `RunState::queued` so the trip decision engine
/// can skip agents that are already waiting.
#[derive(Clone, Debug, Default)]
pub struct FerryQueues {
    queues: [VecDeque<QueuedAgent>; 4],
}

impl FerryQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `agent` to the back of `key`'s queue.
    ///
    /// # Errors
    ///
    /// [`FerryError::AlreadyQueued`] if the agent already holds a slot in any
    /// queue.
    pub fn enqueue(&mut self, key: QueueKey, agent: AgentId, state: &mut RunState) -> FerryResult<()> {
        let flag = &mut state.queued[agent.index()];
        if *flag {
            return Err(FerryError::AlreadyQueued { agent, key });
        }
        *flag = true;
        self.queues[key.index()].push_back(QueuedAgent { agent, sailings_waited: 0 });
        Ok(())
    }

    #[inline]
    pub fn len(&self, key: QueueKey) -> usize {
        self.queues[key.index()].len()
    }

    /// Agents waiting across all four queues.
    pub fn total_len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Front-to-back view of one queue.
    pub fn iter(&self, key: QueueKey) -> impl Iterator<Item = &QueuedAgent> {
        self.queues[key.index()].iter()
    }

    /// Drop every slot, e.g. between iterations.  The caller resets
    /// `RunState::queued` separately.
    pub fn clear(&mut self) {
        for q in &mut self.queues {
            q.clear();
        }
    }

    #[inline]
    pub(crate) fn queue_mut(&mut self, key: QueueKey) -> &mut VecDeque<QueuedAgent> {
        &mut self.queues[key.index()]
    }
}
