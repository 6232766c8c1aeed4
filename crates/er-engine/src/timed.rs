//! Fixed-capacity queue of pending timed events.
//!
//! A software implementation of the [`Timer`](crate::Timer) contract for
//! platforms without hardware timer slots. Entries stay sorted by deadline;
//! scheduling an id that is already pending replaces it.

use heapless::Vec;
use thiserror::Error;

use crate::interface::{TimerId, TimerMode};

/// The queue already holds its capacity of distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("timer queue full, dropped {0:?}")]
pub struct QueueFull(pub TimerId);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    id: TimerId,
    deadline: u64,
    /// Re-arm interval for repeating timers
    period: Option<u16>,
}

/// Pending timed events ordered by deadline (milliseconds).
#[derive(Clone, Debug, Default)]
pub struct TimedEvents<const N: usize> {
    pending: Vec<Pending, N>,
}

impl<const N: usize> TimedEvents<N> {
    pub const fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Schedule `id` to fire `delay_ms` after `now`, replacing any pending entry for `id`.
    pub fn schedule(
        &mut self,
        now: u64,
        id: TimerId,
        delay_ms: u16,
        mode: TimerMode,
    ) -> Result<(), QueueFull> {
        self.cancel(id);
        let period = match mode {
            TimerMode::Once => None,
            // A zero period would re-fire forever within one poll.
            TimerMode::Repeat => Some(delay_ms.max(1)),
        };
        self.insert(Pending {
            id,
            deadline: now + delay_ms as u64,
            period,
        })
    }

    fn insert(&mut self, entry: Pending) -> Result<(), QueueFull> {
        // Equal deadlines fire in scheduling order.
        let pos = self.pending.partition_point(|p| p.deadline <= entry.deadline);
        self.pending.insert(pos, entry).map_err(|e| QueueFull(e.id))
    }

    /// Remove the pending entry for `id`. Returns true if there was one.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Pop the earliest event due at or before `now`.
    ///
    /// Repeating events are re-armed one period after their previous deadline.
    pub fn pop_due(&mut self, now: u64) -> Option<TimerId> {
        let first = self.pending.first()?;
        if first.deadline > now {
            return None;
        }
        let entry = self.pending.remove(0);
        if let Some(period) = entry.period {
            // Cannot fail: the slot just freed.
            let _ = self.insert(Pending {
                deadline: entry.deadline + period as u64,
                ..entry
            });
        }
        Some(entry.id)
    }

    /// Deadline of the next event, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.first().map(|p| p.deadline)
    }

    /// Deadline of the pending entry for `id`.
    pub fn deadline_of(&self, id: TimerId) -> Option<u64> {
        self.pending.iter().find(|p| p.id == id).map(|p| p.deadline)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
