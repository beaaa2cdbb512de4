//! Deferred steps of a round.
//!
//! The engine never sleeps. After `play_card`, `opponent_play` and `resolve`
//! it hands a [`Ticket`] to a [`Scheduler`] together with a delay, and the
//! driver feeds the ticket back through `RoundEngine::dispatch` when the
//! delay has elapsed. Only ordering matters; zero delays are legal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A deferred engine operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Step {
    OpponentPlay,
    Resolve,
    DiscardAndReset,
}

/// A step tagged with the game generation that scheduled it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    pub step: Step,
    pub generation: u64,
}

/// "After `delay`, hand this ticket back to the engine."
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, ticket: Ticket);

    /// Drops everything still pending. Tickets carry their generation, so
    /// a scheduler that cannot cancel may leave this as a no-op.
    fn cancel_all(&mut self) {}
}

#[derive(Debug, Clone, Eq, PartialEq)]
struct Entry {
    due: Duration,
    seq: u64,
    ticket: Ticket,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on (due, seq)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Virtual-time scheduler.
///
/// Tickets fire in due-time order; tickets due at the same instant fire in
/// the order they were scheduled. Time only moves when a ticket is popped.
///
/// ```
/// use std::time::Duration;
/// use highcard_engine::scheduler::{Scheduler, Step, StepQueue, Ticket};
///
/// let mut q = StepQueue::new();
/// q.schedule(Duration::from_millis(200), Ticket { step: Step::Resolve, generation: 0 });
/// q.schedule(Duration::from_millis(50), Ticket { step: Step::OpponentPlay, generation: 0 });
///
/// let (wait, first) = q.pop_next().unwrap();
/// assert_eq!(first.step, Step::OpponentPlay);
/// assert_eq!(wait, Duration::from_millis(50));
/// let (wait, second) = q.pop_next().unwrap();
/// assert_eq!(second.step, Step::Resolve);
/// assert_eq!(wait, Duration::from_millis(150));
/// ```
#[derive(Debug, Default)]
pub struct StepQueue {
    now: Duration,
    seq: u64,
    pending: BinaryHeap<Entry>,
}

impl StepQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time until the next ticket is due.
    pub fn next_delay(&self) -> Option<Duration> {
        self.pending
            .peek()
            .map(|e| e.due.saturating_sub(self.now))
    }

    /// Removes the earliest ticket and advances the clock to its due time.
    /// Returns how far the clock moved.
    pub fn pop_next(&mut self) -> Option<(Duration, Ticket)> {
        let entry = self.pending.pop()?;
        let waited = entry.due.saturating_sub(self.now);
        self.now = self.now.max(entry.due);
        Some((waited, entry.ticket))
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Scheduler for StepQueue {
    fn schedule(&mut self, delay: Duration, ticket: Ticket) {
        self.seq += 1;
        self.pending.push(Entry {
            due: self.now + delay,
            seq: self.seq,
            ticket,
        });
    }

    fn cancel_all(&mut self) {
        self.clear();
    }
}
