//! Deadline-ordered timer queue
//!
//! Holds payloads keyed by the instant they become due. Entries sharing a
//! deadline come out in insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Identifier handed out for each inserted timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Timer entry
struct TimerEntry<T> {
    deadline: Instant,
    id: TimerId,
    payload: T,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Min-heap of pending timers
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<TimerEntry<T>>>,
    next_id: u64,
    fired: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_id: 0,
            fired: 0,
        }
    }

    /// Insert a timer
    pub fn insert(&mut self, deadline: Instant, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.heap.push(Reverse(TimerEntry {
            deadline,
            id,
            payload,
        }));
        id
    }

    /// Insert a timer that expires after a duration
    pub fn insert_after(&mut self, duration: Duration, payload: T) -> TimerId {
        self.insert(Instant::now() + duration, payload)
    }

    /// Remove and return every payload due at or before `now`, earliest first.
    pub fn pop_expired(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.deadline > now {
                break;
            }
            if let Some(Reverse(entry)) = self.heap.pop() {
                due.push(entry.payload);
            }
        }
        self.fired += due.len() as u64;
        due
    }

    /// Get the next expiry time (for calculating poll timeout)
    pub fn next_expiry(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(entry)| entry.deadline)
    }

    /// Calculate timeout until next expiry
    pub fn timeout_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_expiry()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all pending timers, returning how many were discarded
    pub fn clear(&mut self) -> usize {
        let dropped = self.heap.len();
        self.heap.clear();
        dropped
    }

    pub fn stats(&self) -> TimerStats {
        TimerStats {
            pending: self.heap.len(),
            scheduled: self.next_id,
            fired: self.fired,
        }
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer queue statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerStats {
    pub pending: usize,
    pub scheduled: u64,
    pub fired: u64,
}
