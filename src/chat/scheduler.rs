//! Simulated reply latency
//!
//! The assistant "types" for a random interval before answering. Pending
//! replies are plain deadlines owned by the widget, checked from the event
//! loop, so dropping the widget drops every timer with it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Random reply delay, uniform over `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyLatency {
    /// Shortest delay (inclusive)
    pub min: Duration,
    /// Longest delay (exclusive)
    pub max: Duration,
}

impl ReplyLatency {
    /// Create a latency range from millisecond bounds
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    /// Draw one delay from the range
    ///
    /// A degenerate range (`max <= min`) always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let min_ms = u64::try_from(self.min.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX);
        if max_ms <= min_ms {
            return self.min;
        }
        Duration::from_millis(rng.gen_range(min_ms..max_ms))
    }
}

impl Default for ReplyLatency {
    fn default() -> Self {
        Self::from_millis(1200, 2000)
    }
}

/// A reply waiting for its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// The user text the reply answers
    pub prompt: String,
    /// When the reply becomes due
    pub due_at: Instant,
}

/// Queue of pending replies, delivered strictly in submission order
///
/// Each new reply is timed from the later of "now" and the previous reply's
/// deadline, so deadlines are non-decreasing and a quick second message never
/// gets answered before the first.
#[derive(Debug)]
pub struct ReplyScheduler {
    pending: VecDeque<PendingReply>,
    latency: ReplyLatency,
    rng: StdRng,
}

impl ReplyScheduler {
    /// Create a scheduler seeded from OS entropy
    pub fn new(latency: ReplyLatency) -> Self {
        Self::with_rng(latency, StdRng::from_entropy())
    }

    /// Create a scheduler with a fixed seed (reproducible delays)
    pub fn with_seed(latency: ReplyLatency, seed: u64) -> Self {
        Self::with_rng(latency, StdRng::seed_from_u64(seed))
    }

    fn with_rng(latency: ReplyLatency, rng: StdRng) -> Self {
        Self {
            pending: VecDeque::new(),
            latency,
            rng,
        }
    }

    /// Configured delay range
    pub fn latency(&self) -> ReplyLatency {
        self.latency
    }

    /// Schedule a reply to `prompt`, returning its deadline
    pub fn schedule(&mut self, prompt: String, now: Instant) -> Instant {
        let start = match self.pending.back() {
            Some(last) if last.due_at > now => last.due_at,
            _ => now,
        };
        let due_at = start + self.latency.sample(&mut self.rng);
        self.pending.push_back(PendingReply { prompt, due_at });
        due_at
    }

    /// Remove and return every reply due at `now`, oldest first
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingReply> {
        let mut due = Vec::new();
        while self.pending.front().is_some_and(|reply| reply.due_at <= now) {
            if let Some(reply) = self.pending.pop_front() {
                due.push(reply);
            }
        }
        due
    }

    /// Drop all pending replies, returning how many were cancelled
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Deadline of the next reply, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().map(|reply| reply.due_at)
    }

    /// Number of replies still waiting
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is waiting
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
