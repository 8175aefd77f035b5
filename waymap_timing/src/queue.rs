// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Identifies one scheduled task in a [`TimerQueue`].
///
/// Tokens are allocated from a per-queue counter and never reused, so a
/// token outliving its task is merely stale; it cannot address a task
/// scheduled later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    token: TimerToken,
    deadline_ms: u64,
    payload: T,
}

/// Deadline-ordered queue of cancellable deferred payloads.
///
/// Hosts own the clock: every method taking a timestamp expects monotonic
/// milliseconds from the same source. The queue holds a handful of entries
/// at most in its intended uses, so it stores them in insertion order and
/// selects due entries by scan rather than keeping a heap.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_token: u64,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_token: 0,
        }
    }

    /// Schedules `payload` to become due `delay_ms` after `now_ms`.
    ///
    /// Returns the token that cancels the task while it is pending.
    #[must_use]
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.push(Entry {
            token,
            deadline_ms: now_ms.saturating_add(delay_ms),
            payload,
        });
        token
    }

    /// Cancels the pending task identified by `token`.
    ///
    /// Returns the payload if the task was still pending; `None` if the
    /// token is stale (already fired or cancelled).
    pub fn cancel(&mut self, token: TimerToken) -> Option<T> {
        let index = self.entries.iter().position(|e| e.token == token)?;
        Some(self.entries.remove(index).payload)
    }

    /// Returns `true` while the task identified by `token` is pending.
    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    /// Removes and returns every task with `deadline <= now_ms`.
    ///
    /// Fired tasks come out in deadline order, and in scheduling order
    /// among equal deadlines. Each task fires at most once.
    pub fn fire_due(&mut self, now_ms: u64) -> Vec<(TimerToken, T)> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].deadline_ms <= now_ms {
                due.push(self.entries.remove(index));
            } else {
                index += 1;
            }
        }
        // Insertion order is scheduling order, so a stable sort by deadline
        // keeps FIFO among equal deadlines.
        due.sort_by_key(|e| e.deadline_ms);
        due.into_iter().map(|e| (e.token, e.payload)).collect()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no task is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels all pending tasks.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
