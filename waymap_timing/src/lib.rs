// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymap_timing --heading-base-level=0

//! Waymap Timing: host-agnostic cancellable timer queue primitives.
//!
//! [`TimerQueue`] holds payloads scheduled to fire after a delay, without
//! ever reading a clock: hosts pass a monotonic timestamp in milliseconds
//! to [`TimerQueue::schedule`] and [`TimerQueue::fire_due`], and the queue
//! only compares those numbers. This keeps the crate free of platform
//! timer APIs and makes deferred behavior fully deterministic under test.
//!
//! Scheduling returns a [`TimerToken`] that can cancel the task until it
//! fires. Tokens are never reused, so a stale token held after its task
//! fired (or was cancelled) can only ever miss; it cannot alias a newer
//! task. Dropping the queue drops every pending task with it, which is
//! what lets owners guarantee that no task outlives them.
//!
//! ## Minimal example
//!
//! ```rust
//! use waymap_timing::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//!
//! // At t=1000ms, schedule a payload to fire 250ms later.
//! let token = queue.schedule(1000, 250, "fit");
//! assert!(queue.is_pending(token));
//!
//! // Nothing is due yet at t=1100ms.
//! assert!(queue.fire_due(1100).is_empty());
//!
//! // At t=1250ms the task fires exactly once.
//! let fired = queue.fire_due(1250);
//! assert_eq!(fired, vec![(token, "fit")]);
//! assert!(!queue.is_pending(token));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerQueue, TimerToken};
