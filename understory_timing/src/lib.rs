// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI components often need to do something "a little later": reapply styling
//! once a CSS transition has settled, hide a tooltip after a delay, or commit a
//! long press. This crate provides a small [`TimerQueue`] that stores such
//! deferred payloads keyed by a deadline, without owning a clock or a thread.
//!
//! Time is expressed as plain `u64` timestamps in a host-chosen unit and epoch
//! (milliseconds since application start is typical). The host is responsible
//! for:
//!
//! - Feeding the current timestamp into [`TimerQueue::pop_due`] or
//!   [`TimerQueue::drain_due`] from its event loop.
//! - Arming a single platform timer for [`TimerQueue::next_deadline`] if it
//!   wants to wake up exactly when the next task becomes due.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let settle = timers.schedule_after(1_000, 350, "settle");
//! let _tooltip = timers.schedule_after(1_000, 500, "tooltip");
//!
//! // Nothing is due yet.
//! assert!(timers.pop_due(1_200).is_none());
//! assert_eq!(timers.next_deadline(), Some(1_350));
//!
//! // The host advances time; tasks come out in deadline order.
//! let (id, payload) = timers.pop_due(1_400).unwrap();
//! assert_eq!(id, settle);
//! assert_eq!(payload, "settle");
//! assert_eq!(timers.len(), 1);
//! ```
//!
//! Tasks can be cancelled with the [`TimerId`] returned at scheduling time.
//! Cancelling an already-fired or unknown task is a no-op.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerId, TimerQueue};
