// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Identifier for a scheduled task.
///
/// Identifiers are unique for the lifetime of the [`TimerQueue`] that issued
/// them and increase in scheduling order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    deadline: u64,
    id: TimerId,
    payload: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (u64, TimerId) {
        (self.deadline, self.id)
    }
}

/// A queue of deferred payloads ordered by deadline.
///
/// Entries with equal deadlines fire in the order they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted ascending by `(deadline, id)`.
    entries: VecDeque<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule_at(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let entry = Entry {
            deadline,
            id,
            payload,
        };
        let key = entry.key();
        let at = self.entries.partition_point(|e| e.key() < key);
        self.entries.insert(at, entry);
        id
    }

    /// Schedules `payload` to become due `delay` units after `now`.
    ///
    /// The deadline saturates at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule_at(now.saturating_add(delay), payload)
    }

    /// Cancels a scheduled task, returning its payload if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let at = self.entries.iter().position(|e| e.id == id)?;
        self.entries.remove(at).map(|e| e.payload)
    }

    /// Returns `true` if the task is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.front().map(|e| e.deadline)
    }

    /// Removes and returns the earliest task whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        if self.entries.front()?.deadline > now {
            return None;
        }
        self.entries.pop_front().map(|e| (e.id, e.payload))
    }

    /// Removes and returns every task whose deadline is `<= now`, in firing order.
    pub fn drain_due(&mut self, now: u64) -> Vec<(TimerId, T)> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries
            .drain(..due)
            .map(|e| (e.id, e.payload))
            .collect()
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_queue_has_no_deadline() {
        let mut q = TimerQueue::<u8>::new();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
        assert!(q.pop_due(u64::MAX).is_none());
    }

    #[test]
    fn ids_increase_in_scheduling_order() {
        let mut q = TimerQueue::new();
        let a = q.schedule_at(50, ());
        let b = q.schedule_at(10, ());
        assert!(a < b);
        assert_eq!(a.get() + 1, b.get());
    }

    #[test]
    fn pop_due_respects_deadline() {
        let mut q = TimerQueue::new();
        q.schedule_at(100, 'a');
        assert!(q.pop_due(99).is_none());
        assert_eq!(q.pop_due(100).map(|(_, p)| p), Some('a'));
        assert!(q.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_fifo() {
        let mut q = TimerQueue::new();
        q.schedule_at(5, 1);
        q.schedule_at(3, 0);
        q.schedule_at(5, 2);
        q.schedule_at(5, 3);

        let fired: Vec<i32> = q.drain_due(5).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec![0, 1, 2, 3]);
    }

    #[test]
    fn drain_due_leaves_future_tasks() {
        let mut q = TimerQueue::new();
        q.schedule_at(1, "early");
        q.schedule_at(10, "late");

        let fired = q.drain_due(5);
        assert_eq!(fired.len(), 1);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(10));
    }

    #[test]
    fn cancel_removes_pending_task_once() {
        let mut q = TimerQueue::new();
        let id = q.schedule_after(0, 20, "x");
        assert!(q.contains(id));
        assert_eq!(q.cancel(id), Some("x"));
        assert!(!q.contains(id));
        assert_eq!(q.cancel(id), None);
        assert!(q.is_empty());
    }

    #[test]
    fn schedule_after_saturates() {
        let mut q = TimerQueue::new();
        q.schedule_after(u64::MAX - 1, 10, ());
        assert_eq!(q.next_deadline(), Some(u64::MAX));
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        q.schedule_at(1, ());
        q.schedule_at(2, ());
        q.clear();
        assert!(q.is_empty());
    }
}
