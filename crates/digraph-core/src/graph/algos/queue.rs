use std::collections::{BTreeMap, VecDeque};

use crate::error::{GraphError, Result};

/// Min-priority queue with FIFO order among equal priorities.
///
/// Values live in per-priority buckets, so a value can be moved to a new
/// priority without an index into a heap: [`PriorityQueue::change_priority`]
/// scans the old bucket, removes the value and re-enqueues it.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T> {
    buckets: BTreeMap<P, VecDeque<T>>,
    len: usize,
}

impl<P: Ord, T: PartialEq> PriorityQueue<P, T> {
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn enqueue(&mut self, priority: P, value: T) {
        self.buckets.entry(priority).or_default().push_back(value);
        self.len += 1;
    }

    /// Remove and return the oldest value with the smallest priority
    pub fn dequeue(&mut self) -> Result<T> {
        let mut bucket = self.buckets.first_entry().ok_or(GraphError::EmptyQueue)?;
        let value = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        let value = value.ok_or(GraphError::EmptyQueue)?;
        self.len -= 1;
        Ok(value)
    }

    /// Move `value` from `old` to `new`.
    ///
    /// Every copy of `value` under `old` is dropped and a single copy is
    /// enqueued under `new`, so the value is queued once afterwards. If it
    /// is not queued under `old` it is simply enqueued under `new`.
    pub fn change_priority(&mut self, old: P, new: P, value: T) {
        if let Some(bucket) = self.buckets.get_mut(&old) {
            let before = bucket.len();
            bucket.retain(|v| *v != value);
            self.len -= before - bucket.len();
            if bucket.is_empty() {
                self.buckets.remove(&old);
            }
        }
        self.enqueue(new, value);
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<&P> {
        self.buckets.keys().next()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<P: Ord, T: PartialEq> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
