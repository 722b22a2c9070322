//! Fixed-capacity, newest-first activity log.

use crate::model::system_log::SystemLogEntry;
use std::collections::VecDeque;

/// Number of entries retained by the dashboard activity log.
pub const SYSTEM_LOG_CAPACITY: usize = 100;

/// Push-front ring; the oldest entry is dropped once `capacity` is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemLogRing {
    entries: VecDeque<SystemLogEntry>,
    capacity: usize,
}

impl Default for SystemLogRing {
    fn default() -> Self {
        Self::with_capacity(SYSTEM_LOG_CAPACITY)
    }
}

impl SystemLogRing {
    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push_front(&mut self, entry: SystemLogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SystemLogEntry> + '_ {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&SystemLogEntry> {
        self.entries.front()
    }
}

impl<'a> IntoIterator for &'a SystemLogRing {
    type Item = &'a SystemLogEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, SystemLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
