//! Bounded position history used to draw motion paths.

use std::collections::VecDeque;

use super::states::NVec2;

/// Fixed-capacity FIFO of past positions, oldest first.
///
/// The backing deque is allocated once; pushing into a full trail drops the
/// oldest point, so `len() <= capacity()` holds after every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a new position, evicting the oldest one if the trail is full
    pub fn push(&mut self, point: NVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Change the capacity; shrinking drops the oldest points first
    pub fn set_capacity(&mut self, capacity: usize) {
        while self.points.len() > capacity {
            self.points.pop_front();
        }
        if capacity > self.points.capacity() {
            self.points.reserve_exact(capacity - self.points.len());
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn latest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    /// Consecutive `(older, newer)` point pairs, oldest first
    pub fn segments(&self) -> impl Iterator<Item = (&NVec2, &NVec2)> + '_ {
        self.points.iter().zip(self.points.iter().skip(1))
    }
}
