//! Indexed binary min-heap over cities.
//!
//! The heap itself only stores `(city, weight)` entries. Where each city
//! sits in the heap is recorded in a separate `Slot` array owned by the
//! caller's search state and passed into every operation, so membership
//! checks are O(1) and decrease-key can find its entry directly.

use crate::domain::CityId;

/// Where a city stands relative to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    /// Never queued.
    #[default]
    Absent,
    /// Currently queued at this heap position.
    Queued(usize),
    /// Extracted; its weight is settled.
    Finalized,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    city: CityId,
    weight: u64,
}

/// A fixed-capacity min-heap keyed by tentative weight.
///
/// Ties are broken by heap order. Every operation keeps `slots` in step
/// with the heap layout.
#[derive(Debug)]
pub struct MinQueue {
    entries: Vec<Entry>,
    capacity: usize,
}

impl MinQueue {
    /// Create a queue holding at most `capacity` cities at once.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queue `city` with `weight`.
    ///
    /// Does nothing and returns `false` when the queue is full. A search
    /// queues each city at most once, so a queue sized to the network
    /// never fills.
    pub fn insert(&mut self, city: CityId, weight: u64, slots: &mut [Slot]) -> bool {
        if self.entries.len() == self.capacity {
            return false;
        }
        let i = self.entries.len();
        self.entries.push(Entry { city, weight });
        slots[city.index()] = Slot::Queued(i);
        self.sift_up(i, slots);
        true
    }

    /// Remove the city with the smallest weight and mark it finalized.
    pub fn extract_min(&mut self, slots: &mut [Slot]) -> Option<(CityId, u64)> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        if let Some(moved) = self.entries.first() {
            slots[moved.city.index()] = Slot::Queued(0);
        }
        slots[min.city.index()] = Slot::Finalized;
        if !self.entries.is_empty() {
            self.sift_down(0, slots);
        }
        Some((min.city, min.weight))
    }

    /// Lower the weight of a queued city.
    ///
    /// Only takes effect when `city` is queued and `weight` is strictly
    /// smaller than its current weight. Returns whether it did.
    pub fn decrease_key(&mut self, city: CityId, weight: u64, slots: &mut [Slot]) -> bool {
        let Slot::Queued(i) = slots[city.index()] else {
            return false;
        };
        if weight >= self.entries[i].weight {
            return false;
        }
        self.entries[i].weight = weight;
        self.sift_up(i, slots);
        true
    }

    fn sift_up(&mut self, mut i: usize, slots: &mut [Slot]) {
        while i != 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].weight <= self.entries[i].weight {
                break;
            }
            self.swap(i, parent, slots);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize, slots: &mut [Slot]) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < len && self.entries[left].weight < self.entries[smallest].weight {
                smallest = left;
            }
            if right < len && self.entries[right].weight < self.entries[smallest].weight {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest, slots);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize, slots: &mut [Slot]) {
        self.entries.swap(a, b);
        slots[self.entries[a].city.index()] = Slot::Queued(a);
        slots[self.entries[b].city.index()] = Slot::Queued(b);
    }
}
