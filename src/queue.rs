//! Bounded max-priority queue backed by an array heap.
//!
//! Entry `i` has children `2i + 1` and `2i + 2`; every parent's priority is
//! at least that of its children.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Priority = i64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is full: capacity is {capacity}")]
    CapacityExceeded { capacity: usize },
    #[error("no entry with priority {priority}")]
    NotFound { priority: Priority },
    #[error("queue is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub priority: Priority,
    pub item: T,
}

impl<T> Entry<T> {
    pub fn new(item: T, priority: Priority) -> Self {
        Self { priority, item }
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.item, self.priority)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaxPriorityQueue<T> {
    entries: Vec<Entry<T>>,
    capacity: usize,
}

impl<T> MaxPriorityQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Heapifies `entries` in place, sifting down from the last internal node.
    pub fn from_entries(entries: Vec<Entry<T>>, capacity: usize) -> Result<Self, QueueError> {
        if entries.len() > capacity {
            return Err(QueueError::CapacityExceeded { capacity });
        }
        let mut queue = Self { entries, capacity };
        for idx in (0..queue.entries.len() / 2).rev() {
            queue.sift_down(idx);
        }
        Ok(queue)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in heap array order.
    pub fn as_slice(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    pub fn push(&mut self, item: T, priority: Priority) -> Result<(), QueueError> {
        if self.entries.len() == self.capacity {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(Entry::new(item, priority));
        let last = self.entries.len() - 1;
        self.sift_up(last);
        Ok(())
    }

    /// Removes and returns the highest-priority entry.
    pub fn pop(&mut self) -> Result<Entry<T>, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }
        let top = self.entries.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Removes the first entry, in array order, with exactly `priority`.
    ///
    /// The last entry takes its slot and is moved up or down as needed, so the
    /// heap order holds afterwards for every entry.
    pub fn remove_by_priority(&mut self, priority: Priority) -> Result<Entry<T>, QueueError> {
        let idx = self
            .entries
            .iter()
            .position(|entry| entry.priority == priority)
            .ok_or(QueueError::NotFound { priority })?;

        let removed = self.entries.swap_remove(idx);
        if idx < self.entries.len() {
            let settled = self.sift_up(idx);
            if settled == idx {
                self.sift_down(idx);
            }
        }
        Ok(removed)
    }

    /// Order in which entries would be popped, without consuming the queue.
    pub fn processing_order(&self) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        let mut copy = self.clone();
        let mut order = Vec::with_capacity(copy.len());
        while let Ok(entry) = copy.pop() {
            order.push(entry);
        }
        order
    }

    pub fn is_heap(&self) -> bool {
        (1..self.entries.len())
            .all(|idx| self.entries[(idx - 1) / 2].priority >= self.entries[idx].priority)
    }

    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].priority >= self.entries[idx].priority {
                break;
            }
            self.entries.swap(parent, idx);
            idx = parent;
        }
        idx
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut largest = idx;
            if left < len && self.entries[left].priority > self.entries[largest].priority {
                largest = left;
            }
            if right < len && self.entries[right].priority > self.entries[largest].priority {
                largest = right;
            }
            if largest == idx {
                break;
            }
            self.entries.swap(idx, largest);
            idx = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<Entry<char>> {
        [42, 17, 93, 28, 65, 81, 54, 60, 99, 73, 88]
            .into_iter()
            .enumerate()
            .map(|(idx, priority)| Entry::new((b'A' + idx as u8) as char, priority))
            .collect()
    }

    #[test]
    fn build_produces_a_heap() {
        let queue = MaxPriorityQueue::from_entries(jobs(), 100).unwrap();
        assert!(queue.is_heap());
        assert_eq!(queue.peek().map(|entry| entry.item), Some('I'));
        let order: Vec<Priority> = queue
            .as_slice()
            .iter()
            .map(|entry| entry.priority)
            .collect();
        assert_eq!(order, vec![99, 88, 93, 60, 73, 81, 54, 17, 28, 42, 65]);
    }

    #[test]
    fn push_moves_urgent_job_to_the_root_and_pop_removes_it() {
        let mut queue = MaxPriorityQueue::from_entries(jobs(), 100).unwrap();
        queue.push('L', 100).unwrap();
        assert_eq!(queue.peek(), Some(&Entry::new('L', 100)));
        assert_eq!(queue.pop().unwrap(), Entry::new('L', 100));
        assert!(queue.is_heap());
        assert_eq!(queue.peek().map(|entry| entry.priority), Some(99));
    }

    #[test]
    fn processing_order_is_descending_and_non_destructive() {
        let queue = MaxPriorityQueue::from_entries(jobs(), 100).unwrap();
        let order: Vec<Priority> = queue
            .processing_order()
            .into_iter()
            .map(|entry| entry.priority)
            .collect();
        assert_eq!(order, vec![99, 93, 88, 81, 73, 65, 60, 54, 42, 28, 17]);
        assert_eq!(queue.len(), 11);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut queue = MaxPriorityQueue::with_capacity(1);
        queue.push("a", 1).unwrap();
        assert_eq!(
            queue.push("b", 2),
            Err(QueueError::CapacityExceeded { capacity: 1 })
        );
        assert!(MaxPriorityQueue::from_entries(jobs(), 3).is_err());
    }

    #[test]
    fn removing_a_missing_priority_fails() {
        let mut queue = MaxPriorityQueue::from_entries(jobs(), 100).unwrap();
        assert_eq!(
            queue.remove_by_priority(1),
            Err(QueueError::NotFound { priority: 1 })
        );
        let mut empty: MaxPriorityQueue<char> = MaxPriorityQueue::with_capacity(2);
        assert_eq!(empty.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn removal_moves_the_replacement_up_when_needed() {
        let entries = [100, 10, 90, 5, 8, 80, 85]
            .into_iter()
            .map(|priority| Entry::new(priority, priority))
            .collect();
        let mut queue = MaxPriorityQueue::from_entries(entries, 16).unwrap();
        let priorities =
            |queue: &MaxPriorityQueue<i64>| queue.as_slice().iter().map(|e| e.priority).collect::<Vec<_>>();
        assert_eq!(priorities(&queue), vec![100, 10, 90, 5, 8, 80, 85]);

        // 85 lands under 10 and has to climb.
        assert_eq!(queue.remove_by_priority(5).unwrap().item, 5);
        assert!(queue.is_heap());
        assert_eq!(priorities(&queue), vec![100, 85, 90, 10, 8, 80]);

        // 80 lands under 100 and stays put.
        queue.remove_by_priority(85).unwrap();
        assert!(queue.is_heap());
        assert_eq!(priorities(&queue), vec![100, 80, 90, 10, 8]);
    }

    #[test]
    fn removing_the_last_slot_needs_no_repair() {
        let mut queue = MaxPriorityQueue::with_capacity(4);
        queue.push('a', 3).unwrap();
        queue.push('b', 1).unwrap();
        assert_eq!(queue.remove_by_priority(1).unwrap(), Entry::new('b', 1));
        assert_eq!(queue.len(), 1);
    }
}
