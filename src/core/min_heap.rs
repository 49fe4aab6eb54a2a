use std::cmp::Reverse;
use std::collections::BinaryHeap;
use crate::errors::empty_queue_error::EmptyQueueError;

/// Min-priority queue. Duplicates are allowed and come out in no particular order.
#[derive(Debug, Clone)]
pub(crate) struct MinHeap<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub fn insert(&mut self, value: T) {
        self.heap.push(Reverse(value));
    }

    pub fn extract_min(&mut self) -> Result<T, EmptyQueueError> {
        match self.heap.pop() {
            Some(Reverse(value)) => Ok(value),
            None => Err(EmptyQueueError),
        }
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(value)| value)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    // Arbitrary order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item=&T> {
        self.heap.iter().map(|Reverse(value)| value)
    }
}
