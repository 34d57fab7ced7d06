//! Strict first-in-first-out queue used as the BFS frontier.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult};

/// Unbounded FIFO queue.
#[derive(Debug, Clone, Default)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item.
    pub fn dequeue(&mut self) -> GraphResult<T> {
        self.items.pop_front().ok_or(GraphError::EmptyQueue)
    }

    /// Borrow the front item without removing it.
    pub fn peek_front(&self) -> GraphResult<&T> {
        self.items.front().ok_or(GraphError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
