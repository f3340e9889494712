//! Snake body - ordered segments, head first

use std::collections::VecDeque;

use crate::types::Position;

/// Snake body. Index 0 is the head; the back of the deque is the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Build a snake from segments, head first.
    pub fn new(segments: impl IntoIterator<Item = Position>) -> Self {
        Self {
            body: segments.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Linear membership test against every segment
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn segment(&self, index: usize) -> Option<Position> {
        self.body.get(index).copied()
    }

    /// Index of the first segment at `pos`, counting from the head
    pub fn segment_index(&self, pos: Position) -> Option<usize> {
        self.body.iter().position(|&seg| seg == pos)
    }

    pub(crate) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }
}
