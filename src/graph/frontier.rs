//! Frontier containers and visited-state tracking
//!
//! The frontier discipline is what distinguishes the traversal algorithms:
//! a [`Stack`] yields depth-first order, a [`Queue`] breadth-first order and
//! a [`PriorityFrontier`] cheapest-first order.

use crate::graph::types::{Vertex, Weight};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Pending work for the traversal engine
pub trait Frontier<T> {
    /// Whether an item is marked visited when pushed (true) or when popped (false)
    const MARKS_ON_PUSH: bool;

    fn push(&mut self, item: T);

    /// Push a batch given in adjacency order, arranged so that the first
    /// item of the batch is the next one popped among them.
    fn push_batch(&mut self, batch: Vec<T>);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier
#[derive(Debug, Clone)]
pub struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack(Vec::new())
    }
}

impl<T> Frontier<T> for Stack<T> {
    const MARKS_ON_PUSH: bool = false;

    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn push_batch(&mut self, batch: Vec<T>) {
        self.0.extend(batch.into_iter().rev());
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// First-in-first-out frontier
#[derive(Debug, Clone)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue(VecDeque::new())
    }
}

impl<T> Frontier<T> for Queue<T> {
    // Marking on enqueue keeps shared neighbors from being queued twice
    const MARKS_ON_PUSH: bool = true;

    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn push_batch(&mut self, batch: Vec<T>) {
        self.0.extend(batch);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Min-heap entry ordered by priority, then by insertion sequence
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub priority: Weight,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Cheapest-first frontier; equal priorities pop in insertion order
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T, priority: Weight) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            seq,
            item,
        }));
    }

    pub fn pop(&mut self) -> Option<(T, Weight)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Vertices already processed, in the order they became visited.
///
/// A set belongs to one traversal unless the caller deliberately threads it
/// through several calls. Pre-inserting a vertex excludes it from the
/// traversals that follow.
#[derive(Debug, Clone, Serialize)]
pub struct VisitedSet<V> {
    #[serde(skip)]
    members: HashSet<V>,
    order: Vec<V>,
    halted: bool,
}

impl<V> Default for VisitedSet<V> {
    fn default() -> Self {
        VisitedSet {
            members: HashSet::new(),
            order: Vec::new(),
            halted: false,
        }
    }
}

impl<V: Vertex> VisitedSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a vertex; returns false if it was already visited
    pub fn insert(&mut self, vertex: V) -> bool {
        if !self.members.insert(vertex.clone()) {
            return false;
        }
        self.order.push(vertex);
        true
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.members.contains(vertex)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Vertices in visit order
    pub fn order(&self) -> &[V] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.order.iter()
    }

    pub fn into_order(self) -> Vec<V> {
        self.order
    }

    /// True if a visitor stopped a traversal over this set early
    pub fn halted(&self) -> bool {
        self.halted
    }

    pub(crate) fn mark_halted(&mut self) {
        self.halted = true;
    }
}

impl<'a, V> IntoIterator for &'a VisitedSet<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
