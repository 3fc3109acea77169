//! Open-node container for the search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::config::NodeSelection;
use crate::model::PartialAssignment;

/// Heap entry: larger parent bound first, newer node on ties.
pub(crate) struct QueuedNode {
    node: PartialAssignment,
    seq: u64,
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedNode {}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .parent_bound()
            .total_cmp(&other.node.parent_bound())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Open nodes of the search tree, ordered by the configured strategy.
pub(crate) enum Frontier {
    Stack(Vec<PartialAssignment>),
    Heap {
        heap: BinaryHeap<QueuedNode>,
        next_seq: u64,
    },
}

impl Frontier {
    pub(crate) fn new(selection: NodeSelection) -> Self {
        match selection {
            NodeSelection::DepthFirst => Frontier::Stack(Vec::new()),
            NodeSelection::BestBound => Frontier::Heap {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        }
    }

    pub(crate) fn push(&mut self, node: PartialAssignment) {
        match self {
            Frontier::Stack(stack) => stack.push(node),
            Frontier::Heap { heap, next_seq } => {
                heap.push(QueuedNode {
                    node,
                    seq: *next_seq,
                });
                *next_seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<PartialAssignment> {
        match self {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Heap { heap, .. } => heap.pop().map(|q| q.node),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Stack(stack) => stack.len(),
            Frontier::Heap { heap, .. } => heap.len(),
        }
    }
}
