use std::collections::BinaryHeap;

/// Reference into the grid's flat cell array, ordered by `(score, seq)` for
/// use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) score: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest score first, and
        // among equal scores the earliest insertion.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open list with FIFO tie-breaking and O(1) membership.
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    queued: Vec<bool>,
    seq: u64,
}

impl Frontier {
    /// Frontier over `len` cells.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: vec![false; len],
            seq: 0,
        }
    }

    /// Queue `idx` with `score` unless it is already queued. Returns whether
    /// it was pushed.
    pub(crate) fn push(&mut self, idx: usize, score: i32) -> bool {
        if self.queued[idx] {
            return false;
        }
        self.queued[idx] = true;
        self.heap.push(NodeRef {
            idx,
            score,
            seq: self.seq,
        });
        self.seq += 1;
        true
    }

    /// Remove and return the lowest-(score, seq) entry.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let node = self.heap.pop()?;
        self.queued[node.idx] = false;
        Some(node.idx)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.queued[idx]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
