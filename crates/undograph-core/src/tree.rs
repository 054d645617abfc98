#![forbid(unsafe_code)]

//! Arena-backed history tree.
//!
//! Nodes live in a flat `Vec` ordered by ascending `seq`; parent and child
//! links are [`NodeId`] indices. Rank and depth are zero until
//! [`layout`](crate::layout::layout) assigns them.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One historical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) seq: u64,
    pub(crate) parent: Option<NodeId>,
    /// Children, ascending by `seq`.
    pub(crate) children: SmallVec<[NodeId; 2]>,
    pub(crate) rank: usize,
    pub(crate) depth: usize,
    pub(crate) is_current: bool,
    pub(crate) time: Option<i64>,
    pub(crate) save: Option<u32>,
}

impl Node {
    pub(crate) fn new(seq: u64) -> Self {
        Self {
            seq,
            parent: None,
            children: SmallVec::new(),
            rank: 0,
            depth: 0,
            is_current: false,
            time: None,
            save: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct descendants, oldest first.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Render rank in `1..=total`, or 0 before layout.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Render column (1-based), or 0 before layout.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> Option<i64> {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn save(&self) -> Option<u32> {
        self.save
    }
}

/// Rows occupied by one column of the rendered graph.
///
/// A column is opened by a non-trunk child and stays open from its
/// topmost node down to the row of the node it forked from, where it
/// closes. Column 1 belongs to the root's trunk and never closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    /// 1-based column index.
    pub column: usize,
    /// Seq of the node that opened the column.
    pub opened_by: u64,
    /// Highest rank drawn in this column.
    pub top_rank: usize,
    /// Rank of the row where the column joins its parent column.
    pub closes_at: Option<usize>,
}

impl ColumnSpan {
    /// Whether a vertical line runs in this column across the given rank.
    #[must_use]
    pub fn covers(&self, rank: usize) -> bool {
        let bottom = self.closes_at.unwrap_or(1);
        rank >= bottom && rank <= self.top_rank
    }
}

/// Rank ↔ seq lookup tables produced by layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankTable {
    /// `rank_to_seq[r - 1]` is the seq at rank `r`.
    rank_to_seq: Vec<u64>,
    seq_to_rank: FxHashMap<u64, usize>,
}

impl RankTable {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            rank_to_seq: Vec::with_capacity(cap),
            seq_to_rank: FxHashMap::with_capacity_and_hasher(cap, Default::default()),
        }
    }

    pub(crate) fn push(&mut self, seq: u64) -> usize {
        self.rank_to_seq.push(seq);
        let rank = self.rank_to_seq.len();
        self.seq_to_rank.insert(seq, rank);
        rank
    }

    /// Seq at the given 1-based rank.
    #[must_use]
    pub fn seq_for_rank(&self, rank: usize) -> Option<u64> {
        rank.checked_sub(1)
            .and_then(|i| self.rank_to_seq.get(i))
            .copied()
    }

    /// Rank of the given seq.
    #[must_use]
    pub fn rank_for_seq(&self, seq: u64) -> Option<usize> {
        self.seq_to_rank.get(&seq).copied()
    }

    /// Number of ranked nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rank_to_seq.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rank_to_seq.is_empty()
    }

    /// `(rank, seq)` pairs in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.rank_to_seq
            .iter()
            .enumerate()
            .map(|(i, &seq)| (i + 1, seq))
    }
}

/// The normalized history tree.
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) by_seq: FxHashMap<u64, NodeId>,
    pub(crate) current: NodeId,
    /// Node ids indexed by `rank - 1`; empty before layout.
    pub(crate) by_rank: Vec<NodeId>,
    pub(crate) ranks: RankTable,
    pub(crate) spans: Vec<ColumnSpan>,
}

impl Tree {
    /// The root node (seq 0). Always present.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of retained nodes.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> NodeId {
        self.current
    }

    #[must_use]
    pub fn current_seq(&self) -> u64 {
        self.nodes[self.current.index()].seq
    }

    /// Look up a node. Panics on an id from a different tree.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn find(&self, seq: u64) -> Option<NodeId> {
        self.by_seq.get(&seq).copied()
    }

    /// All nodes in ascending seq order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Highest seq still retained.
    #[must_use]
    pub fn max_seq(&self) -> u64 {
        self.nodes.last().map_or(0, |n| n.seq)
    }

    /// Whether rank and depth have been assigned.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.by_rank.len() == self.nodes.len()
    }

    /// Node at a 1-based rank, after layout.
    #[must_use]
    pub fn at_rank(&self, rank: usize) -> Option<NodeId> {
        rank.checked_sub(1).and_then(|i| self.by_rank.get(i)).copied()
    }

    /// Rank ↔ seq tables, after layout.
    #[must_use]
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// Column spans indexed by `column - 1`, after layout.
    #[must_use]
    pub fn spans(&self) -> &[ColumnSpan] {
        &self.spans
    }

    /// Number of columns the layout uses.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.len()
    }

    /// Parent of a node, if any.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }
}
