#![forbid(unsafe_code)]

//! Layout engine: render rank and column for every node.
//!
//! # Rank
//!
//! Preorder depth-first walk from the root, children oldest-first. The
//! 1-based visit counter is the rank, so the root is rank 1 and the most
//! recent fork of any subtree owns the highest rank range in it.
//!
//! # Column
//!
//! Carried from parent to child during the same walk:
//!
//! - the last child (the trunk) keeps its parent's column;
//! - every other child opens a fresh column, one past the highest column
//!   opened so far. Columns are never reused.
//!
//! A fresh column closes on its parent's row. Column 1 carries the root's
//! trunk and never closes.

use crate::tree::{ColumnSpan, NodeId, RankTable, Tree};

#[derive(Debug, Clone, Copy)]
enum Column {
    Inherit(usize),
    Fresh,
}

/// Assign `rank` and `depth` to every node of `tree` in place.
///
/// Re-running on an already laid-out tree yields identical assignments.
pub fn layout(tree: &mut Tree) {
    let span = crate::debug_span!("undograph.layout", total = tree.total());
    let _guard = span.enter();

    let total = tree.total();
    let mut by_rank = Vec::with_capacity(total);
    let mut ranks = RankTable::with_capacity(total);
    let mut spans: Vec<ColumnSpan> = Vec::new();

    let mut stack: Vec<(NodeId, Column)> = vec![(tree.root(), Column::Fresh)];

    while let Some((id, column)) = stack.pop() {
        let seq = tree.nodes[id.index()].seq;
        let rank = ranks.push(seq);
        by_rank.push(id);

        let depth = match column {
            Column::Inherit(depth) => {
                spans[depth - 1].top_rank = rank;
                depth
            }
            Column::Fresh => {
                let closes_at = tree.nodes[id.index()]
                    .parent
                    .map(|p| tree.nodes[p.index()].rank);
                spans.push(ColumnSpan {
                    column: spans.len() + 1,
                    opened_by: seq,
                    top_rank: rank,
                    closes_at,
                });
                crate::trace!(column = spans.len(), seq, rank, "column opened");
                spans.len()
            }
        };

        let node = &mut tree.nodes[id.index()];
        node.rank = rank;
        node.depth = depth;

        // Pushed newest-first so the oldest child is popped (visited) first.
        // Fresh columns are resolved at visit time, after every earlier
        // sibling's subtree has opened its own columns.
        let mut children = node.children.iter().rev();
        if let Some(&trunk) = children.next() {
            stack.push((trunk, Column::Inherit(depth)));
        }
        for &child in children {
            stack.push((child, Column::Fresh));
        }
    }

    crate::debug!(total, columns = spans.len(), "layout complete");

    tree.by_rank = by_rank;
    tree.ranks = ranks;
    tree.spans = spans;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;
    use crate::record::RawRecord;

    fn laid_out(records: &[RawRecord]) -> Tree {
        let mut tree = ingest(records).unwrap();
        layout(&mut tree);
        tree
    }

    fn rank_depth(tree: &Tree, seq: u64) -> (usize, usize) {
        let node = tree.node(tree.find(seq).unwrap());
        (node.rank(), node.depth())
    }

    #[test]
    fn root_only() {
        let tree = laid_out(&[]);
        assert!(tree.is_laid_out());
        assert_eq!(rank_depth(&tree, 0), (1, 1));
        assert_eq!(tree.width(), 1);
        assert_eq!(tree.spans()[0].closes_at, None);
    }

    #[test]
    fn linear_chain_stays_in_one_column() {
        let tree = laid_out(&[RawRecord::new(1, 0), RawRecord::new(2, 1).current()]);
        assert_eq!(rank_depth(&tree, 0), (1, 1));
        assert_eq!(rank_depth(&tree, 1), (2, 1));
        assert_eq!(rank_depth(&tree, 2), (3, 1));
        assert_eq!(tree.width(), 1);
        assert_eq!(tree.spans()[0].top_rank, 3);
    }

    #[test]
    fn single_fork_opens_column_for_older_child() {
        let tree = laid_out(&[
            RawRecord::new(1, 0),
            RawRecord::new(2, 1),
            RawRecord::new(3, 1).current(),
        ]);
        assert_eq!(rank_depth(&tree, 1), (2, 1));
        assert_eq!(rank_depth(&tree, 2), (3, 2));
        assert_eq!(rank_depth(&tree, 3), (4, 1));
        assert_eq!(
            tree.spans()[1],
            ColumnSpan {
                column: 2,
                opened_by: 2,
                top_rank: 3,
                closes_at: Some(2),
            }
        );
    }

    #[test]
    fn later_sibling_column_follows_earlier_subtree_columns() {
        // 0 -> {1, 4, 6}; 1 -> {2, 3}
        let tree = laid_out(&[
            RawRecord::new(1, 0),
            RawRecord::new(2, 1),
            RawRecord::new(3, 1),
            RawRecord::new(4, 0),
            RawRecord::new(5, 4),
            RawRecord::new(6, 0),
        ]);
        assert_eq!(rank_depth(&tree, 1), (2, 2));
        assert_eq!(rank_depth(&tree, 2), (3, 3));
        assert_eq!(rank_depth(&tree, 3), (4, 2));
        assert_eq!(rank_depth(&tree, 4), (5, 4));
        assert_eq!(rank_depth(&tree, 5), (6, 4));
        assert_eq!(rank_depth(&tree, 6), (7, 1));
        assert_eq!(tree.width(), 4);
        assert_eq!(tree.spans()[3].closes_at, Some(1));
        assert_eq!(tree.spans()[3].top_rank, 6);
    }

    #[test]
    fn single_child_passes_column_through() {
        // 0 -> {1, 3}; 1 -> 2 (only child stays in the branch column)
        let tree = laid_out(&[
            RawRecord::new(1, 0),
            RawRecord::new(2, 1),
            RawRecord::new(3, 0),
        ]);
        assert_eq!(rank_depth(&tree, 1).1, 2);
        assert_eq!(rank_depth(&tree, 2).1, 2);
        assert_eq!(rank_depth(&tree, 3).1, 1);
    }

    #[test]
    fn rank_table_matches_nodes() {
        let tree = laid_out(&[
            RawRecord::new(1, 0),
            RawRecord::new(2, 1),
            RawRecord::new(3, 1),
        ]);
        let ranks = tree.ranks();
        assert_eq!(ranks.len(), 4);
        for (rank, seq) in ranks.iter() {
            assert_eq!(ranks.rank_for_seq(seq), Some(rank));
            assert_eq!(tree.node(tree.at_rank(rank).unwrap()).seq(), seq);
        }
        assert_eq!(ranks.seq_for_rank(0), None);
        assert_eq!(ranks.seq_for_rank(5), None);
    }

    #[test]
    fn layout_is_idempotent() {
        let mut tree = laid_out(&[
            RawRecord::new(1, 0),
            RawRecord::new(2, 1),
            RawRecord::new(3, 1),
            RawRecord::new(4, 2),
        ]);
        let before: Vec<_> = tree.nodes().map(|(_, n)| (n.rank(), n.depth())).collect();
        let spans = tree.spans().to_vec();
        layout(&mut tree);
        let after: Vec<_> = tree.nodes().map(|(_, n)| (n.rank(), n.depth())).collect();
        assert_eq!(before, after);
        assert_eq!(spans, tree.spans());
    }

    #[test]
    fn deep_history_does_not_recurse() {
        let records: Vec<_> = (1..=50_000).map(|s| RawRecord::new(s, s - 1)).collect();
        let tree = laid_out(&records);
        assert_eq!(rank_depth(&tree, 50_000), (50_001, 1));
    }
}
