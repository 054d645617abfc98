//! Literal render fixtures for representative histories.

use undograph_core::{Error, Malformed, RawRecord, Tree, ingest, layout};
use undograph_render::{GraphStyle, render};

fn laid_out(records: &[RawRecord]) -> Tree {
    let mut tree = ingest(records).unwrap();
    layout(&mut tree);
    tree
}

fn lines(tree: &Tree, style: GraphStyle) -> Vec<String> {
    render(tree, style).unwrap().into_lines()
}

// ============================================================================
// Linear history
// ============================================================================

#[test]
fn linear_history_compact() {
    let tree = laid_out(&[RawRecord::new(1, 0), RawRecord::new(2, 1).current()]);
    let out = render(&tree, GraphStyle::Compact).unwrap();
    assert_eq!(out.lines(), ["●", "●", "●"]);
    assert_eq!(out.rank_to_seq(3), Some(2));
    assert_eq!(out.rank_to_seq(2), Some(1));
    assert_eq!(out.rank_to_seq(1), Some(0));
    assert_eq!(out.highlight().line, 0);
}

#[test]
fn linear_history_spaced() {
    let tree = laid_out(&[RawRecord::new(1, 0), RawRecord::new(2, 1).current()]);
    assert_eq!(lines(&tree, GraphStyle::Spaced), ["●", "│", "●", "│", "●"]);
}

// ============================================================================
// Single fork
// ============================================================================

#[test]
fn single_fork_compact() {
    let tree = laid_out(&[
        RawRecord::new(1, 0),
        RawRecord::new(2, 1),
        RawRecord::new(3, 1).current(),
    ]);
    let two = tree.node(tree.find(2).unwrap());
    let three = tree.node(tree.find(3).unwrap());
    assert_eq!((two.rank(), two.depth()), (3, 2));
    assert_eq!((three.rank(), three.depth()), (4, 1));
    assert_eq!(tree.spans()[1].closes_at, Some(2));

    let out = render(&tree, GraphStyle::Compact).unwrap();
    assert_eq!(out.lines(), ["●", "├─●", "●", "●"]);
    assert_eq!(out.seq_at_line(0), Some(3));
    assert_eq!(out.seq_at_line(1), Some(2));
}

// ============================================================================
// Malformed and empty input
// ============================================================================

#[test]
fn dangling_parent_fails_ingest() {
    let err = ingest(&[RawRecord::new(1, 0), RawRecord::new(5, 3)]).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedHistory(Malformed::DanglingParent { seq: 5, parent: 3 })
    ));
}

#[test]
fn empty_history_renders_root_only() {
    let tree = laid_out(&[]);
    assert_eq!(tree.total(), 1);
    for style in [GraphStyle::Spaced, GraphStyle::Compact] {
        let out = render(&tree, style).unwrap();
        assert_eq!(out.lines(), ["●"]);
        assert_eq!(out.highlight().line, 0);
        assert_eq!((out.highlight().start, out.highlight().end), (0, 1));
    }
}

// ============================================================================
// Eviction gaps
// ============================================================================

#[test]
fn eviction_gap_history() {
    let tree = laid_out(&[
        RawRecord::root(),
        RawRecord::new(13, 0),
        RawRecord::new(14, 13),
        RawRecord::new(15, 14),
        RawRecord::new(18, 15),
        RawRecord::new(19, 18).current(),
    ]);
    assert_eq!(tree.total(), 6);
    let out = render(&tree, GraphStyle::Compact).unwrap();
    assert_eq!(out.lines().len(), 6);
    assert_eq!(out.rank_to_seq(6), Some(19));
    assert_eq!(out.seq_to_rank(13), Some(2));
}

// ============================================================================
// Wider shapes
// ============================================================================

#[test]
fn branch_with_its_own_history() {
    // 0 -> 1 -> {2 -> 3 -> 4, 5}
    let tree = laid_out(&[
        RawRecord::new(1, 0),
        RawRecord::new(2, 1),
        RawRecord::new(3, 2),
        RawRecord::new(4, 3),
        RawRecord::new(5, 1).current(),
    ]);
    assert_eq!(
        lines(&tree, GraphStyle::Compact),
        ["●", "│ ●", "│ ●", "├─●", "●", "●"]
    );
    assert_eq!(
        lines(&tree, GraphStyle::Spaced),
        ["●", "│", "│ ●", "│ │", "│ ●", "│ │", "│ ●", "├─╯", "●", "│", "●"]
    );
}

#[test]
fn forks_at_every_level() {
    // 0 -> {1, 2}; 1 -> {3, 4}; 2 -> {5, 6}
    let tree = laid_out(&[
        RawRecord::new(1, 0),
        RawRecord::new(2, 0),
        RawRecord::new(3, 1),
        RawRecord::new(4, 1),
        RawRecord::new(5, 2),
        RawRecord::new(6, 2),
    ]);
    assert_eq!(
        lines(&tree, GraphStyle::Compact),
        ["●", "├─────●", "●", "│ ●", "│ ├─●", "├─●", "●"]
    );
}
