#![forbid(unsafe_code)]

//! History ingest: raw host records to a validated [`Tree`].

use rustc_hash::FxHashMap;

use crate::error::{Error, Malformed, Result};
use crate::record::RawRecord;
use crate::tree::{Node, NodeId, RankTable, Tree};

/// Build a tree from an unordered snapshot of host records.
///
/// The root (seq 0) is synthesized when the host omits it, so an empty
/// snapshot yields a one-node tree. Gaps in `seq` left by capacity
/// eviction are accepted. The host data is never mutated.
///
/// # Errors
///
/// Returns [`Error::MalformedHistory`] for duplicate seqs, dangling or
/// missing parents, a root with a parent, parent cycles, or more than one
/// record flagged current.
pub fn ingest(records: &[RawRecord]) -> Result<Tree> {
    let span = crate::debug_span!("undograph.ingest", records = records.len());
    let _guard = span.enter();

    let mut sorted: Vec<&RawRecord> = records.iter().collect();
    sorted.sort_unstable_by_key(|r| r.seq);

    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].seq == pair[1].seq) {
        return Err(Malformed::DuplicateSeq { seq: pair[0].seq }.into());
    }

    let has_root = sorted.first().is_some_and(|r| r.seq == 0);
    let mut nodes = Vec::with_capacity(sorted.len() + usize::from(!has_root));
    let mut by_seq =
        FxHashMap::with_capacity_and_hasher(nodes.capacity(), Default::default());

    if !has_root {
        crate::debug!("root not in snapshot; synthesizing seq 0");
        nodes.push(Node::new(0));
        by_seq.insert(0, NodeId(0));
    }

    let mut current: Option<u64> = None;
    for rec in &sorted {
        if rec.is_current {
            if let Some(first) = current {
                return Err(Malformed::MultipleCurrent {
                    first,
                    second: rec.seq,
                }
                .into());
            }
            current = Some(rec.seq);
        }
        by_seq.insert(rec.seq, NodeId(nodes.len() as u32));
        let mut node = Node::new(rec.seq);
        node.is_current = rec.is_current;
        node.time = rec.time;
        node.save = rec.save;
        nodes.push(node);
    }

    if nodes.is_empty() {
        return Err(Error::EmptyHistory);
    }

    // Records are visited in ascending seq, so every child list comes out
    // sorted oldest-first and stays that way for the rest of the pipeline.
    for rec in &sorted {
        let id = by_seq[&rec.seq];
        match (rec.seq, rec.parent_seq) {
            (0, None) => {}
            (0, Some(parent)) => return Err(Malformed::RootHasParent { parent }.into()),
            (seq, None) => return Err(Malformed::MissingParent { seq }.into()),
            (seq, Some(parent)) => {
                let Some(&pid) = by_seq.get(&parent) else {
                    return Err(Malformed::DanglingParent { seq, parent }.into());
                };
                nodes[id.index()].parent = Some(pid);
                nodes[pid.index()].children.push(id);
            }
        }
    }

    check_reachable(&nodes)?;

    let current = match current {
        Some(seq) => by_seq[&seq],
        None => {
            crate::debug!("no record flagged current; defaulting to root");
            nodes[0].is_current = true;
            NodeId(0)
        }
    };

    crate::trace!(
        total = nodes.len(),
        current = nodes[current.index()].seq,
        "history ingested"
    );

    Ok(Tree {
        nodes,
        by_seq,
        current,
        by_rank: Vec::new(),
        ranks: RankTable::default(),
        spans: Vec::new(),
    })
}

/// Every node must be reachable from the root; anything left over sits on
/// a parent cycle.
fn check_reachable(nodes: &[Node]) -> Result<()> {
    let mut seen = vec![false; nodes.len()];
    let mut stack = vec![NodeId(0)];
    let mut reached = 0usize;

    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut seen[id.index()], true) {
            continue;
        }
        reached += 1;
        stack.extend(nodes[id.index()].children.iter().copied());
    }

    if reached == nodes.len() {
        return Ok(());
    }
    match seen.iter().position(|&s| !s) {
        Some(i) => Err(Malformed::Cycle {
            seq: cycle_member(nodes, NodeId(i as u32)),
        }
        .into()),
        None => Ok(()),
    }
}

/// Smallest seq on the parent cycle that `start` hangs off.
///
/// `start` must be unreachable from the root, so its parent chain never
/// ends and eventually revisits a node.
fn cycle_member(nodes: &[Node], start: NodeId) -> u64 {
    let mut on_path = vec![false; nodes.len()];
    let mut id = start;
    while !std::mem::replace(&mut on_path[id.index()], true) {
        match nodes[id.index()].parent {
            Some(parent) => id = parent,
            None => return nodes[id.index()].seq,
        }
    }

    let entry = id;
    let mut smallest = nodes[entry.index()].seq;
    while let Some(parent) = nodes[id.index()].parent {
        if parent == entry {
            break;
        }
        smallest = smallest.min(nodes[parent.index()].seq);
        id = parent;
    }
    smallest
}
