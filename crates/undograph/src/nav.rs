#![forbid(unsafe_code)]

//! Cursor navigation over a rendered snapshot.
//!
//! The navigator owns only a cursor rank. Everything it reports back is a
//! plain [`Action`] that the host applies to its own window and buffer.

use crate::snapshot::Snapshot;

/// User-level navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One node up the screen (next higher rank).
    Up,
    /// One node down the screen (next lower rank).
    Down,
    /// Topmost node.
    Top,
    /// Root.
    Bottom,
    /// Parent of the node under the cursor.
    Parent,
    /// Node the host buffer currently reflects.
    JumpToCurrent,
    /// Node with the given sequence number, if retained.
    JumpToSeq(u64),
    /// The host cursor moved to a line; follow it to the nearest node row.
    SyncToLine(usize),
    /// Make the node under the cursor the host's current state.
    Select,
}

/// What the host should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed.
    Stay,
    /// Place the host cursor on `line`, which shows `seq`.
    MoveCursor { line: usize, seq: u64 },
    /// Switch the host buffer to `seq`.
    ApplyState { seq: u64 },
}

#[derive(Debug, Clone)]
pub struct Navigator {
    snapshot: Snapshot,
    cursor: usize,
}

impl Navigator {
    /// Cursor starts on the current node.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let cursor = current_rank(&snapshot);
        Self { snapshot, cursor }
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Swap in a rebuilt snapshot. The cursor stays on the same node when it
    /// survived the rebuild, otherwise it moves to the current node.
    pub fn refresh(&mut self, snapshot: Snapshot) {
        let seq = self.cursor_seq();
        self.cursor = seq
            .and_then(|seq| snapshot.output().seq_to_rank(seq))
            .unwrap_or_else(|| current_rank(&snapshot));
        self.snapshot = snapshot;
    }

    #[must_use]
    pub fn cursor_rank(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn cursor_seq(&self) -> Option<u64> {
        self.snapshot.output().rank_to_seq(self.cursor)
    }

    #[must_use]
    pub fn cursor_line(&self) -> Option<usize> {
        let output = self.snapshot.output();
        output.style().line_of_rank(output.total(), self.cursor)
    }

    pub fn dispatch(&mut self, command: Command) -> Action {
        let total = self.snapshot.output().total();
        let target = match command {
            Command::Up => Some((self.cursor + 1).min(total)),
            Command::Down => Some(self.cursor.saturating_sub(1).max(1)),
            Command::Top => Some(total),
            Command::Bottom => Some(1),
            Command::Parent => self.parent_rank(),
            Command::JumpToCurrent => Some(current_rank(&self.snapshot)),
            Command::JumpToSeq(seq) => self.snapshot.output().seq_to_rank(seq),
            Command::SyncToLine(line) => {
                let output = self.snapshot.output();
                output.style().nearest_rank(output.total(), line)
            }
            Command::Select => return self.select(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?command, cursor = self.cursor, ?target, "navigate");

        match target {
            Some(rank) if rank != self.cursor => self.move_to(rank),
            _ => Action::Stay,
        }
    }

    fn select(&self) -> Action {
        let tree = self.snapshot.tree();
        match self.cursor_seq() {
            Some(seq) if seq != tree.current_seq() => Action::ApplyState { seq },
            _ => Action::Stay,
        }
    }

    fn parent_rank(&self) -> Option<usize> {
        let tree = self.snapshot.tree();
        let id = tree.at_rank(self.cursor)?;
        let parent = tree.parent_of(id)?;
        Some(tree.node(parent).rank())
    }

    fn move_to(&mut self, rank: usize) -> Action {
        let output = self.snapshot.output();
        let (Some(seq), Some(line)) = (
            output.rank_to_seq(rank),
            output.style().line_of_rank(output.total(), rank),
        ) else {
            return Action::Stay;
        };
        self.cursor = rank;
        Action::MoveCursor { line, seq }
    }
}

fn current_rank(snapshot: &Snapshot) -> usize {
    let tree = snapshot.tree();
    tree.node(tree.current()).rank()
}
