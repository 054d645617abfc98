#![forbid(unsafe_code)]

//! Node labels appended after the graph.
//!
//! Labels start one column past the widest graph line so they line up.
//! Connector rows are left as they are.

use undograph_core::{Node, Tree};
use unicode_width::UnicodeWidthStr;

use crate::render::RenderOutput;

/// What to put in each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOptions {
    /// Show the node's age relative to `now`.
    pub relative_time: bool,
    /// Mark saved states.
    pub show_saves: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            relative_time: true,
            show_saves: true,
        }
    }
}

/// Label text for one node, e.g. `[12] 3 mins ago (saved)`.
#[must_use]
pub fn node_label(node: &Node, opts: &LabelOptions, now: i64) -> String {
    let mut label = format!("[{}]", node.seq());
    if node.seq() == 0 {
        label.push_str(" original");
    } else if opts.relative_time
        && let Some(time) = node.time()
    {
        label.push(' ');
        label.push_str(&relative_time(now.saturating_sub(time)));
    }
    if opts.show_saves && node.save().is_some() {
        label.push_str(" (saved)");
    }
    label
}

/// Human-readable age for a number of elapsed seconds.
#[must_use]
pub fn relative_time(elapsed: i64) -> String {
    const UNITS: [(i64, &str); 4] = [(86_400, "day"), (3_600, "hour"), (60, "min"), (1, "sec")];

    if elapsed < 1 {
        return "just now".to_string();
    }
    let (size, unit) = UNITS
        .iter()
        .copied()
        .find(|&(size, _)| elapsed >= size)
        .unwrap_or((1, "sec"));
    let count = elapsed / size;
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Graph lines with a label on every node row.
#[must_use]
pub fn annotate(tree: &Tree, output: &RenderOutput, opts: &LabelOptions, now: i64) -> Vec<String> {
    let style = output.style();
    let total = output.total();
    let column = output
        .lines()
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0)
        + 2;

    output
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let node = style
                .rank_of_line(total, index)
                .and_then(|rank| tree.at_rank(rank))
                .map(|id| tree.node(id));
            match node {
                Some(node) => {
                    let pad = column - line.width();
                    format!("{line}{:pad$}{}", "", node_label(node, opts, now))
                }
                None => line.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::style::GraphStyle;
    use undograph_core::{RawRecord, ingest, layout};

    #[test]
    fn relative_time_units() {
        assert_eq!(relative_time(-5), "just now");
        assert_eq!(relative_time(0), "just now");
        assert_eq!(relative_time(1), "1 sec ago");
        assert_eq!(relative_time(59), "59 secs ago");
        assert_eq!(relative_time(60), "1 min ago");
        assert_eq!(relative_time(7_199), "1 hour ago");
        assert_eq!(relative_time(7_200), "2 hours ago");
        assert_eq!(relative_time(3 * 86_400 + 10), "3 days ago");
    }

    #[test]
    fn labels_align_past_widest_line() {
        let records = [
            RawRecord::new(1, 0).with_time(100),
            RawRecord::new(2, 1).with_time(160).with_save(1),
            RawRecord::new(3, 1).with_time(190).current(),
        ];
        let mut tree = ingest(&records).unwrap();
        layout(&mut tree);

        let out = render(&tree, GraphStyle::Compact).unwrap();
        let lines = annotate(&tree, &out, &LabelOptions::default(), 200);
        assert_eq!(
            lines,
            [
                "●    [3] 10 secs ago",
                "├─●  [2] 40 secs ago (saved)",
                "●    [1] 1 min ago",
                "●    [0] original",
            ]
        );

        let out = render(&tree, GraphStyle::Spaced).unwrap();
        let lines = annotate(&tree, &out, &LabelOptions::default(), 200);
        assert_eq!(lines[1], "│");
        assert_eq!(lines[3], "├─╯");
        assert_eq!(lines[2], "│ ●  [2] 40 secs ago (saved)");
    }

    #[test]
    fn labels_without_time() {
        let mut tree = ingest(&[RawRecord::new(4, 0).with_time(1)]).unwrap();
        layout(&mut tree);
        let out = render(&tree, GraphStyle::Compact).unwrap();
        let opts = LabelOptions {
            relative_time: false,
            show_saves: false,
        };
        assert_eq!(annotate(&tree, &out, &opts, 50), ["●  [4]", "●  [0] original"]);
    }
}
