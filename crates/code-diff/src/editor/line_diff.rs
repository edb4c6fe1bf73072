//! Line-level change markers for rendering
//!
//! The diff itself comes from `similar`; this module only reshapes its
//! output into what the split and inline views draw.

use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    Equal,
    Removed,
    Added,
}

/// Changed-line flags for both buffers, indexed by line number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMarks {
    pub before: Vec<bool>,
    pub after: Vec<bool>,
}

impl LineMarks {
    pub fn before_changed(&self, line: usize) -> bool {
        self.before.get(line).copied().unwrap_or(false)
    }

    pub fn after_changed(&self, line: usize) -> bool {
        self.after.get(line).copied().unwrap_or(false)
    }

    pub fn changed_count(&self) -> (usize, usize) {
        (
            self.before.iter().filter(|c| **c).count(),
            self.after.iter().filter(|c| **c).count(),
        )
    }
}

/// One row of the unified (inline) presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineLine {
    pub tag: LineTag,
    pub text: String,
    pub before_line: Option<usize>,
    pub after_line: Option<usize>,
}

fn strip_eol(value: &str) -> String {
    value.trim_end_matches(['\n', '\r']).to_string()
}

pub fn line_marks(before: &str, after: &str) -> LineMarks {
    let diff = TextDiff::from_lines(before, after);
    let mut marks = LineMarks {
        before: vec![false; before.lines().count()],
        after: vec![false; after.lines().count()],
    };
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                if let Some(slot) = change.old_index().and_then(|i| marks.before.get_mut(i)) {
                    *slot = true;
                }
            }
            ChangeTag::Insert => {
                if let Some(slot) = change.new_index().and_then(|i| marks.after.get_mut(i)) {
                    *slot = true;
                }
            }
            ChangeTag::Equal => {}
        }
    }
    marks
}

pub fn inline_lines(before: &str, after: &str) -> Vec<InlineLine> {
    TextDiff::from_lines(before, after)
        .iter_all_changes()
        .map(|change| InlineLine {
            tag: match change.tag() {
                ChangeTag::Equal => LineTag::Equal,
                ChangeTag::Delete => LineTag::Removed,
                ChangeTag::Insert => LineTag::Added,
            },
            text: strip_eol(change.value()),
            before_line: change.old_index(),
            after_line: change.new_index(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_marks() {
        let marks = line_marks("a\nb\nc\n", "a\nB\nc\nd\n");
        assert_eq!(marks.before, vec![false, true, false]);
        assert_eq!(marks.after, vec![false, true, false, true]);
        assert_eq!(marks.changed_count(), (1, 2));
        assert!(!marks.after_changed(99));
    }

    #[test]
    fn test_identical_buffers_have_no_marks() {
        let marks = line_marks("same\n", "same\n");
        assert_eq!(marks.changed_count(), (0, 0));
    }

    #[test]
    fn test_inline_lines_order() {
        let lines = inline_lines("a\nb\n", "a\nc\n");
        let tags: Vec<_> = lines.iter().map(|l| (l.tag, l.text.as_str())).collect();
        assert_eq!(
            tags,
            vec![
                (LineTag::Equal, "a"),
                (LineTag::Removed, "b"),
                (LineTag::Added, "c"),
            ]
        );
        assert_eq!(lines[1].before_line, Some(1));
        assert_eq!(lines[2].after_line, Some(1));
    }
}
