//! Editor View Model
//!
//! Pre-computes the header and the visible lines of each pane. Change
//! markers are computed from the widget's text so they follow keystrokes
//! immediately, before the debounced commit reaches `EditorState`.

use crate::editor::{inline_lines, line_marks, LineTag, TextPane};
use crate::state::{AppState, Side, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLine {
    /// 1-based line number in its buffer
    pub number: Option<usize>,
    pub text: String,
    pub tag: LineTag,
    /// Column of the cursor when it sits on this line
    pub cursor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneViewModel {
    pub title: String,
    pub focused: bool,
    pub lines: Vec<PaneLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorViewModel {
    pub route: String,
    pub language: String,
    pub view_mode: &'static str,
    /// Short flags shown in the header (loading, saving, update availability)
    pub flags: Vec<String>,
    pub added: usize,
    pub removed: usize,
    pub panes: Vec<PaneViewModel>,
}

/// Tabs become a single space so cursor columns stay aligned with characters
fn display_text(line: &str) -> String {
    line.trim_end_matches('\r').replace('\t', " ")
}

fn split_pane(
    side: Side,
    pane: &TextPane,
    changed: impl Fn(usize) -> bool,
    focused: bool,
    height: usize,
) -> PaneViewModel {
    let (row, col) = pane.cursor();
    let tag = match side {
        Side::Before => LineTag::Removed,
        Side::After => LineTag::Added,
    };
    let lines = pane
        .lines()
        .iter()
        .enumerate()
        .skip(pane.scroll())
        .take(height.max(1))
        .map(|(index, text)| PaneLine {
            number: Some(index + 1),
            text: display_text(text),
            tag: if changed(index) { tag } else { LineTag::Equal },
            cursor: (focused && index == row).then_some(col),
        })
        .collect();

    PaneViewModel {
        title: side.label().to_string(),
        focused,
        lines,
    }
}

fn inline_pane(state: &AppState, height: usize) -> PaneViewModel {
    let focus = state.widget.focus;
    let before = state.widget.pane(Side::Before).text();
    let after = state.widget.pane(Side::After).text();
    let (row, col) = state.widget.pane(focus).cursor();

    let line_of = |line: &crate::editor::InlineLine| match focus {
        Side::Before => line.before_line,
        Side::After => line.after_line,
    };

    let mut lines: Vec<PaneLine> = inline_lines(&before, &after)
        .into_iter()
        .map(|line| PaneLine {
            number: line.after_line.or(line.before_line).map(|n| n + 1),
            text: display_text(&line.text),
            tag: line.tag,
            cursor: (line_of(&line) == Some(row)).then_some(col),
        })
        .collect();

    // The empty line after a trailing newline has no diff row of its own
    if !lines.iter().any(|l| l.cursor.is_some()) {
        lines.push(PaneLine {
            number: Some(row + 1),
            text: String::new(),
            tag: LineTag::Equal,
            cursor: Some(col),
        });
    }

    let cursor_index = lines.iter().position(|l| l.cursor.is_some()).unwrap_or(0);
    let height = height.max(1);
    let start = (cursor_index + 1).saturating_sub(height);

    PaneViewModel {
        title: format!("Inline · editing {}", focus.label()),
        focused: true,
        lines: lines.into_iter().skip(start).take(height).collect(),
    }
}

impl EditorViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let editor = &state.editor;
        let widget = &state.widget;
        let height = widget.layout.pane_height as usize;

        let before = widget.pane(Side::Before).text();
        let after = widget.pane(Side::After).text();
        let marks = line_marks(&before, &after);
        let (removed, added) = marks.changed_count();

        let panes = match editor.view_mode {
            ViewMode::Split => vec![
                split_pane(
                    Side::Before,
                    widget.pane(Side::Before),
                    |i| marks.before_changed(i),
                    widget.focus == Side::Before,
                    height,
                ),
                split_pane(
                    Side::After,
                    widget.pane(Side::After),
                    |i| marks.after_changed(i),
                    widget.focus == Side::After,
                    height,
                ),
            ],
            ViewMode::Inline => vec![inline_pane(state, height)],
        };

        let mut flags = Vec::new();
        if let Some(id) = &state.resource.loading {
            flags.push(format!("loading {}", id));
        }
        if state.resource.saving.is_some() {
            flags.push("saving".to_string());
        }
        if editor.show_update_button {
            flags.push("Ctrl+U update".to_string());
        }
        if state.resource.meta.as_ref().is_some_and(|m| !m.is_active) {
            flags.push("inactive".to_string());
        }

        Self {
            route: state.route.path(),
            language: format!("{} ({})", editor.language, editor.syntax_mode().label()),
            view_mode: match editor.view_mode {
                ViewMode::Split => "Split",
                ViewMode::Inline => "Inline",
            },
            flags,
            added,
            removed,
            panes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, WidgetAction};
    use crate::reducers::app_reducer::reduce;
    use pretty_assertions::assert_eq;

    fn state_with(before: &str, after: &str) -> AppState {
        let state = AppState::default();
        let state = reduce(
            state,
            &Action::Widget(WidgetAction::SetValue {
                side: Side::Before,
                text: before.to_string(),
            }),
        );
        reduce(
            state,
            &Action::Widget(WidgetAction::SetValue {
                side: Side::After,
                text: after.to_string(),
            }),
        )
    }

    #[test]
    fn test_split_marks_changed_lines() {
        let vm = EditorViewModel::from_state(&state_with("a\nb", "a\nc"));
        assert_eq!(vm.panes.len(), 2);
        assert_eq!(vm.panes[0].lines[1].tag, LineTag::Removed);
        assert_eq!(vm.panes[1].lines[1].tag, LineTag::Added);
        assert_eq!(vm.panes[0].lines[0].tag, LineTag::Equal);
        assert_eq!((vm.added, vm.removed), (1, 1));
        // Cursor is drawn in the focused pane only
        assert_eq!(vm.panes[0].lines[0].cursor, Some(0));
        assert_eq!(vm.panes[1].lines[0].cursor, None);
    }

    #[test]
    fn test_inline_interleaves_lines() {
        let mut state = state_with("a\nb", "a\nc");
        state.editor.view_mode = ViewMode::Inline;
        let vm = EditorViewModel::from_state(&state);

        assert_eq!(vm.panes.len(), 1);
        let tags: Vec<_> = vm.panes[0].lines.iter().map(|l| l.tag).collect();
        assert_eq!(tags, vec![LineTag::Equal, LineTag::Removed, LineTag::Added]);
    }

    #[test]
    fn test_unknown_language_label() {
        let mut state = AppState::default();
        state.editor.set_language("brainfuck");
        let vm = EditorViewModel::from_state(&state);
        assert_eq!(vm.language, "brainfuck (Plain Text)");
    }

    #[test]
    fn test_tabs_and_carriage_returns_are_normalized() {
        assert_eq!(display_text("\tx\r"), " x");
    }
}
