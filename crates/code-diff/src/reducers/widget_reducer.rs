use crate::actions::WidgetAction;
use crate::editor::PaneLayout;
use crate::state::{EditorState, WidgetState};

pub fn reduce(mut state: WidgetState, action: &WidgetAction, editor: &EditorState) -> WidgetState {
    let height = state.layout.pane_height as usize;
    match action {
        WidgetAction::Input { side, edit } => {
            let pane = state.pane_mut(*side);
            let changed = pane.apply(edit);
            pane.scroll_to_cursor(height);
            if changed {
                state.revision += 1;
            }
            state.focus = *side;
        }
        WidgetAction::FocusNext => {
            state.focus = state.focus.other();
        }
        WidgetAction::Focus(side) => {
            state.focus = *side;
        }
        WidgetAction::SetValue { side, text } => {
            let pane = state.pane_mut(*side);
            pane.set_value(text);
            pane.scroll_to_cursor(height);
        }
        WidgetAction::ExternalApplied(_) => {}
        WidgetAction::Relayout => {
            state.layout =
                PaneLayout::compute(state.terminal_size, editor.view_mode, editor.is_fullscreen);
            state.layout_generation += 1;
            let height = state.layout.pane_height as usize;
            for pane in state.panes.iter_mut() {
                pane.scroll_to_cursor(height);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextEdit;
    use crate::state::{Side, ViewMode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_input_bumps_revision_on_content_change() {
        let editor = EditorState::default();
        let state = reduce(
            WidgetState::default(),
            &WidgetAction::Input {
                side: Side::After,
                edit: TextEdit::Insert('a'),
            },
            &editor,
        );
        assert_eq!(state.pane(Side::After).text(), "a");
        assert_eq!(state.revision, 1);
        assert_eq!(state.focus, Side::After);

        let state = reduce(
            state,
            &WidgetAction::Input {
                side: Side::After,
                edit: TextEdit::Left,
            },
            &editor,
        );
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_set_value_is_not_a_local_edit() {
        let state = reduce(
            WidgetState::default(),
            &WidgetAction::SetValue {
                side: Side::Before,
                text: "loaded".to_string(),
            },
            &EditorState::default(),
        );
        assert_eq!(state.pane(Side::Before).text(), "loaded");
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn test_relayout_follows_editor_presentation() {
        let mut editor = EditorState::default();
        editor.view_mode = ViewMode::Inline;
        let mut state = WidgetState::default();
        state.terminal_size = (120, 50);

        let state = reduce(state, &WidgetAction::Relayout, &editor);

        assert_eq!(state.layout_generation, 1);
        assert_eq!(state.layout.columns, 1);
        assert_eq!(state.layout.pane_width, 118);
    }
}
