use crate::state::{AppState, ViewId};
use ratatui::{layout::Rect, Frame};

pub mod editor_view;
pub mod key_hints;
pub mod management_view;
pub mod prompt_view;
pub mod share_popup_view;
pub mod status_bar;

/// Render the entire application UI
///
/// Views in the stack render bottom-up so overlays land on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        match view {
            ViewId::Editor => editor_view::render(state, area, f),
            ViewId::Management => management_view::render(state, area, f),
            ViewId::SharePopup => share_popup_view::render(state, area, f),
            ViewId::Prompt => prompt_view::render(state, area, f),
        }
    }
}

/// A centered rectangle `percent_x` wide and `height` rows tall
pub fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (area.width * percent_x / 100).clamp(area.width.min(40), area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, PromptAction};
    use crate::reducers::app_reducer::reduce;
    use crate::state::PromptKind;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render(state, f.area(), f))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_centered_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 50, 5);
        assert_eq!(rect, Rect::new(20, 9, 40, 5));
        assert_eq!(centered(Rect::new(0, 0, 10, 2), 50, 5).height, 2);
    }

    #[test]
    fn test_editor_renders_header_and_panes() {
        let screen = draw(&AppState::default());
        assert!(screen.contains("code-diff"));
        assert!(screen.contains("Before"));
        assert!(screen.contains("After"));
    }

    #[test]
    fn test_prompt_overlay_renders_title() {
        let state = reduce(
            AppState::default(),
            &Action::Prompt(PromptAction::Open(PromptKind::OpenRoute)),
        );
        let screen = draw(&state);
        assert!(screen.contains(&PromptKind::OpenRoute.title()));
    }
}
