//! Single-row key hints for the active view

use crate::state::{AppState, ViewId};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.active_view() {
        ViewId::Editor => {
            let mut hints = vec![("Tab", "switch"), ("^S", "share")];
            if state.editor.show_update_button {
                hints.push(("^U", "update"));
            }
            hints.extend([
                ("^O", "upload"),
                ("^G", "open"),
                ("F2", "language"),
                ("F3", "view"),
                ("F4", "theme"),
                ("F5", "my diffs"),
                ("F11", "fullscreen"),
                ("Esc", "dismiss"),
                ("^Q", "quit"),
            ]);
            hints
        }
        ViewId::Management => vec![
            ("j/k", "select"),
            ("n/p", "page"),
            ("/", "search"),
            ("t", "toggle"),
            ("d", "delete"),
            ("Enter", "open"),
            ("r", "reload"),
            ("Esc", "close"),
        ],
        ViewId::SharePopup => vec![("o", "open in browser"), ("Enter/Esc", "close")],
        ViewId::Prompt => vec![("Enter", "submit"), ("^U", "clear"), ("Esc", "cancel")],
    }
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let spans: Vec<Span> = hints(state)
        .into_iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(format!(" {}", key), theme.key_hint()),
                Span::styled(format!(" {} ", description), theme.key_description()),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
