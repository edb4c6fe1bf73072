//! Single-line input overlay

use crate::state::AppState;
use crate::views::centered;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let Some(prompt) = state.prompt.as_ref() else {
        return;
    };

    let popup_area = centered(area, 70, 3);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_focused())
        .title(Span::styled(
            format!(" {} ", prompt.kind.title()),
            theme.panel_title(),
        ))
        .style(theme.panel_background());

    let line = Line::from(vec![
        Span::styled("> ", theme.key_hint()),
        Span::styled(prompt.input.as_str(), theme.text()),
        Span::styled(" ", theme.cursor()),
    ]);
    f.render_widget(Paragraph::new(line).block(block), popup_area);
}
