//! Share popup: shows the link of a freshly created diff

use crate::state::AppState;
use crate::views::centered;
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let Some(link) = state.resource.share_link.as_deref() else {
        return;
    };

    let popup_area = centered(area, 70, 7);
    f.render_widget(Clear, popup_area);

    let footer = Line::from(vec![
        Span::styled(" o", theme.key_hint().bold()),
        Span::styled(" open in browser  ", theme.muted()),
        Span::styled("Enter", theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_focused())
        .title(Span::styled(" Diff shared ", theme.panel_title()))
        .title_bottom(footer)
        .style(theme.panel_background());

    let text = vec![
        Line::from(Span::styled("Anyone with this link can view the diff:", theme.text())),
        Line::default(),
        Line::from(Span::styled(link, theme.success().bold())),
    ];
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        popup_area,
    );
}
