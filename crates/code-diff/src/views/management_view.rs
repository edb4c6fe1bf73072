//! Management view: the account's diffs as a paged table

use crate::state::AppState;
use crate::view_models::ManagementViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = ManagementViewModel::from_state(state);

    let popup_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(3),
    };
    f.render_widget(Clear, popup_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border_focused())
        .title(Span::styled(vm.title.clone(), theme.panel_title()))
        .style(theme.panel_background());
    if !vm.query.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" search: {} ", vm.query),
            theme.key_hint(),
        )));
    }

    if let Some(notice) = &vm.notice {
        f.render_widget(
            Paragraph::new(Span::styled(notice.as_str(), theme.muted()))
                .alignment(Alignment::Center)
                .block(block),
            popup_area,
        );
        return;
    }

    let header = Row::new(["Identifier", "Language", "Status", "Created", "Updated"])
        .style(theme.table_header());
    let rows = vm.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.identifier.as_str()),
            Cell::from(row.language.as_str()),
            Cell::from(row.status),
            Cell::from(row.created.as_str()),
            Cell::from(row.updated.as_str()),
        ])
        .style(row.style)
    });
    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(17),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(block);

    let mut table_state = TableState::default().with_selected(Some(vm.selected));
    f.render_stateful_widget(table, popup_area, &mut table_state);
}
