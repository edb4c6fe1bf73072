//! Editor view
//!
//! Header, the two panes (or the single inline pane), key hints and status
//! bar. Fullscreen drops everything but the panes.

use crate::editor::LineTag;
use crate::state::AppState;
use crate::view_models::{EditorViewModel, PaneLine, PaneViewModel, StatusBarViewModel};
use crate::views::{key_hints, status_bar::StatusBarWidget};
use code_diff_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GUTTER_WIDTH: usize = 5;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = EditorViewModel::from_state(state);
    let theme = &state.theme;

    f.render_widget(Block::default().style(theme.panel_background()), area);

    if state.editor.is_fullscreen {
        render_panes(&vm, theme, area, f);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(&vm, theme, chunks[0], f);
    render_panes(&vm, theme, chunks[1], f);
    key_hints::render(state, chunks[2], f);
    f.render_widget(
        StatusBarWidget(&StatusBarViewModel::from_state(state)),
        chunks[3],
    );
}

fn render_header(vm: &EditorViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut spans = vec![
        Span::styled(" code-diff ", theme.panel_title()),
        Span::styled(vm.route.clone(), theme.text()),
        Span::styled("  ", theme.muted()),
        Span::styled(vm.language.clone(), theme.key_hint()),
        Span::styled(format!("  {}  ", vm.view_mode), theme.muted()),
        Span::styled(format!("+{}", vm.added), theme.success()),
        Span::styled(" ", theme.muted()),
        Span::styled(format!("-{}", vm.removed), theme.error()),
    ];
    for flag in &vm.flags {
        spans.push(Span::styled(format!("  [{}]", flag), theme.warning()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_panes(vm: &EditorViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let constraints = vec![Constraint::Ratio(1, vm.panes.len().max(1) as u32); vm.panes.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (pane, column) in vm.panes.iter().zip(columns.iter()) {
        render_pane(pane, theme, *column, f);
    }
}

fn line_style(tag: LineTag, theme: &Theme) -> Style {
    match tag {
        LineTag::Equal => theme.text(),
        LineTag::Removed => theme.diff_removed(),
        LineTag::Added => theme.diff_added(),
    }
}

fn render_line<'a>(line: &'a PaneLine, theme: &Theme) -> Line<'a> {
    let marker = match line.tag {
        LineTag::Equal => ' ',
        LineTag::Removed => '-',
        LineTag::Added => '+',
    };
    let number = line
        .number
        .map(|n| n.to_string())
        .unwrap_or_default();
    let style = line_style(line.tag, theme);

    let mut spans = vec![
        Span::styled(format!("{:>w$}", number, w = GUTTER_WIDTH - 1), theme.gutter()),
        Span::styled(marker.to_string(), style),
    ];

    match line.cursor {
        Some(col) => {
            let before: String = line.text.chars().take(col).collect();
            let at = line.text.chars().nth(col).unwrap_or(' ');
            let after: String = line.text.chars().skip(col + 1).collect();
            spans.push(Span::styled(before, style));
            spans.push(Span::styled(at.to_string(), theme.cursor()));
            spans.push(Span::styled(after, style));
        }
        None => spans.push(Span::styled(line.text.as_str(), style)),
    }

    Line::from(spans)
}

fn render_pane(pane: &PaneViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let border = if pane.focused {
        theme.panel_border_focused()
    } else {
        theme.panel_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(format!(" {} ", pane.title), theme.panel_title()));

    let lines: Vec<Line> = pane.lines.iter().map(|l| render_line(l, theme)).collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}
