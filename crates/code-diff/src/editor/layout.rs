//! Pane geometry derived from terminal size and editor presentation

use crate::state::ViewMode;

/// Rows taken by the header, key hints and status bar outside fullscreen
const CHROME_ROWS: u16 = 3;
/// Border rows/columns around each pane
const BORDER: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneLayout {
    /// Number of panes shown side by side
    pub columns: u16,
    /// Inner width of each pane
    pub pane_width: u16,
    /// Inner height of each pane (visible lines)
    pub pane_height: u16,
}

impl PaneLayout {
    pub fn compute(terminal: (u16, u16), mode: ViewMode, fullscreen: bool) -> Self {
        let (width, height) = terminal;
        let editor_height = if fullscreen {
            height
        } else {
            height.saturating_sub(CHROME_ROWS)
        };
        let columns = match mode {
            ViewMode::Split => 2,
            ViewMode::Inline => 1,
        };
        Self {
            columns,
            pane_width: (width / columns).saturating_sub(BORDER),
            pane_height: editor_height.saturating_sub(BORDER),
        }
    }
}
