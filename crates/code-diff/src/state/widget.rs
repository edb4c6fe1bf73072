//! Editor widget state: the widget's own copy of both buffers

use crate::editor::{PaneLayout, TextPane};
use crate::state::Side;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub panes: [TextPane; 2],
    pub focus: Side,
    pub layout: PaneLayout,
    /// Bumped on every relayout
    pub layout_generation: u64,
    pub terminal_size: (u16, u16),
    /// Bumped by every keystroke that changed a pane's content
    pub revision: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            panes: [TextPane::default(), TextPane::default()],
            focus: Side::Before,
            layout: PaneLayout::default(),
            layout_generation: 0,
            terminal_size: (80, 24),
            revision: 0,
        }
    }
}

impl WidgetState {
    pub fn pane(&self, side: Side) -> &TextPane {
        &self.panes[side.index()]
    }

    pub fn pane_mut(&mut self, side: Side) -> &mut TextPane {
        &mut self.panes[side.index()]
    }

    pub fn focused_pane(&self) -> &TextPane {
        self.pane(self.focus)
    }
}
