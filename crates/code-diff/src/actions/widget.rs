//! Editor widget actions
//!
//! These concern the widget's own copy of the text, which the adapter keeps
//! in sync with `EditorState`.

use crate::editor::TextEdit;
use crate::state::Side;

#[derive(Debug, Clone)]
pub enum WidgetAction {
    /// Keystroke in a pane
    Input { side: Side, edit: TextEdit },
    FocusNext,
    Focus(Side),
    /// Programmatic replacement of a pane's content
    SetValue { side: Side, text: String },
    /// A `SetValue` for this side has been applied
    ExternalApplied(Side),
    /// Recompute pane geometry
    Relayout,
}
