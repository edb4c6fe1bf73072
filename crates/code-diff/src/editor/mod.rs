//! Embedded editing widget
//!
//! [`TextPane`] is the editable buffer shown in each pane; the adapter that
//! keeps it in sync with `EditorState` lives in
//! `middleware::editor_adapter_middleware`.

pub mod debounce;
pub mod layout;
pub mod line_diff;
pub mod text_pane;

pub use debounce::Debouncer;
pub use layout::PaneLayout;
pub use line_diff::{inline_lines, line_marks, InlineLine, LineMarks, LineTag};
pub use text_pane::{TextEdit, TextPane};
