//! Single-line input prompt actions

use crate::state::PromptKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Open(PromptKind),
    Char(char),
    Backspace,
    ClearLine,
    Submit,
    Cancel,
}
