//! KeyboardMiddleware - translates key presses into actions for the active view
//!
//! ## Layer 1: Priority keys
//! Ctrl+C / Ctrl+Q quit. Esc closes the top-most overlay, or dismisses the
//! current notice when the editor is on top.
//!
//! ## Layer 2: Text input
//! The prompt overlay receives printable characters, Backspace and Enter.
//!
//! ## Layer 3: View bindings
//! The editor, management list and share popup each map keys to their own
//! actions. The editor passes unbound keys to the focused pane as edits.

use crate::actions::{
    Action, EditorAction, GlobalAction, ManagementAction, PromptAction, ResourceAction,
    StatusBarAction, WidgetAction,
};
use crate::dispatcher::Dispatcher;
use crate::editor::TextEdit;
use crate::middleware::Middleware;
use crate::state::{AppState, PromptKind, ViewId};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn is_plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn prompt_action(key: &KeyEvent) -> Option<Action> {
    if ctrl(key, 'u') {
        return Some(Action::Prompt(PromptAction::ClearLine));
    }
    if let Some(c) = is_plain_char(key) {
        return Some(Action::Prompt(PromptAction::Char(c)));
    }
    match key.code {
        KeyCode::Backspace => Some(Action::Prompt(PromptAction::Backspace)),
        KeyCode::Enter => Some(Action::Prompt(PromptAction::Submit)),
        _ => None,
    }
}

fn share_popup_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Global(GlobalAction::Close)),
        KeyCode::Char('o') => Some(Action::Resource(ResourceAction::OpenShareLink)),
        _ => None,
    }
}

fn management_action(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Down | KeyCode::Char('j') => ManagementAction::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => ManagementAction::SelectPrev,
        KeyCode::Right | KeyCode::Char('n') => ManagementAction::NextPage,
        KeyCode::Left | KeyCode::Char('p') => ManagementAction::PrevPage,
        KeyCode::Char('t') => ManagementAction::ToggleSelected,
        KeyCode::Char('d') | KeyCode::Delete => ManagementAction::DeleteSelected,
        KeyCode::Enter => ManagementAction::OpenSelected,
        KeyCode::Char('r') | KeyCode::F(5) => ManagementAction::Open,
        KeyCode::Char('/') => return Some(Action::Prompt(PromptAction::Open(PromptKind::Search))),
        _ => return None,
    };
    Some(Action::Management(action))
}

fn editor_action(key: &KeyEvent, state: &AppState) -> Option<Action> {
    let focus = state.widget.focus;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let action = match key.code {
            KeyCode::Char('s') => Action::Resource(ResourceAction::Share),
            KeyCode::Char('u') => Action::Resource(ResourceAction::Update),
            KeyCode::Char('o') => Action::Prompt(PromptAction::Open(PromptKind::UploadFile(focus))),
            KeyCode::Char('g') => Action::Prompt(PromptAction::Open(PromptKind::OpenRoute)),
            KeyCode::Char('l') => Action::Resource(ResourceAction::OpenShareLink),
            _ => return None,
        };
        return Some(action);
    }

    let edit = match key.code {
        KeyCode::F(2) => return Some(Action::Editor(EditorAction::CycleLanguage)),
        KeyCode::F(3) => return Some(Action::Editor(EditorAction::ToggleViewMode)),
        KeyCode::F(4) => return Some(Action::Editor(EditorAction::ToggleTheme)),
        KeyCode::F(5) => return Some(Action::Management(ManagementAction::Open)),
        KeyCode::F(11) => return Some(Action::Editor(EditorAction::ToggleFullscreen)),
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::Widget(WidgetAction::FocusNext)),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => TextEdit::Insert(c),
        KeyCode::Enter => TextEdit::Newline,
        KeyCode::Backspace => TextEdit::Backspace,
        KeyCode::Delete => TextEdit::Delete,
        KeyCode::Left => TextEdit::Left,
        KeyCode::Right => TextEdit::Right,
        KeyCode::Up => TextEdit::Up,
        KeyCode::Down => TextEdit::Down,
        KeyCode::Home => TextEdit::Home,
        KeyCode::End => TextEdit::End,
        _ => return None,
    };
    Some(Action::Widget(WidgetAction::Input { side: focus, edit }))
}

impl KeyboardMiddleware {
    fn handle_key(&mut self, key: &KeyEvent, state: &AppState) -> Option<Action> {
        // Layer 1
        if ctrl(key, 'c') || ctrl(key, 'q') {
            return Some(Action::Global(GlobalAction::Quit));
        }
        if key.code == KeyCode::Esc {
            return Some(match state.active_view() {
                ViewId::Prompt => Action::Prompt(PromptAction::Cancel),
                ViewId::Editor => Action::StatusBar(StatusBarAction::Dismiss),
                _ => Action::Global(GlobalAction::Close),
            });
        }

        // Layers 2 and 3
        match state.active_view() {
            ViewId::Prompt => prompt_action(key),
            ViewId::SharePopup => share_popup_action(key),
            ViewId::Management => management_action(key),
            ViewId::Editor => editor_action(key, state),
        }
    }

    fn handle_paste(&self, text: &str, state: &AppState, dispatcher: &Dispatcher) {
        match state.active_view() {
            ViewId::Prompt => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    dispatcher.dispatch(Action::Prompt(PromptAction::Char(c)));
                }
            }
            ViewId::Editor => dispatcher.dispatch(Action::Widget(WidgetAction::Input {
                side: state.widget.focus,
                edit: TextEdit::Paste(text.to_string()),
            })),
            _ => {}
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                match self.handle_key(key, state) {
                    Some(action) => dispatcher.dispatch(action),
                    None => log::trace!("Unbound key {:?} in {:?}", key.code, state.active_view()),
                }
                false
            }
            Action::Global(GlobalAction::Paste(text)) => {
                self.handle_paste(text, state, dispatcher);
                false
            }
            _ => true,
        }
    }
}
