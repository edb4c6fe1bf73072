use crate::actions::{Action, EditorAction, GlobalAction, ManagementAction, PromptAction, ResourceAction};
use crate::reducers::{
    editor_reducer, management_reducer, resource_reducer, status_bar_reducer, widget_reducer,
};
use crate::routes::Route;
use crate::state::{AppState, PromptState, ViewId};
use code_diff_theme::Theme;

/// Root reducer - produces the next state from the current state and an action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),
        Action::Navigate(route) => {
            log::debug!("Entering route {}", route);
            state.route = route.clone();
            state.view_stack.truncate(1);
            state.prompt = None;
        }
        Action::Editor(editor_action) => {
            state.editor = editor_reducer::reduce(state.editor, editor_action);
            if let EditorAction::ToggleTheme = editor_action {
                state.theme = Theme::for_dark_mode(state.editor.is_dark_theme);
            }
        }
        Action::Widget(widget_action) => {
            state.widget = widget_reducer::reduce(state.widget, widget_action, &state.editor);
        }
        Action::Resource(resource_action) => {
            state.resource = resource_reducer::reduce(state.resource, resource_action);
            if let ResourceAction::Created(resource) = resource_action {
                state.resource.share_link = Some(state.config.share_url(resource.identifier.as_str()));
                state.route = Route::Diff(resource.identifier.clone());
                push_view(&mut state, ViewId::SharePopup);
            }
        }
        Action::Management(management_action) => {
            state.management = management_reducer::reduce(state.management, management_action);
            if let ManagementAction::Open = management_action {
                push_view(&mut state, ViewId::Management);
            }
        }
        Action::Prompt(prompt_action) => reduce_prompt(&mut state, prompt_action),
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce(state.status_bar, status_action);
        }
        Action::None => {}
    }
    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::Close => {
            if state.view_stack.len() > 1 {
                let closed = state.view_stack.pop();
                if closed == Some(ViewId::Prompt) {
                    state.prompt = None;
                }
                log::debug!("Closed view: {:?}", closed);
            }
        }
        GlobalAction::Resize { width, height } => {
            state.widget.terminal_size = (*width, *height);
        }
        GlobalAction::KeyPressed(_) | GlobalAction::Paste(_) => {}
    }
}

fn reduce_prompt(state: &mut AppState, action: &PromptAction) {
    match action {
        PromptAction::Open(kind) => {
            state.prompt = Some(PromptState::new(*kind));
            push_view(state, ViewId::Prompt);
        }
        PromptAction::Char(c) => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.input.push(*c);
            }
        }
        PromptAction::Backspace => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.input.pop();
            }
        }
        PromptAction::ClearLine => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.input.clear();
            }
        }
        PromptAction::Submit | PromptAction::Cancel => {
            state.prompt = None;
            state.view_stack.retain(|view| *view != ViewId::Prompt);
        }
    }
}

/// Push a view unless it is already on top
fn push_view(state: &mut AppState, view: ViewId) {
    if state.active_view() != view {
        log::debug!("Pushing view onto stack: {:?}", view);
        state.view_stack.push(view);
    }
}
