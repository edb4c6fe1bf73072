//! PromptMiddleware - turns a submitted prompt line into its action

use crate::actions::{Action, EditorAction, ManagementAction, PromptAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::routes::Route;
use crate::state::{AppState, PromptKind};
use std::path::PathBuf;

pub struct PromptMiddleware;

impl PromptMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand a leading `~/` to the home directory
fn expand_path(input: &str) -> PathBuf {
    match (input.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(input),
    }
}

impl Middleware for PromptMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Prompt(PromptAction::Submit) = action else {
            return true;
        };
        let Some(prompt) = state.prompt.as_ref() else {
            return true;
        };
        let input = prompt.input.trim();

        match prompt.kind {
            PromptKind::UploadFile(side) if !input.is_empty() => {
                dispatcher.dispatch(Action::Editor(EditorAction::UploadFile {
                    side,
                    path: expand_path(input),
                }));
            }
            PromptKind::Search => {
                dispatcher.dispatch(Action::Management(ManagementAction::SetQuery(
                    input.to_string(),
                )));
            }
            PromptKind::OpenRoute if !input.is_empty() => {
                dispatcher.dispatch(Action::Navigate(Route::parse(input)));
            }
            _ => log::debug!("Empty prompt submitted, nothing to do"),
        }
        true
    }
}
