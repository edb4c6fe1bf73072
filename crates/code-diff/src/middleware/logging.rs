use crate::actions::{Action, EditorAction, GlobalAction, ManagementAction, ResourceAction, WidgetAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
///
/// Buffer contents and resource bodies are replaced by their lengths or
/// identifiers so code and access tokens never reach the log file.
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(action: &Action) -> String {
    match action {
        Action::Editor(EditorAction::SetBuffer { side, text, origin }) => format!(
            "Editor(SetBuffer {{ side: {:?}, len: {}, origin: {:?} }})",
            side,
            text.len(),
            origin
        ),
        Action::Editor(EditorAction::LoadFromResource {
            resource,
            stored_token,
        }) => format!(
            "Editor(LoadFromResource {{ id: {}, has_token: {} }})",
            resource.identifier,
            stored_token.is_some()
        ),
        Action::Editor(EditorAction::SetOwnership {
            stored_token,
            access_token,
        }) => format!(
            "Editor(SetOwnership {{ stored: {}, issued: {} }})",
            stored_token.is_some(),
            access_token.is_some()
        ),
        Action::Widget(WidgetAction::SetValue { side, text }) => format!(
            "Widget(SetValue {{ side: {:?}, len: {} }})",
            side,
            text.len()
        ),
        Action::Resource(ResourceAction::Fetched {
            generation,
            revision,
            resource,
        }) => format!(
            "Resource(Fetched {{ generation: {}, revision: {}, id: {} }})",
            generation, revision, resource.identifier
        ),
        Action::Resource(ResourceAction::Created(resource)) => {
            format!("Resource(Created({}))", resource.identifier)
        }
        Action::Resource(ResourceAction::Updated(resource)) => {
            format!("Resource(Updated({}))", resource.identifier)
        }
        Action::Management(ManagementAction::PageLoaded { page, data }) => format!(
            "Management(PageLoaded {{ page: {}, rows: {} }})",
            page,
            data.results.len()
        ),
        Action::Management(ManagementAction::Toggled(resource)) => {
            format!("Management(Toggled({}))", resource.identifier)
        }
        other => format!("{:?}", other),
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Keystrokes are too chatty for the debug level
            Action::Global(GlobalAction::KeyPressed(_)) | Action::Widget(WidgetAction::Input { .. }) => {
                log::trace!("Action: {:?}", action);
            }
            _ => log::debug!("Action: {}", describe(action)),
        }
        true
    }
}
