use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod editor_adapter_middleware;
pub mod editor_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod management_middleware;
pub mod prompt_middleware;
pub mod resource_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware must not block: slow work (network, file I/O) is spawned on
/// the tokio runtime and reports back through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
