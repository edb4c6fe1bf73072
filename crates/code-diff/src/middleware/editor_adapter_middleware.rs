//! EditorAdapterMiddleware - keeps the editor widget and `EditorState` in sync
//!
//! Widget → state: content changes are debounced per pane and committed as a
//! single `EditorAction::SetBuffer { origin: Widget }` carrying the final
//! text.
//!
//! State → widget: uploads and loads push the new text into the widget with
//! `WidgetAction::SetValue`. While such a push is being applied the pane's
//! "applying external update" flag is raised, so the change notification the
//! widget produces for it is dropped instead of echoing back into state. The
//! flag is cleared by `WidgetAction::ExternalApplied`, queued right behind
//! the `SetValue`.
//!
//! Share and update requests flush pending keystrokes first: the commits are
//! queued and the request is queued again behind them, so the payload is
//! built from what the user sees in the widget.

use crate::actions::{
    Action, BufferOrigin, EditorAction, GlobalAction, ResourceAction, WidgetAction,
};
use crate::dispatcher::Dispatcher;
use crate::editor::Debouncer;
use crate::middleware::Middleware;
use crate::state::{AppState, Side};
use std::time::Duration;
use tokio::runtime::Handle;

pub struct EditorAdapterMiddleware {
    runtime: Handle,
    debouncers: [Debouncer; 2],
    applying_external: [bool; 2],
}

impl EditorAdapterMiddleware {
    pub fn new(runtime: Handle, debounce: Duration) -> Self {
        Self {
            runtime,
            debouncers: [Debouncer::new(debounce), Debouncer::new(debounce)],
            applying_external: [false, false],
        }
    }

    pub fn is_applying_external(&self, side: Side) -> bool {
        self.applying_external[side.index()]
    }

    /// The widget reported new content for a pane
    fn content_changed(&mut self, side: Side, text: String, dispatcher: &Dispatcher) {
        if self.applying_external[side.index()] {
            log::debug!("Ignoring {} change while applying external update", side.label());
            return;
        }
        self.debouncers[side.index()].schedule(
            &self.runtime,
            Action::Editor(EditorAction::SetBuffer {
                side,
                text,
                origin: BufferOrigin::Widget,
            }),
            dispatcher.clone(),
        );
    }

    /// Commit pane text that has not reached `EditorState` yet
    ///
    /// Returns true when at least one commit was queued.
    fn flush(&mut self, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let mut flushed = false;
        for side in [Side::Before, Side::After] {
            self.debouncers[side.index()].cancel();
            let text = state.widget.pane(side).text();
            if text != state.editor.buffer(side) {
                log::debug!("Flushing uncommitted {} text", side.label());
                dispatcher.dispatch(Action::Editor(EditorAction::SetBuffer {
                    side,
                    text,
                    origin: BufferOrigin::Widget,
                }));
                flushed = true;
            }
        }
        flushed
    }

    /// Push state-originated content into the widget
    fn push_external(&mut self, side: Side, text: &str, dispatcher: &Dispatcher) {
        self.debouncers[side.index()].cancel();
        self.applying_external[side.index()] = true;
        dispatcher.dispatch(Action::Widget(WidgetAction::SetValue {
            side,
            text: text.to_string(),
        }));
        dispatcher.dispatch(Action::Widget(WidgetAction::ExternalApplied(side)));
    }
}

impl Middleware for EditorAdapterMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Widget(WidgetAction::Input { side, edit }) => {
                if edit.modifies_content() {
                    let mut pane = state.widget.pane(*side).clone();
                    if pane.apply(edit) {
                        self.content_changed(*side, pane.text(), dispatcher);
                    }
                }
                true
            }
            Action::Widget(WidgetAction::SetValue { side, text }) => {
                // The widget notifies about programmatic changes like typed ones
                if state.widget.pane(*side).text() != *text {
                    self.content_changed(*side, text.clone(), dispatcher);
                }
                true
            }
            Action::Widget(WidgetAction::ExternalApplied(side)) => {
                self.applying_external[side.index()] = false;
                false
            }
            Action::Editor(EditorAction::SetBuffer {
                side,
                text,
                origin: BufferOrigin::Upload,
            }) => {
                self.push_external(*side, text, dispatcher);
                true
            }
            Action::Editor(EditorAction::LoadFromResource { resource, .. }) => {
                self.push_external(Side::Before, &resource.code_before, dispatcher);
                self.push_external(Side::After, &resource.code_after, dispatcher);
                true
            }
            Action::Editor(EditorAction::LoadSample(language)) => {
                let (before, after) = language.sample();
                self.push_external(Side::Before, before, dispatcher);
                self.push_external(Side::After, after, dispatcher);
                true
            }
            Action::Resource(ResourceAction::Share | ResourceAction::Update) => {
                if self.flush(state, dispatcher) {
                    dispatcher.dispatch(action.clone());
                    return false;
                }
                true
            }
            Action::Editor(EditorAction::ToggleViewMode)
            | Action::Editor(EditorAction::ToggleFullscreen)
            | Action::Global(GlobalAction::Resize { .. }) => {
                dispatcher.dispatch(Action::Widget(WidgetAction::Relayout));
                true
            }
            _ => true,
        }
    }
}
