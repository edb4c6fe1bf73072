//! EditorMiddleware - loads files from disk into a buffer

use crate::actions::{Action, BufferOrigin, EditorAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Side};
use std::path::PathBuf;
use tokio::runtime::Handle;

pub struct EditorMiddleware {
    runtime: Handle,
}

impl EditorMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    fn upload(&self, side: Side, path: PathBuf, dispatcher: Dispatcher) {
        self.runtime.spawn(async move {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    // Any file is accepted; invalid UTF-8 is replaced, not rejected
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    log::info!("Loaded {} bytes from {:?} into {}", bytes.len(), path, side.label());
                    dispatcher.dispatch(Action::Editor(EditorAction::SetBuffer {
                        side,
                        text,
                        origin: BufferOrigin::Upload,
                    }));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        format!("Loaded {} into {}", name, side.label()),
                        "Upload",
                    )));
                }
                Err(e) => {
                    log::error!("Failed to read {:?}: {}", path, e);
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("Could not read {}: {}", name, e),
                        "Upload",
                    )));
                }
            }
        });
    }
}

impl Middleware for EditorMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Editor(EditorAction::UploadFile { side, path }) = action {
            self.upload(*side, path.clone(), dispatcher.clone());
            return false;
        }
        true
    }
}
