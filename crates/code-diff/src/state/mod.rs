mod app;
mod editor;
mod management;
mod prompt;
mod resource;
mod status_bar;
mod widget;

pub use app::{AppState, ViewId};
pub use editor::{EditorState, Side, ViewMode};
pub use management::ManagementState;
pub use prompt::{PromptKind, PromptState};
pub use resource::{ResourceMeta, ResourceState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use widget::WidgetState;
