//! Actions flowing through the store
//!
//! Every user input, async completion and middleware follow-up is an
//! [`Action`]. Actions are grouped by the slice of state they concern.

mod editor;
mod global;
mod management;
mod prompt;
mod resource;
mod status_bar;
mod widget;

pub use editor::{BufferOrigin, EditorAction};
pub use global::GlobalAction;
pub use management::ManagementAction;
pub use prompt::PromptAction;
pub use resource::{ResourceAction, SaveKind};
pub use status_bar::StatusBarAction;
pub use widget::WidgetAction;

use crate::routes::Route;

#[derive(Debug, Clone)]
pub enum Action {
    Global(GlobalAction),
    /// Enter a route (home, language landing page or a diff)
    Navigate(Route),
    Editor(EditorAction),
    Widget(WidgetAction),
    Resource(ResourceAction),
    Management(ManagementAction),
    Prompt(PromptAction),
    StatusBar(StatusBarAction),
    None,
}
