pub mod editor_view_model;
pub mod management_view_model;
pub mod status_bar;

pub use editor_view_model::{EditorViewModel, PaneLine, PaneViewModel};
pub use management_view_model::{DiffRowViewModel, ManagementViewModel};
pub use status_bar::StatusBarViewModel;
