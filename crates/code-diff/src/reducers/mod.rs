pub mod app_reducer;
pub mod editor_reducer;
pub mod management_reducer;
pub mod resource_reducer;
pub mod status_bar_reducer;
pub mod widget_reducer;
