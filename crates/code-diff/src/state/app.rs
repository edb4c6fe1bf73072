use super::{
    EditorState, ManagementState, PromptState, ResourceState, StatusBarState, ViewMode,
    WidgetState,
};
use crate::editor::PaneLayout;
use crate::routes::Route;
use code_diff_config::AppConfig;
use code_diff_theme::Theme;

/// Screens and overlays, stacked bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Editor,
    Management,
    SharePopup,
    Prompt,
}

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub route: Route,
    /// Never empty; the editor is always at the bottom
    pub view_stack: Vec<ViewId>,
    pub editor: EditorState,
    pub widget: WidgetState,
    pub resource: ResourceState,
    pub management: ManagementState,
    pub prompt: Option<PromptState>,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let view_mode = ViewMode::from(config.view_mode);
        let editor = EditorState::new(
            config.default_language.clone(),
            view_mode,
            config.dark_theme,
        );
        let mut widget = WidgetState::default();
        widget.layout = PaneLayout::compute(widget.terminal_size, view_mode, false);

        Self {
            running: true,
            route: Route::Home,
            view_stack: vec![ViewId::Editor],
            editor,
            widget,
            resource: ResourceState::default(),
            management: ManagementState::default(),
            prompt: None,
            status_bar: StatusBarState::default(),
            theme: Theme::for_dark_mode(config.dark_theme),
            config,
        }
    }

    pub fn active_view(&self) -> ViewId {
        self.view_stack.last().copied().unwrap_or(ViewId::Editor)
    }

    pub fn is_view_open(&self, view: ViewId) -> bool {
        self.view_stack.contains(&view)
    }

    /// Counter of local edits, in state or still pending in the widget
    pub fn local_revision(&self) -> u64 {
        self.editor.revision + self.widget.revision
    }
}
