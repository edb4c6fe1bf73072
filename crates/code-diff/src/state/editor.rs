//! Dual-buffer editing state
//!
//! The single owner of the two code buffers, the language tag and the
//! presentation flags. Every component reads it from `AppState`; it is only
//! mutated by the editor reducer.

use crate::languages::{Language, SyntaxMode};
use code_diff_client::DiffResource;
use code_diff_config::ViewModeSetting;

/// One of the two buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Before,
    After,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Before, Side::After];

    pub fn index(self) -> usize {
        match self {
            Side::Before => 0,
            Side::After => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Before => Side::After,
            Side::After => Side::Before,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Before => "Before",
            Side::After => "After",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Split,
    Inline,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Split => ViewMode::Inline,
            ViewMode::Inline => ViewMode::Split,
        }
    }
}

impl From<ViewModeSetting> for ViewMode {
    fn from(setting: ViewModeSetting) -> Self {
        match setting {
            ViewModeSetting::Split => ViewMode::Split,
            ViewModeSetting::Inline => ViewMode::Inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub before: String,
    pub after: String,
    /// Language tag as chosen, supported or not
    pub language: String,
    pub view_mode: ViewMode,
    pub is_fullscreen: bool,
    pub is_dark_theme: bool,
    /// Whether the loaded diff may be updated from this client
    pub show_update_button: bool,
    /// Bumped by every local buffer change, never by a resource load
    pub revision: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Language::Json.tag(), ViewMode::Split, true)
    }
}

impl EditorState {
    pub fn new(language: impl Into<String>, view_mode: ViewMode, is_dark_theme: bool) -> Self {
        Self {
            before: String::new(),
            after: String::new(),
            language: language.into(),
            view_mode,
            is_fullscreen: false,
            is_dark_theme,
            show_update_button: false,
            revision: 0,
        }
    }

    pub fn buffer(&self, side: Side) -> &str {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    pub fn set_before(&mut self, text: impl Into<String>) {
        self.set_buffer(Side::Before, text);
    }

    pub fn set_after(&mut self, text: impl Into<String>) {
        self.set_buffer(Side::After, text);
    }

    pub fn set_buffer(&mut self, side: Side, text: impl Into<String>) {
        let text = text.into();
        let slot = match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        };
        if *slot != text {
            *slot = text;
            self.revision += 1;
        }
    }

    pub fn set_language(&mut self, tag: impl Into<String>) {
        self.language = tag.into();
    }

    /// Highlighting mode for the current tag, plain text for unknown tags
    pub fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode::for_tag(&self.language)
    }

    /// Replace buffers and language with a fetched resource.
    ///
    /// The update action becomes available only when `stored_token` matches
    /// the resource's access token.
    pub fn load_from_resource(&mut self, resource: &DiffResource, stored_token: Option<&str>) {
        self.before = resource.code_before.clone();
        self.after = resource.code_after.clone();
        if !resource.language.trim().is_empty() {
            self.language = resource.language.clone();
        }
        self.set_ownership(stored_token, resource.access_token.as_deref());
    }

    /// Offer updating only when the stored token matches the resource's own
    pub fn set_ownership(&mut self, stored_token: Option<&str>, access_token: Option<&str>) {
        self.show_update_button = matches!(
            (stored_token, access_token),
            (Some(stored), Some(owned)) if !stored.is_empty() && stored == owned
        );
    }

    /// Replace buffers with a language's sample pair
    pub fn load_sample(&mut self, language: Language) {
        let (before, after) = language.sample();
        self.before = before.to_string();
        self.after = after.to_string();
        self.language = language.tag().to_string();
        self.show_update_button = false;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.is_fullscreen = !self.is_fullscreen;
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark_theme = !self.is_dark_theme;
    }
}
