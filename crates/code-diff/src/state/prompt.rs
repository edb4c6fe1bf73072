use crate::state::Side;

/// What a submitted prompt line is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Path of a file to load into a buffer
    UploadFile(Side),
    /// Search query for the management list
    Search,
    /// Route, identifier or share link to open
    OpenRoute,
}

impl PromptKind {
    pub fn title(&self) -> String {
        match self {
            Self::UploadFile(side) => format!("Load file into {}", side.label()),
            Self::Search => "Search diffs".to_string(),
            Self::OpenRoute => "Open diff (identifier, /path or share link)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
}

impl PromptState {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }
}
