//! Dual-buffer editing state actions

use crate::languages::Language;
use crate::state::Side;
use code_diff_client::DiffResource;
use std::path::PathBuf;

/// Where a buffer change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferOrigin {
    /// Debounced keystrokes committed by the editor widget
    Widget,
    /// Contents of a file read from disk
    Upload,
}

#[derive(Debug, Clone)]
pub enum EditorAction {
    SetBuffer {
        side: Side,
        text: String,
        origin: BufferOrigin,
    },
    /// Record a language tag (any tag, unknown ones render as plain text)
    SetLanguage(String),
    CycleLanguage,
    /// Replace both buffers and the language with a fetched resource
    LoadFromResource {
        resource: DiffResource,
        /// Resource access token held locally for this identifier
        stored_token: Option<String>,
    },
    /// Re-evaluate update rights without touching the buffers
    SetOwnership {
        stored_token: Option<String>,
        access_token: Option<String>,
    },
    /// Replace both buffers with a language's sample pair
    LoadSample(Language),
    /// Read a file into one buffer
    UploadFile { side: Side, path: PathBuf },
    ToggleViewMode,
    ToggleFullscreen,
    ToggleTheme,
}
