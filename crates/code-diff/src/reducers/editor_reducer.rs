//! Editor Reducer
//!
//! Applies editing-state actions to `EditorState`.

use crate::actions::EditorAction;
use crate::languages::Language;
use crate::state::EditorState;

pub fn reduce(mut state: EditorState, action: &EditorAction) -> EditorState {
    match action {
        EditorAction::SetBuffer { side, text, .. } => {
            state.set_buffer(*side, text.clone());
        }
        EditorAction::SetLanguage(tag) => {
            state.set_language(tag.clone());
        }
        EditorAction::CycleLanguage => {
            let next = Language::from_tag(&state.language)
                .map(|language| language.next())
                .unwrap_or(Language::Json);
            state.set_language(next.tag());
        }
        EditorAction::LoadFromResource {
            resource,
            stored_token,
        } => {
            state.load_from_resource(resource, stored_token.as_deref());
        }
        EditorAction::SetOwnership {
            stored_token,
            access_token,
        } => {
            state.set_ownership(stored_token.as_deref(), access_token.as_deref());
        }
        EditorAction::LoadSample(language) => {
            state.load_sample(*language);
        }
        EditorAction::ToggleViewMode => state.toggle_view_mode(),
        EditorAction::ToggleFullscreen => state.toggle_fullscreen(),
        EditorAction::ToggleTheme => state.toggle_theme(),
        EditorAction::UploadFile { .. } => {}
    }
    state
}
