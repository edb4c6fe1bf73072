//! Resource Reducer
//!
//! Tracks which diff is loading or loaded and whether a save is in flight.
//! Share links and view changes are handled by the root reducer.

use crate::actions::ResourceAction;
use crate::state::{ResourceMeta, ResourceState};

pub fn reduce(mut state: ResourceState, action: &ResourceAction) -> ResourceState {
    match action {
        ResourceAction::Open(id) => {
            state.load_generation += 1;
            state.loading = Some(id.clone());
            state.current = None;
            state.meta = None;
        }
        ResourceAction::Fetched {
            generation,
            resource,
            ..
        } => {
            if *generation == state.load_generation {
                state.loading = None;
                state.current = Some(resource.identifier.clone());
                state.meta = Some(ResourceMeta::from(resource));
            }
        }
        ResourceAction::LoadFailed { generation, .. } => {
            if *generation == state.load_generation {
                state.loading = None;
            }
        }
        ResourceAction::Leave => {
            state.load_generation += 1;
            state.loading = None;
            state.current = None;
            state.meta = None;
        }
        ResourceAction::SaveStarted(kind) => {
            state.saving = Some(*kind);
        }
        ResourceAction::Created(resource) => {
            state.saving = None;
            state.current = Some(resource.identifier.clone());
            state.meta = Some(ResourceMeta::from(resource));
        }
        ResourceAction::Updated(resource) => {
            state.saving = None;
            state.meta = Some(ResourceMeta::from(resource));
        }
        ResourceAction::SaveFailed { .. } => {
            state.saving = None;
        }
        ResourceAction::Share
        | ResourceAction::Update
        | ResourceAction::OpenShareLink
        | ResourceAction::RedirectHome { .. } => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SaveKind;
    use code_diff_client::{ClientError, DiffId, DiffResource};
    use pretty_assertions::assert_eq;

    fn resource(id: &str) -> DiffResource {
        DiffResource {
            identifier: DiffId::new(id),
            code_before: String::new(),
            code_after: String::new(),
            language: "json".to_string(),
            access_token: None,
            is_active: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_open_then_fetched() {
        let state = reduce(ResourceState::default(), &ResourceAction::Open(DiffId::new("a")));
        assert_eq!(state.load_generation, 1);
        assert!(state.is_loading());

        let state = reduce(
            state,
            &ResourceAction::Fetched {
                generation: 1,
                revision: 0,
                resource: resource("a"),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.current, Some(DiffId::new("a")));
        assert_eq!(state.meta.map(|m| m.is_active), Some(false));
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let state = reduce(ResourceState::default(), &ResourceAction::Open(DiffId::new("a")));
        let state = reduce(state, &ResourceAction::Open(DiffId::new("b")));

        let state = reduce(
            state,
            &ResourceAction::LoadFailed {
                generation: 1,
                revision: 0,
                id: DiffId::new("a"),
                error: ClientError::NotFound("a".to_string()),
            },
        );
        assert_eq!(state.loading, Some(DiffId::new("b")));
    }

    #[test]
    fn test_leave_invalidates_pending_read() {
        let state = reduce(ResourceState::default(), &ResourceAction::Open(DiffId::new("a")));
        let state = reduce(state, &ResourceAction::Leave);
        assert_eq!(state.load_generation, 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_save_lifecycle() {
        let state = reduce(
            ResourceState::default(),
            &ResourceAction::SaveStarted(SaveKind::Share),
        );
        assert_eq!(state.saving, Some(SaveKind::Share));
        let state = reduce(state, &ResourceAction::Created(resource("new")));
        assert_eq!(state.saving, None);
        assert_eq!(state.current, Some(DiffId::new("new")));
    }
}
