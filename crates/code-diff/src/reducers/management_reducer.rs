use crate::actions::ManagementAction;
use crate::state::ManagementState;
use code_diff_client::ErrorKind;

pub fn reduce(mut state: ManagementState, action: &ManagementAction) -> ManagementState {
    match action {
        ManagementAction::Open => {
            state = ManagementState {
                query: state.query,
                ..ManagementState::default()
            };
        }
        ManagementAction::LoadPage(page) => {
            state.page = *page;
            state.loading = true;
        }
        ManagementAction::PageLoaded { page, data } => {
            if *page == state.page {
                state.data = Some(data.clone());
                state.loading = false;
                state.permission_denied = false;
                state.selected = state.selected.min(data.results.len().saturating_sub(1));
            }
        }
        ManagementAction::PageFailed(error) => {
            state.loading = false;
            if error.kind() == ErrorKind::Auth {
                state.permission_denied = true;
                state.data = None;
            }
        }
        ManagementAction::SelectNext => {
            if state.selected + 1 < state.rows().len() {
                state.selected += 1;
            }
        }
        ManagementAction::SelectPrev => {
            state.selected = state.selected.saturating_sub(1);
        }
        ManagementAction::SetQuery(query) => {
            state.query = query.clone();
        }
        ManagementAction::Toggled(resource) => {
            if let Some(data) = state.data.as_mut() {
                if let Some(row) = data
                    .results
                    .iter_mut()
                    .find(|row| row.identifier == resource.identifier)
                {
                    row.is_active = resource.is_active;
                }
            }
        }
        ManagementAction::Deleted(id) => {
            if let Some(data) = state.data.as_mut() {
                let before = data.results.len();
                data.results.retain(|row| &row.identifier != id);
                if data.results.len() < before {
                    data.count = data.count.saturating_sub(1);
                }
                state.selected = state.selected.min(data.results.len().saturating_sub(1));
            }
        }
        ManagementAction::NextPage
        | ManagementAction::PrevPage
        | ManagementAction::ToggleSelected
        | ManagementAction::DeleteSelected
        | ManagementAction::OpenSelected
        | ManagementAction::MutationFailed(_) => {}
    }
    state
}
