//! ManagementMiddleware - the account's list of diffs
//!
//! Loads pages, applies the search query, and toggles or deletes the
//! selected diff. All of these need a bearer token; without one (or with a
//! rejected one) the view stays open and shows an "insufficient permissions"
//! notice.

use crate::actions::{Action, ManagementAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::routes::Route;
use crate::state::AppState;
use code_diff_client::{CachedDiffClient, ClientError, DiffClient, ErrorKind};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

const SOURCE: &str = "Manage";

pub struct ManagementMiddleware<C: DiffClient + Clone + 'static> {
    runtime: Handle,
    client: CachedDiffClient<C>,
    page_task: Option<AbortHandle>,
}

impl<C: DiffClient + Clone + 'static> ManagementMiddleware<C> {
    pub fn new(runtime: Handle, client: CachedDiffClient<C>) -> Self {
        Self {
            runtime,
            client,
            page_task: None,
        }
    }

    fn load_page(&mut self, page: u32, query: Option<String>, dispatcher: &Dispatcher) {
        if let Some(task) = self.page_task.take() {
            task.abort();
        }
        let client = self.client.clone();
        let dispatcher = dispatcher.clone();
        let task = self.runtime.spawn(async move {
            let action = match client.list(page, query.as_deref()).await {
                Ok(data) => ManagementAction::PageLoaded { page, data },
                Err(error) => ManagementAction::PageFailed(error),
            };
            dispatcher.dispatch(Action::Management(action));
        });
        self.page_task = Some(task.abort_handle());
    }

    fn report_failure(error: &ClientError, what: &str, dispatcher: &Dispatcher) {
        let status = if error.kind() == ErrorKind::Auth {
            log::warn!("{} rejected: {}", what, error);
            StatusBarAction::warning(
                "Insufficient permissions, log in with `code-diff login`",
                SOURCE,
            )
        } else {
            log::error!("{} failed: {}", what, error);
            StatusBarAction::error(format!("Failed to {}: {}", what, error), SOURCE)
        };
        dispatcher.dispatch(Action::StatusBar(status));
    }
}

impl<C: DiffClient + Clone + 'static> Middleware for ManagementMiddleware<C> {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Management(action) = action else {
            return true;
        };
        let management = &state.management;

        match action {
            ManagementAction::Open => {
                dispatcher.dispatch(Action::Management(ManagementAction::LoadPage(1)));
                true
            }
            ManagementAction::LoadPage(page) => {
                self.load_page(
                    *page,
                    management.query_param().map(str::to_string),
                    dispatcher,
                );
                true
            }
            ManagementAction::NextPage => {
                if management.has_next() && !management.loading {
                    dispatcher.dispatch(Action::Management(ManagementAction::LoadPage(
                        management.page + 1,
                    )));
                }
                false
            }
            ManagementAction::PrevPage => {
                if management.has_prev() && !management.loading {
                    dispatcher.dispatch(Action::Management(ManagementAction::LoadPage(
                        management.page - 1,
                    )));
                }
                false
            }
            ManagementAction::SetQuery(_) => {
                // Reload once the reducer has stored the query
                dispatcher.dispatch(Action::Management(ManagementAction::LoadPage(1)));
                true
            }
            ManagementAction::PageFailed(error) => {
                Self::report_failure(error, "load diffs", dispatcher);
                true
            }
            ManagementAction::ToggleSelected => {
                if let Some(row) = management.selected_diff() {
                    let client = self.client.clone();
                    let id = row.identifier.clone();
                    let dispatcher = dispatcher.clone();
                    self.runtime.spawn(async move {
                        let action = match client.toggle_active(&id).await {
                            Ok(resource) => ManagementAction::Toggled(resource),
                            Err(error) => ManagementAction::MutationFailed(error),
                        };
                        dispatcher.dispatch(Action::Management(action));
                    });
                }
                false
            }
            ManagementAction::DeleteSelected => {
                if let Some(row) = management.selected_diff() {
                    let client = self.client.clone();
                    let id = row.identifier.clone();
                    let dispatcher = dispatcher.clone();
                    self.runtime.spawn(async move {
                        let action = match client.delete(&id).await {
                            Ok(()) => ManagementAction::Deleted(id),
                            Err(error) => ManagementAction::MutationFailed(error),
                        };
                        dispatcher.dispatch(Action::Management(action));
                    });
                }
                false
            }
            ManagementAction::OpenSelected => {
                if let Some(row) = management.selected_diff() {
                    dispatcher.dispatch(Action::Navigate(Route::Diff(row.identifier.clone())));
                }
                false
            }
            ManagementAction::Toggled(resource) => {
                let status = if resource.is_active { "active" } else { "inactive" };
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Diff {} is now {}", resource.identifier, status),
                    SOURCE,
                )));
                true
            }
            ManagementAction::Deleted(id) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Deleted diff {}", id),
                    SOURCE,
                )));
                true
            }
            ManagementAction::MutationFailed(error) => {
                Self::report_failure(error, "change diff", dispatcher);
                true
            }
            _ => true,
        }
    }
}
