//! ResourceMiddleware - lifecycle of the diff shown in the editor
//!
//! Handles route entry and exit, cancellable reads with protection against
//! stale results, the not-found redirect, and share/update requests.
//!
//! Every read is tagged with the store's load generation at the time it was
//! issued and with the local edit revision. A result is applied only if no
//! newer route was entered and nothing was edited in between, so a slow
//! response can never overwrite newer local content.

use crate::actions::{Action, EditorAction, ResourceAction, SaveKind, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::languages::Language;
use crate::middleware::Middleware;
use crate::routes::Route;
use crate::state::AppState;
use crate::utils::browser;
use code_diff_client::{
    CachedDiffClient, ClientError, DiffClient, DiffId, DiffPayload, DiffResource, ErrorKind,
};
use code_diff_config::LocalStorage;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

const SOURCE: &str = "Diff";

pub struct ResourceMiddleware<C: DiffClient + Clone + 'static> {
    runtime: Handle,
    client: CachedDiffClient<C>,
    storage: LocalStorage,
    not_found_delay: Duration,
    read_task: Option<AbortHandle>,
    redirect_task: Option<AbortHandle>,
    /// The next home route entry keeps the buffers instead of loading a sample
    keep_buffers: bool,
}

impl<C: DiffClient + Clone + 'static> ResourceMiddleware<C> {
    pub fn new(
        runtime: Handle,
        client: CachedDiffClient<C>,
        storage: LocalStorage,
        not_found_delay: Duration,
    ) -> Self {
        Self {
            runtime,
            client,
            storage,
            not_found_delay,
            read_task: None,
            redirect_task: None,
            keep_buffers: false,
        }
    }

    fn abort_read(&mut self) {
        if let Some(task) = self.read_task.take() {
            if !task.is_finished() {
                log::debug!("Aborting in-flight read");
            }
            task.abort();
        }
    }

    fn cancel_redirect(&mut self) {
        if let Some(task) = self.redirect_task.take() {
            task.abort();
        }
    }

    fn enter_route(&mut self, route: &Route, state: &AppState, dispatcher: &Dispatcher) {
        self.cancel_redirect();
        let keep_buffers = std::mem::take(&mut self.keep_buffers);
        match route {
            Route::Home => {
                dispatcher.dispatch(Action::Resource(ResourceAction::Leave));
                if keep_buffers {
                    return;
                }
                let language =
                    Language::from_tag(&state.config.default_language).unwrap_or(Language::Json);
                dispatcher.dispatch(Action::Editor(EditorAction::LoadSample(language)));
            }
            Route::Language(language) => {
                dispatcher.dispatch(Action::Resource(ResourceAction::Leave));
                dispatcher.dispatch(Action::Editor(EditorAction::LoadSample(*language)));
            }
            Route::Diff(id) => {
                dispatcher.dispatch(Action::Resource(ResourceAction::Open(id.clone())));
            }
        }
    }

    fn open(&mut self, id: &DiffId, state: &AppState, dispatcher: &Dispatcher) {
        self.abort_read();
        self.cancel_redirect();

        // The reducer bumps the generation when it sees this Open
        let generation = state.resource.load_generation + 1;
        let revision = state.local_revision();

        if let Some(resource) = self.client.cached(id) {
            log::debug!("Serving diff {} from the session cache", id);
            dispatcher.dispatch(Action::Resource(ResourceAction::Fetched {
                generation,
                revision,
                resource,
            }));
            return;
        }

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Loading diff {}", id),
            SOURCE,
        )));

        let client = self.client.clone();
        let id = id.clone();
        let dispatcher = dispatcher.clone();
        let task = self.runtime.spawn(async move {
            let action = match client.read(&id).await {
                Ok(resource) => ResourceAction::Fetched {
                    generation,
                    revision,
                    resource,
                },
                Err(error) => ResourceAction::LoadFailed {
                    generation,
                    revision,
                    id,
                    error,
                },
            };
            dispatcher.dispatch(Action::Resource(action));
        });
        self.read_task = Some(task.abort_handle());
    }

    fn apply_fetched(
        &mut self,
        generation: u64,
        revision: u64,
        resource: &DiffResource,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        if generation != state.resource.load_generation {
            log::debug!(
                "Dropping stale result for {} (generation {} != {})",
                resource.identifier,
                generation,
                state.resource.load_generation
            );
            return false;
        }
        self.read_task = None;

        if revision != state.local_revision() {
            log::info!(
                "Buffers were edited while {} was loading, keeping local content",
                resource.identifier
            );
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                format!(
                    "Diff {} loaded, but your edits were kept instead",
                    resource.identifier
                ),
                SOURCE,
            )));
            return true;
        }

        let stored_token = self.storage.resource_token(resource.identifier.as_str());
        dispatcher.dispatch(Action::Editor(EditorAction::LoadFromResource {
            resource: resource.clone(),
            stored_token,
        }));
        true
    }

    fn load_failed(
        &mut self,
        generation: u64,
        revision: u64,
        id: &DiffId,
        error: &ClientError,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        if generation != state.resource.load_generation {
            log::debug!("Dropping stale failure for {}: {}", id, error);
            return false;
        }
        self.read_task = None;

        if error.kind() == ErrorKind::NotFound {
            log::warn!("Diff {} not found, returning home", id);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                format!("Diff {} not found, returning home", id),
                SOURCE,
            )));
            self.schedule_redirect(revision, dispatcher);
        } else {
            log::error!("Failed to load diff {}: {}", id, error);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                format!("Failed to load diff {}: {}", id, error),
                SOURCE,
            )));
        }
        true
    }

    fn schedule_redirect(&mut self, revision: u64, dispatcher: &Dispatcher) {
        self.cancel_redirect();
        let delay = self.not_found_delay;
        let dispatcher = dispatcher.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(Action::Resource(ResourceAction::RedirectHome { revision }));
        });
        self.redirect_task = Some(task.abort_handle());
    }

    /// Return home; buffers edited since the failed read was issued survive
    fn redirect_home(&mut self, revision: u64, state: &AppState, dispatcher: &Dispatcher) {
        self.redirect_task = None;
        if revision != state.local_revision() {
            log::info!("Returning home with locally edited buffers");
            self.keep_buffers = true;
            dispatcher.dispatch(Action::Editor(EditorAction::SetOwnership {
                stored_token: None,
                access_token: None,
            }));
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                "Returned home, your edits were kept",
                SOURCE,
            )));
        }
        dispatcher.dispatch(Action::Navigate(Route::Home));
    }

    /// Identifier to update, or a notice explaining why updating is not possible
    fn update_target(&self, state: &AppState) -> Result<DiffId, String> {
        let id = state
            .resource
            .current
            .clone()
            .ok_or_else(|| "Nothing to update, share this diff first".to_string())?;
        if !state.editor.show_update_button || self.storage.resource_token(id.as_str()).is_none() {
            return Err("Only diffs shared from this device can be updated".to_string());
        }
        Ok(id)
    }

    fn save(&mut self, kind: SaveKind, state: &AppState, dispatcher: &Dispatcher) {
        if state.resource.saving.is_some() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "A save is already in progress",
                SOURCE,
            )));
            return;
        }

        let target = match kind {
            SaveKind::Share => None,
            SaveKind::Update => match self.update_target(state) {
                Ok(id) => Some(id),
                Err(notice) => {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(notice, SOURCE)));
                    return;
                }
            },
        };

        let editor = &state.editor;
        let payload = match DiffPayload::new(
            editor.before.clone(),
            editor.after.clone(),
            editor.language.clone(),
        ) {
            Ok(payload) => payload,
            Err(error) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    error.to_string(),
                    SOURCE,
                )));
                return;
            }
        };

        dispatcher.dispatch(Action::Resource(ResourceAction::SaveStarted(kind)));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            match kind {
                SaveKind::Share => "Sharing diff",
                SaveKind::Update => "Updating diff",
            },
            SOURCE,
        )));

        let client = self.client.clone();
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let result = match &target {
                None => client.create(&payload).await.map(ResourceAction::Created),
                Some(id) => client.update(id, &payload).await.map(ResourceAction::Updated),
            };
            let action = result.unwrap_or_else(|error| ResourceAction::SaveFailed { kind, error });
            dispatcher.dispatch(Action::Resource(action));
        });
    }

    fn on_created(&self, resource: &DiffResource, state: &AppState, dispatcher: &Dispatcher) {
        let id = resource.identifier.as_str();
        match resource.access_token.as_deref() {
            Some(token) if !token.is_empty() => {
                if let Err(e) = self.storage.remember_resource_token(id, token) {
                    log::error!("Failed to store access token for {}: {:#}", id, e);
                }
            }
            _ => log::warn!("Created diff {} without an access token", id),
        }
        // The creator may update the diff they just shared
        dispatcher.dispatch(Action::Editor(EditorAction::SetOwnership {
            stored_token: self.storage.resource_token(id),
            access_token: resource.access_token.clone(),
        }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
            format!("Diff shared: {}", state.config.share_url(id)),
            SOURCE,
        )));
    }
}

impl<C: DiffClient + Clone + 'static> Middleware for ResourceMiddleware<C> {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Navigate(route) => {
                self.enter_route(route, state, dispatcher);
                true
            }
            Action::Resource(ResourceAction::Open(id)) => {
                self.open(id, state, dispatcher);
                true
            }
            Action::Resource(ResourceAction::Fetched {
                generation,
                revision,
                resource,
            }) => self.apply_fetched(*generation, *revision, resource, state, dispatcher),
            Action::Resource(ResourceAction::LoadFailed {
                generation,
                revision,
                id,
                error,
            }) => self.load_failed(*generation, *revision, id, error, state, dispatcher),
            Action::Resource(ResourceAction::RedirectHome { revision }) => {
                self.redirect_home(*revision, state, dispatcher);
                false
            }
            Action::Resource(ResourceAction::Leave) => {
                self.abort_read();
                self.cancel_redirect();
                true
            }
            Action::Resource(ResourceAction::Share) => {
                self.save(SaveKind::Share, state, dispatcher);
                false
            }
            Action::Resource(ResourceAction::Update) => {
                self.save(SaveKind::Update, state, dispatcher);
                false
            }
            Action::Resource(ResourceAction::Created(resource)) => {
                self.on_created(resource, state, dispatcher);
                true
            }
            Action::Resource(ResourceAction::Updated(resource)) => {
                log::info!("Updated diff {}", resource.identifier);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    "Diff updated",
                    SOURCE,
                )));
                true
            }
            Action::Resource(ResourceAction::SaveFailed { kind, error }) => {
                log::error!("{:?} failed: {}", kind, error);
                let verb = match kind {
                    SaveKind::Share => "share",
                    SaveKind::Update => "update",
                };
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Failed to {} diff: {}", verb, error),
                    SOURCE,
                )));
                true
            }
            Action::Resource(ResourceAction::OpenShareLink) => {
                if let Some(link) = state.resource.share_link.clone() {
                    self.runtime.spawn(browser::open_url(link));
                }
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BufferOrigin, WidgetAction};
    use crate::editor::TextEdit;
    use crate::middleware::editor_adapter_middleware::EditorAdapterMiddleware;
    use crate::state::{Side, StatusKind, ViewId};
    use crate::store::Store;
    use crate::test_support::{resource, MockClient};
    use code_diff_client::{CacheMode, SessionCache};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    const REDIRECT: Duration = Duration::from_millis(2000);

    struct Harness {
        store: Store,
        mock: MockClient,
        client: CachedDiffClient<MockClient>,
        storage: LocalStorage,
        _dir: tempfile::TempDir,
    }

    fn harness(mock: MockClient) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("storage.json"));
        let client = CachedDiffClient::new(
            mock.clone(),
            Arc::new(Mutex::new(SessionCache::new())),
            CacheMode::ReadWrite,
        );

        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(EditorAdapterMiddleware::new(
            Handle::current(),
            Duration::from_millis(300),
        )));
        store.add_middleware(Box::new(ResourceMiddleware::new(
            Handle::current(),
            client.clone(),
            storage.clone(),
            REDIRECT,
        )));

        Harness {
            store,
            mock,
            client,
            storage,
            _dir: dir,
        }
    }

    async fn wait(store: &mut Store, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        store.process_pending();
    }

    fn latest_status(store: &Store) -> Option<(StatusKind, String)> {
        store
            .state()
            .status_bar
            .latest()
            .map(|m| (m.kind, m.message.clone()))
    }

    fn navigate(store: &mut Store, path: &str) {
        store.dispatch(Action::Navigate(Route::parse(path)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_loads_resource() {
        let mut h = harness(MockClient::with(vec![resource("a", "old", "new")]));

        navigate(&mut h.store, "/a");
        assert!(h.store.state().resource.is_loading());
        wait(&mut h.store, 50).await;

        let state = h.store.state();
        assert_eq!(state.editor.before, "old");
        assert_eq!(state.editor.after, "new");
        assert_eq!(state.widget.pane(Side::After).text(), "new");
        assert_eq!(state.resource.current, Some(DiffId::new("a")));
        assert!(!state.resource.is_loading());
        assert!(!state.editor.show_update_button);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_visit_is_served_from_cache() {
        let mut h = harness(MockClient::with(vec![resource("a", "old", "new")]));

        navigate(&mut h.store, "/a");
        wait(&mut h.store, 50).await;
        let first = h.store.state().editor.clone();

        navigate(&mut h.store, "/");
        navigate(&mut h.store, "/a");

        // Applied synchronously, no wait needed
        assert_eq!(h.store.state().editor.before, first.before);
        assert_eq!(h.store.state().editor.after, first.after);
        assert_eq!(h.mock.reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_local_edit_during_read_is_kept() {
        let mock = MockClient::with(vec![resource("a", "remote", "remote")])
            .with_delay("a", Duration::from_millis(200));
        let mut h = harness(mock);

        navigate(&mut h.store, "/a");
        h.store.dispatch(Action::Editor(EditorAction::SetBuffer {
            side: Side::Before,
            text: "local".to_string(),
            origin: BufferOrigin::Upload,
        }));
        wait(&mut h.store, 500).await;

        assert_eq!(h.store.state().editor.before, "local");
        assert_eq!(h.store.state().widget.pane(Side::Before).text(), "local");
        assert!(!h.store.state().resource.is_loading());
        assert_eq!(
            latest_status(&h.store).map(|(kind, _)| kind),
            Some(StatusKind::Warning)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_read_is_never_applied() {
        let mock = MockClient::with(vec![
            resource("slow", "slow-before", "slow-after"),
            resource("fast", "fast-before", "fast-after"),
        ])
        .with_delay("slow", Duration::from_millis(300))
        .with_delay("fast", Duration::from_millis(10));
        let mut h = harness(mock);

        navigate(&mut h.store, "/slow");
        navigate(&mut h.store, "/fast");
        wait(&mut h.store, 500).await;

        assert_eq!(h.store.state().editor.before, "fast-before");
        assert_eq!(h.store.state().resource.current, Some(DiffId::new("fast")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_route_abandons_read() {
        let mock = MockClient::with(vec![resource("a", "remote", "remote")])
            .with_delay("a", Duration::from_millis(200));
        let mut h = harness(mock);

        navigate(&mut h.store, "/a");
        navigate(&mut h.store, "/rust-diff");
        wait(&mut h.store, 500).await;

        assert_eq!(h.store.state().editor.before, Language::Rust.sample().0);
        assert_eq!(h.store.state().editor.language, "rust");
        assert_eq!(h.store.state().resource.current, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_redirects_home() {
        let mut h = harness(MockClient::default());

        navigate(&mut h.store, "/missing");
        wait(&mut h.store, 10).await;

        assert_eq!(
            latest_status(&h.store).map(|(kind, _)| kind),
            Some(StatusKind::Warning)
        );
        assert_eq!(h.store.state().route, Route::Diff(DiffId::new("missing")));

        wait(&mut h.store, REDIRECT.as_millis() as u64 + 100).await;

        assert_eq!(h.store.state().route, Route::Home);
        assert_eq!(h.store.state().editor.language, "json");
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_keeps_edits_made_during_read() {
        let mock = MockClient::default().with_delay("missing", Duration::from_millis(200));
        let mut h = harness(mock);

        navigate(&mut h.store, "/missing");
        h.store.dispatch(Action::Editor(EditorAction::SetBuffer {
            side: Side::Before,
            text: "my work".to_string(),
            origin: BufferOrigin::Upload,
        }));
        wait(&mut h.store, 300).await;
        assert_eq!(
            latest_status(&h.store).map(|(kind, _)| kind),
            Some(StatusKind::Warning)
        );

        wait(&mut h.store, REDIRECT.as_millis() as u64 + 100).await;

        let state = h.store.state();
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.editor.before, "my work");
        assert_eq!(state.widget.pane(Side::Before).text(), "my work");
        assert_eq!(state.resource.current, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_keeps_typing_after_not_found() {
        let mut h = harness(MockClient::default());

        navigate(&mut h.store, "/missing");
        wait(&mut h.store, 10).await;
        h.store.dispatch(Action::Widget(WidgetAction::Input {
            side: Side::After,
            edit: TextEdit::Insert('q'),
        }));
        wait(&mut h.store, REDIRECT.as_millis() as u64 + 100).await;

        assert_eq!(h.store.state().route, Route::Home);
        assert_eq!(h.store.state().widget.pane(Side::After).text(), "q");
        assert_eq!(h.store.state().editor.after, "q");

        // Later visits home load the sample again
        navigate(&mut h.store, "/");
        assert_eq!(h.store.state().editor.language, "json");
        assert_eq!(h.store.state().editor.before, Language::Json.sample().0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_cancels_pending_redirect() {
        let mut h = harness(MockClient::with(vec![resource("b", "x", "y")]));

        navigate(&mut h.store, "/missing");
        wait(&mut h.store, 10).await;
        navigate(&mut h.store, "/b");
        wait(&mut h.store, REDIRECT.as_millis() as u64 + 100).await;

        assert_eq!(h.store.state().route, Route::Diff(DiffId::new("b")));
        assert_eq!(h.store.state().editor.before, "x");
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_failures_leave_buffers_untouched() {
        let mut h = harness(MockClient::default().failing_reads());

        navigate(&mut h.store, "/python-diff");
        navigate(&mut h.store, "/a");
        wait(&mut h.store, 10).await;

        assert_eq!(h.store.state().editor.before, Language::Python.sample().0);
        assert_eq!(
            latest_status(&h.store).map(|(kind, _)| kind),
            Some(StatusKind::Error)
        );
        wait(&mut h.store, REDIRECT.as_millis() as u64 + 100).await;
        assert_eq!(h.store.state().route, Route::Diff(DiffId::new("a")));
    }

    fn set_buffers(store: &mut Store, before: &str, after: &str) {
        for (side, text) in [(Side::Before, before), (Side::After, after)] {
            store.dispatch(Action::Editor(EditorAction::SetBuffer {
                side,
                text: text.to_string(),
                origin: BufferOrigin::Upload,
            }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_share_stores_token_and_shows_link() {
        let mut h = harness(MockClient::default());
        set_buffers(&mut h.store, "a", "b");

        h.store.dispatch(Action::Resource(ResourceAction::Share));
        assert!(h.store.state().resource.saving.is_some());
        wait(&mut h.store, 10).await;

        let state = h.store.state();
        assert_eq!(state.resource.saving, None);
        assert_eq!(state.resource.share_link.as_deref(), Some("http://localhost:3000/id1"));
        assert_eq!(state.active_view(), ViewId::SharePopup);
        assert_eq!(h.storage.resource_token("id1").as_deref(), Some("token-id1"));
        assert_eq!(state.route, Route::Diff(DiffId::new("id1")));
        assert_eq!(state.resource.current, Some(DiffId::new("id1")));
        // Buffers stay, and the creator may now update
        assert_eq!(state.editor.before, "a");
        assert!(state.editor.show_update_button);
    }

    #[tokio::test(start_paused = true)]
    async fn test_creator_can_update_after_sharing() {
        let mut h = harness(MockClient::default());
        set_buffers(&mut h.store, "a", "b");
        h.store.dispatch(Action::Resource(ResourceAction::Share));
        wait(&mut h.store, 10).await;

        set_buffers(&mut h.store, "a2", "b");
        h.store.dispatch(Action::Resource(ResourceAction::Update));
        wait(&mut h.store, 10).await;

        assert_eq!(h.mock.writes(), 2);
        assert_eq!(h.mock.get("id1").map(|r| r.code_before).as_deref(), Some("a2"));
        assert_eq!(
            latest_status(&h.store),
            Some((StatusKind::Success, "Diff updated".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_share_sends_text_still_being_typed() {
        let mut h = harness(MockClient::default());
        set_buffers(&mut h.store, "a", "b");

        // Share right after typing, before the debounce has fired
        for c in "xyz".chars() {
            h.store.dispatch(Action::Widget(WidgetAction::Input {
                side: Side::After,
                edit: TextEdit::Insert(c),
            }));
        }
        h.store.dispatch(Action::Resource(ResourceAction::Share));
        wait(&mut h.store, 10).await;

        let shown = h.store.state().widget.pane(Side::After).text();
        assert_eq!(shown, "xyzb");
        assert_eq!(h.mock.get("id1").map(|r| r.code_after), Some(shown));
        assert_eq!(h.store.state().editor.after, "xyzb");
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_sends_text_still_being_typed() {
        let mut owned = resource("a", "old", "new");
        owned.access_token = Some("secret".to_string());
        let mut h = harness(MockClient::with(vec![owned]));
        h.storage.remember_resource_token("a", "secret").unwrap();

        navigate(&mut h.store, "/a");
        wait(&mut h.store, 10).await;
        h.store.dispatch(Action::Widget(WidgetAction::Input {
            side: Side::Before,
            edit: TextEdit::Insert('!'),
        }));
        h.store.dispatch(Action::Resource(ResourceAction::Update));
        wait(&mut h.store, 10).await;

        assert_eq!(h.mock.writes(), 1);
        assert_eq!(h.mock.get("a").map(|r| r.code_before).as_deref(), Some("!old"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_diff_keeps_first_token() {
        let mut h = harness(MockClient::default());

        for (before, after) in [("a", "b"), ("c", "d")] {
            set_buffers(&mut h.store, before, after);
            h.store.dispatch(Action::Resource(ResourceAction::Share));
            wait(&mut h.store, 10).await;
        }

        assert_eq!(h.storage.resource_token("id1").as_deref(), Some("token-id1"));
        assert_eq!(h.storage.resource_token("id2").as_deref(), Some("token-id2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_share_rejects_empty_buffers() {
        let mut h = harness(MockClient::default());
        set_buffers(&mut h.store, "  ", "b");

        h.store.dispatch(Action::Resource(ResourceAction::Share));
        wait(&mut h.store, 10).await;

        assert_eq!(h.mock.writes(), 0);
        assert_eq!(
            latest_status(&h.store).map(|(kind, _)| kind),
            Some(StatusKind::Error)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_one_save_in_flight() {
        let mut h = harness(MockClient::default().with_write_delay(Duration::from_millis(100)));
        set_buffers(&mut h.store, "a", "b");

        h.store.dispatch(Action::Resource(ResourceAction::Share));
        h.store.dispatch(Action::Resource(ResourceAction::Share));
        wait(&mut h.store, 200).await;

        assert_eq!(h.mock.writes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_requires_matching_token() {
        let mut owned = resource("a", "old", "new");
        owned.access_token = Some("secret".to_string());
        let mut h = harness(MockClient::with(vec![owned]));

        navigate(&mut h.store, "/a");
        wait(&mut h.store, 10).await;
        assert!(!h.store.state().editor.show_update_button);

        h.store.dispatch(Action::Resource(ResourceAction::Update));
        wait(&mut h.store, 10).await;
        assert_eq!(h.mock.writes(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_refreshes_cached_content() {
        let mut owned = resource("a", "old", "new");
        owned.access_token = Some("secret".to_string());
        let mut h = harness(MockClient::with(vec![owned]));
        h.storage.remember_resource_token("a", "secret").unwrap();

        navigate(&mut h.store, "/a");
        wait(&mut h.store, 10).await;
        assert!(h.store.state().editor.show_update_button);
        assert!(h.client.cached(&DiffId::new("a")).is_some());

        set_buffers(&mut h.store, "edited", "new");
        h.store.dispatch(Action::Resource(ResourceAction::Update));
        wait(&mut h.store, 10).await;

        assert_eq!(h.mock.writes(), 1);
        assert!(h.client.cached(&DiffId::new("a")).is_none());
        assert_eq!(
            latest_status(&h.store).map(|(kind, _)| kind),
            Some(StatusKind::Success)
        );

        navigate(&mut h.store, "/");
        navigate(&mut h.store, "/a");
        wait(&mut h.store, 10).await;
        assert_eq!(h.store.state().editor.before, "edited");
    }
}
