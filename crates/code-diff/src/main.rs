use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod actions;
mod cli;
mod dispatcher;
mod editor;
mod languages;
mod logger;
mod middleware;
mod reducers;
mod routes;
mod session;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod utils;
mod view_models;
mod views;

use actions::{Action, EditorAction, GlobalAction};
use cli::{Cli, Command};
use code_diff_client::{CacheMode, CachedDiffClient, HttpDiffClient, SessionCache, TokenSource};
use code_diff_config::{AppConfig, LocalStorage};
use middleware::{
    editor_adapter_middleware::EditorAdapterMiddleware, editor_middleware::EditorMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    management_middleware::ManagementMiddleware, prompt_middleware::PromptMiddleware,
    resource_middleware::ResourceMiddleware,
};
use routes::Route;
use state::{AppState, Side};
use store::Store;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting code-diff, logging to {:?}", log_file);

    let config = AppConfig::load().with_overrides(cli.api_url.clone(), cli.share_url.clone());
    let storage = LocalStorage::open_default()?;
    let tokens: Arc<dyn TokenSource> = Arc::new(storage.clone());
    let http = HttpDiffClient::new(&config.api_base_url, tokens)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    match cli.command {
        Some(Command::Login { ref token }) => {
            return runtime.block_on(session::login(&http, &storage, token));
        }
        Some(Command::Logout) => return session::logout(&storage),
        None => {}
    }

    // One cache per run, shared by every consumer of the client
    let cache = Arc::new(Mutex::new(SessionCache::new()));
    let client = CachedDiffClient::new(http, cache, CacheMode::ReadWrite);

    let handle = runtime.handle().clone();
    let mut store = Store::new(AppState::new(config.clone()));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PromptMiddleware::new()));
    store.add_middleware(Box::new(EditorAdapterMiddleware::new(
        handle.clone(),
        Duration::from_millis(config.edit_debounce_ms),
    )));
    store.add_middleware(Box::new(EditorMiddleware::new(handle.clone())));
    store.add_middleware(Box::new(ResourceMiddleware::new(
        handle.clone(),
        client.clone(),
        storage,
        Duration::from_millis(config.not_found_redirect_ms),
    )));
    store.add_middleware(Box::new(ManagementMiddleware::new(handle, client)));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = start(&mut terminal, &mut store, &cli).and_then(|_| run_app(&mut terminal, &mut store));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Abort whatever is still in flight
    runtime.shutdown_timeout(Duration::from_millis(100));

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting code-diff");
    result
}

/// Initial actions: terminal size, route and command line files
fn start(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    cli: &Cli,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize {
        width: size.width,
        height: size.height,
    }));

    let route = cli.route.as_deref().map(Route::parse).unwrap_or_default();
    store.dispatch(Action::Navigate(route));

    if let Some(language) = &cli.language {
        store.dispatch(Action::Editor(EditorAction::SetLanguage(language.clone())));
    }
    for (side, path) in [(Side::Before, &cli.before), (Side::After, &cli.after)] {
        if let Some(path) = path {
            store.dispatch(Action::Editor(EditorAction::UploadFile {
                side,
                path: path.clone(),
            }));
        }
    }
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Only key presses, not releases
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Paste(text) => store.dispatch(Action::Global(GlobalAction::Paste(text))),
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize { width, height }))
                }
                _ => {}
            }
        }

        // Results from spawned tasks and timers
        store.process_pending();
    }

    Ok(())
}
