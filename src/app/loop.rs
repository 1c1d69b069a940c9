use crate::app::{
    action::Action, command::Command, focus::FocusTimer, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::event_source::EventSource;
use crate::domain::models::PaletteEvent;
use crate::infrastructure::catalog::load_catalog;

use anyhow::Result;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs the host with the palette attached to `source` until quit.
///
/// The palette subscribes once on entry and drops its subscription on return.
/// Actions arriving on `host_actions` (`SetOpen`, `ReplaceItems`,
/// `SetPlaceholder`, ...) are applied like any other input. `Selected` and
/// `OpenChanged` notifications go to `palette_events` when a sender is given.
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    source: &dyn EventSource,
    mut host_actions: Option<mpsc::Receiver<Action>>,
    palette_events: Option<mpsc::UnboundedSender<PaletteEvent>>,
) -> Result<AppState> {
    let mut event_rx = source.subscribe();
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut focus = FocusTimer::default();

    let _watcher = match &app_state.catalog_path {
        Some(path) => watch_catalog(path, action_tx.clone())
            .inspect_err(|e| warn!(path = %path.display(), "not watching catalog: {e}"))
            .ok(),
        None => None,
    };

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("event source closed");
                    break;
                }
            },

            // Timers and background results
            Some(a) = action_rx.recv() => Some(a),

            // Host requests
            Some(a) = recv_host(&mut host_actions) => {
                debug!(action = ?a, "host action");
                Some(a)
            }
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let mut pending: VecDeque<Command> = reducer::update(&mut app_state, action).into();
            while let Some(cmd) = pending.pop_front() {
                let follow_up = handle_command(
                    cmd,
                    &mut app_state,
                    &mut focus,
                    &action_tx,
                    palette_events.as_ref(),
                );
                pending.extend(follow_up);
            }

            if app_state.should_quit {
                break;
            }
        }
    }

    Ok(app_state)
}

async fn recv_host(rx: &mut Option<mpsc::Receiver<Action>>) -> Option<Action> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

pub(crate) fn handle_command(
    command: Command,
    app_state: &mut AppState,
    focus: &mut FocusTimer,
    tx: &mpsc::Sender<Action>,
    palette_events: Option<&mpsc::UnboundedSender<PaletteEvent>>,
) -> Vec<Command> {
    match command {
        Command::ScheduleFocus(delay) => {
            focus.schedule(delay, tx.clone());
            Vec::new()
        }
        Command::CancelFocus => {
            focus.cancel();
            Vec::new()
        }
        Command::Emit(event) => {
            if let Some(out) = palette_events {
                let _ = out.send(event.clone());
            }
            // The host reacts to the selection like any other listener.
            match event {
                PaletteEvent::Selected(item) => {
                    reducer::update(app_state, Action::Dispatch(item))
                }
                PaletteEvent::OpenChanged(_) => Vec::new(),
            }
        }
        Command::LoadCatalog(path) => {
            let tx = tx.clone();
            tokio::task::spawn_blocking(move || {
                let result = load_catalog(&path).map_err(|e| e.to_string());
                let _ = tx.blocking_send(Action::CatalogLoaded(result));
            });
            Vec::new()
        }
    }
}

/// Watches the catalog's directory (editors often replace files on save) and
/// asks for a reload once changes to the file settle.
fn watch_catalog(path: &Path, tx: mpsc::Sender<Action>) -> Result<RecommendedWatcher> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().map(ToOwned::to_owned);

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let touches_catalog = event
                .paths
                .iter()
                .any(|p| p.file_name().map(ToOwned::to_owned) == file_name);
            if touches_catalog && !event.kind.is_access() {
                let _ = notify_tx.try_send(());
            }
        }
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    debug!(dir = %dir.display(), "watching catalog");

    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(RELOAD_DEBOUNCE) => {
                        let _ = tx.send(Action::ReloadCatalog).await;
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(watcher)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
