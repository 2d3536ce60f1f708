use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, DataPayload, SideEffect};
use crate::app::state::AppState;
use crate::app::update::update;
use crate::app::view;
use crate::github::GithubClient;
use crate::util::config::AppConfig;

pub async fn run(config: AppConfig, client: GithubClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
) -> Result<()> {
    let mut state = AppState::new(config.github.default_path.clone());

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Fetch the first page of the default path on startup
    let effects = update(&mut state, Action::Refresh);
    for effect in effects {
        spawn_side_effect(effect, &client, &action_tx);
    }

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            spawn_side_effect(effect, &client, &action_tx);
                        }
                    }
            }
            // Actions from background tasks
            Some(action) = action_rx.recv() => {
                let effects = update(&mut state, action);
                for effect in effects {
                    spawn_side_effect(effect, &client, &action_tx);
                }
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    // Handle error modal first
    if state.error_message.is_some() {
        return match code {
            KeyCode::Esc => Some(Action::DismissError),
            _ => None,
        };
    }

    // Handle path editing mode
    if state.input_active {
        return match code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::PathBackspace),
            KeyCode::Char(c) => Some(Action::PathInput(*c)),
            _ => None,
        };
    }

    // Normal mode
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Enter | KeyCode::Char('l') => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('e') | KeyCode::Char('/') => Some(Action::EditPath),
        KeyCode::Char('m') => Some(Action::FetchMore),
        KeyCode::Char('s') => Some(Action::ToggleStar),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('o') => Some(Action::OpenInBrowser),
        _ => None,
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    client: &GithubClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::FetchIssues { path, cursor, seq } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(path = %path, cursor = ?cursor, seq, "Fetching issues");

                match client.fetch_issues(&path, cursor.as_deref()).await {
                    Ok(response) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::Issues {
                            response,
                            cursor,
                            seq,
                        }));
                    }
                    Err(e) => {
                        error!(path = %path, error = %e, "Failed to fetch issues");
                        let _ = tx.send(Action::LoadError(format!(
                            "Failed to fetch issues for {}: {}",
                            path, e
                        )));
                    }
                }
            });
        }
        SideEffect::AddStar { repository_id } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(repository_id = %repository_id, "Adding star");

                match client.add_star(&repository_id).await {
                    Ok(response) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::StarAdded { response }));
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to add star");
                        let _ = tx.send(Action::LoadError(format!("Failed to star: {}", e)));
                    }
                }
            });
        }
        SideEffect::RemoveStar { repository_id } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(repository_id = %repository_id, "Removing star");

                match client.remove_star(&repository_id).await {
                    Ok(response) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::StarRemoved { response }));
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to remove star");
                        let _ = tx.send(Action::LoadError(format!("Failed to unstar: {}", e)));
                    }
                }
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}
