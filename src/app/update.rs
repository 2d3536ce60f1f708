use crate::app::actions::{Action, DataPayload, SideEffect};
use crate::app::resolve;
use crate::app::state::AppState;
use crate::github::request::RepoPath;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::MoveUp => {
            if state.issue_cursor > 0 {
                state.issue_cursor -= 1;
            }
            vec![]
        }
        Action::MoveDown => {
            let max = state.issues().len().saturating_sub(1);
            if state.issue_cursor < max {
                state.issue_cursor += 1;
            }
            vec![]
        }
        Action::EditPath => {
            state.input_active = true;
            vec![]
        }
        Action::PathInput(ch) => {
            if state.input_active {
                state.input.push(ch);
            }
            vec![]
        }
        Action::PathBackspace => {
            if state.input_active {
                state.input.pop();
            }
            vec![]
        }
        Action::Back => {
            if state.input_active {
                // Abandon the edit, restore whatever is currently shown.
                state.input_active = false;
                state.input = state.view.path.clone();
            } else if state.error_message.is_some() {
                state.error_message = None;
            }
            vec![]
        }
        Action::Submit => {
            let path = match RepoPath::parse(&state.input) {
                Ok(path) => path,
                Err(e) => {
                    state.error_message = Some(e.to_string());
                    return vec![];
                }
            };
            state.input_active = false;
            dispatch_first_page(state, path)
        }
        Action::Refresh => {
            let path = match RepoPath::parse(&state.view.path) {
                Ok(path) => path,
                Err(e) => {
                    state.error_message = Some(e.to_string());
                    return vec![];
                }
            };
            dispatch_first_page(state, path)
        }
        Action::FetchMore => {
            if state.loading || !state.has_next_page() {
                return vec![];
            }
            let Some(cursor) = state.end_cursor() else {
                return vec![];
            };
            let path = match RepoPath::parse(&state.view.path) {
                Ok(path) => path,
                Err(e) => {
                    state.error_message = Some(e.to_string());
                    return vec![];
                }
            };
            state.loading = true;
            state.fetch_seq += 1;
            vec![SideEffect::FetchIssues {
                path,
                cursor: Some(cursor),
                seq: state.fetch_seq,
            }]
        }
        Action::ToggleStar => {
            if state.starring {
                return vec![];
            }
            let Some(repo) = state.repository() else {
                return vec![];
            };
            let repository_id = repo.id.clone();
            let starred = repo.viewer_has_starred;
            state.starring = true;
            if starred {
                vec![SideEffect::RemoveStar { repository_id }]
            } else {
                vec![SideEffect::AddStar { repository_id }]
            }
        }
        Action::Select => match state.selected_issue_url() {
            Some(url) => vec![SideEffect::OpenUrl(url)],
            None => vec![],
        },
        Action::OpenInBrowser => {
            let url = state
                .selected_issue_url()
                .or_else(|| state.repository().map(|repo| repo.url.clone()))
                .or_else(|| state.view.organization.as_ref().map(|org| org.url.clone()));
            match url {
                Some(url) => vec![SideEffect::OpenUrl(url)],
                None => vec![],
            }
        }
        Action::DataLoaded(payload) => {
            apply_payload(state, payload);
            vec![]
        }
        Action::LoadError(msg) => {
            state.loading = false;
            state.starring = false;
            state.error_message = Some(msg);
            vec![]
        }
        Action::DismissError => {
            state.error_message = None;
            vec![]
        }
        Action::Tick => vec![],
    }
}

fn dispatch_first_page(state: &mut AppState, path: RepoPath) -> Vec<SideEffect> {
    state.view.path = path.to_string();
    state.loading = true;
    state.error_message = None;
    state.fetch_seq += 1;
    vec![SideEffect::FetchIssues {
        path,
        cursor: None,
        seq: state.fetch_seq,
    }]
}

fn apply_payload(state: &mut AppState, payload: DataPayload) {
    match payload {
        DataPayload::Issues {
            response,
            cursor,
            seq,
        } => {
            if seq != state.fetch_seq {
                // A newer fetch was dispatched after this one; its response
                // owns the screen now.
                tracing::debug!(seq, current = state.fetch_seq, "Dropping stale issues response");
                return;
            }
            state.loading = false;
            match resolve::resolve_issues_query(&response, cursor.as_deref(), &state.view) {
                Ok(next) => {
                    state.view = next;
                    if cursor.is_none() {
                        state.issue_cursor = 0;
                    } else {
                        state.clamp_issue_cursor();
                    }
                    state.last_refresh = Some(chrono::Utc::now());
                }
                Err(e) => {
                    state.error_message = Some(e.to_string());
                }
            }
        }
        DataPayload::StarAdded { response } => {
            state.starring = false;
            match resolve::resolve_add_star_mutation(&response, &state.view) {
                Ok(next) => state.view = next,
                Err(e) => state.error_message = Some(e.to_string()),
            }
        }
        DataPayload::StarRemoved { response } => {
            state.starring = false;
            match resolve::resolve_remove_star_mutation(&response, &state.view) {
                Ok(next) => state.view = next,
                Err(e) => state.error_message = Some(e.to_string()),
            }
        }
    }
}
