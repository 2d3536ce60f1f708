use chrono::{DateTime, Utc};

use crate::github::models::{IssueEdge, Repository, ViewState};

#[derive(Debug)]
pub struct AppState {
    // Data
    pub view: ViewState,
    pub last_refresh: Option<DateTime<Utc>>,

    // Request-generation guard: every issues fetch bumps this and carries
    // the new value; responses tagged with an older value are dropped so a
    // slow first page can never clobber a newer one.
    pub fetch_seq: u64,

    // Path input
    pub input: String,
    pub input_active: bool,

    // Issue list
    pub issue_cursor: usize,

    // UI flags
    pub loading: bool,
    pub starring: bool,
    pub error_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(default_path: String) -> Self {
        Self {
            view: ViewState::new(default_path.clone()),
            last_refresh: None,
            fetch_seq: 0,
            input: default_path,
            input_active: false,
            issue_cursor: 0,
            loading: true,
            starring: false,
            error_message: None,
            should_quit: false,
        }
    }

    pub fn repository(&self) -> Option<&Repository> {
        self.view.repository()
    }

    pub fn issues(&self) -> &[IssueEdge] {
        self.repository()
            .map(|repo| repo.issues.edges.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_issue_url(&self) -> Option<String> {
        self.issues()
            .get(self.issue_cursor)
            .map(|edge| edge.node.url.clone())
    }

    pub fn has_next_page(&self) -> bool {
        self.repository()
            .is_some_and(|repo| repo.issues.page_info.has_next_page)
    }

    pub fn end_cursor(&self) -> Option<String> {
        self.repository()
            .and_then(|repo| repo.issues.page_info.end_cursor.clone())
    }

    pub fn clamp_issue_cursor(&mut self) {
        let len = self.issues().len();
        if len == 0 {
            self.issue_cursor = 0;
        } else if self.issue_cursor >= len {
            self.issue_cursor = len - 1;
        }
    }
}
