use crate::github::models::{AddStarData, GraphqlResponse, IssuesData, RemoveStarData};
use crate::github::request::RepoPath;

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Back,
    EditPath,
    PathInput(char),
    PathBackspace,
    Submit,
    FetchMore,
    ToggleStar,
    Refresh,
    OpenInBrowser,
    DataLoaded(DataPayload),
    LoadError(String),
    DismissError,
    Quit,
    Tick,
}

#[derive(Debug)]
pub enum DataPayload {
    Issues {
        response: GraphqlResponse<IssuesData>,
        cursor: Option<String>,
        seq: u64,
    },
    StarAdded {
        response: GraphqlResponse<AddStarData>,
    },
    StarRemoved {
        response: GraphqlResponse<RemoveStarData>,
    },
}

#[derive(Debug)]
pub enum SideEffect {
    FetchIssues {
        path: RepoPath,
        cursor: Option<String>,
        seq: u64,
    },
    AddStar {
        repository_id: String,
    },
    RemoveStar {
        repository_id: String,
    },
    OpenUrl(String),
}
