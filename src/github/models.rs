use serde::{Deserialize, Serialize};

/// The `{data, errors}` envelope every GraphQL response arrives in. Both
/// fields can be absent; GitHub may return partial data alongside errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuesData {
    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub repository: Repository,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub stargazers: StargazerCount,
    pub viewer_has_starred: bool,
    pub issues: IssueConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StargazerCount {
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    pub edges: Vec<IssueEdge>,
    pub total_count: u32,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEdge {
    pub node: IssueNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueNode {
    pub id: String,
    pub title: String,
    pub url: String,
    pub reactions: ReactionConnection,
}

impl IssueNode {
    /// The issue's last few reactions in the order the server returned them.
    pub fn reactions(&self) -> impl Iterator<Item = &Reaction> {
        self.reactions.edges.iter().map(|edge| &edge.node)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionConnection {
    pub edges: Vec<ReactionEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEdge {
    pub node: Reaction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStarData {
    pub add_star: StarPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStarData {
    pub remove_star: StarPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarPayload {
    pub starrable: Starrable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starrable {
    pub viewer_has_starred: bool,
}

/// What the UI renders: the last successfully resolved organization snapshot
/// plus any GraphQL-level errors from the most recent response. Replaced
/// wholesale by the resolvers, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub path: String,
    pub organization: Option<Organization>,
    pub errors: Option<Vec<GraphqlError>>,
}

impl ViewState {
    pub fn new(path: String) -> Self {
        Self {
            path,
            organization: None,
            errors: None,
        }
    }

    pub fn repository(&self) -> Option<&Repository> {
        self.organization.as_ref().map(|org| &org.repository)
    }
}
