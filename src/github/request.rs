use serde_json::{Value, json};
use thiserror::Error;

use super::queries;

/// An `organization/repository` pair as typed into the path bar.
///
/// Parsing is strict: exactly one `/` separating two non-empty segments.
/// Anything else is rejected up front instead of producing a query with
/// garbage variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub organization: String,
    pub repository: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("expected a path of the form <organization>/<repository>, got {0:?}")]
    MissingSeparator(String),
    #[error("expected exactly one '/' in path, got {0:?}")]
    TooManySeparators(String),
    #[error("organization and repository must both be non-empty in {0:?}")]
    EmptySegment(String),
}

impl RepoPath {
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let mut parts = path.split('/');
        let organization = parts.next().unwrap_or_default();
        let Some(repository) = parts.next() else {
            return Err(PathError::MissingSeparator(path.to_string()));
        };
        if parts.next().is_some() {
            return Err(PathError::TooManySeparators(path.to_string()));
        }
        if organization.is_empty() || repository.is_empty() {
            return Err(PathError::EmptySegment(path.to_string()));
        }
        Ok(Self {
            organization: organization.to_string(),
            repository: repository.to_string(),
        })
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}

/// A ready-to-send GraphQL request: document plus variables.
#[derive(Debug, Clone)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: Value,
}

impl GraphqlRequest {
    /// The POST body GitHub expects: `{"query": ..., "variables": ...}`.
    pub fn body(&self) -> Value {
        json!({
            "query": self.query,
            "variables": self.variables,
        })
    }
}

/// Build the open-issues query for a repository. `cursor` is `None` for the
/// first page; subsequent pages pass the `endCursor` of the previous one.
pub fn issues_query(path: &RepoPath, cursor: Option<&str>) -> GraphqlRequest {
    GraphqlRequest {
        query: queries::ISSUES_QUERY,
        variables: json!({
            "organization": path.organization,
            "repository": path.repository,
            "cursor": cursor,
        }),
    }
}

pub fn add_star_mutation(repository_id: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: queries::ADD_STAR_MUTATION,
        variables: json!({ "repositoryId": repository_id }),
    }
}

pub fn remove_star_mutation(repository_id: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: queries::REMOVE_STAR_MUTATION,
        variables: json!({ "repositoryId": repository_id }),
    }
}
