//! Pure reducers that turn a GraphQL response plus the previous view
//! snapshot into the next one. No IO here: the event loop feeds responses
//! in and stores whatever comes out.

use thiserror::Error;

use crate::github::models::{
    AddStarData, GraphqlError, GraphqlResponse, IssuesData, RemoveStarData, ViewState,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("received a paginated response before any first page was loaded")]
    NoPriorPage,
    #[error("received a star mutation response with no repository loaded")]
    NoRepository,
    #[error("response carried neither data nor errors")]
    MissingData,
}

/// Resolve an issues-query response into the next view snapshot.
///
/// A first-page response (`cursor` is `None`) replaces the snapshot
/// wholesale: the organization is taken verbatim from the response and any
/// previously shown errors are cleared unless the response carries its own.
///
/// A cursor page appends the new edges after the ones already held and
/// adopts everything else (page info, counts, star state) from the new
/// response. Calling with a cursor before a first page exists is a caller
/// contract violation and fails with [`ResolveError::NoPriorPage`].
pub fn resolve_issues_query(
    response: &GraphqlResponse<IssuesData>,
    cursor: Option<&str>,
    prev: &ViewState,
) -> Result<ViewState, ResolveError> {
    let organization = response
        .data
        .as_ref()
        .and_then(|data| data.organization.clone());

    if cursor.is_none() {
        return Ok(ViewState {
            path: prev.path.clone(),
            organization,
            errors: response.errors.clone(),
        });
    }

    let prev_org = prev.organization.as_ref().ok_or(ResolveError::NoPriorPage)?;

    let Some(mut merged) = organization else {
        if response.errors.is_none() {
            return Err(ResolveError::MissingData);
        }
        // Errors without data: keep showing the pages we have.
        return Ok(ViewState {
            path: prev.path.clone(),
            organization: Some(prev_org.clone()),
            errors: response.errors.clone(),
        });
    };

    let new_edges = std::mem::take(&mut merged.repository.issues.edges);
    let mut edges = prev_org.repository.issues.edges.clone();
    edges.extend(new_edges);
    merged.repository.issues.edges = edges;

    Ok(ViewState {
        path: prev.path.clone(),
        organization: Some(merged),
        errors: response.errors.clone(),
    })
}

/// Resolve an addStar mutation response.
///
/// The starred flag comes from the server, but the mutation payload carries
/// no stargazer count, so the local count is bumped by exactly one. The bump
/// is unconditional on the flag's new value: starring an already-starred
/// repository still increments.
pub fn resolve_add_star_mutation(
    response: &GraphqlResponse<AddStarData>,
    prev: &ViewState,
) -> Result<ViewState, ResolveError> {
    let prev_org = prev.organization.as_ref().ok_or(ResolveError::NoRepository)?;

    let Some(data) = response.data.as_ref() else {
        if response.errors.is_none() {
            return Err(ResolveError::MissingData);
        }
        return Ok(ViewState {
            path: prev.path.clone(),
            organization: Some(prev_org.clone()),
            errors: response.errors.clone(),
        });
    };

    let mut organization = prev_org.clone();
    organization.repository.viewer_has_starred = data.add_star.starrable.viewer_has_starred;
    organization.repository.stargazers.total_count += 1;

    Ok(ViewState {
        path: prev.path.clone(),
        organization: Some(organization),
        errors: response.errors.clone(),
    })
}

/// Resolve a removeStar mutation response: the optimistic mirror of
/// [`resolve_add_star_mutation`], decrementing the local count (never below
/// zero).
pub fn resolve_remove_star_mutation(
    response: &GraphqlResponse<RemoveStarData>,
    prev: &ViewState,
) -> Result<ViewState, ResolveError> {
    let prev_org = prev.organization.as_ref().ok_or(ResolveError::NoRepository)?;

    let Some(data) = response.data.as_ref() else {
        if response.errors.is_none() {
            return Err(ResolveError::MissingData);
        }
        return Ok(ViewState {
            path: prev.path.clone(),
            organization: Some(prev_org.clone()),
            errors: response.errors.clone(),
        });
    };

    let mut organization = prev_org.clone();
    organization.repository.viewer_has_starred = data.remove_star.starrable.viewer_has_starred;
    organization.repository.stargazers.total_count =
        organization.repository.stargazers.total_count.saturating_sub(1);

    Ok(ViewState {
        path: prev.path.clone(),
        organization: Some(organization),
        errors: response.errors.clone(),
    })
}

/// The message line shown when a response carried GraphQL-level errors.
pub fn render_errors(errors: &[GraphqlError]) -> String {
    let joined = errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!("Something went wrong: {joined}")
}
