use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::*;
use super::request::{self, GraphqlRequest, RepoPath};

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        if !api_url.starts_with("https://") {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }

        let client = Client::builder()
            .user_agent("ghissues")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            token: token.to_string(),
        })
    }

    /// Send one GraphQL request and return the raw `{data, errors}` envelope.
    ///
    /// Only transport problems (network failures, non-2xx statuses, bodies
    /// that are not the expected JSON shape) are errors here. GraphQL-level
    /// errors stay inside the envelope so the state resolver can surface
    /// them next to whatever partial data came back.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
    ) -> Result<GraphqlResponse<T>> {
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&request.body())
            .send()
            .await
            .context("GitHub API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("GitHub API returned {}: {}", status, text);
        }

        resp.json()
            .await
            .context("Failed to parse GitHub response")
    }

    pub async fn fetch_issues(
        &self,
        path: &RepoPath,
        cursor: Option<&str>,
    ) -> Result<GraphqlResponse<IssuesData>> {
        let response = self
            .execute(&request::issues_query(path, cursor))
            .await?;
        debug!(path = %path, cursor = ?cursor, "Fetched issues page");
        Ok(response)
    }

    pub async fn add_star(&self, repository_id: &str) -> Result<GraphqlResponse<AddStarData>> {
        let response = self
            .execute(&request::add_star_mutation(repository_id))
            .await?;
        debug!(repository_id = repository_id, "Added star");
        Ok(response)
    }

    pub async fn remove_star(
        &self,
        repository_id: &str,
    ) -> Result<GraphqlResponse<RemoveStarData>> {
        let response = self
            .execute(&request::remove_star_mutation(repository_id))
            .await?;
        debug!(repository_id = repository_id, "Removed star");
        Ok(response)
    }
}
