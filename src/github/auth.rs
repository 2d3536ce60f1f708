use anyhow::{Result, bail};
use std::process::Command;
use tracing::debug;

/// Resolve the GitHub access token: `gh auth token` first, then the
/// `GITHUB_TOKEN` and `GH_TOKEN` environment variables.
pub fn resolve_token() -> Result<String> {
    if let Some(token) = gh_cli_token() {
        debug!("Token resolved via gh CLI");
        return Ok(token);
    }

    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            debug!(var = var, "Token resolved via environment");
            return Ok(token);
        }
    }

    bail!(
        "Could not resolve GitHub token. Please either:\n\
         - Run `gh auth login` to authenticate with the GitHub CLI\n\
         - Set the GITHUB_TOKEN environment variable\n\
         - Set the GH_TOKEN environment variable"
    )
}

fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}
