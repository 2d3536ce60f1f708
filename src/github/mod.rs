pub mod auth;
pub mod graphql;
pub mod models;
pub mod queries;
pub mod request;

pub use graphql::GithubClient;
pub use models::*;
pub use request::{GraphqlRequest, PathError, RepoPath};
