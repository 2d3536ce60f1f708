pub const ISSUES_QUERY: &str = r#"
query($organization: String!, $repository: String!, $cursor: String) {
  organization(login: $organization) {
    name
    url
    repository(name: $repository) {
      id
      name
      url
      stargazers {
        totalCount
      }
      viewerHasStarred
      issues(first: 5, after: $cursor, states: [OPEN]) {
        edges {
          node {
            id
            title
            url
            reactions(last: 3) {
              edges {
                node {
                  id
                  content
                }
              }
            }
          }
        }
        totalCount
        pageInfo {
          endCursor
          hasNextPage
        }
      }
    }
  }
}
"#;

pub const ADD_STAR_MUTATION: &str = r#"
mutation($repositoryId: ID!) {
  addStar(input: {starrableId: $repositoryId}) {
    starrable {
      viewerHasStarred
    }
  }
}
"#;

pub const REMOVE_STAR_MUTATION: &str = r#"
mutation($repositoryId: ID!) {
  removeStar(input: {starrableId: $repositoryId}) {
    starrable {
      viewerHasStarred
    }
  }
}
"#;
