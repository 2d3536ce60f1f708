use ghissues::app::resolve::{
    ResolveError, render_errors, resolve_add_star_mutation, resolve_issues_query,
    resolve_remove_star_mutation,
};
use ghissues::github::models::{
    AddStarData, GraphqlError, GraphqlResponse, IssueConnection, IssueEdge, IssueNode, IssuesData,
    Organization, PageInfo, ReactionConnection, RemoveStarData, Repository, StarPayload,
    Starrable, StargazerCount, ViewState,
};

fn make_edge(id: &str, title: &str) -> IssueEdge {
    IssueEdge {
        node: IssueNode {
            id: id.into(),
            title: title.into(),
            url: format!("https://github.com/org/repo/issues/{}", id),
            reactions: ReactionConnection { edges: vec![] },
        },
    }
}

fn make_org(edges: Vec<IssueEdge>, end_cursor: Option<&str>, has_next_page: bool) -> Organization {
    Organization {
        name: "org".into(),
        url: "https://github.com/org".into(),
        repository: Repository {
            id: "repo-id".into(),
            name: "repo".into(),
            url: "https://github.com/org/repo".into(),
            stargazers: StargazerCount { total_count: 10 },
            viewer_has_starred: false,
            issues: IssueConnection {
                total_count: 42,
                page_info: PageInfo {
                    end_cursor: end_cursor.map(String::from),
                    has_next_page,
                },
                edges,
            },
        },
    }
}

fn issues_response(organization: Option<Organization>) -> GraphqlResponse<IssuesData> {
    GraphqlResponse {
        data: Some(IssuesData { organization }),
        errors: None,
    }
}

fn state_with_org(organization: Organization) -> ViewState {
    ViewState {
        path: "org/repo".into(),
        organization: Some(organization),
        errors: None,
    }
}

fn add_star_response(viewer_has_starred: bool) -> GraphqlResponse<AddStarData> {
    GraphqlResponse {
        data: Some(AddStarData {
            add_star: StarPayload {
                starrable: Starrable { viewer_has_starred },
            },
        }),
        errors: None,
    }
}

fn remove_star_response(viewer_has_starred: bool) -> GraphqlResponse<RemoveStarData> {
    GraphqlResponse {
        data: Some(RemoveStarData {
            remove_star: StarPayload {
                starrable: Starrable { viewer_has_starred },
            },
        }),
        errors: None,
    }
}

fn edge_ids(state: &ViewState) -> Vec<String> {
    state
        .organization
        .as_ref()
        .unwrap()
        .repository
        .issues
        .edges
        .iter()
        .map(|edge| edge.node.id.clone())
        .collect()
}

// --- First page ---

#[test]
fn test_first_page_replaces_organization_verbatim() {
    let prev = state_with_org(make_org(vec![make_edge("old", "Old issue")], None, false));
    let response = issues_response(Some(make_org(
        vec![make_edge("i1", "One"), make_edge("i2", "Two")],
        Some("abc"),
        true,
    )));

    let next = resolve_issues_query(&response, None, &prev).unwrap();

    assert_eq!(edge_ids(&next), vec!["i1", "i2"]);
    assert_eq!(next.path, "org/repo");
    assert!(next.errors.is_none());
}

#[test]
fn test_first_page_independent_of_prior_state() {
    let response = issues_response(Some(make_org(vec![make_edge("i1", "One")], None, false)));

    let from_empty = resolve_issues_query(&response, None, &ViewState::new("org/repo".into()));
    let from_loaded = resolve_issues_query(
        &response,
        None,
        &state_with_org(make_org(vec![make_edge("zzz", "Other")], Some("xyz"), true)),
    );

    assert_eq!(edge_ids(&from_empty.unwrap()), vec!["i1"]);
    assert_eq!(edge_ids(&from_loaded.unwrap()), vec!["i1"]);
}

#[test]
fn test_first_page_clears_stale_errors() {
    let mut prev = state_with_org(make_org(vec![], None, false));
    prev.errors = Some(vec![GraphqlError {
        message: "old error".into(),
    }]);

    let next = resolve_issues_query(&issues_response(Some(make_org(vec![], None, false))), None, &prev)
        .unwrap();

    assert!(next.errors.is_none());
}

#[test]
fn test_first_page_with_errors_and_no_data() {
    let response: GraphqlResponse<IssuesData> = GraphqlResponse {
        data: None,
        errors: Some(vec![GraphqlError {
            message: "Not Found".into(),
        }]),
    };

    let next = resolve_issues_query(&response, None, &ViewState::new("bad/path".into())).unwrap();

    assert!(next.organization.is_none());
    let errors = next.errors.unwrap();
    assert_eq!(errors[0].message, "Not Found");
}

// --- Pagination ---

#[test]
fn test_cursor_page_concatenates_edges_in_order() {
    let first_page: Vec<IssueEdge> = (1..=5)
        .map(|i| make_edge(&format!("i{}", i), &format!("Issue {}", i)))
        .collect();
    let second_page: Vec<IssueEdge> = (6..=10)
        .map(|i| make_edge(&format!("i{}", i), &format!("Issue {}", i)))
        .collect();

    let prev = state_with_org(make_org(first_page, Some("abc"), true));
    let response = issues_response(Some(make_org(second_page, Some("def"), false)));

    let next = resolve_issues_query(&response, Some("abc"), &prev).unwrap();

    let ids = edge_ids(&next);
    assert_eq!(ids.len(), 10);
    assert_eq!(
        ids,
        vec!["i1", "i2", "i3", "i4", "i5", "i6", "i7", "i8", "i9", "i10"]
    );
}

#[test]
fn test_cursor_page_adopts_new_page_info() {
    let prev = state_with_org(make_org(vec![make_edge("i1", "One")], Some("abc"), true));
    let response = issues_response(Some(make_org(vec![make_edge("i2", "Two")], Some("def"), false)));

    let next = resolve_issues_query(&response, Some("abc"), &prev).unwrap();
    let issues = &next.organization.unwrap().repository.issues;

    assert_eq!(issues.page_info.end_cursor.as_deref(), Some("def"));
    assert!(!issues.page_info.has_next_page);
}

#[test]
fn test_cursor_page_does_not_dedup() {
    let prev = state_with_org(make_org(vec![make_edge("i1", "One")], Some("abc"), true));
    // Overlapping pagination window repeats i1
    let response = issues_response(Some(make_org(
        vec![make_edge("i1", "One"), make_edge("i2", "Two")],
        None,
        false,
    )));

    let next = resolve_issues_query(&response, Some("abc"), &prev).unwrap();
    assert_eq!(edge_ids(&next), vec!["i1", "i1", "i2"]);
}

#[test]
fn test_cursor_page_without_first_page_is_an_error() {
    let response = issues_response(Some(make_org(vec![], None, false)));
    let result = resolve_issues_query(&response, Some("abc"), &ViewState::new("org/repo".into()));
    assert_eq!(result.unwrap_err(), ResolveError::NoPriorPage);
}

#[test]
fn test_cursor_page_with_errors_keeps_prior_pages() {
    let prev = state_with_org(make_org(vec![make_edge("i1", "One")], Some("abc"), true));
    let response: GraphqlResponse<IssuesData> = GraphqlResponse {
        data: None,
        errors: Some(vec![GraphqlError {
            message: "timeout".into(),
        }]),
    };

    let next = resolve_issues_query(&response, Some("abc"), &prev).unwrap();

    assert_eq!(edge_ids(&next), vec!["i1"]);
    assert_eq!(next.errors.unwrap()[0].message, "timeout");
}

#[test]
fn test_cursor_page_with_neither_data_nor_errors() {
    let prev = state_with_org(make_org(vec![], None, false));
    let response: GraphqlResponse<IssuesData> = GraphqlResponse {
        data: None,
        errors: None,
    };

    let result = resolve_issues_query(&response, Some("abc"), &prev);
    assert_eq!(result.unwrap_err(), ResolveError::MissingData);
}

// --- Star mutations ---

#[test]
fn test_add_star_sets_flag_and_increments_count() {
    let prev = state_with_org(make_org(vec![], None, false));
    assert_eq!(
        prev.organization.as_ref().unwrap().repository.stargazers.total_count,
        10
    );

    let next = resolve_add_star_mutation(&add_star_response(true), &prev).unwrap();

    let repo = &next.organization.unwrap().repository;
    assert!(repo.viewer_has_starred);
    assert_eq!(repo.stargazers.total_count, 11);
}

#[test]
fn test_add_star_increment_is_unconditional() {
    // Starring twice keeps incrementing: the bump follows the flag's new
    // value, not a false-to-true transition.
    let prev = state_with_org(make_org(vec![], None, false));

    let once = resolve_add_star_mutation(&add_star_response(true), &prev).unwrap();
    let twice = resolve_add_star_mutation(&add_star_response(true), &once).unwrap();

    let repo = &twice.organization.unwrap().repository;
    assert!(repo.viewer_has_starred);
    assert_eq!(repo.stargazers.total_count, 12);
}

#[test]
fn test_add_star_without_repository_is_an_error() {
    let result =
        resolve_add_star_mutation(&add_star_response(true), &ViewState::new("org/repo".into()));
    assert_eq!(result.unwrap_err(), ResolveError::NoRepository);
}

#[test]
fn test_add_star_with_errors_keeps_count() {
    let prev = state_with_org(make_org(vec![], None, false));
    let response: GraphqlResponse<AddStarData> = GraphqlResponse {
        data: None,
        errors: Some(vec![GraphqlError {
            message: "forbidden".into(),
        }]),
    };

    let next = resolve_add_star_mutation(&response, &prev).unwrap();
    let repo = &next.organization.unwrap().repository;
    assert_eq!(repo.stargazers.total_count, 10);
    assert!(!repo.viewer_has_starred);
}

#[test]
fn test_remove_star_decrements_count() {
    let mut prev = state_with_org(make_org(vec![], None, false));
    prev.organization.as_mut().unwrap().repository.viewer_has_starred = true;

    let next = resolve_remove_star_mutation(&remove_star_response(false), &prev).unwrap();

    let repo = &next.organization.unwrap().repository;
    assert!(!repo.viewer_has_starred);
    assert_eq!(repo.stargazers.total_count, 9);
}

#[test]
fn test_remove_star_saturates_at_zero() {
    let mut prev = state_with_org(make_org(vec![], None, false));
    prev.organization.as_mut().unwrap().repository.stargazers.total_count = 0;

    let next = resolve_remove_star_mutation(&remove_star_response(false), &prev).unwrap();
    assert_eq!(
        next.organization.unwrap().repository.stargazers.total_count,
        0
    );
}

// --- Error rendering ---

#[test]
fn test_render_errors_single() {
    let errors = vec![GraphqlError {
        message: "Not Found".into(),
    }];
    assert_eq!(render_errors(&errors), "Something went wrong: Not Found");
}

#[test]
fn test_render_errors_joins_with_space() {
    let errors = vec![
        GraphqlError {
            message: "Not Found".into(),
        },
        GraphqlError {
            message: "Bad credentials".into(),
        },
    ];
    assert_eq!(
        render_errors(&errors),
        "Something went wrong: Not Found Bad credentials"
    );
}
