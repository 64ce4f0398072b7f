//! End-to-end submit flow: reducer + real HTTP client against a mock server.

use std::sync::Arc;
use std::time::Duration;

use github_cards::core::action::{Action, Effect, update};
use github_cards::core::state::App;
use github_cards::lookup::{GithubLookup, ProfileLookup};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn app_for(server: &MockServer) -> App {
    let lookup = GithubLookup::new(&server.uri(), None, Duration::from_secs(5)).unwrap();
    App::new(Arc::new(lookup), "Github cards".to_string())
}

/// Types and submits `username`, performs the lookup the reducer asks for,
/// and feeds the result back in, the way the event loop does.
async fn submit(app: &mut App, username: &str) {
    update(app, Action::InputChanged(username.to_string()));
    let Effect::SpawnLookup {
        request_id,
        username,
    } = update(app, Action::Submit)
    else {
        panic!("Submit should request a lookup");
    };

    let action = match app.lookup.fetch_profile(&username).await {
        Ok(profile) => Action::LookupSucceeded {
            request_id,
            profile,
        },
        Err(error) => Action::LookupFailed { request_id, error },
    };
    assert_eq!(update(app, action), Effect::None);
}

async fn mount_user(server: &MockServer, login: &str, id: u64, name: &str, company: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{login}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": login,
            "id": id,
            "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
            "name": name,
            "company": company
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_octocat_scenario() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "avatar_url": "u.png",
            "name": "The Octocat",
            "company": "GitHub"
        })))
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    assert_eq!(app.title, "Github cards");

    submit(&mut app, "octocat").await;

    assert_eq!(app.profiles().len(), 1);
    let card = &app.profiles().as_slice()[0];
    assert_eq!(card.avatar_url, "u.png");
    assert_eq!(card.name, "The Octocat");
    assert_eq!(card.company, "GitHub");
    assert_eq!(app.form().input(), "");
}

#[tokio::test]
async fn test_unknown_user_scenario() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/doesnotexist123xyz"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
        )
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    submit(&mut app, "doesnotexist123xyz").await;

    assert!(app.profiles().is_empty());
    assert_eq!(app.form().input(), "doesnotexist123xyz");
    assert!(!app.form().is_submitting());
    assert!(app.error.as_deref().unwrap().contains("Not Found"));
}

#[tokio::test]
async fn test_cards_accumulate_in_submission_order() {
    let mock_server = MockServer::start().await;
    mount_user(&mock_server, "gaearon", 810438, "Dan Abramov", "").await;
    mount_user(&mock_server, "sophiebits", 6820, "Sophie Alpert", "Humanloop").await;
    mount_user(&mock_server, "bvaughn", 29597, "Brian Vaughn", "Replay.io").await;

    let mut app = app_for(&mock_server);
    for user in ["gaearon", "sophiebits", "bvaughn", "gaearon"] {
        submit(&mut app, user).await;
    }

    let names: Vec<&str> = app.profiles().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Dan Abramov", "Sophie Alpert", "Brian Vaughn", "Dan Abramov"]
    );
    assert_eq!(app.profiles().as_slice()[0].company, "");
    assert_eq!(app.form().input(), "");
}

#[tokio::test]
async fn test_failure_between_successes_changes_nothing() {
    let mock_server = MockServer::start().await;
    mount_user(&mock_server, "gaearon", 810438, "Dan Abramov", "").await;
    Mock::given(method("GET"))
        .and(path("/users/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    submit(&mut app, "gaearon").await;
    submit(&mut app, "flaky").await;

    assert_eq!(app.profiles().len(), 1);
    assert_eq!(app.form().input(), "flaky");

    // Retyping recovers normally
    submit(&mut app, "gaearon").await;
    assert_eq!(app.profiles().len(), 2);
    assert!(app.error.is_none());
}

#[tokio::test]
async fn test_dot_segment_username_never_reaches_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    submit(&mut app, "..").await;

    assert!(app.profiles().is_empty());
    assert_eq!(app.form().input(), "..");
    assert!(!app.form().is_submitting());
    assert!(app.error.as_deref().unwrap().contains("invalid username '..'"));
}
