//! Shared helpers for the integration tests.
//!
//! Every test gets its own `mockito` server; the client under test points its
//! base endpoint at `{server}/api/v1`.

#![allow(dead_code)]

use clockify::{Clockify, Endpoint};
use mockito::{Matcher, Server, ServerGuard};

pub const API_KEY: &str = "test-key";
pub const WORKSPACE: &str = "ws1";
pub const PROJECT: &str = "p1";

/// Routes log output through the test harness; `RUST_LOG=clockify=debug` shows requests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (ServerGuard, Clockify) {
    init_tracing();
    let server = Server::new_async().await;
    let clockify = client_for(&server.url());
    (server, clockify)
}

pub fn client_for(url: &str) -> Clockify {
    Clockify::new(API_KEY)
        .expect("client")
        .with_endpoint(Endpoint {
            base: format!("{url}/api/v1"),
            ..Endpoint::empty()
        })
}

pub fn clients_path() -> String {
    format!("/api/v1/workspaces/{WORKSPACE}/clients")
}

pub fn projects_path() -> String {
    format!("/api/v1/workspaces/{WORKSPACE}/projects")
}

pub fn tasks_path() -> String {
    format!("/api/v1/workspaces/{WORKSPACE}/projects/{PROJECT}/tasks")
}

/// Matches a query string exactly, in the key order the client renders it.
pub fn exact_query(query: &str) -> Matcher {
    Matcher::Exact(query.to_string())
}

pub fn client_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "workspaceId": WORKSPACE,
        "archived": false
    })
}

pub fn project_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "workspaceId": WORKSPACE,
        "clientId": "",
        "billable": true,
        "color": "#03A9F4",
        "archived": false,
        "public": false,
        "template": false
    })
}

pub fn task_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "projectId": PROJECT,
        "assigneeIds": [],
        "estimate": "PT0S",
        "status": "ACTIVE",
        "billable": true
    })
}
