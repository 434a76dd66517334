//
//  clockify-rs
//  api/resources/clients.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client types and the client node.
//!
//! A client is the customer a project is billed to.
//!
//! # Operations
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`ClientNode::all`] | `GET` | `/workspaces/{ws}/clients` |
//! | [`ClientNode::get`] | `GET` | `/workspaces/{ws}/clients/{id}` |
//! | [`ClientNode::add`] | `POST` | `/workspaces/{ws}/clients` |
//! | [`ClientNode::update`] | `PUT` | `/workspaces/{ws}/clients/{id}` |
//! | [`ClientNode::delete`] | `DELETE` | `/workspaces/{ws}/clients/{id}` |

use serde::{Deserialize, Serialize};

use super::NodeBase;
use crate::api::common::{nullable, Result, Verb};
use crate::api::request::{Operation, ParamKey, RequestOption};

/// `archived=false&page=1&page-size=50&sort-order=DESCENDING` unless overridden.
pub const CLIENT_ALL: Operation = Operation::listing(
    "client.all",
    &[
        (ParamKey::Archived, "false"),
        (ParamKey::Page, "1"),
        (ParamKey::PageSize, "50"),
        (ParamKey::SortOrder, "DESCENDING"),
    ],
    &[
        ParamKey::Archived,
        ParamKey::Name,
        ParamKey::Page,
        ParamKey::PageSize,
        ParamKey::SortColumn,
        ParamKey::SortOrder,
    ],
);

pub const CLIENT_GET: Operation = Operation::bare("client.get");

pub const CLIENT_ADD: Operation = Operation::create("client.add", &[], &[ParamKey::Name]);

pub const CLIENT_UPDATE: Operation = Operation::update(
    "client.update",
    &[(ParamKey::ArchiveProjects, "false")],
    &[ParamKey::ArchiveProjects],
    &[ParamKey::Name, ParamKey::Archived],
);

pub const CLIENT_DELETE: Operation = Operation::bare("client.delete");

/// A client within a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub workspace_id: String,

    #[serde(default)]
    pub archived: bool,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub note: String,
}

/// Client operations scoped to one workspace.
///
/// # Example
///
/// ```rust,no_run
/// use clockify::Clockify;
/// use clockify::api::request::RequestOption;
///
/// # async fn run() -> clockify::Result<()> {
/// let clients = Clockify::new("api-key")?.clients("workspace-id");
///
/// let created = clients.add("Acme", &[]).await?;
/// clients
///     .update(&created.id, &[
///         RequestOption::Name("Acme Corp".to_string()),
///         RequestOption::Archived(true),
///         RequestOption::ArchiveProjects(true),
///     ])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientNode {
    base: NodeBase,
    workspace_id: String,
}

impl ClientNode {
    pub(crate) fn new(base: NodeBase, workspace_id: String) -> Self {
        Self { base, workspace_id }
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Lists clients.
    ///
    /// Honours `Archived`, `Name`, `Page`, `PageSize`, `SortColumn` and
    /// `SortOrder`.
    pub async fn all(&self, options: &[RequestOption]) -> Result<Vec<Client>> {
        self.base
            .list(&CLIENT_ALL, &self.path(None), options)
            .await
    }

    pub async fn get(&self, id: &str, options: &[RequestOption]) -> Result<Client> {
        self.base
            .one(Verb::Get, &CLIENT_GET, &self.path(Some(id)), &[], options)
            .await
    }

    /// Creates a client named `name`.
    pub async fn add(&self, name: &str, options: &[RequestOption]) -> Result<Client> {
        self.base
            .one(
                Verb::Post,
                &CLIENT_ADD,
                &self.path(None),
                &[(ParamKey::Name, name.to_string())],
                options,
            )
            .await
    }

    /// Updates a client.
    ///
    /// `Name` and `Archived` go into the body; `ArchiveProjects` (default
    /// `false`) stays in the query string.
    pub async fn update(&self, id: &str, options: &[RequestOption]) -> Result<Client> {
        self.base
            .one(Verb::Put, &CLIENT_UPDATE, &self.path(Some(id)), &[], options)
            .await
    }

    /// Deletes a client and returns it as it was before deletion.
    pub async fn delete(&self, id: &str, options: &[RequestOption]) -> Result<Client> {
        self.base
            .one(Verb::Delete, &CLIENT_DELETE, &self.path(Some(id)), &[], options)
            .await
    }

    fn path<'a>(&'a self, id: Option<&'a str>) -> Vec<&'a str> {
        let mut segments = vec!["workspaces", self.workspace_id.as_str(), "clients"];
        segments.extend(id);
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{build, resource_url};

    fn url() -> url::Url {
        resource_url("http://localhost/api/v1", &["workspaces", "ws", "clients"]).unwrap()
    }

    #[test]
    fn test_all_defaults() {
        let request = build(&CLIENT_ALL, url(), &[], &[]).unwrap();
        assert_eq!(
            request.query.to_query_string(),
            "archived=false&page=1&page-size=50&sort-order=DESCENDING"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_update_keeps_fields_out_of_query() {
        let request = build(
            &CLIENT_UPDATE,
            url(),
            &[],
            &[
                RequestOption::ArchiveProjects(true),
                RequestOption::Name("New".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(request.query.to_query_string(), "archive-projects=true");
        assert_eq!(request.body, Some(serde_json::json!({ "name": "New" })));
    }

    #[test]
    fn test_add_uses_required_name() {
        let request = build(&CLIENT_ADD, url(), &[(ParamKey::Name, "Acme".to_string())], &[
            RequestOption::Page(3),
        ])
        .unwrap();
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(serde_json::json!({ "name": "Acme" })));
    }

    #[test]
    fn test_client_serializes_camel_case() {
        let client = Client {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            workspace_id: "ws".to_string(),
            archived: false,
            note: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&client).unwrap(),
            serde_json::json!({
                "id": "c1",
                "name": "Acme",
                "workspaceId": "ws",
                "archived": false
            })
        );
    }
}
