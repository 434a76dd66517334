//
//  clockify-rs
//  api/resources/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project types and the project node.
//!
//! Projects group time entries and tasks and optionally belong to a client.
//!
//! # Operations
//!
//! | Method | HTTP | Path | Body fields |
//! |--------|------|------|-------------|
//! | [`ProjectNode::all`] | `GET` | `/projects` | none |
//! | [`ProjectNode::get`] | `GET` | `/projects/{id}` | none |
//! | [`ProjectNode::add`] | `POST` | `/projects` | name, clientId, isPublic, color, note, billable, hourlyRate |
//! | [`ProjectNode::update`] | `PUT` | `/projects/{id}` | name, clientId, isPublic, hourlyRate, color, note, billable, archived, costRate |
//! | [`ProjectNode::update_estimate`] | `PATCH` | `/projects/{id}/estimate` | timeEstimate, budgetEstimate |
//! | [`ProjectNode::update_memberships`] | `PATCH` | `/projects/{id}/memberships` | memberships |
//! | [`ProjectNode::update_template`] | `PATCH` | `/projects/{id}/template` | isTemplate |
//! | [`ProjectNode::delete`] | `DELETE` | `/projects/{id}` | none |
//!
//! Paths are relative to `/workspaces/{ws}`.

use serde::{Deserialize, Serialize};

use super::{NodeBase, Task, TaskNode};
use crate::api::common::{
    nullable, BudgetEstimate, CostRate, CustomField, Estimate, HourlyRate, Membership, Result,
    TimeEstimate, Verb,
};
use crate::api::request::{Operation, ParamKey, RequestOption};

/// `page=1&page-size=50` unless overridden.
pub const PROJECT_ALL: Operation = Operation::listing(
    "project.all",
    &[(ParamKey::Page, "1"), (ParamKey::PageSize, "50")],
    &[
        ParamKey::Hydrated,
        ParamKey::Archived,
        ParamKey::Name,
        ParamKey::StrictNameSearch,
        ParamKey::Page,
        ParamKey::PageSize,
        ParamKey::Billable,
        ParamKey::Clients,
        ParamKey::ContainsClient,
        ParamKey::ClientStatus,
        ParamKey::Users,
        ParamKey::ContainsUsers,
        ParamKey::UserStatus,
        ParamKey::IsTemplate,
        ParamKey::SortColumn,
        ParamKey::SortOrder,
    ],
);

pub const PROJECT_GET: Operation = Operation::bare("project.get");

/// New projects are billable unless `Billable(false)` is given.
pub const PROJECT_ADD: Operation = Operation::create(
    "project.add",
    &[(ParamKey::Billable, "true")],
    &[
        ParamKey::Name,
        ParamKey::ClientId,
        ParamKey::IsPublic,
        ParamKey::Color,
        ParamKey::Note,
        ParamKey::Billable,
        ParamKey::HourlyRate,
    ],
);

pub const PROJECT_UPDATE: Operation = Operation::update(
    "project.update",
    &[(ParamKey::EstimateType, "AUTO")],
    &[ParamKey::EstimateType],
    &[
        ParamKey::Name,
        ParamKey::ClientId,
        ParamKey::IsPublic,
        ParamKey::HourlyRate,
        ParamKey::Color,
        ParamKey::Note,
        ParamKey::Billable,
        ParamKey::Archived,
        ParamKey::CostRate,
    ],
);

pub const PROJECT_UPDATE_ESTIMATE: Operation = Operation::update(
    "project.update_estimate",
    &[],
    &[],
    &[ParamKey::TimeEstimate, ParamKey::BudgetEstimate],
);

pub const PROJECT_UPDATE_MEMBERSHIPS: Operation = Operation::update(
    "project.update_memberships",
    &[],
    &[],
    &[ParamKey::Memberships],
);

pub const PROJECT_UPDATE_TEMPLATE: Operation = Operation::update(
    "project.update_template",
    &[],
    &[],
    &[ParamKey::IsTemplate],
);

pub const PROJECT_DELETE: Operation = Operation::bare("project.delete");

/// A project within a workspace.
///
/// Listings only fill `tasks`, `memberships` and `custom_fields` when
/// requested with `RequestOption::Hydrated(true)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub hourly_rate: Option<HourlyRate>,
    #[serde(deserialize_with = "nullable")]
    pub client_id: String,
    /// Client name as returned by the API.
    #[serde(rename = "clientName", alias = "client", deserialize_with = "nullable")]
    pub client_name: String,
    pub workspace_id: String,
    pub billable: bool,
    #[serde(deserialize_with = "nullable")]
    pub memberships: Vec<Membership>,
    #[serde(deserialize_with = "nullable")]
    pub color: String,
    pub estimate: Option<Estimate>,
    pub archived: bool,
    #[serde(deserialize_with = "nullable")]
    pub tasks: Vec<Task>,
    #[serde(deserialize_with = "nullable")]
    pub note: String,
    /// Total tracked time as an ISO 8601 duration.
    #[serde(deserialize_with = "nullable")]
    pub duration: String,
    pub cost_rate: Option<CostRate>,
    pub time_estimate: Option<TimeEstimate>,
    pub budget_estimate: Option<BudgetEstimate>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: Vec<CustomField>,
    pub public: bool,
    pub template: bool,
    pub favorite: bool,
}

/// Project operations scoped to one workspace.
///
/// # Example
///
/// ```rust,no_run
/// use clockify::Clockify;
/// use clockify::api::common::HourlyRate;
/// use clockify::api::request::{ClientStatus, RequestOption};
///
/// # async fn run() -> clockify::Result<()> {
/// let projects = Clockify::new("api-key")?.projects("workspace-id");
///
/// let active = projects
///     .all(&[
///         RequestOption::ClientStatus(ClientStatus::Active),
///         RequestOption::Hydrated(true),
///     ])
///     .await?;
///
/// let created = projects
///     .add("Website", &[
///         RequestOption::Color("#03A9F4".to_string()),
///         RequestOption::HourlyRate(HourlyRate::new(5000)),
///     ])
///     .await?;
/// println!("{} active, created {}", active.len(), created.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectNode {
    base: NodeBase,
    workspace_id: String,
}

impl ProjectNode {
    pub(crate) fn new(base: NodeBase, workspace_id: String) -> Self {
        Self { base, workspace_id }
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Task operations for one project of this workspace.
    pub fn tasks(&self, project_id: impl Into<String>) -> TaskNode {
        TaskNode::new(
            self.base.clone(),
            self.workspace_id.clone(),
            project_id.into(),
        )
    }

    /// Lists projects.
    ///
    /// Accepts every project filter: `Hydrated`, `Archived`, `Name`,
    /// `StrictNameSearch`, `Billable`, `Clients`, `ContainsClient`,
    /// `ClientStatus`, `Users`, `ContainsUsers`, `UserStatus`, `IsTemplate`,
    /// paging and sorting.
    pub async fn all(&self, options: &[RequestOption]) -> Result<Vec<Project>> {
        self.base
            .list(&PROJECT_ALL, &self.path(None, None), options)
            .await
    }

    pub async fn get(&self, id: &str, options: &[RequestOption]) -> Result<Project> {
        self.base
            .one(Verb::Get, &PROJECT_GET, &self.path(Some(id), None), &[], options)
            .await
    }

    /// Creates a project named `name`.
    pub async fn add(&self, name: &str, options: &[RequestOption]) -> Result<Project> {
        self.base
            .one(
                Verb::Post,
                &PROJECT_ADD,
                &self.path(None, None),
                &[(ParamKey::Name, name.to_string())],
                options,
            )
            .await
    }

    /// Updates a project's fields.
    ///
    /// `EstimateType` (default `AUTO`) is sent as a query parameter.
    pub async fn update(&self, id: &str, options: &[RequestOption]) -> Result<Project> {
        self.base
            .one(Verb::Put, &PROJECT_UPDATE, &self.path(Some(id), None), &[], options)
            .await
    }

    /// Replaces the time and budget estimates.
    pub async fn update_estimate(&self, id: &str, options: &[RequestOption]) -> Result<Project> {
        self.base
            .one(
                Verb::Patch,
                &PROJECT_UPDATE_ESTIMATE,
                &self.path(Some(id), Some("estimate")),
                &[],
                options,
            )
            .await
    }

    pub async fn update_memberships(
        &self,
        id: &str,
        options: &[RequestOption],
    ) -> Result<Project> {
        self.base
            .one(
                Verb::Patch,
                &PROJECT_UPDATE_MEMBERSHIPS,
                &self.path(Some(id), Some("memberships")),
                &[],
                options,
            )
            .await
    }

    /// Marks a project as a template, or unmarks it.
    pub async fn update_template(&self, id: &str, options: &[RequestOption]) -> Result<Project> {
        self.base
            .one(
                Verb::Patch,
                &PROJECT_UPDATE_TEMPLATE,
                &self.path(Some(id), Some("template")),
                &[],
                options,
            )
            .await
    }

    /// Deletes a project. Clockify only deletes archived projects.
    pub async fn delete(&self, id: &str, options: &[RequestOption]) -> Result<Project> {
        self.base
            .one(Verb::Delete, &PROJECT_DELETE, &self.path(Some(id), None), &[], options)
            .await
    }

    fn path<'a>(&'a self, id: Option<&'a str>, action: Option<&'a str>) -> Vec<&'a str> {
        let mut segments = vec!["workspaces", self.workspace_id.as_str(), "projects"];
        segments.extend(id);
        segments.extend(action);
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::decode_one;
    use crate::api::request::{build, resource_url, EstimateType};

    fn url() -> url::Url {
        resource_url("http://localhost/api/v1", &["workspaces", "ws", "projects"]).unwrap()
    }

    #[test]
    fn test_add_defaults_to_billable() {
        let request = build(&PROJECT_ADD, url(), &[(ParamKey::Name, "Site".to_string())], &[])
            .unwrap();
        assert_eq!(
            request.body,
            Some(serde_json::json!({ "name": "Site", "billable": true }))
        );
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_update_sends_estimate_type_in_query() {
        let request = build(
            &PROJECT_UPDATE,
            url(),
            &[],
            &[
                RequestOption::EstimateType(EstimateType::Manual),
                RequestOption::ClientId("c1".to_string()),
                RequestOption::IsPublic(true),
                RequestOption::CostRate(CostRate {
                    amount: 10,
                    currency: None,
                }),
            ],
        )
        .unwrap();
        assert_eq!(request.query.to_query_string(), "estimate-type=MANUAL");
        assert_eq!(
            request.body,
            Some(serde_json::json!({
                "clientId": "c1",
                "isPublic": true,
                "costRate": { "amount": 10 }
            }))
        );
    }

    #[test]
    fn test_update_memberships_body() {
        let request = build(
            &PROJECT_UPDATE_MEMBERSHIPS,
            url(),
            &[],
            &[RequestOption::Memberships(vec![Membership {
                user_id: "u1".to_string(),
                hourly_rate: Some(HourlyRate::new(100)),
                ..Membership::default()
            }])],
        )
        .unwrap();
        assert_eq!(
            request.body,
            Some(serde_json::json!({
                "memberships": [{ "userId": "u1", "hourlyRate": { "amount": 100 } }]
            }))
        );
    }

    #[test]
    fn test_listing_filters_reach_query() {
        let request = build(
            &PROJECT_ALL,
            url(),
            &[],
            &[
                RequestOption::Clients(vec!["a".to_string(), "b".to_string()]),
                RequestOption::ContainsClient(false),
                RequestOption::Color("#000".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            request.query.to_query_string(),
            "clients=a&clients=b&contains-client=false&page=1&page-size=50"
        );
    }

    #[test]
    fn test_decode_hydrated_project() {
        let project: Project = decode_one(
            br#"{
                "id": "p1",
                "name": "Site",
                "clientId": null,
                "clientName": "Acme",
                "hourlyRate": {"amount": 5000, "currency": "USD"},
                "costRate": null,
                "estimate": {"estimate": "PT0S", "type": "AUTO"},
                "memberships": [{"userId": "u1", "membershipType": "PROJECT"}],
                "tasks": [{"id": "t1", "name": "Design", "projectId": "p1"}],
                "customFields": [{"customFieldId": "cf", "value": 3}],
                "budgetEstimate": {"estimate": 100000, "type": "MANUAL", "active": true},
                "public": true
            }"#,
        )
        .unwrap();

        assert_eq!(project.client_name, "Acme");
        assert!(project.client_id.is_empty());
        assert!(project.cost_rate.is_none());
        assert_eq!(project.tasks[0].name, "Design");
        assert_eq!(project.custom_fields[0].value, serde_json::json!(3));
        assert_eq!(
            project.budget_estimate.and_then(|b| b.estimate),
            Some(100000)
        );
        assert!(project.public);
    }

    #[test]
    fn test_decode_project_with_null_estimate_fields() {
        let project: Project = decode_one(
            br#"{"id": "p1", "name": "Site", "estimate": {"estimate": null, "type": null}}"#,
        )
        .unwrap();
        assert_eq!(project.estimate, Some(Estimate::default()));
    }
}
