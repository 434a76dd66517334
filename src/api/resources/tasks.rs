//
//  clockify-rs
//  api/resources/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Task types and the task node.
//!
//! Tasks live under a project: every path is
//! `/workspaces/{ws}/projects/{project}/tasks[/{id}]`.

use serde::{Deserialize, Serialize};

use super::NodeBase;
use crate::api::common::{nullable, CostRate, HourlyRate, Result, Verb};
use crate::api::request::{Operation, ParamKey, RequestOption};

/// `page=1&page-size=50` unless overridden.
pub const TASK_ALL: Operation = Operation::listing(
    "task.all",
    &[(ParamKey::Page, "1"), (ParamKey::PageSize, "50")],
    &[
        ParamKey::IsActive,
        ParamKey::Name,
        ParamKey::StrictNameSearch,
        ParamKey::Page,
        ParamKey::PageSize,
        ParamKey::SortColumn,
        ParamKey::SortOrder,
    ],
);

pub const TASK_GET: Operation = Operation::bare("task.get");

pub const TASK_ADD: Operation = Operation::create(
    "task.add",
    &[],
    &[
        ParamKey::Name,
        ParamKey::AssigneeIds,
        ParamKey::Estimate,
        ParamKey::Status,
        ParamKey::Billable,
    ],
);

pub const TASK_UPDATE: Operation = Operation::update(
    "task.update",
    &[],
    &[],
    &[
        ParamKey::Name,
        ParamKey::AssigneeIds,
        ParamKey::Estimate,
        ParamKey::Billable,
        ParamKey::Status,
    ],
);

pub const TASK_DELETE: Operation = Operation::bare("task.delete");

/// A task within a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(deserialize_with = "nullable")]
    pub assignee_ids: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub user_group_ids: Vec<String>,
    /// ISO 8601 duration, e.g. `PT2H`.
    #[serde(deserialize_with = "nullable")]
    pub estimate: String,
    /// `ACTIVE` or `DONE`.
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    /// Tracked time as an ISO 8601 duration.
    pub duration: Option<String>,
    pub billable: bool,
    pub hourly_rate: Option<HourlyRate>,
    pub cost_rate: Option<CostRate>,
}

/// Task operations scoped to one project.
///
/// Obtained from [`ProjectNode::tasks`](super::ProjectNode::tasks) or
/// [`Clockify::tasks`](crate::Clockify::tasks).
#[derive(Debug, Clone)]
pub struct TaskNode {
    base: NodeBase,
    workspace_id: String,
    project_id: String,
}

impl TaskNode {
    pub(crate) fn new(base: NodeBase, workspace_id: String, project_id: String) -> Self {
        Self {
            base,
            workspace_id,
            project_id,
        }
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Lists the project's tasks.
    ///
    /// Honours `IsActive`, `Name`, `StrictNameSearch`, paging and sorting.
    pub async fn all(&self, options: &[RequestOption]) -> Result<Vec<Task>> {
        self.base.list(&TASK_ALL, &self.path(None), options).await
    }

    pub async fn get(&self, id: &str, options: &[RequestOption]) -> Result<Task> {
        self.base
            .one(Verb::Get, &TASK_GET, &self.path(Some(id)), &[], options)
            .await
    }

    /// Creates a task named `name`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clockify::Clockify;
    /// use clockify::api::request::{RequestOption, TaskStatus};
    ///
    /// # async fn run() -> clockify::Result<()> {
    /// let tasks = Clockify::new("api-key")?.tasks("workspace-id", "project-id");
    /// let task = tasks
    ///     .add("Write docs", &[
    ///         RequestOption::AssigneeIds(vec!["user-1".to_string()]),
    ///         RequestOption::Estimate("PT4H".to_string()),
    ///         RequestOption::Status(TaskStatus::Active),
    ///     ])
    ///     .await?;
    /// println!("created {}", task.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add(&self, name: &str, options: &[RequestOption]) -> Result<Task> {
        self.base
            .one(
                Verb::Post,
                &TASK_ADD,
                &self.path(None),
                &[(ParamKey::Name, name.to_string())],
                options,
            )
            .await
    }

    pub async fn update(&self, id: &str, options: &[RequestOption]) -> Result<Task> {
        self.base
            .one(Verb::Put, &TASK_UPDATE, &self.path(Some(id)), &[], options)
            .await
    }

    /// Deletes a task and returns it as it was before deletion.
    pub async fn delete(&self, id: &str, options: &[RequestOption]) -> Result<Task> {
        self.base
            .one(Verb::Delete, &TASK_DELETE, &self.path(Some(id)), &[], options)
            .await
    }

    fn path<'a>(&'a self, id: Option<&'a str>) -> Vec<&'a str> {
        let mut segments = vec![
            "workspaces",
            self.workspace_id.as_str(),
            "projects",
            self.project_id.as_str(),
            "tasks",
        ];
        segments.extend(id);
        segments
    }
}
