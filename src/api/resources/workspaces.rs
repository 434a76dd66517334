//
//  clockify-rs
//  api/resources/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace types and the workspace node.
//!
//! Workspaces are the top-level unit in Clockify. Every other resource
//! (clients, projects, tasks) lives inside one, so [`WorkspaceNode`] is also
//! where the nested nodes are derived from.
//!
//! # Example
//!
//! ```rust,no_run
//! use clockify::Clockify;
//!
//! # async fn run() -> clockify::Result<()> {
//! let clockify = Clockify::new("api-key")?;
//! for ws in clockify.workspaces().all(&[]).await? {
//!     let clients = clockify.workspaces().clients(&ws.id).all(&[]).await?;
//!     println!("{} has {} clients", ws.name, clients.len());
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ClientNode, NodeBase, ProjectNode, TaskNode};
use crate::api::common::{nullable, HourlyRate, Membership, Result};
use crate::api::request::{Operation, RequestOption};

pub const WORKSPACE_ALL: Operation = Operation::bare("workspace.all");

/// A Clockify workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Default rate for new projects and members.
    #[serde(default, deserialize_with = "nullable")]
    pub hourly_rate: HourlyRate,

    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,

    #[serde(default, deserialize_with = "nullable")]
    pub memberships: Vec<Membership>,

    #[serde(default, deserialize_with = "nullable")]
    pub workspace_settings: WorkspaceSettings,
}

/// Workspace-wide permissions and tracking rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceSettings {
    #[serde(deserialize_with = "nullable")]
    pub admin_only_pages: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub automatic_lock: AutomaticLock,
    pub can_see_time_sheet: bool,
    pub can_see_tracker: bool,
    pub default_billable_projects: bool,
    pub force_description: bool,
    pub force_projects: bool,
    pub force_tags: bool,
    pub force_tasks: bool,
    /// Entries started before this instant can no longer be edited.
    pub lock_time_entries: Option<DateTime<Utc>>,
    pub only_admins_create_project: bool,
    pub only_admins_create_tag: bool,
    pub only_admins_create_task: bool,
    pub only_admins_see_all_time_entries: bool,
    pub only_admins_see_billable_rates: bool,
    pub only_admins_see_dashboard: bool,
    pub only_admins_see_public_projects_entries: bool,
    pub project_favorites: bool,
    #[serde(deserialize_with = "nullable")]
    pub project_grouping_label: String,
    pub project_picker_special_filter: bool,
    #[serde(deserialize_with = "nullable")]
    pub round: Round,
    pub time_rounding_in_reports: bool,
    pub track_time_down_to_second: bool,
    pub is_project_public_by_default: bool,
    #[serde(deserialize_with = "nullable")]
    pub feature_subscription_type: String,
}

/// Schedule for locking old time entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomaticLock {
    #[serde(deserialize_with = "nullable")]
    pub change_day: String,
    #[serde(deserialize_with = "nullable")]
    pub day_of_month: String,
    #[serde(deserialize_with = "nullable")]
    pub first_day: String,
    #[serde(deserialize_with = "nullable")]
    pub older_than_period: String,
    #[serde(deserialize_with = "nullable")]
    pub older_than_value: String,
    /// `WEEKLY`, `MONTHLY` or `OLDER_THAN`.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// Rounding applied to durations in reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Round {
    #[serde(deserialize_with = "nullable")]
    pub minutes: String,
    /// `Round to nearest`, `Round up` or `Round down`.
    #[serde(deserialize_with = "nullable")]
    pub round: String,
}

/// Entry node for workspace operations.
#[derive(Debug, Clone)]
pub struct WorkspaceNode {
    base: NodeBase,
}

impl WorkspaceNode {
    pub(crate) fn new(base: NodeBase) -> Self {
        Self { base }
    }

    /// Lists every workspace the API key can access.
    ///
    /// `GET /workspaces`. The endpoint takes no filters; only context options
    /// (cancellation, deadline, timeout) have an effect.
    pub async fn all(&self, options: &[RequestOption]) -> Result<Vec<Workspace>> {
        self.base.list(&WORKSPACE_ALL, &["workspaces"], options).await
    }

    /// Client operations inside workspace `workspace_id`.
    pub fn clients(&self, workspace_id: impl Into<String>) -> ClientNode {
        ClientNode::new(self.base.clone(), workspace_id.into())
    }

    /// Project operations inside workspace `workspace_id`.
    pub fn projects(&self, workspace_id: impl Into<String>) -> ProjectNode {
        ProjectNode::new(self.base.clone(), workspace_id.into())
    }

    /// Task operations for project `project_id` in workspace `workspace_id`.
    pub fn tasks(
        &self,
        workspace_id: impl Into<String>,
        project_id: impl Into<String>,
    ) -> TaskNode {
        TaskNode::new(self.base.clone(), workspace_id.into(), project_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::decode_list;

    #[test]
    fn test_decode_workspace_with_settings() {
        let body = br#"[{
            "id": "ws1",
            "name": "Main",
            "hourlyRate": {"amount": 1000, "currency": "USD"},
            "imageUrl": null,
            "memberships": null,
            "workspaceSettings": {
                "forceProjects": true,
                "lockTimeEntries": "2024-01-31T00:00:00Z",
                "automaticLock": {"type": "MONTHLY", "dayOfMonth": "1"},
                "round": {"minutes": "15", "round": "Round up"},
                "adminOnlyPages": ["PROJECT"]
            }
        }]"#;

        let workspaces: Vec<Workspace> = decode_list(body).unwrap();
        let ws = &workspaces[0];
        assert_eq!(ws.id, "ws1");
        assert_eq!(ws.hourly_rate.amount, 1000);
        assert!(ws.image_url.is_empty());
        assert!(ws.memberships.is_empty());
        assert!(ws.workspace_settings.force_projects);
        assert_eq!(ws.workspace_settings.automatic_lock.kind, "MONTHLY");
        assert_eq!(ws.workspace_settings.round.minutes, "15");
        assert_eq!(
            ws.workspace_settings
                .lock_time_entries
                .map(|t| t.to_rfc3339()),
            Some("2024-01-31T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_decode_minimal_workspace() {
        let workspaces: Vec<Workspace> = decode_list(br#"[{"id": "ws1"}]"#).unwrap();
        assert_eq!(workspaces[0], Workspace {
            id: "ws1".to_string(),
            ..Workspace::default()
        });
    }
}
