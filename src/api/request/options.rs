//
//  clockify-rs
//  api/request/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request options and the central key table.
//!
//! A [`RequestOption`] is one optional, named modifier passed to a node
//! operation. Every option does exactly one of two things when applied:
//!
//! - writes a single query parameter (possibly multi-valued) into a
//!   [`QueryParams`] collection, or
//! - mutates the call's [`RequestContext`] (cancellation token, deadline).
//!
//! Options that look like fields (`Name`, `Billable`, `HourlyRate`, ...) are
//! still written as query parameters. On create and update operations the
//! builder pulls them back out of the collection and converts them into JSON
//! body fields using the [`ParamKey`] table, so the same option works as a
//! listing filter and as a field update.
//!
//! # Example
//!
//! ```rust
//! use clockify::api::request::{QueryParams, RequestContext, RequestOption, SortOrder};
//!
//! let mut params = QueryParams::new();
//! let mut context = RequestContext::background();
//!
//! for option in [
//!     RequestOption::Page(1),
//!     RequestOption::SortOrder(SortOrder::Ascending),
//!     RequestOption::Page(3),
//! ] {
//!     option.apply(&mut params, &mut context).unwrap();
//! }
//!
//! assert_eq!(params.first("page"), Some("3"));
//! assert_eq!(params.first("sort-order"), Some("ASCENDING"));
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::builder::QueryParams;
use crate::api::common::{
    BudgetEstimate, BuildError, CostRate, HourlyRate, Membership, TimeEstimate,
};

/// How a key's string-encoded value converts back into a JSON body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Str,
    StrList,
    Json,
}

impl ValueKind {
    /// Human-readable name used in [`BuildError::InvalidOptionValue`].
    pub fn describe(self) -> &'static str {
        match self {
            Self::Bool => "a boolean",
            Self::Int => "an integer",
            Self::Str => "a string",
            Self::StrList => "a list of strings",
            Self::Json => "a JSON document",
        }
    }
}

/// One row of the key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    /// Name used in the query string.
    pub query: &'static str,
    /// Name of the JSON body field, when the key can be routed into a body.
    pub body: Option<&'static str>,
    /// Native type of the value.
    pub kind: ValueKind,
}

/// Every key an option can write.
///
/// [`ParamKey::spec`] is the single mapping consulted by both the parameter
/// writer and the builder's field extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Archived,
    Name,
    Page,
    PageSize,
    SortColumn,
    SortOrder,
    Billable,
    Hydrated,
    Clients,
    ContainsClient,
    ClientStatus,
    Users,
    ContainsUsers,
    UserStatus,
    IsTemplate,
    EstimateType,
    ArchiveProjects,
    IsActive,
    StrictNameSearch,
    AssigneeIds,
    Estimate,
    Status,
    ClientId,
    IsPublic,
    HourlyRate,
    CostRate,
    Color,
    Note,
    Memberships,
    TimeEstimate,
    BudgetEstimate,
}

impl ParamKey {
    pub const fn spec(self) -> KeySpec {
        use ValueKind::*;

        let (query, body, kind) = match self {
            Self::Archived => ("archived", Some("archived"), Bool),
            Self::Name => ("name", Some("name"), Str),
            Self::Page => ("page", None, Int),
            Self::PageSize => ("page-size", None, Int),
            Self::SortColumn => ("sort-column", None, Str),
            Self::SortOrder => ("sort-order", None, Str),
            Self::Billable => ("billable", Some("billable"), Bool),
            Self::Hydrated => ("hydrated", None, Bool),
            Self::Clients => ("clients", None, StrList),
            Self::ContainsClient => ("contains-client", None, Bool),
            Self::ClientStatus => ("client-status", None, Str),
            Self::Users => ("users", None, StrList),
            Self::ContainsUsers => ("contains-users", None, Bool),
            Self::UserStatus => ("user-status", None, Str),
            Self::IsTemplate => ("is-template", Some("isTemplate"), Bool),
            Self::EstimateType => ("estimate-type", None, Str),
            Self::ArchiveProjects => ("archive-projects", None, Bool),
            Self::IsActive => ("is-active", None, Bool),
            Self::StrictNameSearch => ("strict-name-search", None, Bool),
            Self::AssigneeIds => ("assigneeIds", Some("assigneeIds"), StrList),
            Self::Estimate => ("estimate", Some("estimate"), Str),
            Self::Status => ("status", Some("status"), Str),
            Self::ClientId => ("client-id", Some("clientId"), Str),
            Self::IsPublic => ("is-public", Some("isPublic"), Bool),
            Self::HourlyRate => ("hourly-rate", Some("hourlyRate"), Json),
            Self::CostRate => ("cost-rate", Some("costRate"), Json),
            Self::Color => ("color", Some("color"), Str),
            Self::Note => ("note", Some("note"), Str),
            Self::Memberships => ("memberships", Some("memberships"), Json),
            Self::TimeEstimate => ("time-estimate", Some("timeEstimate"), Json),
            Self::BudgetEstimate => ("budget-estimate", Some("budgetEstimate"), Json),
        };

        KeySpec { query, body, kind }
    }

    pub const fn query_name(self) -> &'static str {
        self.spec().query
    }

    pub const fn body_field(self) -> Option<&'static str> {
        self.spec().body
    }

    pub const fn kind(self) -> ValueKind {
        self.spec().kind
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_name())
    }
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// The value as sent on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(
    /// Column a listing is sorted by.
    SortColumn { Name => "NAME", ClientName => "CLIENT_NAME", Duration => "DURATION" }
);

wire_enum!(
    /// Direction of a sorted listing.
    SortOrder { Ascending => "ASCENDING", Descending => "DESCENDING" }
);

wire_enum!(
    /// Filter projects by the state of their client.
    ClientStatus { Active => "ACTIVE", Archived => "ARCHIVED" }
);

wire_enum!(
    /// Filter projects by the state of their members.
    UserStatus { Active => "ACTIVE", Inactive => "INACTIVE" }
);

wire_enum!(
    /// `MANUAL` fixes one estimate for the whole project; `AUTO` sums task estimates.
    EstimateType { Auto => "AUTO", Manual => "MANUAL" }
);

wire_enum!(
    /// Lifecycle state of a task.
    TaskStatus { Active => "ACTIVE", Done => "DONE" }
);

/// Per-call execution context.
///
/// Starts as an unbounded background context; options may attach a
/// cancellation token or shorten the deadline.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context with no cancellation and no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// A deadline can only move earlier.
    fn shorten_deadline(&mut self, deadline: Instant) {
        self.deadline = Some(match self.deadline {
            Some(current) if current <= deadline => current,
            _ => deadline,
        });
    }
}

/// One optional, named modifier for a node operation.
///
/// Filters and field values write query parameters; `Cancellation`,
/// `Deadline` and `Timeout` only touch the [`RequestContext`]. Options an
/// operation does not consume are dropped by the builder and never reach the
/// wire.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use clockify::api::request::{RequestOption, SortColumn, SortOrder};
///
/// let options = [
///     RequestOption::Archived(true),
///     RequestOption::SortColumn(SortColumn::Name),
///     RequestOption::SortOrder(SortOrder::Ascending),
///     RequestOption::Timeout(Duration::from_secs(10)),
/// ];
/// assert_eq!(options.iter().filter(|o| o.key().is_some()).count(), 3);
/// ```
#[derive(Debug, Clone)]
pub enum RequestOption {
    /// Only archived (`true`) or only active (`false`) resources; archives on update.
    Archived(bool),
    /// Filter by name on listings; sets the name on create and update.
    Name(String),
    /// 1-based page number.
    Page(u32),
    /// Results per page, at most 5000.
    PageSize(u32),
    SortColumn(SortColumn),
    SortOrder(SortOrder),
    Billable(bool),
    /// Include custom fields, tasks and memberships in project listings.
    Hydrated(bool),
    /// Filter projects by client IDs. Multi-valued.
    Clients(Vec<String>),
    /// `false` inverts the `Clients` filter.
    ContainsClient(bool),
    ClientStatus(ClientStatus),
    /// Filter projects by member user IDs. Multi-valued.
    Users(Vec<String>),
    /// `false` inverts the `Users` filter.
    ContainsUsers(bool),
    UserStatus(UserStatus),
    IsTemplate(bool),
    EstimateType(EstimateType),
    /// Archive the client's projects together with the client.
    ArchiveProjects(bool),
    /// Only active (`true`) or only finished (`false`) tasks.
    IsActive(bool),
    /// Match `Name` exactly instead of by substring.
    StrictNameSearch(bool),
    /// Task assignees. Multi-valued.
    AssigneeIds(Vec<String>),
    /// ISO 8601 duration, e.g. `PT2H`.
    Estimate(String),
    Status(TaskStatus),
    ClientId(String),
    IsPublic(bool),
    HourlyRate(HourlyRate),
    CostRate(CostRate),
    /// Hex color, e.g. `#03A9F4`.
    Color(String),
    Note(String),
    Memberships(Vec<Membership>),
    TimeEstimate(TimeEstimate),
    BudgetEstimate(BudgetEstimate),
    /// Abort the call when the token is cancelled.
    Cancellation(CancellationToken),
    /// Abort the call at this instant.
    Deadline(Instant),
    /// Abort the call after this long, measured from when the option is applied.
    Timeout(Duration),
}

impl RequestOption {
    /// The query key this option writes, or `None` for context options.
    pub fn key(&self) -> Option<ParamKey> {
        let key = match self {
            Self::Archived(_) => ParamKey::Archived,
            Self::Name(_) => ParamKey::Name,
            Self::Page(_) => ParamKey::Page,
            Self::PageSize(_) => ParamKey::PageSize,
            Self::SortColumn(_) => ParamKey::SortColumn,
            Self::SortOrder(_) => ParamKey::SortOrder,
            Self::Billable(_) => ParamKey::Billable,
            Self::Hydrated(_) => ParamKey::Hydrated,
            Self::Clients(_) => ParamKey::Clients,
            Self::ContainsClient(_) => ParamKey::ContainsClient,
            Self::ClientStatus(_) => ParamKey::ClientStatus,
            Self::Users(_) => ParamKey::Users,
            Self::ContainsUsers(_) => ParamKey::ContainsUsers,
            Self::UserStatus(_) => ParamKey::UserStatus,
            Self::IsTemplate(_) => ParamKey::IsTemplate,
            Self::EstimateType(_) => ParamKey::EstimateType,
            Self::ArchiveProjects(_) => ParamKey::ArchiveProjects,
            Self::IsActive(_) => ParamKey::IsActive,
            Self::StrictNameSearch(_) => ParamKey::StrictNameSearch,
            Self::AssigneeIds(_) => ParamKey::AssigneeIds,
            Self::Estimate(_) => ParamKey::Estimate,
            Self::Status(_) => ParamKey::Status,
            Self::ClientId(_) => ParamKey::ClientId,
            Self::IsPublic(_) => ParamKey::IsPublic,
            Self::HourlyRate(_) => ParamKey::HourlyRate,
            Self::CostRate(_) => ParamKey::CostRate,
            Self::Color(_) => ParamKey::Color,
            Self::Note(_) => ParamKey::Note,
            Self::Memberships(_) => ParamKey::Memberships,
            Self::TimeEstimate(_) => ParamKey::TimeEstimate,
            Self::BudgetEstimate(_) => ParamKey::BudgetEstimate,
            Self::Cancellation(_) | Self::Deadline(_) | Self::Timeout(_) => return None,
        };
        Some(key)
    }

    /// Applies the option, returning the key it wrote.
    ///
    /// Writing a key replaces any values already stored under it.
    ///
    /// # Errors
    ///
    /// [`BuildError::Encode`] when a structured payload cannot be JSON-encoded.
    pub fn apply(
        &self,
        params: &mut QueryParams,
        context: &mut RequestContext,
    ) -> Result<Option<ParamKey>, BuildError> {
        let values = match self {
            Self::Cancellation(token) => {
                context.cancellation = Some(token.clone());
                return Ok(None);
            }
            Self::Deadline(deadline) => {
                context.shorten_deadline(*deadline);
                return Ok(None);
            }
            Self::Timeout(timeout) => {
                // An overflowing timeout is as good as none.
                if let Some(deadline) = Instant::now().checked_add(*timeout) {
                    context.shorten_deadline(deadline);
                }
                return Ok(None);
            }
            Self::Archived(v)
            | Self::Billable(v)
            | Self::Hydrated(v)
            | Self::ContainsClient(v)
            | Self::ContainsUsers(v)
            | Self::IsTemplate(v)
            | Self::ArchiveProjects(v)
            | Self::IsActive(v)
            | Self::StrictNameSearch(v)
            | Self::IsPublic(v) => vec![v.to_string()],
            Self::Page(v) | Self::PageSize(v) => vec![v.to_string()],
            Self::Name(v) | Self::Estimate(v) | Self::ClientId(v) | Self::Color(v) | Self::Note(v) => {
                vec![v.clone()]
            }
            Self::SortColumn(v) => vec![v.to_string()],
            Self::SortOrder(v) => vec![v.to_string()],
            Self::ClientStatus(v) => vec![v.to_string()],
            Self::UserStatus(v) => vec![v.to_string()],
            Self::EstimateType(v) => vec![v.to_string()],
            Self::Status(v) => vec![v.to_string()],
            Self::Clients(ids) | Self::Users(ids) | Self::AssigneeIds(ids) => ids.clone(),
            Self::HourlyRate(v) => vec![to_json(ParamKey::HourlyRate, v)?],
            Self::CostRate(v) => vec![to_json(ParamKey::CostRate, v)?],
            Self::Memberships(v) => vec![to_json(ParamKey::Memberships, v)?],
            Self::TimeEstimate(v) => vec![to_json(ParamKey::TimeEstimate, v)?],
            Self::BudgetEstimate(v) => vec![to_json(ParamKey::BudgetEstimate, v)?],
        };

        // Every non-context variant has a key; the context arms returned above.
        let Some(key) = self.key() else {
            return Ok(None);
        };
        params.set(key, values);
        Ok(Some(key))
    }
}

fn to_json<T: Serialize>(key: ParamKey, value: &T) -> Result<String, BuildError> {
    serde_json::to_string(value).map_err(|source| BuildError::Encode {
        key: key.query_name(),
        source,
    })
}
