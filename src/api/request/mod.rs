//
//  clockify-rs
//  api/request/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Construction
//!
//! The options pipeline shared by every resource node.
//!
//! - [`options`]: the [`RequestOption`] enum, the [`ParamKey`] table and the
//!   per-call [`RequestContext`]
//! - [`builder`]: [`Operation`] declarations and the [`build`] function that
//!   produces a [`RequestDescriptor`]

pub mod builder;
pub mod options;

pub use builder::{build, Operation, QueryParams, RequestDescriptor};
pub use options::{
    ClientStatus, EstimateType, KeySpec, ParamKey, RequestContext, RequestOption, SortColumn,
    SortOrder, TaskStatus, UserStatus, ValueKind,
};

pub(crate) use builder::resource_url;
