// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Meta query model: the target class, the requested properties and the
//! analyses requested on each of them

pub mod analysis;
pub mod query;

pub use analysis::StatisticalAnalysis;
pub use query::{ClassName, MetaProperty, MetaQuery};
