// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core life-plan data model.
//!
//! A plan holds age-pinned events plus the future paths they can branch onto,
//! with per-event checklists and the user's settings.

pub mod fixtures;
pub mod ids;
pub mod plan;

pub use fixtures::seed_plan;
pub use ids::{EventId, Id, IdError, IdSource, PathId, RandomIds, SequentialIds, TodoId};
pub use plan::{AgeEvent, ChecklistItem, FuturePath, LifePlan};
