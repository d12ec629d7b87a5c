// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for life plans.
//!
//! Ops apply fail-soft: an op that fails validation (empty title/text, unknown
//! id) is skipped and reported in the result, never raised as an error. A batch
//! that applies nothing leaves the plan bit-for-bit unchanged. Each batch
//! produces a minimal delta the caller can use to refresh derived state.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;

use crate::model::{
    AgeEvent, ChecklistItem, EventId, FuturePath, IdSource, LifePlan, PathId, TodoId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Event(EventOp),
    Path(PathOp),
    Todo(TodoOp),
    Settings {
        birth_date: NaiveDate,
        current_age: u32,
        life_expectancy: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOp {
    Add {
        age: u32,
        title: String,
        path_id: Option<PathId>,
    },
    Update {
        event_id: EventId,
        age: u32,
        title: String,
    },
    Remove {
        event_id: EventId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOp {
    Add {
        title: String,
        memos: String,
    },
    Update {
        path_id: PathId,
        title: String,
        memos: String,
    },
    Remove {
        path_id: PathId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoOp {
    Add {
        event_id: EventId,
        text: String,
    },
    Toggle {
        event_id: EventId,
        todo_id: TodoId,
    },
    Remove {
        event_id: EventId,
        todo_id: TodoId,
    },
    SetText {
        event_id: EventId,
        todo_id: TodoId,
        text: String,
    },
}

/// Why an op was skipped instead of applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyTitle,
    EmptyText,
    EventNotFound { event_id: EventId },
    PathNotFound { path_id: PathId },
    TodoNotFound { event_id: EventId, todo_id: TodoId },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("title is empty after trimming"),
            Self::EmptyText => f.write_str("text is empty after trimming"),
            Self::EventNotFound { event_id } => write!(f, "event not found (id={event_id})"),
            Self::PathNotFound { path_id } => write!(f, "path not found (id={path_id})"),
            Self::TodoNotFound { event_id, todo_id } => {
                write!(f, "todo not found (event={event_id}, id={todo_id})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOp {
    pub index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
    pub skipped: Vec<SkippedOp>,
}

/// A stable reference to an entity touched by a batch of ops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityRef {
    Event(EventId),
    Path(PathId),
    Todo { event_id: EventId, todo_id: TodoId },
    Settings,
}

/// Minimal delta describing which entities changed as the result of applying ops.
///
/// This is intentionally coarse: it reports only added/removed/updated refs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<EntityRef>,
    pub removed: Vec<EntityRef>,
    pub updated: Vec<EntityRef>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<EntityRef>,
    removed: HashSet<EntityRef>,
    updated: HashSet<EntityRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, entity_ref: EntityRef) {
        self.removed.remove(&entity_ref);
        self.updated.remove(&entity_ref);
        self.added.insert(entity_ref);
    }

    fn record_removed(&mut self, entity_ref: EntityRef) {
        self.added.remove(&entity_ref);
        self.updated.remove(&entity_ref);
        self.removed.insert(entity_ref);
    }

    fn record_updated(&mut self, entity_ref: EntityRef) {
        if self.added.contains(&entity_ref) || self.removed.contains(&entity_ref) {
            return;
        }
        self.updated.insert(entity_ref);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta {
            added,
            removed,
            updated,
        }
    }
}

/// Applies `ops` in order against `plan`, minting fresh ids from `ids`.
///
/// Never fails: invalid ops are skipped and reported in `skipped`. The plan's
/// revision bumps once per batch, and only when at least one op applied.
pub fn apply_ops(plan: &mut LifePlan, ops: &[Op], ids: &mut dyn IdSource) -> ApplyResult {
    let mut delta = DeltaBuilder::default();
    let mut skipped = Vec::new();
    let mut applied = 0usize;

    for (index, op) in ops.iter().enumerate() {
        let outcome = match op {
            Op::Event(event_op) => apply_event_op(plan, event_op, ids, &mut delta),
            Op::Path(path_op) => apply_path_op(plan, path_op, ids, &mut delta),
            Op::Todo(todo_op) => apply_todo_op(plan, todo_op, ids, &mut delta),
            Op::Settings {
                birth_date,
                current_age,
                life_expectancy,
            } => {
                plan.set_settings(*birth_date, *current_age, *life_expectancy);
                delta.record_updated(EntityRef::Settings);
                Ok(())
            }
        };

        match outcome {
            Ok(()) => applied += 1,
            Err(reason) => {
                log::debug!("skipping op #{index}: {reason}");
                skipped.push(SkippedOp { index, reason });
            }
        }
    }

    if applied > 0 {
        plan.bump_rev();
    }

    ApplyResult {
        new_rev: plan.rev(),
        applied,
        delta: delta.finish(),
        skipped,
    }
}

// Extracted op-application implementation for event/path/todo mutations.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
