// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::Uuid;

/// A stable identifier used across the model, the store, and rendered output.
///
/// This is intentionally std-only and does not enforce a UUID format; it only
/// enforces that the id is a non-empty *path segment* (i.e. contains no `/`),
/// because ids double as file-name stems in the plan folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id_segment(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsSlash,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsSlash => f.write_str("id must not contain '/'"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id_segment(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains('/') {
        return Err(IdError::ContainsSlash);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventIdTag {}
pub type EventId = Id<EventIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathIdTag {}
pub type PathId = Id<PathIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TodoIdTag {}
pub type TodoId = Id<TodoIdTag>;

/// Mints fresh ids for newly created entities.
///
/// Mutation code takes this as `&mut dyn IdSource` so tests can substitute a
/// deterministic source instead of ambient randomness.
pub trait IdSource {
    fn event_id(&mut self) -> EventId;
    fn path_id(&mut self) -> PathId;
    fn todo_id(&mut self) -> TodoId;
}

/// Production id source: 128-bit random ids, unique with overwhelming
/// probability within one document's lifetime.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn event_id(&mut self) -> EventId {
        EventId::new(random_segment()).expect("uuid simple format is a valid id segment")
    }

    fn path_id(&mut self) -> PathId {
        PathId::new(random_segment()).expect("uuid simple format is a valid id segment")
    }

    fn todo_id(&mut self) -> TodoId {
        TodoId::new(random_segment()).expect("uuid simple format is a valid id segment")
    }
}

fn random_segment() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Deterministic id source for tests and benches (`evt-1`, `path-1`, `todo-1`, ...).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next_event: u64,
    next_path: u64,
    next_todo: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts all counters at `offset`, so minted ids cannot collide with
    /// lower-numbered ids already present in a fixture plan.
    pub fn starting_at(offset: u64) -> Self {
        Self {
            next_event: offset,
            next_path: offset,
            next_todo: offset,
        }
    }
}

impl IdSource for SequentialIds {
    fn event_id(&mut self) -> EventId {
        self.next_event += 1;
        EventId::new(format!("evt-{}", self.next_event)).expect("sequential id is a valid segment")
    }

    fn path_id(&mut self) -> PathId {
        self.next_path += 1;
        PathId::new(format!("path-{}", self.next_path)).expect("sequential id is a valid segment")
    }

    fn todo_id(&mut self) -> TodoId {
        self.next_todo += 1;
        TodoId::new(format!("todo-{}", self.next_todo)).expect("sequential id is a valid segment")
    }
}
