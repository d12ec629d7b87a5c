// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::ids::{EventId, PathId, TodoId};

/// A single actionable checklist entry attached to an event (or, unused by any
/// mutation today, a path). Created not-completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    todo_id: TodoId,
    text: String,
    is_completed: bool,
}

impl ChecklistItem {
    pub fn new(todo_id: TodoId, text: impl Into<String>) -> Self {
        Self {
            todo_id,
            text: text.into(),
            is_completed: false,
        }
    }

    pub fn todo_id(&self) -> &TodoId {
        &self.todo_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn set_completed(&mut self, is_completed: bool) {
        self.is_completed = is_completed;
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// An event pinned to an age on the timeline.
///
/// `path_id` names the future path the event belongs to; `None` means the main
/// line. The reference is only honored while the event lies in the future --
/// past events always render on the main line (see `LifePlan::resolve_track`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeEvent {
    event_id: EventId,
    age: u32,
    title: String,
    todos: Vec<ChecklistItem>,
    path_id: Option<PathId>,
}

impl AgeEvent {
    pub fn new(
        event_id: EventId,
        age: u32,
        title: impl Into<String>,
        path_id: Option<PathId>,
    ) -> Self {
        Self {
            event_id,
            age,
            title: title.into(),
            todos: Vec::new(),
            path_id,
        }
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn todos(&self) -> &[ChecklistItem] {
        &self.todos
    }

    pub fn todos_mut(&mut self) -> &mut Vec<ChecklistItem> {
        &mut self.todos
    }

    pub fn todo(&self, todo_id: &TodoId) -> Option<&ChecklistItem> {
        self.todos.iter().find(|todo| todo.todo_id() == todo_id)
    }

    pub fn todo_mut(&mut self, todo_id: &TodoId) -> Option<&mut ChecklistItem> {
        self.todos.iter_mut().find(|todo| todo.todo_id() == todo_id)
    }

    pub fn remove_todo(&mut self, todo_id: &TodoId) -> Option<ChecklistItem> {
        let index = self.todos.iter().position(|todo| todo.todo_id() == todo_id)?;
        Some(self.todos.remove(index))
    }

    pub fn path_id(&self) -> Option<&PathId> {
        self.path_id.as_ref()
    }

    pub fn set_path_id(&mut self, path_id: Option<PathId>) {
        self.path_id = path_id;
    }
}

/// One future branch off the main timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturePath {
    path_id: PathId,
    title: String,
    memos: String,
    todos: Vec<ChecklistItem>,
}

impl FuturePath {
    pub fn new(path_id: PathId, title: impl Into<String>, memos: impl Into<String>) -> Self {
        Self {
            path_id,
            title: title.into(),
            memos: memos.into(),
            todos: Vec::new(),
        }
    }

    pub fn path_id(&self) -> &PathId {
        &self.path_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn memos(&self) -> &str {
        &self.memos
    }

    pub fn set_memos(&mut self, memos: impl Into<String>) {
        self.memos = memos.into();
    }

    pub fn todos(&self) -> &[ChecklistItem] {
        &self.todos
    }

    pub fn todos_mut(&mut self) -> &mut Vec<ChecklistItem> {
        &mut self.todos
    }
}

/// The aggregate root: one person's whole plan.
///
/// All entities are reachable only through the plan; deleting a path cascades
/// to its events so orphaned future events cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifePlan {
    birth_date: NaiveDate,
    current_age: u32,
    life_expectancy: u32,
    events: Vec<AgeEvent>,
    future_paths: Vec<FuturePath>,
    rev: u64,
}

impl LifePlan {
    pub fn new(birth_date: NaiveDate, current_age: u32, life_expectancy: u32) -> Self {
        Self {
            birth_date,
            current_age,
            life_expectancy,
            events: Vec::new(),
            future_paths: Vec::new(),
            rev: 0,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn current_age(&self) -> u32 {
        self.current_age
    }

    pub fn life_expectancy(&self) -> u32 {
        self.life_expectancy
    }

    pub fn set_settings(&mut self, birth_date: NaiveDate, current_age: u32, life_expectancy: u32) {
        self.birth_date = birth_date;
        self.current_age = current_age;
        self.life_expectancy = life_expectancy;
    }

    pub fn events(&self) -> &[AgeEvent] {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Vec<AgeEvent> {
        &mut self.events
    }

    pub fn future_paths(&self) -> &[FuturePath] {
        &self.future_paths
    }

    pub fn future_paths_mut(&mut self) -> &mut Vec<FuturePath> {
        &mut self.future_paths
    }

    pub fn event(&self, event_id: &EventId) -> Option<&AgeEvent> {
        self.events.iter().find(|event| event.event_id() == event_id)
    }

    pub fn event_mut(&mut self, event_id: &EventId) -> Option<&mut AgeEvent> {
        self.events
            .iter_mut()
            .find(|event| event.event_id() == event_id)
    }

    pub fn remove_event(&mut self, event_id: &EventId) -> Option<AgeEvent> {
        let index = self
            .events
            .iter()
            .position(|event| event.event_id() == event_id)?;
        Some(self.events.remove(index))
    }

    pub fn path(&self, path_id: &PathId) -> Option<&FuturePath> {
        self.future_paths
            .iter()
            .find(|path| path.path_id() == path_id)
    }

    pub fn path_mut(&mut self, path_id: &PathId) -> Option<&mut FuturePath> {
        self.future_paths
            .iter_mut()
            .find(|path| path.path_id() == path_id)
    }

    pub fn path_exists(&self, path_id: &PathId) -> bool {
        self.path(path_id).is_some()
    }

    /// Removes the path and every event still referencing it in one aggregate
    /// step. Returns the removed path and events, or `None` if the path id is
    /// unknown (the plan is then untouched).
    pub fn remove_path_cascading(
        &mut self,
        path_id: &PathId,
    ) -> Option<(FuturePath, Vec<AgeEvent>)> {
        let index = self
            .future_paths
            .iter()
            .position(|path| path.path_id() == path_id)?;
        let path = self.future_paths.remove(index);

        let mut removed_events = Vec::new();
        self.events.retain(|event| {
            if event.path_id() == Some(path_id) {
                removed_events.push(event.clone());
                false
            } else {
                true
            }
        });

        Some((path, removed_events))
    }

    /// Stable ascending-age sort; events with equal ages keep their insertion
    /// order. This is the canonical display order after every mutation.
    pub fn sort_events_by_age(&mut self) {
        self.events.sort_by_key(AgeEvent::age);
    }

    /// The track an event renders on: `Some` only when the event lies in the
    /// future *and* its `path_id` names an existing path; otherwise the main
    /// line. Past events stay on the main line regardless of any stored id.
    pub fn resolve_track<'a>(&'a self, event: &'a AgeEvent) -> Option<&'a PathId> {
        if event.age() <= self.current_age {
            return None;
        }
        let path_id = event.path_id()?;
        self.path_exists(path_id).then_some(path_id)
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}
