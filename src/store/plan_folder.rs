// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::{Id, IdError};
use crate::model::{seed_plan, AgeEvent, ChecklistItem, FuturePath, LifePlan};

/// The fixed key the whole document is stored under.
pub const PLAN_STORE_KEY: &str = "paveLifeData";

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id in field '{field}' (value='{value}'): {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable
    /// storage where possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// A folder holding one serialized life-plan document.
///
/// The byte-level contract is a key/value store: `get` returns the stored
/// value or `None` when absent; `set` replaces it atomically. The plan lives
/// under [`PLAN_STORE_KEY`].
#[derive(Debug, Clone)]
pub struct PlanFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl PlanFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plan_path(&self) -> PathBuf {
        self.value_path(PLAN_STORE_KEY)
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Returns the stored bytes for `key`, or `None` when nothing is stored.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.value_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Replaces the stored bytes for `key` atomically.
    pub fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        write_atomic(&self.root, &self.value_path(key), value, self.durability)
    }

    /// Loads and validates the stored plan; `None` when nothing is stored yet.
    pub fn load_plan(&self) -> Result<Option<LifePlan>, StoreError> {
        let Some(bytes) = self.get(PLAN_STORE_KEY)? else {
            return Ok(None);
        };

        let snapshot: PlanSnapshot =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
                path: self.plan_path(),
                source,
            })?;

        plan_from_snapshot(snapshot).map(Some)
    }

    /// Serializes the whole document as one pretty-printed JSON value.
    pub fn save_plan(&self, plan: &LifePlan) -> Result<(), StoreError> {
        let snapshot = snapshot_from_plan(plan);
        let mut bytes = serde_json::to_vec_pretty(&snapshot).map_err(|source| StoreError::Json {
            path: self.plan_path(),
            source,
        })?;
        bytes.push(b'\n');
        self.set(PLAN_STORE_KEY, &bytes)
    }

    /// Reads the stored plan once at startup, falling back to the built-in
    /// seed when the file is absent or unreadable. Never fails: read problems
    /// are logged and the user keeps working on the seed document.
    pub fn load_or_seed(&self) -> LifePlan {
        match self.load_plan() {
            Ok(Some(plan)) => plan,
            Ok(None) => {
                log::debug!(
                    "no stored plan at {:?}; starting from the seed plan",
                    self.plan_path()
                );
                seed_plan()
            }
            Err(err) => {
                log::warn!(
                    "cannot read stored plan at {:?}: {err}; starting from the seed plan",
                    self.plan_path()
                );
                seed_plan()
            }
        }
    }
}

/// On-disk mirror of the document, field names matching the stored format
/// (`birthDate`, `pathId`, `isCompleted`, ...). The model types stay free of
/// serde; conversion validates every id on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanSnapshot {
    // Documents written before versioning carry no tag; read them as v1.
    #[serde(default = "snapshot_version_default")]
    version: u32,
    birth_date: NaiveDate,
    current_age: u32,
    life_expectancy: u32,
    events: Vec<EventRecord>,
    future_paths: Vec<PathRecord>,
}

fn snapshot_version_default() -> u32 {
    SNAPSHOT_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: String,
    age: u32,
    title: String,
    todos: Vec<TodoRecord>,
    path_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoRecord {
    id: String,
    text: String,
    is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PathRecord {
    id: String,
    title: String,
    memos: String,
    todos: Vec<TodoRecord>,
}

fn snapshot_from_plan(plan: &LifePlan) -> PlanSnapshot {
    PlanSnapshot {
        version: SNAPSHOT_VERSION,
        birth_date: plan.birth_date(),
        current_age: plan.current_age(),
        life_expectancy: plan.life_expectancy(),
        events: plan
            .events()
            .iter()
            .map(|event| EventRecord {
                id: event.event_id().as_str().to_owned(),
                age: event.age(),
                title: event.title().to_owned(),
                todos: todo_records(event.todos()),
                path_id: event.path_id().map(|path_id| path_id.as_str().to_owned()),
            })
            .collect(),
        future_paths: plan
            .future_paths()
            .iter()
            .map(|path| PathRecord {
                id: path.path_id().as_str().to_owned(),
                title: path.title().to_owned(),
                memos: path.memos().to_owned(),
                todos: todo_records(path.todos()),
            })
            .collect(),
    }
}

fn todo_records(todos: &[ChecklistItem]) -> Vec<TodoRecord> {
    todos
        .iter()
        .map(|todo| TodoRecord {
            id: todo.todo_id().as_str().to_owned(),
            text: todo.text().to_owned(),
            is_completed: todo.is_completed(),
        })
        .collect()
}

fn plan_from_snapshot(snapshot: PlanSnapshot) -> Result<LifePlan, StoreError> {
    let mut plan = LifePlan::new(
        snapshot.birth_date,
        snapshot.current_age,
        snapshot.life_expectancy,
    );

    for record in snapshot.events {
        let mut event = AgeEvent::new(
            parse_id("events[].id", &record.id)?,
            record.age,
            record.title,
            match record.path_id {
                Some(raw) => Some(parse_id("events[].pathId", &raw)?),
                None => None,
            },
        );
        for todo in record.todos {
            event
                .todos_mut()
                .push(checklist_item("events[].todos[].id", todo)?);
        }
        plan.events_mut().push(event);
    }

    for record in snapshot.future_paths {
        let mut path = FuturePath::new(
            parse_id("futurePaths[].id", &record.id)?,
            record.title,
            record.memos,
        );
        for todo in record.todos {
            path.todos_mut()
                .push(checklist_item("futurePaths[].todos[].id", todo)?);
        }
        plan.future_paths_mut().push(path);
    }

    // Restore the canonical display order; a hand-edited file may be unsorted.
    plan.sort_events_by_age();

    Ok(plan)
}

fn checklist_item(field: &'static str, record: TodoRecord) -> Result<ChecklistItem, StoreError> {
    let mut item = ChecklistItem::new(parse_id(field, &record.id)?, record.text);
    item.set_completed(record.is_completed);
    Ok(item)
}

fn parse_id<T>(field: &'static str, value: &str) -> Result<Id<T>, StoreError> {
    Id::new(value).map_err(|source| StoreError::InvalidId {
        field,
        value: value.to_owned(),
        source: Box::new(source),
    })
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(root).map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent"),
        });
    };

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".pavelife.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
