// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-kind op application helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
///
/// Every helper validates before mutating, so a skipped op leaves the plan
/// untouched.
fn apply_event_op(
    plan: &mut LifePlan,
    op: &EventOp,
    ids: &mut dyn IdSource,
    delta: &mut DeltaBuilder,
) -> Result<(), SkipReason> {
    match op {
        EventOp::Add {
            age,
            title,
            path_id,
        } => {
            if title.trim().is_empty() {
                return Err(SkipReason::EmptyTitle);
            }
            let event_id = ids.event_id();
            plan.events_mut().push(AgeEvent::new(
                event_id.clone(),
                *age,
                title.clone(),
                path_id.clone(),
            ));
            plan.sort_events_by_age();
            delta.record_added(EntityRef::Event(event_id));
            Ok(())
        }
        EventOp::Update {
            event_id,
            age,
            title,
        } => {
            if title.trim().is_empty() {
                return Err(SkipReason::EmptyTitle);
            }
            let Some(event) = plan.event_mut(event_id) else {
                return Err(SkipReason::EventNotFound {
                    event_id: event_id.clone(),
                });
            };
            event.set_age(*age);
            event.set_title(title.clone());
            plan.sort_events_by_age();
            delta.record_updated(EntityRef::Event(event_id.clone()));
            Ok(())
        }
        EventOp::Remove { event_id } => {
            if plan.remove_event(event_id).is_none() {
                return Err(SkipReason::EventNotFound {
                    event_id: event_id.clone(),
                });
            }
            delta.record_removed(EntityRef::Event(event_id.clone()));
            Ok(())
        }
    }
}

fn apply_path_op(
    plan: &mut LifePlan,
    op: &PathOp,
    ids: &mut dyn IdSource,
    delta: &mut DeltaBuilder,
) -> Result<(), SkipReason> {
    match op {
        PathOp::Add { title, memos } => {
            if title.trim().is_empty() {
                return Err(SkipReason::EmptyTitle);
            }
            let path_id = ids.path_id();
            plan.future_paths_mut().push(FuturePath::new(
                path_id.clone(),
                title.clone(),
                memos.clone(),
            ));
            delta.record_added(EntityRef::Path(path_id));
            Ok(())
        }
        PathOp::Update {
            path_id,
            title,
            memos,
        } => {
            if title.trim().is_empty() {
                return Err(SkipReason::EmptyTitle);
            }
            let Some(path) = plan.path_mut(path_id) else {
                return Err(SkipReason::PathNotFound {
                    path_id: path_id.clone(),
                });
            };
            path.set_title(title.clone());
            path.set_memos(memos.clone());
            delta.record_updated(EntityRef::Path(path_id.clone()));
            Ok(())
        }
        PathOp::Remove { path_id } => {
            let Some((_path, removed_events)) = plan.remove_path_cascading(path_id) else {
                return Err(SkipReason::PathNotFound {
                    path_id: path_id.clone(),
                });
            };
            for event in &removed_events {
                delta.record_removed(EntityRef::Event(event.event_id().clone()));
            }
            delta.record_removed(EntityRef::Path(path_id.clone()));
            Ok(())
        }
    }
}

fn apply_todo_op(
    plan: &mut LifePlan,
    op: &TodoOp,
    ids: &mut dyn IdSource,
    delta: &mut DeltaBuilder,
) -> Result<(), SkipReason> {
    match op {
        TodoOp::Add { event_id, text } => {
            if text.trim().is_empty() {
                return Err(SkipReason::EmptyText);
            }
            let Some(event) = plan.event_mut(event_id) else {
                return Err(SkipReason::EventNotFound {
                    event_id: event_id.clone(),
                });
            };
            let todo_id = ids.todo_id();
            event
                .todos_mut()
                .push(ChecklistItem::new(todo_id.clone(), text.clone()));
            delta.record_added(EntityRef::Todo {
                event_id: event_id.clone(),
                todo_id,
            });
            Ok(())
        }
        TodoOp::Toggle { event_id, todo_id } => {
            let Some(event) = plan.event_mut(event_id) else {
                return Err(SkipReason::EventNotFound {
                    event_id: event_id.clone(),
                });
            };
            let Some(todo) = event.todo_mut(todo_id) else {
                return Err(SkipReason::TodoNotFound {
                    event_id: event_id.clone(),
                    todo_id: todo_id.clone(),
                });
            };
            todo.toggle();
            delta.record_updated(EntityRef::Todo {
                event_id: event_id.clone(),
                todo_id: todo_id.clone(),
            });
            Ok(())
        }
        TodoOp::Remove { event_id, todo_id } => {
            let Some(event) = plan.event_mut(event_id) else {
                return Err(SkipReason::EventNotFound {
                    event_id: event_id.clone(),
                });
            };
            if event.remove_todo(todo_id).is_none() {
                return Err(SkipReason::TodoNotFound {
                    event_id: event_id.clone(),
                    todo_id: todo_id.clone(),
                });
            }
            delta.record_removed(EntityRef::Todo {
                event_id: event_id.clone(),
                todo_id: todo_id.clone(),
            });
            Ok(())
        }
        TodoOp::SetText {
            event_id,
            todo_id,
            text,
        } => {
            if text.trim().is_empty() {
                return Err(SkipReason::EmptyText);
            }
            let Some(event) = plan.event_mut(event_id) else {
                return Err(SkipReason::EventNotFound {
                    event_id: event_id.clone(),
                });
            };
            let Some(todo) = event.todo_mut(todo_id) else {
                return Err(SkipReason::TodoNotFound {
                    event_id: event_id.clone(),
                    todo_id: todo_id.clone(),
                });
            };
            todo.set_text(text.clone());
            delta.record_updated(EntityRef::Todo {
                event_id: event_id.clone(),
                todo_id: todo_id.clone(),
            });
            Ok(())
        }
    }
}
