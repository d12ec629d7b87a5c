// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use crate::model::{seed_plan, EventId, PathId, SequentialIds, TodoId};

use super::{apply_ops, EntityRef, EventOp, Op, PathOp, SkipReason, TodoOp};

fn event_id(value: &str) -> EventId {
    EventId::new(value).expect("event id")
}

fn path_id(value: &str) -> PathId {
    PathId::new(value).expect("path id")
}

fn todo_id(value: &str) -> TodoId {
    TodoId::new(value).expect("todo id")
}

fn ids() -> SequentialIds {
    // Seed ids go up to evt-3/path-2/todo-3; start well past them.
    SequentialIds::starting_at(100)
}

#[test]
fn add_event_inserts_sorted_and_bumps_rev() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [Op::Event(EventOp::Add {
        age: 18,
        title: "高校卒業".to_owned(),
        path_id: None,
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 1);
    assert_eq!(result.new_rev, 1);
    assert_eq!(plan.rev(), 1);
    assert!(result.skipped.is_empty());
    assert_eq!(
        result.delta.added,
        vec![EntityRef::Event(event_id("evt-101"))]
    );

    let ages = plan
        .events()
        .iter()
        .map(|event| event.age())
        .collect::<Vec<_>>();
    assert_eq!(ages, vec![16, 18, 20, 30]);
}

#[test]
fn add_event_with_empty_title_is_noop() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ops = [Op::Event(EventOp::Add {
        age: 40,
        title: "   ".to_owned(),
        path_id: None,
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 0);
    assert_eq!(result.new_rev, 0);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].index, 0);
    assert_eq!(result.skipped[0].reason, SkipReason::EmptyTitle);
    assert_eq!(plan, before);
}

#[test]
fn update_event_rewrites_and_resorts() {
    let mut plan = seed_plan();
    let mut ids = ids();

    // Push the age-16 event past the age-20 one; the sort must follow.
    let ops = [Op::Event(EventOp::Update {
        event_id: event_id("evt-1"),
        age: 25,
        title: "社会人".to_owned(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 1);
    assert_eq!(
        result.delta.updated,
        vec![EntityRef::Event(event_id("evt-1"))]
    );

    let ages = plan
        .events()
        .iter()
        .map(|event| event.age())
        .collect::<Vec<_>>();
    assert_eq!(ages, vec![20, 25, 30]);
    let moved = plan.event(&event_id("evt-1")).expect("event");
    assert_eq!(moved.title(), "社会人");
}

#[test]
fn update_event_with_empty_title_leaves_plan_unchanged() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ops = [Op::Event(EventOp::Update {
        event_id: event_id("evt-1"),
        age: 16,
        title: String::new(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 0);
    assert_eq!(result.skipped[0].reason, SkipReason::EmptyTitle);
    assert_eq!(plan, before);
}

#[test]
fn update_event_with_unknown_id_skips() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ghost = event_id("evt-ghost");
    let ops = [Op::Event(EventOp::Update {
        event_id: ghost.clone(),
        age: 50,
        title: "nope".to_owned(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(
        result.skipped[0].reason,
        SkipReason::EventNotFound { event_id: ghost }
    );
    assert_eq!(plan, before);
}

#[test]
fn remove_event_with_unknown_id_skips() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ghost = event_id("evt-ghost");
    let ops = [Op::Event(EventOp::Remove {
        event_id: ghost.clone(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 0);
    assert_eq!(
        result.skipped[0].reason,
        SkipReason::EventNotFound { event_id: ghost }
    );
    assert_eq!(plan, before);
}

#[test]
fn add_path_appends_with_fresh_id_and_empty_checklist() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [Op::Path(PathOp::Add {
        title: "起業ルート".to_owned(),
        memos: String::new(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 1);
    assert_eq!(result.delta.added, vec![EntityRef::Path(path_id("path-101"))]);

    let added = plan.future_paths().last().expect("appended path");
    assert_eq!(added.path_id().as_str(), "path-101");
    assert_eq!(added.title(), "起業ルート");
    assert!(added.todos().is_empty());
}

#[test]
fn added_event_on_new_path_resolves_to_that_track() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [
        Op::Path(PathOp::Add {
            title: "起業ルート".to_owned(),
            memos: String::new(),
        }),
        Op::Event(EventOp::Add {
            age: 30,
            title: "起業2".to_owned(),
            path_id: Some(path_id("path-101")),
        }),
    ];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 2);

    let event = plan.event(&event_id("evt-101")).expect("added event");
    assert_eq!(plan.resolve_track(event), Some(&path_id("path-101")));
}

#[test]
fn update_path_keeps_sequence_position() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [Op::Path(PathOp::Update {
        path_id: path_id("path-1"),
        title: "Cの道".to_owned(),
        memos: "乗り換え".to_owned(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 1);
    assert_eq!(
        result.delta.updated,
        vec![EntityRef::Path(path_id("path-1"))]
    );

    assert_eq!(plan.future_paths()[0].path_id().as_str(), "path-1");
    assert_eq!(plan.future_paths()[0].title(), "Cの道");
    assert_eq!(plan.future_paths()[0].memos(), "乗り換え");
    assert_eq!(plan.future_paths()[1].title(), "Bの道");
}

#[test]
fn update_path_with_unknown_id_is_noop() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ghost = path_id("path-ghost");
    let ops = [Op::Path(PathOp::Update {
        path_id: ghost.clone(),
        title: "t".to_owned(),
        memos: "m".to_owned(),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(
        result.skipped[0].reason,
        SkipReason::PathNotFound { path_id: ghost }
    );
    assert_eq!(plan, before);
}

#[test]
fn remove_path_cascades_to_its_events() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [Op::Path(PathOp::Remove {
        path_id: path_id("path-1"),
    })];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 1);
    assert_eq!(
        result.delta.removed,
        vec![
            EntityRef::Event(event_id("evt-3")),
            EntityRef::Path(path_id("path-1")),
        ]
    );

    // The seed startup event rode on path-1 and must go with it.
    assert!(plan.event(&event_id("evt-3")).is_none());
    assert!(!plan.path_exists(&path_id("path-1")));

    // Everything else is untouched.
    assert!(plan.event(&event_id("evt-1")).is_some());
    assert!(plan.event(&event_id("evt-2")).is_some());
    assert!(plan.path_exists(&path_id("path-2")));
}

#[test]
fn todo_ops_cover_the_checklist_lifecycle() {
    let mut plan = seed_plan();
    let mut ids = ids();
    let target = event_id("evt-2");

    let result = apply_ops(
        &mut plan,
        &[Op::Todo(TodoOp::Add {
            event_id: target.clone(),
            text: "インターン応募".to_owned(),
        })],
        &mut ids,
    );
    assert_eq!(result.applied, 1);
    let minted = todo_id("todo-101");
    assert_eq!(
        result.delta.added,
        vec![EntityRef::Todo {
            event_id: target.clone(),
            todo_id: minted.clone(),
        }]
    );

    apply_ops(
        &mut plan,
        &[Op::Todo(TodoOp::Toggle {
            event_id: target.clone(),
            todo_id: minted.clone(),
        })],
        &mut ids,
    );
    {
        let event = plan.event(&target).expect("event");
        let todo = event.todo(&minted).expect("todo");
        assert!(todo.is_completed());
    }

    apply_ops(
        &mut plan,
        &[Op::Todo(TodoOp::SetText {
            event_id: target.clone(),
            todo_id: minted.clone(),
            text: "インターン参加".to_owned(),
        })],
        &mut ids,
    );
    {
        let event = plan.event(&target).expect("event");
        let todo = event.todo(&minted).expect("todo");
        assert_eq!(todo.text(), "インターン参加");
        assert!(todo.is_completed());
    }

    let result = apply_ops(
        &mut plan,
        &[Op::Todo(TodoOp::Remove {
            event_id: target.clone(),
            todo_id: minted.clone(),
        })],
        &mut ids,
    );
    assert_eq!(result.applied, 1);
    let event = plan.event(&target).expect("event");
    assert!(event.todo(&minted).is_none());
    assert_eq!(plan.rev(), 4);
}

#[test]
fn add_todo_rejects_empty_text() {
    // Empty checklist items are rejected here, not left to callers.
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let result = apply_ops(
        &mut plan,
        &[Op::Todo(TodoOp::Add {
            event_id: event_id("evt-1"),
            text: " \t ".to_owned(),
        })],
        &mut ids,
    );
    assert_eq!(result.applied, 0);
    assert_eq!(result.skipped[0].reason, SkipReason::EmptyText);
    assert_eq!(plan, before);
}

#[test]
fn todo_ops_on_missing_event_or_todo_skip() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ghost_event = event_id("evt-ghost");
    let ghost_todo = todo_id("todo-ghost");

    let result = apply_ops(
        &mut plan,
        &[
            Op::Todo(TodoOp::Toggle {
                event_id: ghost_event.clone(),
                todo_id: ghost_todo.clone(),
            }),
            Op::Todo(TodoOp::Remove {
                event_id: event_id("evt-1"),
                todo_id: ghost_todo.clone(),
            }),
        ],
        &mut ids,
    );

    assert_eq!(result.applied, 0);
    assert_eq!(result.skipped.len(), 2);
    assert_eq!(
        result.skipped[0].reason,
        SkipReason::EventNotFound {
            event_id: ghost_event,
        }
    );
    assert_eq!(
        result.skipped[1].reason,
        SkipReason::TodoNotFound {
            event_id: event_id("evt-1"),
            todo_id: ghost_todo,
        }
    );
    assert_eq!(plan, before);
}

#[test]
fn settings_replace_unconditionally() {
    let mut plan = seed_plan();
    let mut ids = ids();

    // No cross-field validation: current age above expectancy is accepted.
    let ops = [Op::Settings {
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 2).expect("date"),
        current_age: 90,
        life_expectancy: 70,
    }];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 1);
    assert_eq!(result.delta.updated, vec![EntityRef::Settings]);
    assert_eq!(plan.current_age(), 90);
    assert_eq!(plan.life_expectancy(), 70);
    assert_eq!(
        plan.birth_date(),
        NaiveDate::from_ymd_opt(1990, 4, 2).expect("date")
    );
}

#[test]
fn all_skipped_batch_does_not_bump_rev() {
    let mut plan = seed_plan();
    let before = plan.clone();
    let mut ids = ids();

    let ops = [
        Op::Event(EventOp::Add {
            age: 1,
            title: String::new(),
            path_id: None,
        }),
        Op::Path(PathOp::Remove {
            path_id: path_id("path-ghost"),
        }),
    ];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 0);
    assert_eq!(result.new_rev, 0);
    assert_eq!(result.skipped.len(), 2);
    assert_eq!(result.skipped[0].index, 0);
    assert_eq!(result.skipped[1].index, 1);
    assert_eq!(plan, before);
}

#[test]
fn mixed_batch_bumps_rev_once_and_reports_skips() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [
        Op::Event(EventOp::Add {
            age: 22,
            title: "就職".to_owned(),
            path_id: None,
        }),
        Op::Event(EventOp::Update {
            event_id: event_id("evt-ghost"),
            age: 1,
            title: "x".to_owned(),
        }),
        Op::Event(EventOp::Add {
            age: 26,
            title: "転職".to_owned(),
            path_id: None,
        }),
    ];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 2);
    assert_eq!(result.new_rev, 1);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].index, 1);
}

#[test]
fn delta_removed_cancels_earlier_update() {
    let mut plan = seed_plan();
    let mut ids = ids();

    let ops = [
        Op::Event(EventOp::Update {
            event_id: event_id("evt-1"),
            age: 17,
            title: "高校時代".to_owned(),
        }),
        Op::Event(EventOp::Remove {
            event_id: event_id("evt-1"),
        }),
    ];

    let result = apply_ops(&mut plan, &ops, &mut ids);
    assert_eq!(result.applied, 2);
    assert!(result.delta.updated.is_empty());
    assert_eq!(
        result.delta.removed,
        vec![EntityRef::Event(event_id("evt-1"))]
    );
}
