// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::ids::{EventId, PathId, TodoId};
use super::plan::{AgeEvent, ChecklistItem, FuturePath, LifePlan};

fn eid(value: &str) -> EventId {
    EventId::new(value).expect("seed event id")
}

fn pid(value: &str) -> PathId {
    PathId::new(value).expect("seed path id")
}

fn tid(value: &str) -> TodoId {
    TodoId::new(value).expect("seed todo id")
}

/// The built-in starter plan used when no stored document exists (or the
/// stored one cannot be read).
pub fn seed_plan() -> LifePlan {
    let birth_date = NaiveDate::from_ymd_opt(2006, 1, 1).expect("seed birth date");
    let mut plan = LifePlan::new(birth_date, 18, 80);

    let mut highschool = AgeEvent::new(eid("evt-1"), 16, "高校時代", None);
    let mut club = ChecklistItem::new(tid("todo-1"), "部活を頑張る");
    club.set_completed(true);
    highschool.todos_mut().push(club);
    highschool
        .todos_mut()
        .push(ChecklistItem::new(tid("todo-2"), "初めてのバイト"));
    plan.events_mut().push(highschool);

    let mut college = AgeEvent::new(eid("evt-2"), 20, "大学時代", None);
    college
        .todos_mut()
        .push(ChecklistItem::new(tid("todo-3"), "プログラミングの勉強"));
    plan.events_mut().push(college);

    plan.events_mut()
        .push(AgeEvent::new(eid("evt-3"), 30, "起業", Some(pid("path-1"))));

    plan.future_paths_mut().push(FuturePath::new(
        pid("path-1"),
        "Aの道",
        "Aの道に進んだ場合のメモ",
    ));
    plan.future_paths_mut().push(FuturePath::new(
        pid("path-2"),
        "Bの道",
        "Bの道に進んだ場合のメモ",
    ));

    plan
}
