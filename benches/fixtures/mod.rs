// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chrono::NaiveDate;

use pavelife::model::{seed_plan, AgeEvent, EventId, FuturePath, LifePlan, PathId};

pub fn seed() -> LifePlan {
    seed_plan()
}

fn bare_plan() -> LifePlan {
    LifePlan::new(
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("bench birth date"),
        18,
        80,
    )
}

/// A wide plan: `lanes` future paths, each carrying `events_per_lane` events
/// with ages chosen so every lane needs gap-driven push-down.
pub fn multi_lane(lanes: usize, events_per_lane: usize) -> LifePlan {
    let mut plan = bare_plan();

    for lane in 0..lanes {
        let path_id = PathId::new(format!("bench-path-{lane:03}")).expect("bench path id");
        plan.future_paths_mut().push(FuturePath::new(
            path_id.clone(),
            format!("route {lane}"),
            String::new(),
        ));

        for idx in 0..events_per_lane {
            let event_id =
                EventId::new(format!("bench-evt-{lane:03}-{idx:04}")).expect("bench event id");
            let age = 19 + (idx % 60) as u32;
            plan.events_mut().push(AgeEvent::new(
                event_id,
                age,
                format!("step {idx}"),
                Some(path_id.clone()),
            ));
        }
    }

    plan.sort_events_by_age();
    plan
}

/// A tall plan: `events` main-line events with heavily repeated ages, so the
/// spacing chain dominates.
pub fn dense_main(events: usize) -> LifePlan {
    let mut plan = bare_plan();

    for idx in 0..events {
        let event_id = EventId::new(format!("bench-evt-{idx:05}")).expect("bench event id");
        let age = (idx % 90) as u32;
        plan.events_mut()
            .push(AgeEvent::new(event_id, age, format!("moment {idx}"), None));
    }

    plan.sort_events_by_age();
    plan
}
