// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::ids::{EventId, PathId};
use crate::model::plan::{AgeEvent, LifePlan};

/// Vertical pixels per year of age.
pub const YEAR_HEIGHT: f64 = 12.5;
/// Minimum vertical distance between two events sharing a track.
pub const MIN_EVENT_GAP: f64 = 40.0;
/// Vertical distance between the last past position and the branch point.
pub const BRANCH_OFFSET: f64 = 60.0;
/// Stroke width of a timeline lane.
pub const PATH_WIDTH: f64 = 10.0;
/// Horizontal clearance between neighboring lanes.
pub const PATH_GAP: f64 = 200.0;
/// Center-to-center horizontal distance between lanes.
pub const LANE_SPACING: f64 = PATH_WIDTH + PATH_GAP;
pub const SIGN_WIDTH: f64 = 140.0;
pub const SIGN_HEIGHT: f64 = 70.0;
/// Vertical drop from the branch point to a signboard's top edge.
pub const SIGN_DROP: f64 = 20.0;
/// Clearance between a signboard's bottom edge and the first future event.
pub const SIGN_CLEARANCE: f64 = 30.0;
pub const MIN_VIEW_WIDTH: f64 = 360.0;
pub const VIEW_WIDTH_MARGIN: f64 = 100.0;
/// Minimum height of the future area below the future start line.
pub const FUTURE_TAIL: f64 = 100.0;

/// The computed position of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPoint {
    x: f64,
    y: f64,
    track: Option<PathId>,
}

impl EventPoint {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The resolved track: `Some` for a future event on an existing path,
    /// `None` for the main line.
    pub fn track(&self) -> Option<&PathId> {
        self.track.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl SignRect {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// One future path's lane: its center x plus the signboard at the branch point.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLane {
    path_id: PathId,
    x: f64,
    sign: SignRect,
}

impl PathLane {
    pub fn path_id(&self) -> &PathId {
        &self.path_id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn sign(&self) -> &SignRect {
        &self.sign
    }
}

/// Coordinates for every event and lane of a plan, plus canvas dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    event_points: BTreeMap<EventId, EventPoint>,
    path_lanes: Vec<PathLane>,
    center_x: f64,
    branch_y: f64,
    future_start_y: f64,
    view_width: f64,
    view_height: f64,
}

impl TimelineLayout {
    pub fn event_points(&self) -> &BTreeMap<EventId, EventPoint> {
        &self.event_points
    }

    pub fn event_point(&self, event_id: &EventId) -> Option<&EventPoint> {
        self.event_points.get(event_id)
    }

    /// Lanes in document order, left to right.
    pub fn path_lanes(&self) -> &[PathLane] {
        &self.path_lanes
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn branch_y(&self) -> f64 {
        self.branch_y
    }

    pub fn future_start_y(&self) -> f64 {
        self.future_start_y
    }

    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// True when the plan has no future paths; the main line then continues
    /// straight down past the branch point (rendered dashed).
    pub fn future_undetermined(&self) -> bool {
        self.path_lanes.is_empty()
    }
}

/// Deterministic "coordinates-only" layout for a life plan.
///
/// Vertical position is age-proportional (`age * YEAR_HEIGHT`) with a running
/// per-track minimum gap: an event is pushed down to clear its predecessor on
/// the same track, but never pulled above its age-derived position. Tracks are
/// independent; a crowded lane does not move events in another lane.
///
/// Pure function of the plan: no side effects, same input gives the same
/// layout. The engine sorts its own working copy and does not rely on the
/// plan's events being pre-sorted.
pub fn layout_timeline(plan: &LifePlan) -> TimelineLayout {
    let mut sorted: Vec<&AgeEvent> = plan.events().iter().collect();
    sorted.sort_by_key(|event| event.age());

    let lane_count = plan.future_paths().len();
    let view_width =
        MIN_VIEW_WIDTH.max((lane_count as f64 + 1.0) * LANE_SPACING + VIEW_WIDTH_MARGIN);
    let center_x = view_width / 2.0;

    // A single lane sits half a spacing off-center; multiple lanes spread
    // symmetrically around the main line.
    let lane_offset = if lane_count == 1 {
        0.5
    } else {
        (lane_count as f64 - 1.0) / 2.0
    };
    let lane_x = |lane_index: usize| center_x + (lane_index as f64 - lane_offset) * LANE_SPACING;

    let mut event_points = BTreeMap::new();

    // Past chain: always the main line, regardless of any stored path id.
    let mut last_past_y = -MIN_EVENT_GAP;
    for event in sorted
        .iter()
        .filter(|event| event.age() <= plan.current_age())
    {
        let raw_y = f64::from(event.age()) * YEAR_HEIGHT;
        let y = raw_y.max(last_past_y + MIN_EVENT_GAP);
        event_points.insert(
            event.event_id().clone(),
            EventPoint {
                x: center_x,
                y,
                track: None,
            },
        );
        last_past_y = y;
    }

    let branch_y = (f64::from(plan.current_age()) * YEAR_HEIGHT).max(last_past_y) + BRANCH_OFFSET;
    let future_start_y = branch_y + SIGN_DROP + SIGN_HEIGHT + SIGN_CLEARANCE;

    let mut last_y_by_track: BTreeMap<Option<&PathId>, f64> = BTreeMap::new();
    last_y_by_track.insert(None, last_past_y);

    for event in sorted
        .iter()
        .filter(|event| event.age() > plan.current_age())
    {
        let track = plan.resolve_track(event);
        let last_y = last_y_by_track
            .get(&track)
            .copied()
            .unwrap_or(future_start_y - MIN_EVENT_GAP);
        let raw_y = f64::from(event.age()) * YEAR_HEIGHT;
        let mut y = raw_y.max(last_y + MIN_EVENT_GAP);
        if track.is_some() {
            // Leave room for the signboard above the first event on a branch.
            y = y.max(future_start_y);
        }

        let x = track
            .and_then(|path_id| {
                plan.future_paths()
                    .iter()
                    .position(|path| path.path_id() == path_id)
            })
            .map(lane_x)
            .unwrap_or(center_x);

        event_points.insert(
            event.event_id().clone(),
            EventPoint {
                x,
                y,
                track: track.cloned(),
            },
        );
        last_y_by_track.insert(track, y);
    }

    let max_event_y = event_points
        .values()
        .map(EventPoint::y)
        .fold(0.0_f64, f64::max);
    let max_event_age = plan
        .events()
        .iter()
        .map(AgeEvent::age)
        .max()
        .unwrap_or(0);
    // An event past the declared expectancy still renders; stretch the canvas
    // to reach it.
    let effective_expectancy = plan
        .life_expectancy()
        .max(max_event_age)
        .max(plan.current_age());
    let view_height = (f64::from(effective_expectancy) * YEAR_HEIGHT)
        .max(max_event_y)
        .max(future_start_y + FUTURE_TAIL)
        + MIN_EVENT_GAP;

    let path_lanes = plan
        .future_paths()
        .iter()
        .enumerate()
        .map(|(lane_index, path)| {
            let x = lane_x(lane_index);
            PathLane {
                path_id: path.path_id().clone(),
                x,
                sign: SignRect {
                    x: x - SIGN_WIDTH / 2.0,
                    y: branch_y + SIGN_DROP,
                    width: SIGN_WIDTH,
                    height: SIGN_HEIGHT,
                },
            }
        })
        .collect();

    TimelineLayout {
        event_points,
        path_lanes,
        center_x,
        branch_y,
        future_start_y,
        view_width,
        view_height,
    }
}
