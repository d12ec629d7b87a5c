// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for life-plan timelines.
//!
//! This module computes event and path-lane coordinates from a plan; it never
//! draws anything itself.

pub mod timeline;

pub use timeline::{
    layout_timeline, EventPoint, PathLane, SignRect, TimelineLayout, BRANCH_OFFSET, LANE_SPACING,
    MIN_EVENT_GAP, MIN_VIEW_WIDTH, YEAR_HEIGHT,
};
