// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::TimelineLayout;
use crate::model::LifePlan;

use super::text::{char_len, truncate_with_ellipsis};
use super::{Canvas, CanvasError};

/// Horizontal pixels per character cell.
const CELL_WIDTH: f64 = 10.0;
/// Vertical pixels per character cell (one row per year at the raw age scale).
const CELL_HEIGHT: f64 = 12.5;

const PAST_MARKER: char = '●';
const FUTURE_MARKER: char = '○';
const EVENT_LABEL_MAX_CHARS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineRenderError {
    Canvas(CanvasError),
}

impl fmt::Display for TimelineRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(source) => write!(f, "canvas error: {source}"),
        }
    }
}

impl std::error::Error for TimelineRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(source) => Some(source),
        }
    }
}

impl From<CanvasError> for TimelineRenderError {
    fn from(source: CanvasError) -> Self {
        Self::Canvas(source)
    }
}

/// Renders a plan's timeline as a Unicode character grid.
///
/// The main line runs solid from age 0 to the branch point; future lanes hang
/// off it dashed, each under a signboard with the path's title. Events are
/// `●` (past) or `○` (future) markers labeled `{age}歳: {title}`.
pub fn render_timeline(
    plan: &LifePlan,
    layout: &TimelineLayout,
) -> Result<String, TimelineRenderError> {
    let width = px_to_col(layout.view_width()) + 1;
    let height = px_to_row(layout.view_height()) + 1;
    let mut canvas = Canvas::new(width, height)?;

    let center_col = px_to_col(layout.center_x());
    let branch_row = px_to_row(layout.branch_y());
    let bottom_row = height - 1;

    canvas.draw_vline(center_col, 0, branch_row)?;

    if layout.future_undetermined() {
        // No branches yet: the main line continues, dashed, to the bottom.
        canvas.draw_dashed_vline(center_col, branch_row + 1, bottom_row)?;
    }

    for lane in layout.path_lanes() {
        let lane_col = px_to_col(lane.x());
        canvas.draw_hline(center_col, lane_col, branch_row)?;
        canvas.draw_dashed_vline(lane_col, branch_row + 1, bottom_row)?;

        let sign = lane.sign();
        let x0 = px_to_col(sign.x());
        let x1 = px_to_col(sign.x() + sign.width());
        let y0 = px_to_row(sign.y());
        let y1 = px_to_row(sign.y() + sign.height());
        canvas.draw_box(x0, y0, x1, y1)?;
        for y in (y0 + 1)..y1 {
            for x in (x0 + 1)..x1 {
                canvas.set(x, y, ' ')?;
            }
        }

        if let Some(path) = plan.path(lane.path_id()) {
            let inner_width = x1.saturating_sub(x0 + 1);
            let title = truncate_with_ellipsis(path.title(), inner_width);
            let pad = inner_width.saturating_sub(char_len(&title)) / 2;
            canvas.write_str(x0 + 1 + pad, y0 + 1, &title)?;
        }
    }

    for event in plan.events() {
        let Some(point) = layout.event_point(event.event_id()) else {
            continue;
        };
        let col = px_to_col(point.x());
        let row = px_to_row(point.y());
        let marker = if event.age() <= plan.current_age() {
            PAST_MARKER
        } else {
            FUTURE_MARKER
        };
        canvas.set(col, row, marker)?;

        let label = truncate_with_ellipsis(
            &format!("{}歳: {}", event.age(), event.title()),
            EVENT_LABEL_MAX_CHARS,
        );
        canvas.write_str(col + 2, row, &label)?;
    }

    Ok(canvas.to_string_trimmed())
}

fn px_to_col(x: f64) -> usize {
    (x / CELL_WIDTH).round() as usize
}

fn px_to_row(y: f64) -> usize {
    (y / CELL_HEIGHT).round() as usize
}
