//! Layout engine.
//!
//! The two inverse mappings between calendar time and pixel space, plus
//! event-to-rectangle projection and the viewport-to-container coordinate
//! conversion. Everything here is a pure function over value snapshots.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::config::CalendarConfig;
use crate::models::event::CalendarEvent;
use crate::models::geometry::{EventRect, PointerPoint, ViewportRect};
use crate::services::grid::DateColumn;
use crate::utils::date::{day_at_hour, find_date_index};

/// Errors from time/pixel mapping. These indicate a caller-contract
/// violation (events must be pre-filtered to the visible columns) and are
/// raised loudly rather than swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("instant's day {0} is not among the visible columns")]
    ColumnNotFound(chrono::NaiveDate),
}

/// Convert a duration in minutes to a pixel height.
pub fn pixel_height_from_minutes(minutes: i64, cell_height: f32) -> f32 {
    minutes as f32 * (cell_height / 60.0)
}

/// Convert a pixel height to a duration in minutes.
pub fn minutes_from_pixel_height(height: f32, cell_height: f32) -> f32 {
    height / (cell_height / 60.0)
}

/// Vertical pixel position of an instant.
///
/// A pure linear map anchored at `start_hour` of the instant's own day.
/// Instants outside the visible range still map monotonically; clamping is
/// the interaction controller's job, not this function's.
pub fn top_pixels(instant: DateTime<Local>, config: &CalendarConfig) -> f32 {
    let earliest = day_at_hour(instant.date_naive(), config.start_hour);
    let minutes = (instant - earliest).num_minutes();
    pixel_height_from_minutes(minutes, config.cell_height)
}

/// Horizontal pixel position of an instant: its column index times the
/// column width.
pub fn left_pixels(
    instant: DateTime<Local>,
    columns: &[DateColumn],
    column_width: f32,
) -> Result<f32, LayoutError> {
    let dates: Vec<_> = columns.iter().map(|c| c.date).collect();
    let index = find_date_index(&dates, instant.date_naive())
        .ok_or(LayoutError::ColumnNotFound(instant.date_naive()))?;
    Ok(index as f32 * column_width)
}

/// Map a container-relative pixel point back to a calendar instant.
///
/// Snaps to whole hours by construction: the column index comes from
/// `floor(x / column_width)` (clamped to the column range) and the hour
/// from `floor(y / cell_height) + start_hour`. A pointer exactly on the
/// lower boundary (`hour == end_hour`) is pulled back one hour so the
/// result stays inside the visible range.
#[allow(clippy::too_many_arguments)]
pub fn pixel_to_instant(
    x: f32,
    y: f32,
    columns: &[DateColumn],
    column_width: f32,
    cell_height: f32,
    start_hour: u32,
    end_hour: u32,
) -> DateTime<Local> {
    debug_assert!(!columns.is_empty());

    let day_index = (x / column_width).floor() as i64;
    let day_index = day_index.clamp(0, columns.len() as i64 - 1) as usize;
    let day = columns[day_index].date;

    let mut hour = (y / cell_height).floor() as i64 + start_hour as i64;
    if hour == end_hour as i64 {
        hour -= 1;
    }

    day_at_hour(day, hour.max(0) as u32)
}

/// Project an event into its pixel rectangle for the current grid.
pub fn rectangle_for(
    event: &CalendarEvent,
    config: &CalendarConfig,
    columns: &[DateColumn],
    column_width: f32,
) -> Result<EventRect, LayoutError> {
    let height = pixel_height_from_minutes(event.duration_minutes(), config.cell_height);
    let top = top_pixels(event.from, config);
    let left = left_pixels(event.from, columns, column_width)?;
    Ok(EventRect::new(left, top, column_width, height))
}

/// Convert a viewport pointer position into container-relative coordinates.
///
/// `cursor_offset_y` is subtracted first so a dragged rectangle tracks its
/// grabbed point rather than snapping its top edge to the cursor. The x
/// coordinate is clamped to `width - 1` so flooring never lands one column
/// past the end; y is clamped to the grid content height.
pub fn relative_coordinates(
    point: PointerPoint,
    viewport: &ViewportRect,
    cursor_offset_y: f32,
    content_height: f32,
) -> (f32, f32) {
    let x = point.x - viewport.left;
    let y = (point.y - cursor_offset_y) - viewport.top + viewport.scroll_top;

    let x = x.clamp(0.0, (viewport.width - 1.0).max(0.0));
    let y = y.clamp(0.0, content_height);
    (x, y)
}
