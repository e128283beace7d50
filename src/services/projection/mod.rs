//! Event view-model projector.
//!
//! Keeps `PositionedCalendarEvent`s consistent with the current event set
//! and grid geometry. Pure recompute over a session snapshot; the facade
//! memoizes it on its inputs.

use crate::models::event::CalendarEvent;
use crate::models::view_model::PositionedCalendarEvent;
use crate::services::layout;
use crate::services::session::CalendarSession;
use crate::services::validation;
use crate::utils::date::{day_at_hour, find_date_index};

/// Project the event set into positioned view-models for the current grid.
///
/// Events on days outside the visible columns are skipped. Events on a
/// visible day whose start or end falls outside the configured hour range
/// are excluded with a warning rather than mis-rendered; the in-range rule
/// is `from >= day@start_hour` and `to <= day@end_hour`, treating
/// `end_hour` as an inclusive boundary instant. Output order follows the
/// source list.
pub fn project(
    session: &CalendarSession,
    events: &[CalendarEvent],
) -> Vec<PositionedCalendarEvent> {
    let config = session.config();
    let columns = session.columns();
    let column_dates: Vec<_> = columns.iter().map(|c| c.date).collect();
    let column_width = session.column_width();

    let mut positioned = Vec::with_capacity(events.len());
    for event in events {
        let day = event.from.date_naive();
        if find_date_index(&column_dates, day).is_none() {
            continue;
        }

        let range_start = day_at_hour(day, config.start_hour);
        let range_end = day_at_hour(day, config.end_hour);
        if event.from < range_start || event.to > range_end {
            log::warn!(
                "event {} ({} - {}) falls outside the visible {}:00-{}:00 range, not projecting it",
                event.id,
                event.from,
                event.to,
                config.start_hour,
                config.end_hour
            );
            continue;
        }

        let rect = match layout::rectangle_for(event, config, columns, column_width) {
            Ok(rect) => rect,
            Err(err) => {
                // Unreachable: the day filter above guarantees the column.
                log::error!("projection out of sync with its own columns: {err}");
                debug_assert!(false, "projection out of sync with its own columns: {err}");
                continue;
            }
        };

        let read_only = validation::is_read_only(config, event, events);
        positioned.push(PositionedCalendarEvent::new(event.clone(), rect, read_only));
    }
    positioned
}
