//! Time grid geometry constants.
//!
//! Translates configuration and navigation state into the geometric
//! constants used everywhere else: the visible hour rows, the ordered day
//! columns, and the per-column pixel width.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::config::CalendarConfig;
use crate::models::navigation::{CalendarView, NavigationState};
use crate::utils::date::week_dates_from_date;

/// A calendar day rendered as a vertical lane in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumn {
    pub index: usize,
    pub date: NaiveDate,
}

/// Errors from resolving grid geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Navigation state yields zero columns; the grid cannot be laid out.
    #[error("navigation state resolves to no visible columns")]
    InvalidViewState,
}

/// Ordered sequence of visible whole hours, `[start_hour, end_hour)`.
pub fn visible_hours(config: &CalendarConfig) -> Vec<u32> {
    (config.start_hour..config.end_hour).collect()
}

/// Resolve navigation state into the ordered, contiguous day columns.
///
/// Week view yields the 7 days starting the Monday of `date`'s week, day
/// view a single column.
pub fn columns_for(navigation: NavigationState) -> Result<Vec<DateColumn>, GridError> {
    let dates = match navigation.view {
        CalendarView::Week => week_dates_from_date(navigation.date),
        CalendarView::Day => vec![navigation.date],
    };

    if dates.is_empty() {
        return Err(GridError::InvalidViewState);
    }

    Ok(dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| DateColumn { index, date })
        .collect())
}

/// Width of one column given the container width.
///
/// Returns 1.0 while the container width is not yet known, so callers never
/// divide by zero before first layout.
pub fn column_width(container_width: Option<f32>, column_count: usize) -> f32 {
    match container_width {
        Some(width) if width > 0.0 && column_count > 0 => width / column_count as f32,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use chrono::Datelike;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 18).unwrap()
    }

    #[test]
    fn test_visible_hours_full_day() {
        let config = CalendarConfig::default();
        let hours = visible_hours(&config);
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], 0);
        assert_eq!(hours[23], 23);
    }

    #[test]
    fn test_visible_hours_restricted_range() {
        let config = CalendarConfig::builder().time_range(7, 22).build().unwrap();
        let hours = visible_hours(&config);
        assert_eq!(hours.first(), Some(&7));
        assert_eq!(hours.last(), Some(&21));
        assert_eq!(hours.len(), 15);
    }

    #[test]
    fn test_columns_for_week_view() {
        let navigation = NavigationState::new(wednesday(), CalendarView::Week);
        let columns = columns_for(navigation).unwrap();

        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0].date.weekday(), Weekday::Mon);
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(column.index, i);
        }
        // Contiguous days, no duplicates
        for pair in columns.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_columns_for_day_view() {
        let navigation = NavigationState::new(wednesday(), CalendarView::Day);
        let columns = columns_for(navigation).unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].date, wednesday());
        assert_eq!(columns[0].index, 0);
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(Some(700.0), 7), 100.0);
        assert_eq!(column_width(Some(700.0), 1), 700.0);
    }

    #[test]
    fn test_column_width_before_first_layout() {
        assert_eq!(column_width(None, 7), 1.0);
        assert_eq!(column_width(Some(0.0), 7), 1.0);
    }
}
