// Date utility functions

use chrono::{DateTime, Datelike, Days, Duration, Local, LocalResult, NaiveDate, TimeZone, Weekday};

/// The instant at `hour:00` on the given day. `hour == 24` resolves to
/// midnight of the following day, so it can act as an end-of-range boundary.
///
/// Resolves DST edges instead of panicking: an ambiguous wall-clock time
/// (fall-back) yields the earlier of the two instants, and a time inside a
/// spring-forward gap yields the first valid instant after it.
pub fn day_at_hour(date: NaiveDate, hour: u32) -> DateTime<Local> {
    let (date, hour) = if hour >= 24 {
        (date + Days::new(1), hour - 24)
    } else {
        (date, hour)
    };
    let mut naive = date.and_hms_opt(hour, 0, 0).unwrap();
    loop {
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(instant) => return instant,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            // Skipped by a DST gap; offset shifts are whole multiples of
            // 15 minutes, so stepping lands on the post-jump wall clock.
            LocalResult::None => naive = naive + Duration::minutes(15),
        }
    }
}

/// The Monday-through-Sunday week containing `date`.
pub fn week_dates_from_date(date: NaiveDate) -> Vec<NaiveDate> {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    let monday = date - Days::new(days_from_monday);
    (0..7).map(|i| monday + Days::new(i)).collect()
}

/// First day of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Index of `target`'s calendar day in `dates`, or `None` if absent.
pub fn find_date_index(dates: &[NaiveDate], target: NaiveDate) -> Option<usize> {
    dates.iter().position(|d| *d == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 18).unwrap()
    }

    #[test]
    fn test_week_dates_start_monday() {
        let week = week_dates_from_date(wednesday());
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2023, 10, 16).unwrap());
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2023, 10, 22).unwrap());
        assert_eq!(week[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_dates_from_monday_itself() {
        let monday = NaiveDate::from_ymd_opt(2023, 10, 16).unwrap();
        let week = week_dates_from_date(monday);
        assert_eq!(week[0], monday);
    }

    #[test]
    fn test_week_dates_from_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2023, 10, 22).unwrap();
        let week = week_dates_from_date(sunday);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2023, 10, 16).unwrap());
        assert_eq!(week[6], sunday);
    }

    #[test]
    fn test_week_start_matches_week_dates() {
        assert_eq!(week_start(wednesday()), week_dates_from_date(wednesday())[0]);
    }

    #[test]
    fn test_day_at_hour() {
        let instant = day_at_hour(wednesday(), 9);
        assert_eq!(instant.date_naive(), wednesday());
        assert_eq!(instant.time(), chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn test_day_at_hour_24_is_next_midnight() {
        let instant = day_at_hour(wednesday(), 24);
        assert_eq!(
            instant.date_naive(),
            NaiveDate::from_ymd_opt(2023, 10, 19).unwrap()
        );
        assert_eq!(instant.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_find_date_index() {
        let week = week_dates_from_date(wednesday());
        assert_eq!(find_date_index(&week, wednesday()), Some(2));
        let outside = NaiveDate::from_ymd_opt(2023, 10, 25).unwrap();
        assert_eq!(find_date_index(&week, outside), None);
    }
}
