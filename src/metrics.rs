use crate::models::{ApplicationState, SelectionRange, Summary};
use chrono::{Datelike, Duration, NaiveDate};
use std::str::FromStr;

/// First day of the calendar week used when counting week boundaries.
///
/// Defaults to Monday. A Sunday→Monday range spans two weeks under Monday
/// start and one under Sunday start (the date-fns default). Set
/// `APP_WEEK_START=sunday` for Sunday-start counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    fn start_of_week(self, date: NaiveDate) -> NaiveDate {
        let offset = match self {
            WeekStart::Monday => date.weekday().num_days_from_monday(),
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        };
        date - Duration::days(i64::from(offset))
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(format!("unknown week start '{other}'")),
        }
    }
}

pub fn days_between(end: NaiveDate, start: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Number of week boundaries between the weeks containing `start` and `end`.
pub fn calendar_weeks_between(end: NaiveDate, start: NaiveDate, week_start: WeekStart) -> i64 {
    days_between(week_start.start_of_week(end), week_start.start_of_week(start)) / 7
}

pub fn week_count(range: &SelectionRange, week_start: WeekStart) -> i64 {
    1 + calendar_weeks_between(range.end_date, range.start_date, week_start)
}

pub fn day_count(range: &SelectionRange) -> i64 {
    1 + days_between(range.end_date, range.start_date)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn per_week(amount: Option<f64>, week_count: i64) -> f64 {
    split(amount, week_count)
}

pub fn per_day(amount: Option<f64>, day_count: i64) -> f64 {
    split(amount, day_count)
}

fn split(amount: Option<f64>, installments: i64) -> f64 {
    match amount {
        Some(total) if total != 0.0 && installments > 0 => round2(total / installments as f64),
        _ => 0.0,
    }
}

pub fn summarize(state: &ApplicationState, week_start: WeekStart) -> Summary {
    let range = &state.selection_range;
    let weeks = week_count(range, week_start);
    let days = day_count(range);

    Summary {
        amount: state.amount,
        start_date: range.start_date,
        end_date: range.end_date,
        week_count: weeks,
        day_count: days,
        per_week: per_week(state.amount, weeks),
        per_day: per_day(state.amount, days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_AMOUNT;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_range_counts_once() {
        let range = SelectionRange::new(date(2024, 3, 14), date(2024, 3, 14));
        assert_eq!(day_count(&range), 1);
        assert_eq!(week_count(&range, WeekStart::Monday), 1);
        assert_eq!(week_count(&range, WeekStart::Sunday), 1);
    }

    #[test]
    fn eight_days_cross_one_week_boundary() {
        let range = SelectionRange::new(date(2024, 1, 1), date(2024, 1, 8));
        assert_eq!(day_count(&range), 8);
        assert_eq!(week_count(&range, WeekStart::Monday), 2);
    }

    #[test]
    fn week_start_changes_boundary_count() {
        // Saturday through Monday.
        let range = SelectionRange::new(date(2024, 1, 6), date(2024, 1, 8));
        assert_eq!(week_count(&range, WeekStart::Monday), 2);
        assert_eq!(week_count(&range, WeekStart::Sunday), 2);

        // Sunday through Monday.
        let range = SelectionRange::new(date(2024, 1, 7), date(2024, 1, 8));
        assert_eq!(week_count(&range, WeekStart::Monday), 2);
        assert_eq!(week_count(&range, WeekStart::Sunday), 1);
    }

    #[test]
    fn missing_or_zero_amount_splits_to_zero() {
        assert_eq!(per_week(None, 4), 0.0);
        assert_eq!(per_day(None, 31), 0.0);
        assert_eq!(per_week(Some(0.0), 4), 0.0);
    }

    #[test]
    fn even_split() {
        assert_eq!(per_week(Some(100.0), 4), 25.0);
        assert_eq!(per_day(Some(100.0), 4), 25.0);
        assert_eq!(per_day(Some(100.0), 3), 33.33);
    }

    #[test]
    fn non_positive_count_yields_zero() {
        assert_eq!(per_day(Some(100.0), 0), 0.0);
        assert_eq!(per_week(Some(100.0), -2), 0.0);
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(33.333), 33.33);
        assert_eq!(round2(33.335), 33.34);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn week_start_parses_case_insensitively() {
        assert_eq!("Sunday".parse::<WeekStart>(), Ok(WeekStart::Sunday));
        assert_eq!(" mon ".parse::<WeekStart>(), Ok(WeekStart::Monday));
        assert!("friday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn summarize_one_month_range() {
        let state = ApplicationState {
            amount: Some(310.0),
            selection_range: SelectionRange::new(date(2024, 1, 1), date(2024, 1, 31)),
        };
        let summary = summarize(&state, WeekStart::Monday);
        assert_eq!(summary.day_count, 31);
        assert_eq!(summary.week_count, 5);
        assert_eq!(summary.per_day, 10.0);
        assert_eq!(summary.per_week, 62.0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["weekCount"], 5);
        assert_eq!(json["perDay"], 10.0);
        assert_eq!(json["startDate"], "2024-01-01");
    }

    #[test]
    fn largest_amount_rounds_to_a_finite_share() {
        assert!(per_day(Some(MAX_AMOUNT), 1).is_finite());
        assert_eq!(per_week(Some(MAX_AMOUNT), 4), 2.5e14);
    }
}
