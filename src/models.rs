use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const SELECTION_KEY: &str = "selection";
pub const DEFAULT_COLOR: &str = "#4caf50";
/// Largest accepted amount. Keeps `amount * 100` far from overflow when
/// shares are rounded to cents.
pub const MAX_AMOUNT: f64 = 1e15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub key: String,
    pub color: String,
}

impl SelectionRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            key: SELECTION_KEY.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Swaps the endpoints when the end lies before the start.
    pub fn normalized(mut self) -> Self {
        if self.end_date < self.start_date {
            std::mem::swap(&mut self.start_date, &mut self.end_date);
        }
        self
    }

    /// Today through the same day next month.
    pub fn starting_at(today: NaiveDate) -> Self {
        let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
        Self::new(today, end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub selection_range: SelectionRange,
}

impl ApplicationState {
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            amount: None,
            selection_range: SelectionRange::starting_at(today),
        }
    }
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::starting_at(Local::now().date_naive())
    }
}

#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Payload of the date-range picker's change callback.
#[derive(Debug, Deserialize)]
pub struct RangeChangeRequest {
    pub selection: RangeSelection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSelection {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AmountForm {
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct RangeForm {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub amount: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub week_count: i64,
    pub day_count: i64,
    pub per_week: f64,
    pub per_day: f64,
}
