use crate::errors::AppError;
use crate::metrics::WeekStart;
use crate::models::{ApplicationState, SelectionRange, MAX_AMOUNT};
use chrono::NaiveDate;
use crate::storage::{load_state, persist_state};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::{debug, error};

/// The single persisted application state, shared with the request handlers.
///
/// Every mutation is written through to the slot before the in-memory value
/// changes. A failed write leaves memory untouched.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub week_start: WeekStart,
    data: Arc<Mutex<ApplicationState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, week_start: WeekStart, data: ApplicationState) -> Self {
        Self {
            data_path,
            week_start,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn load(
        data_path: PathBuf,
        week_start: WeekStart,
        default: ApplicationState,
    ) -> Self {
        let data = load_state(&data_path, default).await;
        Self::new(data_path, week_start, data)
    }

    pub async fn snapshot(&self) -> ApplicationState {
        self.data.lock().await.clone()
    }

    pub async fn replace(&self, next: ApplicationState) -> Result<ApplicationState, AppError> {
        self.update(move |_| next).await
    }

    pub async fn update<F>(&self, f: F) -> Result<ApplicationState, AppError>
    where
        F: FnOnce(&ApplicationState) -> ApplicationState,
    {
        let mut data = self.data.lock().await;
        let next = f(&*data);

        if let Err(err) = persist_state(&self.data_path, &next).await {
            error!("failed to persist state: {err}");
            return Err(err);
        }
        debug!(?next, "state persisted");

        *data = next.clone();
        Ok(next)
    }

    /// Negative amounts are clamped to zero. Non-finite amounts and amounts
    /// above [`MAX_AMOUNT`] are rejected.
    pub async fn set_amount(&self, amount: Option<f64>) -> Result<ApplicationState, AppError> {
        let amount = match amount {
            Some(value) if !value.is_finite() => {
                return Err(AppError::invalid("amount must be a finite number"));
            }
            Some(value) if value > MAX_AMOUNT => {
                return Err(AppError::invalid(format!(
                    "amount must not exceed {MAX_AMOUNT}"
                )));
            }
            Some(value) => Some(value.max(0.0)),
            None => None,
        };

        self.update(|prev| ApplicationState {
            amount,
            ..prev.clone()
        })
        .await
    }

    /// Reversed dates are swapped before they are stored. Without a color the
    /// current one is kept.
    pub async fn set_selection_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        color: Option<String>,
    ) -> Result<ApplicationState, AppError> {
        self.update(|prev| {
            let color = color.unwrap_or_else(|| prev.selection_range.color.clone());
            ApplicationState {
                selection_range: SelectionRange {
                    color,
                    ..SelectionRange::new(start_date, end_date)
                }
                .normalized(),
                ..prev.clone()
            }
        })
        .await
    }
}
