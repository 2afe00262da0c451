use crate::errors::AppError;
use crate::metrics::summarize;
use crate::models::{
    AmountForm, AmountRequest, ApplicationState, RangeChangeRequest, RangeForm, Summary,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.snapshot().await;
    Html(render_index(&data, &summarize(&data, state.week_start)))
}

pub async fn get_state(State(state): State<AppState>) -> Json<Summary> {
    let data = state.snapshot().await;
    Json(to_response(&state, &data))
}

pub async fn set_amount(
    State(state): State<AppState>,
    Json(payload): Json<AmountRequest>,
) -> Result<Json<Summary>, AppError> {
    let data = state.set_amount(payload.amount).await?;
    Ok(Json(to_response(&state, &data)))
}

pub async fn set_range(
    State(state): State<AppState>,
    Json(payload): Json<RangeChangeRequest>,
) -> Result<Json<Summary>, AppError> {
    let selection = payload.selection;
    let data = state
        .set_selection_range(selection.start_date, selection.end_date, selection.color)
        .await?;
    Ok(Json(to_response(&state, &data)))
}

pub async fn amount_form(
    State(state): State<AppState>,
    Form(form): Form<AmountForm>,
) -> Result<Redirect, AppError> {
    state.set_amount(parse_amount(&form.amount)?).await?;
    Ok(Redirect::to("/"))
}

pub async fn range_form(
    State(state): State<AppState>,
    Form(form): Form<RangeForm>,
) -> Result<Redirect, AppError> {
    let start_date = parse_date(&form.start_date)?;
    let end_date = parse_date(&form.end_date)?;
    state.set_selection_range(start_date, end_date, None).await?;
    Ok(Redirect::to("/"))
}

fn to_response(state: &AppState, data: &ApplicationState) -> Summary {
    summarize(data, state.week_start)
}

/// An empty field means no amount.
fn parse_amount(raw: &str) -> Result<Option<f64>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| AppError::invalid("amount must be a number"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::invalid(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}
