use crate::error::BeSafeServerError;
use crate::AppState;
use anyhow::anyhow;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use besafe::error::QueryError;
use besafe::{
    parse_optional_timestamp, AggregatedStat, AirQualityQueries, DayBound, EpisodeFilter,
    HourlyMeasurement, LinkedDataFilter, LinkedMeasurement, Measurement, MeasurementFilter,
    OzoneEpisode, StatisticsFilter,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn create_air_quality_routes() -> Router<AppState> {
    Router::new()
        .route("/measurements", get(handle_measurements))
        .route("/measurements/filtered", get(handle_filtered_measurements))
        .route("/episodes", get(handle_episodes))
        .route("/linked", get(handle_linked_measurements))
        .route("/statistics", get(handle_statistics))
        .route("/stations", get(handle_stations))
        .route("/magnitudes", get(handle_magnitudes))
}

#[derive(Debug, Deserialize)]
struct MeasurementParams {
    station: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpisodeParams {
    start: Option<String>,
    end: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinkedParams {
    station: Option<String>,
    magnitude: Option<String>,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct StatisticsParams {
    station: Option<String>,
    magnitude: Option<String>,
    date: Option<String>,
}

/// Evaluates `operation` on the blocking thread pool.
async fn run_blocking<T, F>(state: &AppState, operation: F) -> Result<Json<T>, BeSafeServerError>
where
    T: Send + 'static,
    F: FnOnce(&AirQualityQueries) -> Result<T, QueryError> + Send + 'static,
{
    let queries = Arc::clone(&state.queries);
    let records = tokio::task::spawn_blocking(move || operation(&queries))
        .await
        .map_err(|e| BeSafeServerError::Internal(anyhow!(e)))??;
    Ok(Json(records))
}

async fn handle_measurements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Measurement>>, BeSafeServerError> {
    run_blocking(&state, |queries| queries.measurements()).await
}

async fn handle_filtered_measurements(
    State(state): State<AppState>,
    Query(params): Query<MeasurementParams>,
) -> Result<Json<Vec<HourlyMeasurement>>, BeSafeServerError> {
    let filter = MeasurementFilter::new(
        params.station,
        parse_optional_timestamp(params.date.as_deref(), DayBound::Start)?,
    );
    run_blocking(&state, move |queries| queries.filtered_measurements(&filter)).await
}

async fn handle_episodes(
    State(state): State<AppState>,
    Query(params): Query<EpisodeParams>,
) -> Result<Json<Vec<OzoneEpisode>>, BeSafeServerError> {
    let filter = EpisodeFilter::new(
        parse_optional_timestamp(params.start.as_deref(), DayBound::Start)?,
        parse_optional_timestamp(params.end.as_deref(), DayBound::End)?,
    );
    run_blocking(&state, move |queries| queries.ozone_episodes(&filter)).await
}

async fn handle_linked_measurements(
    State(state): State<AppState>,
    Query(params): Query<LinkedParams>,
) -> Result<Json<Vec<LinkedMeasurement>>, BeSafeServerError> {
    let filter = LinkedDataFilter::new(params.station, params.magnitude, params.limit);
    run_blocking(&state, move |queries| queries.linked_measurements(&filter)).await
}

async fn handle_statistics(
    State(state): State<AppState>,
    Query(params): Query<StatisticsParams>,
) -> Result<Json<Vec<AggregatedStat>>, BeSafeServerError> {
    let filter = StatisticsFilter::new(
        params.station,
        params.magnitude,
        parse_optional_timestamp(params.date.as_deref(), DayBound::Start)?,
    );
    run_blocking(&state, move |queries| queries.aggregated_statistics(&filter)).await
}

async fn handle_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, BeSafeServerError> {
    run_blocking(&state, |queries| queries.stations()).await
}

async fn handle_magnitudes(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, BeSafeServerError> {
    run_blocking(&state, |queries| queries.magnitudes()).await
}
