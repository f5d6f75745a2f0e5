//! Calculation API endpoints

use api_types::{
    calculation::{CalculateRequest, CalculationView, MethodResult, ResultsResponse},
    minimum_wage::MinimumWage,
};
use axum::{
    Json,
    extract::{RawQuery, State, rejection::JsonRejection},
};
use chrono::{Datelike, Utc};
use engine::{
    CalculationInput, EngineError, ShareParams, build_share_url, calculate_all, hourly_rate,
};

use crate::{
    ServerError,
    server::ServerState,
    views::{calculation_view, method_from_api, method_to_api, share_data_to_api},
};

fn non_negative(label: &str, value: i64) -> Result<i64, EngineError> {
    if value < 0 {
        return Err(EngineError::InvalidAmount(format!(
            "{label} must not be negative"
        )));
    }
    Ok(value)
}

/// Handle requests for a single division method
pub async fn calculate(
    State(state): State<ServerState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculationView>, ServerError> {
    let Json(payload) = payload.map_err(|err| ServerError::Generic(err.body_text()))?;
    let minimum_wage = match payload.minimum_wage {
        Some(value) => non_negative("minimum_wage", value)?,
        None => state.minimum_wage.current().await,
    };

    let input = CalculationInput {
        income_a: non_negative("income_a", payload.income_a)?,
        income_b: non_negative("income_b", payload.income_b)?,
        expenses: non_negative("expenses", payload.expenses)?,
        housework_a: payload.housework_a,
        housework_b: payload.housework_b,
        minimum_wage,
    };

    let method = method_from_api(payload.method);
    tracing::debug!("calculating {method}");
    Ok(Json(calculation_view(&method.calculate(&input))))
}

/// Handle share links: decode the query strictly and run every method
pub async fn results(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResultsResponse>, ServerError> {
    let data = ShareParams::parse_query(query.as_deref().unwrap_or_default())
        .map_err(EngineError::from)?;
    let minimum_wage = state.minimum_wage.current().await;

    let results = calculate_all(&data.to_input(minimum_wage))
        .into_iter()
        .map(|(method, result)| MethodResult {
            method: method_to_api(method),
            title: method.title().to_string(),
            description: method.description().to_string(),
            result: calculation_view(&result),
        })
        .collect();

    Ok(Json(ResultsResponse {
        share_url: build_share_url(&data, &state.public_base_url),
        data: share_data_to_api(data),
        minimum_wage_cents: minimum_wage,
        results,
    }))
}

/// Handle requests for the minimum wage currently used
pub async fn minimum_wage(State(state): State<ServerState>) -> Json<MinimumWage> {
    let minimum_wage_cents = state.minimum_wage.current().await;

    Json(MinimumWage {
        year: Utc::now().year(),
        minimum_wage_cents,
        hourly_rate_cents: hourly_rate(minimum_wage_cents),
    })
}
