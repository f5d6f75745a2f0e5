use api_types::share::InvalidShareLink;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use minimum_wage::{MinimumWageCache, MinimumWageProvider};
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod calculation;
mod minimum_wage;
mod preview;
mod server;
mod share;
mod views;

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidAmount(_)
        | EngineError::InvalidMethod(_)
        | EngineError::ShareParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServerError::Engine(EngineError::ShareParams(err)) => {
                let body = InvalidShareLink {
                    error: "invalid share link".to_string(),
                    issues: err.issues.iter().map(ToString::to_string).collect(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ServerError::Engine(err) => (
                status_for_engine_error(&err),
                Json(Error {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            ServerError::Generic(error) => {
                (StatusCode::BAD_REQUEST, Json(Error { error })).into_response()
            }
        }
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use engine::{ShareField, ShareIssue, ShareParamsError};

    use super::*;

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = ServerError::from(EngineError::InvalidMethod("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn share_params_maps_to_422() {
        let err = ShareParamsError {
            issues: vec![ShareIssue::Missing(ShareField::Expenses)],
        };
        let res = ServerError::from(EngineError::from(err)).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
