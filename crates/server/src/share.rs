//! Share link API endpoints

use api_types::share::{ShareData, ShareUrl};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use engine::{EngineError, build_share_url};

use crate::{ServerError, server::ServerState, views::share_data_from_api};

/// Handle requests for building a share link
///
/// Data that would not survive the strict decoder is rejected, so every
/// link handed out opens.
pub async fn share_url(
    State(state): State<ServerState>,
    payload: Result<Json<ShareData>, JsonRejection>,
) -> Result<Json<ShareUrl>, ServerError> {
    let Json(payload) = payload.map_err(|err| ServerError::Generic(err.body_text()))?;
    let data = share_data_from_api(payload)
        .validated()
        .map_err(EngineError::from)?;

    Ok(Json(ShareUrl {
        url: build_share_url(&data, &state.public_base_url),
    }))
}
