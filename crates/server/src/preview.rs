//! Social preview endpoint
//!
//! Feeds the image renderer. It never fails: a link that does not decode
//! gets `{"fallback": true}` and the renderer draws the generic graphic.

use api_types::preview::PreviewCard;
use axum::{
    Json,
    extract::{RawQuery, State},
};
use engine::{DivisionMethod, parse_share_params_lenient, query_map};

use crate::server::ServerState;

pub async fn preview(
    State(state): State<ServerState>,
    RawQuery(query): RawQuery,
) -> Json<PreviewCard> {
    let query = query_map(query.as_deref().unwrap_or_default());
    let Some(data) = parse_share_params_lenient(&query) else {
        tracing::debug!("preview fallback for undecodable link");
        return Json(PreviewCard {
            fallback: true,
            ..Default::default()
        });
    };

    let minimum_wage = state.minimum_wage.current().await;
    let result = DivisionMethod::Adjusted.calculate(&data.to_input(minimum_wage));

    Json(PreviewCard {
        fallback: false,
        name_a: Some(data.name_a),
        name_b: Some(data.name_b),
        contribution_a: Some(result.person_a.contribution),
        contribution_b: Some(result.person_b.contribution),
        expense_percentage_a: Some(result.person_a.expense_percentage),
        expense_percentage_b: Some(result.person_b.expense_percentage),
        expenses: Some(data.expenses),
    })
}
