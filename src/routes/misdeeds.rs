use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::misdeed_dto::MisdeedQuery,
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/misdeeds",
    params(
        ("limit" = Option<i64>, Query, description = "Number of items to return"),
        ("min_score" = Option<i64>, Query, description = "Minimum scam score"),
        ("search" = Option<String>, Query, description = "Free-text search query")
    ),
    responses(
        (status = 200, description = "Backend misdeed list relayed"),
        (status = 500, description = "Backend call failed")
    )
)]
#[axum::debug_handler]
pub async fn list_misdeeds(
    State(state): State<AppState>,
    Query(query): Query<MisdeedQuery>,
) -> Result<impl IntoResponse> {
    let limit = query.limit.unwrap_or(50);
    let min_score = query.min_score.unwrap_or(5);
    match state
        .backend
        .list_misdeeds(limit, min_score, query.search.as_deref())
        .await
    {
        Ok(data) => Ok(Json(data)),
        Err(err) => {
            tracing::error!(error = ?err, "Error fetching misdeeds");
            Err(Error::Upstream("Failed to fetch misdeeds".to_string()))
        }
    }
}
