use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::{
    dto::job_dto::{DraftBrowseQuery, DraftListResponse},
    error::Result,
    form::JobForm,
    listing::ListDetailView,
    services::samples,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/drafts",
    params(
        ("search" = Option<String>, Query, description = "Matched against title and company"),
        ("location" = Option<String>, Query, description = "Matched against location"),
        ("category" = Option<String>, Query, description = "Exact category, \"All\" for no filter")
    ),
    responses(
        (status = 200, description = "Filtered listing with the selected detail record", body = DraftListResponse)
    )
)]
#[axum::debug_handler]
pub async fn browse_drafts(
    State(state): State<AppState>,
    Query(query): Query<DraftBrowseQuery>,
) -> Result<impl IntoResponse> {
    let drafts = state.drafts.load()?;
    let mut view = ListDetailView::new(samples::combined_listing(drafts));
    view.set_search(query.search.unwrap_or_default());
    view.set_location(query.location.unwrap_or_default());
    view.set_category(query.category.as_deref());

    let response = DraftListResponse {
        total: view.len(),
        selected: view.selected().cloned(),
        items: view.filtered().cloned().collect(),
    };
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/drafts",
    responses(
        (status = 201, description = "Draft stored locally"),
        (status = 400, description = "One message per failing field")
    )
)]
#[axum::debug_handler]
pub async fn create_draft(
    State(state): State<AppState>,
    Json(form): Json<JobForm>,
) -> Result<Response> {
    let validated = match form.validate() {
        Ok(validated) => validated,
        Err(errors) => {
            return Ok((StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response())
        }
    };

    validated.clone().into_payload().validate()?;

    let record = validated.into_draft(Utc::now());
    state.drafts.append(record.clone())?;
    Ok((StatusCode::CREATED, Json(record)).into_response())
}
