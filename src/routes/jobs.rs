use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde_json::Value;

use crate::{
    dto::job_dto::JobListQuery,
    error::{Error, Result},
    AppState,
};

/// Fields the backend's creation endpoint requires; checked before any
/// request leaves this process.
const REQUIRED_FIELDS: [&str; 8] = [
    "title",
    "description",
    "category",
    "location",
    "pay_amount",
    "pay_type",
    "contact_method",
    "username",
];

// Absent means missing, null, or a blank string; numeric zero is present.
fn field_is_absent(body: &Value, field: &str) -> bool {
    match body.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    responses(
        (status = 200, description = "Backend response relayed"),
        (status = 400, description = "A required field is missing"),
        (status = 500, description = "Backend call failed")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse> {
    for field in REQUIRED_FIELDS {
        if field_is_absent(&body, field) {
            return Err(Error::MissingField(field.to_string()));
        }
    }

    match state.backend.create_job(&body).await {
        Ok(data) => Ok(Json(data)),
        Err(err) => {
            tracing::error!(error = ?err, "Error creating job");
            Err(Error::Upstream("Failed to create job posting".to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("limit" = Option<i64>, Query, description = "Number of items to return"),
        ("category" = Option<String>, Query, description = "Filter by category")
    ),
    responses(
        (status = 200, description = "Backend job list relayed"),
        (status = 500, description = "Backend call failed")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let limit = query.limit.unwrap_or(100);
    match state.backend.list_jobs(limit, query.category.as_deref()).await {
        Ok(data) => Ok(Json(data)),
        Err(err) => {
            tracing::error!(error = ?err, "Error fetching jobs");
            Err(Error::Upstream("Failed to fetch jobs".to_string()))
        }
    }
}
