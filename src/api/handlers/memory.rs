use crate::{
    AppState,
    types::{AppError, MemoryQueryRequest, MemoryQueryResponse, Result},
};
use axum::{Json, extract::State};

/// Run a single-shot retrieval against the memory service
#[utoipa::path(
    post,
    path = "/api/memory/query",
    request_body = MemoryQueryRequest,
    responses(
        (status = 200, description = "Memory answer and supporting facts", body = MemoryQueryResponse),
        (status = 400, description = "Missing query"),
        (status = 502, description = "Remote memory API failure")
    ),
    tag = "memory"
)]
pub async fn query_memory(
    State(state): State<AppState>,
    Json(payload): Json<MemoryQueryRequest>,
) -> Result<Json<MemoryQueryResponse>> {
    if payload.query.is_empty() {
        return Err(AppError::InvalidInput(
            "Query parameter is required".to_string(),
        ));
    }

    let retrieval = state
        .memory_api
        .retrieve_memory(payload.memory_id.as_deref(), &payload.query, true)
        .await?;

    Ok(Json(MemoryQueryResponse {
        success: true,
        message: "Query executed successfully.".to_string(),
        answer: retrieval.payload.unwrap_or_default(),
        facts: retrieval.facts,
    }))
}
