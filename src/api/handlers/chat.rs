use crate::{
    AppState,
    conversation::Orchestrator,
    types::{ChatRequest, ChatResponse, Result},
};
use axum::{Json, extract::State};

/// Run one memory-augmented conversation turn
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply and session id", body = ChatResponse),
        (status = 400, description = "Missing required parameters"),
        (status = 502, description = "Remote memory API failure")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let orchestrator = Orchestrator::new(state.memory_api.clone(), state.completion.clone());
    let outcome = orchestrator.run_turn(payload).await?;
    Ok(Json(outcome))
}
