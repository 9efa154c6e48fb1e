use crate::{
    AppState,
    types::{
        AppError, DEFAULT_MESSAGE_LIMIT, MessageListResponse, MessageQuery, Pagination, Result,
        Role,
    },
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters accepted by the message listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMessagesParams {
    /// Session to list messages for
    #[serde(rename = "sessionID")]
    pub session_id: Option<String>,
    /// End user to list messages for
    #[serde(rename = "customerUserID")]
    pub customer_user_id: Option<String>,
    /// Restrict results to one role
    pub role: Option<String>,
    /// Page size, 1 to 100; out-of-range values fall back to the default
    pub limit: Option<i64>,
    /// Forward pagination cursor
    #[serde(rename = "nextToken")]
    pub next_token: Option<String>,
    /// Backward pagination cursor
    #[serde(rename = "previousToken")]
    pub previous_token: Option<String>,
}

/// List stored messages with pagination
#[utoipa::path(
    get,
    path = "/api/messages",
    params(ListMessagesParams),
    responses(
        (status = 200, description = "Messages and pagination metadata", body = MessageListResponse),
        (status = 400, description = "Missing selector or invalid role"),
        (status = 502, description = "Remote memory API failure")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesParams>,
) -> Result<Json<MessageListResponse>> {
    if params.session_id.is_none() && params.customer_user_id.is_none() {
        return Err(AppError::InvalidInput(
            "Either sessionID or customerUserID must be provided".to_string(),
        ));
    }

    let role = match params.role.as_deref() {
        Some(raw) => Some(raw.parse::<Role>().map_err(|_| {
            AppError::InvalidInput("Invalid role. Must be one of: user, assistant, system".to_string())
        })?),
        None => None,
    };

    let limit = params
        .limit
        .filter(|l| (1..=100).contains(l))
        .map(|l| l as u32)
        .unwrap_or(DEFAULT_MESSAGE_LIMIT);

    // When both cursors are supplied, nextToken wins.
    let previous_token = if params.next_token.is_some() {
        None
    } else {
        params.previous_token
    };

    let query = MessageQuery {
        session_id: params.session_id,
        customer_user_id: params.customer_user_id,
        role,
        limit,
        next_token: params.next_token,
        previous_token,
    };

    let page = state.memory_api.list_messages(&query).await?;

    Ok(Json(MessageListResponse {
        messages: page.messages,
        pagination: Pagination {
            next_token: page.next_token,
            previous_token: page.previous_token,
            total_count: page.total_count,
        },
    }))
}
