use crate::{
    AppState,
    types::{AppError, CreateUserRequest, Result, User},
};
use axum::{Json, extract::State};

/// Register an end user with the remote service
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Missing names or malformed email/phone"),
        (status = 502, description = "Remote memory API failure")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>> {
    if payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Err(AppError::InvalidInput(
            "Missing required fields: firstName and lastName are required".to_string(),
        ));
    }

    if let Some(email) = &payload.email {
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".to_string()));
        }
    }

    if let Some(phone) = &payload.phone {
        if !is_valid_phone(phone) {
            return Err(AppError::InvalidInput(
                "Invalid phone format. Must be at least 10 digits".to_string(),
            ));
        }
    }

    let user = state.memory_api.create_user(&payload).await?;
    Ok(Json(user))
}

/// The address must contain an `@` with a dotted domain after it.
fn is_valid_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

/// At least 10 characters once whitespace, dashes, and plus signs are stripped.
fn is_valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .count()
        >= 10
}
