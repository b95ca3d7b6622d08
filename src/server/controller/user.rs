use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, LoginDto, LoginResponseDto, UserDto, VerifyResponseDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{LoginParams, RegisterUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Hashes the password and stores the account. Emails are unique.
///
/// # Returns
/// - `200 OK` - Created user without password hash
/// - `400 Bad Request` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User registered", body = UserDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok(Json(user.into_dto()))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Bearer access token valid for 30 minutes plus a user summary
/// - `401 Unauthorized` - Unknown email or wrong password, with `WWW-Authenticate: Bearer`
/// - `500 Internal Server Error` - Database, hashing, or signing error
#[utoipa::path(
    post,
    path = "/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponseDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let (access_token, user) = service
        .login(LoginParams::from_dto(payload), &state.tokens)
        .await?;

    Ok(Json(LoginResponseDto {
        access_token,
        token_type: "bearer".to_string(),
        user: user.into_summary_dto(),
    }))
}

/// Verify the bearer token on the request.
///
/// # Returns
/// - `200 OK` - Token valid, with the user it belongs to
/// - `401 Unauthorized` - Token missing, malformed, tampered, or expired
/// - `404 Not Found` - Token valid but the user no longer exists
#[utoipa::path(
    get,
    path = "/users/verify",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponseDto),
        (status = 401, description = "Not authenticated or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    Ok(Json(VerifyResponseDto {
        valid: true,
        user: user.into_summary_dto(),
    }))
}

/// List users.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Users in id order", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.list(params.skip, params.limit).await?;

    Ok(Json(
        users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into_dto()))
}
