//! HTTP handlers for registration and login

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    JwtAuth, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login),
    components(
        schemas(RegisterRequest, LoginRequest, AuthResponse, UserResponse),
        responses(
            BadRequestValidationResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Account registration and login")
    )
)]
pub struct ApiDoc;

/// Application state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: Arc<UserService<R>>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Create the auth router (`/register`, `/login`)
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt_auth: JwtAuth) -> Router {
    let state = AuthState {
        service: Arc::new(service),
        jwt_auth,
    };

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

fn auth_response(jwt_auth: &JwtAuth, user: User) -> UserResult<AuthResponse> {
    let token = jwt_auth
        .issue_token(&user.id.to_string(), &user.email)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            UserError::Internal("Failed to create token".to_string())
        })?;

    Ok(AuthResponse {
        token,
        user: user.into(),
    })
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    let user = state.service.register(input).await?;
    let response = auth_response(&state.jwt_auth, user)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email/password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<AuthResponse>> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;

    Ok(Json(auth_response(&state.jwt_auth, user)?))
}
