use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth::session::session_id_from_headers;
use crate::domain::user::{AuthUser, UserRole};
use crate::error::ApiError;
use crate::AppState;

/// Resolves the session cookie to an authenticated principal and stores it
/// in request extensions. Every protected route sits behind this.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match resolve_principal(&state, request.headers()).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

async fn resolve_principal(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let sid = session_id_from_headers(headers).ok_or_else(ApiError::unauthorized)?;
    let user_id = state
        .sessions_repo
        .get_user_id(&sid)
        .await?
        .ok_or_else(ApiError::unauthorized)?;
    let user = state
        .users_repo
        .get(user_id)
        .await?
        .ok_or_else(ApiError::unauthorized)?;
    Ok(AuthUser::from(&user))
}

/// Declarative role check layered after `require_session`.
#[derive(Clone)]
pub struct RoleGate {
    pub role: UserRole,
}

pub async fn require_role(
    State(gate): State<RoleGate>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match request.extensions().get::<AuthUser>() {
        Some(user) if user.role == gate.role => next.run(request).await,
        Some(_) => ApiError::Forbidden("Forbidden".to_string()).into_response(),
        None => ApiError::unauthorized().into_response(),
    }
}
