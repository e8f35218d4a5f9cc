use axum::extract::{Extension, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{clear_session_cookie, session_cookie, session_id_from_headers};
use crate::domain::user::{AuthUser, NewUser, User, UserRole};
use crate::domain::vendor::{NewVendor, VendorCategory};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub business_name: String,
    pub category: VendorCategory,
    pub description: Option<String>,
    pub location: Option<String>,
}

fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if !is_valid_email(email) {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }
    if password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

async fn start_session(state: &AppState, user_id: Uuid) -> Result<String, ApiError> {
    let sid = Uuid::new_v4().to_string();
    let expire = chrono::Utc::now() + chrono::Duration::hours(state.config.session_ttl_hours);
    state.sessions_repo.create(&sid, user_id, expire).await?;
    Ok(session_cookie(&sid, state.config.session_ttl_hours))
}

async fn check_login(state: &AppState, req: &LoginRequest, message: &str) -> Result<User, ApiError> {
    let user = state
        .users_repo
        .get_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(message.to_string()))?;
    let hash = user
        .password_hash
        .as_deref()
        .ok_or_else(|| ApiError::Unauthorized(message.to_string()))?;
    if !verify_password(&req.password, hash)? {
        return Err(ApiError::Unauthorized(message.to_string()));
    }
    Ok(user)
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_credentials(&req.email, &req.password)?;

    if state.users_repo.get_by_email(&req.email).await?.is_some() {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let user = state
        .users_repo
        .create(&NewUser {
            email: req.email,
            password_hash: Some(hash_password(&req.password)?),
            first_name: req.first_name,
            last_name: req.last_name,
            phone: None,
            role: UserRole::User,
        })
        .await?;

    let cookie = start_session(&state, user.id).await?;
    Ok((StatusCode::CREATED, [(SET_COOKIE, cookie)], Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = check_login(&state, &req, "Invalid email or password").await?;
    let cookie = start_session(&state, user.id).await?;
    Ok(([(SET_COOKIE, cookie)], Json(user)))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(sid) = session_id_from_headers(&headers) {
        state.sessions_repo.delete(&sid).await?;
    }
    Ok((
        [(SET_COOKIE, clear_session_cookie())],
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    ))
}

pub async fn current_user(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users_repo
        .get(principal.id)
        .await?
        .ok_or_else(ApiError::unauthorized)?;
    Ok(Json(user))
}

pub async fn vendor_register(
    State(state): State<AppState>,
    Json(req): Json<VendorRegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_credentials(&req.email, &req.password)?;
    if req.business_name.len() < 2 {
        return Err(ApiError::Validation("Business name is required".to_string()));
    }

    if state.users_repo.get_by_email(&req.email).await?.is_some() {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let user = state
        .users_repo
        .create(&NewUser {
            email: req.email,
            password_hash: Some(hash_password(&req.password)?),
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            role: UserRole::Vendor,
        })
        .await?;

    let vendor = state
        .vendors_repo
        .create(
            user.id,
            &NewVendor {
                business_name: req.business_name,
                category: req.category,
                description: req.description,
                services: None,
                price_range: None,
                location: req.location,
                images: None,
                availability: None,
            },
        )
        .await?;

    let cookie = start_session(&state, user.id).await?;
    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(serde_json::json!({ "user": user, "vendor": vendor })),
    ))
}

pub async fn vendor_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = check_login(&state, &req, "Invalid email or password").await?;

    if user.role != UserRole::Vendor {
        return Err(ApiError::Forbidden(
            "This account is not registered as a vendor. Please use the vendor registration page."
                .to_string(),
        ));
    }

    let vendor = state
        .vendors_repo
        .get_by_user_id(user.id)
        .await?
        .ok_or_else(|| {
            ApiError::Forbidden("Vendor profile not found. Please contact support.".to_string())
        })?;

    let cookie = start_session(&state, user.id).await?;
    Ok((
        [(SET_COOKIE, cookie)],
        Json(serde_json::json!({ "user": user, "vendor": vendor })),
    ))
}

pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = check_login(&state, &req, "Invalid credentials").await?;

    if user.role != UserRole::Admin {
        return Err(ApiError::Forbidden(
            "Access denied. Admin privileges required.".to_string(),
        ));
    }

    let cookie = start_session(&state, user.id).await?;
    Ok(([(SET_COOKIE, cookie)], Json(user)))
}

pub async fn admin_create(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_credentials(&req.email, &req.password)?;

    if state.users_repo.get_by_email(&req.email).await?.is_some() {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let admin = state
        .users_repo
        .create(&NewUser {
            email: req.email,
            password_hash: Some(hash_password(&req.password)?),
            first_name: req.first_name,
            last_name: req.last_name,
            phone: None,
            role: UserRole::Admin,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn password_length_enforced() {
        assert!(validate_credentials("a@b.co", "short").is_err());
        assert!(validate_credentials("a@b.co", "long enough").is_ok());
    }
}
