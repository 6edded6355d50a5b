use crate::gateway::ApiGateway;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use timeclock::{decode_token, Claims, RawToken, StorageScope, StoreError, TokenStore};
use tracing::{info, warn};

//--------------------------------------------------------------------------------------------------
// Request and response types
//--------------------------------------------------------------------------------------------------

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct FailurePayload {
    message: String,
}

//--------------------------------------------------------------------------------------------------
// Login Error
//--------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoginError {
    // Backend's own message, shown inline to the user
    #[error("{0}")]
    Rejected(String),
    #[error("could not reach the attendance backend: {0}")]
    Network(#[from] reqwest::Error),
    #[error("backend issued a token this client cannot read")]
    UnusableToken,
    #[error(transparent)]
    Storage(#[from] StoreError),
}

//--------------------------------------------------------------------------------------------------
// Login / logout flow
//--------------------------------------------------------------------------------------------------

// "Remember me" picks the durable scope; either way the other scope is cleared first so exactly
// one scope holds a token afterwards.

pub async fn login(
    gateway: &ApiGateway,
    store: &TokenStore,
    email: &str,
    password: &str,
    remember: bool,
) -> Result<Claims, LoginError> {
    let response = gateway.post_json("/auth/login", &LoginRequest { email, password }).await?;

    if !response.status().is_success() {
        let message = match response.json::<FailurePayload>().await {
            Ok(payload) => payload.message,
            Err(_) => "login failed".to_string(),
        };
        warn!("Login rejected for {}: {}", email, message);
        return Err(LoginError::Rejected(message));
    }

    let body: LoginResponse = response.json().await?;
    let token = RawToken::new(body.token);

    // A token we can't decode is a failed login, not a credential worth keeping
    let claims = match decode_token(&token) {
        Ok(claims) => claims,
        Err(_) => return Err(LoginError::UnusableToken),
    };

    let scope = if remember {
        StorageScope::Persistent
    } else {
        StorageScope::Ephemeral
    };

    store.clear();
    store.save(token, scope)?;

    info!(
        "Employee {} signed in as {} ({:?} scope)",
        claims.employee_id(),
        claims.role(),
        scope
    );

    Ok(claims)
}

pub fn logout(store: &TokenStore) {
    store.clear();
    info!("Signed out - token cleared from both scopes");
}

//--------------------------------------------------------------------------------------------------
