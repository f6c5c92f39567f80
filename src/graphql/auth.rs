//! GraphQL authentication context
//!
//! The transport layer verifies bearer tokens with [`verify_token`] and
//! injects the resulting [`AuthUser`] into the request context. Requests
//! without a verifiable token simply run anonymously; operations that need
//! a caller resolve it through [`current_user`], which fetches the account
//! fresh from the store on every request so tokens for deleted accounts
//! stop working immediately.

use async_graphql::{Context, Result};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::graphql::errors;
use crate::services::TokenClaims;
use crate::store::{Store, UserRecord};

/// Identity recovered from a verified token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Verify a signed token and extract the caller's identity
///
/// Returns `None` for anything that does not verify: bad signature, expired
/// token, or a subject that is not a valid id.
pub fn verify_token(token: &str, jwt_secret: &str) -> Option<AuthUser> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
    })
    .ok()?;

    let user_id = Uuid::parse_str(&token_data.claims.sub)
        .map_err(|e| {
            tracing::debug!(error = %e, "Token subject is not a valid user id");
        })
        .ok()?;

    Some(AuthUser {
        user_id,
        username: token_data.claims.username,
    })
}

/// Resolve the caller's account, failing when the request is anonymous
pub async fn current_user(ctx: &Context<'_>) -> Result<UserRecord> {
    try_current_user(ctx)
        .await?
        .ok_or_else(|| errors::unauthorized("not authenticated"))
}

/// Resolve the caller's account if the request carries a valid identity
pub async fn try_current_user(ctx: &Context<'_>) -> Result<Option<UserRecord>> {
    let Some(auth) = ctx.data_opt::<AuthUser>() else {
        return Ok(None);
    };

    let store = ctx.data_unchecked::<Store>();
    let user = store
        .users()
        .find_by_id(auth.user_id)
        .await
        .map_err(errors::internal)?;

    if user.is_none() {
        tracing::warn!(user_id = %auth.user_id, "Token for unknown user rejected");
    }
    Ok(user)
}
