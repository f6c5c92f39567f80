//! Account mutations
//!
//! `createUser` and `login` are the only operations reachable without a
//! token. Login failures map onto one generic error so usernames cannot be
//! probed through the API.

use super::prelude::*;

#[derive(Default)]
pub struct AuthMutations;

#[Object]
impl AuthMutations {
    /// Register a new account
    ///
    /// Accounts start with the configured default password until a proper
    /// password flow exists.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        favorite_genre: String,
    ) -> Result<User> {
        let auth = ctx.data_unchecked::<AuthService>();

        let invalid_args = value!({
            "username": username.as_str(),
            "favoriteGenre": favorite_genre.as_str(),
        });

        let user = auth
            .create_user(username, favorite_genre)
            .await
            .map_err(|e| errors::from_store(e, invalid_args))?;
        Ok(User::from(user))
    }

    /// Exchange credentials for a signed token
    async fn login(&self, ctx: &Context<'_>, username: String, password: String) -> Result<Token> {
        let auth = ctx.data_unchecked::<AuthService>();

        match auth.login(&username, &password).await {
            Ok(value) => Ok(Token { value }),
            Err(LoginError::InvalidCredentials) => Err(errors::bad_credentials()),
            Err(LoginError::Internal(e)) => Err(errors::internal(e)),
        }
    }
}
