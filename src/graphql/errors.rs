//! GraphQL error construction
//!
//! Maps domain failures onto the error codes clients switch on. Every error
//! carries a `code` extension; validation failures additionally echo the
//! offending arguments under `invalidArgs`.

use async_graphql::{Error, ErrorExtensions, Value};

use crate::store::StoreError;

/// Operation requires a valid token and none was presented
pub fn unauthorized(message: impl Into<String>) -> Error {
    Error::new(message).extend_with(|_, e| e.set("code", "UNAUTHORIZED"))
}

/// Login failure, one generic message for unknown user and wrong password
pub fn bad_credentials() -> Error {
    Error::new("wrong credentials").extend_with(|_, e| e.set("code", "BAD_CREDENTIALS"))
}

/// Rejected input, with the arguments that caused the rejection echoed back
pub fn bad_user_input(message: impl Into<String>, invalid_args: Value) -> Error {
    Error::new(message).extend_with(|_, e| {
        e.set("code", "BAD_USER_INPUT");
        e.set("invalidArgs", invalid_args);
    })
}

/// Map a store failure onto the public taxonomy
pub fn from_store(err: StoreError, invalid_args: Value) -> Error {
    if err.is_validation() {
        tracing::debug!(error = %err, "Rejected invalid input");
        bad_user_input(err.to_string(), invalid_args)
    } else {
        internal(err)
    }
}

/// Log the cause and hand the client an opaque error
pub fn internal(err: impl std::fmt::Display) -> Error {
    tracing::error!(error = %err, "Internal error while resolving request");
    Error::new("internal server error").extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
}
