pub mod authors;
pub mod books;
pub mod users;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use users::UserQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::graphql::auth::try_current_user;
    pub(crate) use crate::graphql::errors;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::store::{BookFilter, Store};
}
