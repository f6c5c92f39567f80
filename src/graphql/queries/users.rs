use super::prelude::*;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// The account behind the request's token, or null when anonymous
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Ok(try_current_user(ctx).await?.map(User::from))
    }
}
