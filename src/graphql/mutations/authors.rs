use super::prelude::*;

#[derive(Default)]
pub struct AuthorMutations;

#[Object]
impl AuthorMutations {
    /// Set an author's birth year
    ///
    /// Requires authentication. Resolves to null when no author carries the
    /// given name; this mutation never creates authors.
    async fn edit_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        set_born_to: i32,
    ) -> Result<Option<Author>> {
        let user = current_user(ctx).await?;
        let store = ctx.data_unchecked::<Store>();

        let Some(author) = store
            .authors()
            .find_by_name(&name)
            .await
            .map_err(errors::internal)?
        else {
            tracing::debug!(name = %name, "editAuthor target not found");
            return Ok(None);
        };

        let updated = store
            .authors()
            .update(
                author.id,
                UpdateAuthor {
                    born: Some(set_born_to),
                    ..Default::default()
                },
            )
            .await
            .map_err(errors::internal)?
            .ok_or_else(|| errors::internal(format!("author {} vanished during edit", author.id)))?;

        tracing::info!(
            user_id = %user.id,
            author_id = %updated.id,
            name = %updated.name,
            born = set_born_to,
            "Author updated"
        );
        Ok(Some(Author::new(updated)))
    }
}
