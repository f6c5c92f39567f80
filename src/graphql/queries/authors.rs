use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Number of authors in the catalog
    async fn author_count(&self, ctx: &Context<'_>) -> Result<i32> {
        let store = ctx.data_unchecked::<Store>();
        let count = store.authors().count().await.map_err(errors::internal)?;
        Ok(count as i32)
    }

    /// All authors with their derived book counts
    async fn all_authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let store = ctx.data_unchecked::<Store>();
        let records = store
            .authors()
            .list_all()
            .await
            .map_err(errors::internal)?;
        Ok(records.into_iter().map(Author::new).collect())
    }
}
