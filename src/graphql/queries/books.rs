use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Number of books in the catalog
    async fn book_count(&self, ctx: &Context<'_>) -> Result<i32> {
        let store = ctx.data_unchecked::<Store>();
        let count = store.books().count().await.map_err(errors::internal)?;
        Ok(count as i32)
    }

    /// All books, optionally restricted by author name and/or genre
    ///
    /// The filters intersect when both are given. An unknown author name
    /// yields an empty list, not an error.
    async fn all_books(
        &self,
        ctx: &Context<'_>,
        author: Option<String>,
        genre: Option<String>,
    ) -> Result<Vec<Book>> {
        let store = ctx.data_unchecked::<Store>();

        let mut filter = BookFilter {
            author_id: None,
            genre,
        };
        if let Some(name) = author {
            match store
                .authors()
                .find_by_name(&name)
                .await
                .map_err(errors::internal)?
            {
                Some(author) => filter.author_id = Some(author.id),
                None => return Ok(Vec::new()),
            }
        }

        let records = store.books().list(filter).await.map_err(errors::internal)?;
        Ok(records.into_iter().map(Book::new).collect())
    }

    /// Distinct genre strings across all books
    async fn all_genres(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        let store = ctx.data_unchecked::<Store>();
        store
            .books()
            .distinct_genres()
            .await
            .map_err(errors::internal)
    }
}
