use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book, creating its author on first reference
    ///
    /// Requires authentication. The announcement event goes out only after
    /// both the book and the author's book cache are persisted.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author: String,
        published: i32,
        genres: Vec<String>,
    ) -> Result<Book> {
        let user = current_user(ctx).await?;
        let store = ctx.data_unchecked::<Store>();
        let events = ctx.data_unchecked::<Arc<dyn EventBus>>();

        let invalid_args = value!({
            "title": title.as_str(),
            "author": author.as_str(),
            "published": published,
            "genres": genres.clone(),
        });

        let existing = store
            .authors()
            .find_by_name(&author)
            .await
            .map_err(errors::internal)?;
        let author_record = match existing {
            Some(record) => record,
            None => {
                let record = store
                    .authors()
                    .insert(CreateAuthor {
                        name: author.clone(),
                        born: None,
                    })
                    .await
                    .map_err(|e| errors::from_store(e, invalid_args.clone()))?;
                tracing::info!(author_id = %record.id, name = %record.name, "Author created");
                record
            }
        };

        let book = store
            .books()
            .insert(CreateBook {
                title,
                author_id: author_record.id,
                published,
                genres,
            })
            .await
            .map_err(|e| errors::from_store(e, invalid_args))?;

        let author_record = store
            .authors()
            .update(
                author_record.id,
                UpdateAuthor {
                    push_book: Some(book.id),
                    ..Default::default()
                },
            )
            .await
            .map_err(errors::internal)?
            .ok_or_else(|| {
                errors::internal(format!("author {} vanished during add", author_record.id))
            })?;

        tracing::info!(
            user_id = %user.id,
            book_id = %book.id,
            title = %book.title,
            author = %author_record.name,
            "Book added"
        );

        events.publish(CatalogEvent::BookAdded {
            book: book.clone(),
            author: author_record.clone(),
        });

        Ok(Book::with_author(book, author_record))
    }
}
