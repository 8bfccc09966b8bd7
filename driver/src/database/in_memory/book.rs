use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(InMemoryBookInternal::find_all(con.books()))
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(InMemoryBookInternal::find_by_id(con.books(), id))
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        title: BookTitle,
        author: BookAuthor,
    ) -> error_stack::Result<Book, KernelError> {
        InMemoryBookInternal::create(con.books_mut(), title, author)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
        title: Option<BookTitle>,
        author: Option<BookAuthor>,
    ) -> error_stack::Result<Book, KernelError> {
        InMemoryBookInternal::update(con.books_mut(), id, title, author)
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        InMemoryBookInternal::delete(con.books_mut(), id)
    }
}

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("Book {} does not exist", id.as_ref()))
}

pub(in crate::database) struct InMemoryBookInternal;

impl InMemoryBookInternal {
    fn find_all(books: &[Book]) -> Vec<Book> {
        books.to_vec()
    }

    fn find_by_id(books: &[Book], id: &BookId) -> Option<Book> {
        books.iter().find(|book| book.id() == id).cloned()
    }

    // Reuses the highest id once that book has been deleted.
    fn next_id(books: &[Book]) -> error_stack::Result<BookId, KernelError> {
        match books.iter().map(|book| *book.id()).max() {
            None => Ok(BookId::FIRST),
            Some(max) => max.next().ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable("Book id space is exhausted")
            }),
        }
    }

    fn create(
        books: &mut Vec<Book>,
        title: BookTitle,
        author: BookAuthor,
    ) -> error_stack::Result<Book, KernelError> {
        let id = Self::next_id(books)?;
        let book = Book::new(id, title, author);
        books.push(book.clone());
        tracing::debug!("Inserted book {}", id.as_ref());
        Ok(book)
    }

    fn update(
        books: &mut [Book],
        id: &BookId,
        title: Option<BookTitle>,
        author: Option<BookAuthor>,
    ) -> error_stack::Result<Book, KernelError> {
        let book = books
            .iter_mut()
            .find(|book| book.id() == id)
            .ok_or_else(|| not_found(id))?;
        book.substitute(|book| {
            if let Some(title) = title.filter(|title| !title.is_empty()) {
                *book.title = title;
            }
            if let Some(author) = author.filter(|author| !author.is_empty()) {
                *book.author = author;
            }
        });
        Ok(book.clone())
    }

    fn delete(books: &mut Vec<Book>, id: &BookId) -> error_stack::Result<(), KernelError> {
        let index = books
            .iter()
            .position(|book| book.id() == id)
            .ok_or_else(|| not_found(id))?;
        books.remove(index);
        tracing::debug!("Removed book {}", id.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
    use kernel::KernelError;

    use crate::database::{InMemoryBookRepository, InMemoryDatabase};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;

        assert!(InMemoryBookRepository.find_all(&mut con).await?.is_empty());

        let book = InMemoryBookRepository
            .create(&mut con, BookTitle::new("test"), BookAuthor::new("someone"))
            .await?;
        assert_eq!(
            book,
            Book::new(
                BookId::new(1),
                BookTitle::new("test"),
                BookAuthor::new("someone"),
            )
        );

        let id = BookId::new(1);
        let found = InMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));

        let updated = InMemoryBookRepository
            .update(&mut con, &id, Some(BookTitle::new("test2")), None)
            .await?;
        let expected = book.reconstruct(|b| b.title = BookTitle::new("test2"));
        assert_eq!(updated, expected);

        InMemoryBookRepository.delete(&mut con, &id).await?;
        let found = InMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn missing_book_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::seeded();
        let mut con = db.transact().await?;
        let id = BookId::new(10);

        let err = InMemoryBookRepository
            .update(&mut con, &id, Some(BookTitle::new("t")), None)
            .await
            .unwrap_err();
        assert!(matches!(err.current_context(), KernelError::NotFound));

        let err = InMemoryBookRepository.delete(&mut con, &id).await.unwrap_err();
        assert!(matches!(err.current_context(), KernelError::NotFound));

        assert_eq!(InMemoryBookRepository.find_all(&mut con).await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn next_id_follows_the_maximum() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::with_books([
            Book::new(BookId::new(7), BookTitle::new("a"), BookAuthor::new("a")),
            Book::new(BookId::new(2), BookTitle::new("b"), BookAuthor::new("b")),
        ]);
        let mut con = db.transact().await?;

        let book = InMemoryBookRepository
            .create(&mut con, BookTitle::new("c"), BookAuthor::new("c"))
            .await?;
        assert_eq!(book.id(), &BookId::new(8));

        let order = InMemoryBookRepository
            .find_all(&mut con)
            .await?
            .iter()
            .map(|book| *book.id().as_ref())
            .collect::<Vec<i64>>();
        assert_eq!(order, vec![7, 2, 8]);
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_id_space_is_internal() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::with_books([Book::new(
            BookId::new(i64::MAX),
            BookTitle::new("a"),
            BookAuthor::new("a"),
        )]);
        let mut con = db.transact().await?;

        let err = InMemoryBookRepository
            .create(&mut con, BookTitle::new("b"), BookAuthor::new("b"))
            .await
            .unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Internal));
        Ok(())
    }
}
