use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookAuthor, BookId, BookTitle};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_id(raw: &str) -> error_stack::Result<BookId, KernelError> {
    BookId::parse(raw).ok_or_else(|| {
        Report::new(KernelError::NotFound)
            .attach_printable(format!("Book id `{raw}` is not an integer"))
    })
}

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let Some(id) = BookId::parse(&dto.id) else {
            tracing::debug!("Book id `{}` is not an integer", dto.id);
            return Ok(None);
        };

        let mut connection = self.database_connection().transact().await?;
        let book = self.book_query().find_by_id(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let title = supplied(dto.title);
        let author = supplied(dto.author);
        if title.is_none() && author.is_none() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Neither title nor author was supplied"));
        }

        let mut connection = self.database_connection().transact().await?;
        let book = self
            .book_modifier()
            .create(
                &mut connection,
                BookTitle::new(title.unwrap_or_default()),
                BookAuthor::new(author.unwrap_or_default()),
            )
            .await?;
        connection.commit().await?;

        tracing::info!("Created book {}", book.id().as_ref());
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let title = supplied(dto.title);
        let author = supplied(dto.author);
        if title.is_none() && author.is_none() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Neither title nor author was supplied"));
        }
        let id = parse_id(&dto.id)?;

        let mut connection = self.database_connection().transact().await?;
        let book = self
            .book_modifier()
            .update(
                &mut connection,
                &id,
                title.map(BookTitle::new),
                author.map(BookAuthor::new),
            )
            .await?;
        connection.commit().await?;

        tracing::info!("Updated book {}", id.as_ref());
        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let id = parse_id(&dto.id)?;

        let mut connection = self.database_connection().transact().await?;
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::info!("Deleted book {}", id.as_ref());
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
