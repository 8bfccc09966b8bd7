use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Book, BookAuthor, BookId, BookTitle};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Assigns the largest stored id plus one, or `1` for an empty store.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        title: BookTitle,
        author: BookAuthor,
    ) -> error_stack::Result<Book, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
        title: Option<BookTitle>,
        author: Option<BookAuthor>,
    ) -> error_stack::Result<Book, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
