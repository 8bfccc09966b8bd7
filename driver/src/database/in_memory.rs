use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle};
use kernel::KernelError;

pub use self::book::*;

mod book;

#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    books: Arc<Mutex<Vec<Book>>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: Arc::new(Mutex::new(books.into_iter().collect())),
        }
    }

    pub fn seeded() -> Self {
        Self::with_books((1..=4).map(|n: i64| {
            Book::new(
                BookId::new(n),
                BookTitle::new(format!("Book Title {n}")),
                BookAuthor::new(format!("Book Author {n}")),
            )
        }))
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let books = Arc::clone(&self.books).lock_owned().await;
        let snapshot = books.clone();
        Ok(InMemoryTransaction {
            books,
            snapshot,
            committed: false,
        })
    }
}

pub struct InMemoryTransaction {
    books: OwnedMutexGuard<Vec<Book>>,
    snapshot: Vec<Book>,
    committed: bool,
}

impl InMemoryTransaction {
    pub(in crate::database) fn books(&self) -> &Vec<Book> {
        &self.books
    }

    pub(in crate::database) fn books_mut(&mut self) -> &mut Vec<Book> {
        &mut self.books
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.committed = true;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if !self.committed {
            tracing::debug!("Rolling back uncommitted book changes");
            *self.books = std::mem::take(&mut self.snapshot);
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookAuthor, BookTitle};
    use kernel::KernelError;

    use crate::database::{InMemoryBookRepository, InMemoryDatabase};

    #[tokio::test]
    async fn seeded_store_has_four_books() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::seeded();
        let con = db.transact().await?;
        let ids = con
            .books()
            .iter()
            .map(|book| *book.id().as_ref())
            .collect::<Vec<i64>>();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        Ok(())
    }

    #[tokio::test]
    async fn roll_back_restores_snapshot() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();

        let mut con = db.transact().await?;
        InMemoryBookRepository
            .create(&mut con, BookTitle::new("a"), BookAuthor::new("b"))
            .await?;
        con.roll_back().await?;

        let con = db.transact().await?;
        assert!(con.books().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn commit_keeps_changes() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();

        let mut con = db.transact().await?;
        InMemoryBookRepository
            .create(&mut con, BookTitle::new("a"), BookAuthor::new("b"))
            .await?;
        con.commit().await?;

        let con = db.transact().await?;
        assert_eq!(con.books().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let handles = (0..16)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move {
                    let mut con = db.transact().await?;
                    let book = InMemoryBookRepository
                        .create(&mut con, BookTitle::new("t"), BookAuthor::new("a"))
                        .await?;
                    con.commit().await?;
                    Ok::<_, error_stack::Report<KernelError>>(*book.id().as_ref())
                })
            })
            .collect::<Vec<_>>();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked")?);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<i64>>());
        Ok(())
    }
}
