use driver::database::{InMemoryBookRepository, InMemoryDatabase};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new(database: InMemoryDatabase) -> Self {
        Self(Arc::new(Handler::init(database)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
    books: InMemoryBookRepository,
}

impl Handler {
    pub fn init(database: InMemoryDatabase) -> Self {
        Self {
            database,
            books: InMemoryBookRepository,
        }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self.database()
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        self.books()
    }
}

impl DependOnBookModifier for Handler {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        self.books()
    }
}
