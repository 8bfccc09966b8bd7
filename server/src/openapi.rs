use crate::config::ServerConfig;
use crate::request::{CreateBookRequest, UpdateBookRequest};
use crate::response::BookResponse;
use crate::route;
use utoipa::openapi::server::ServerBuilder;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "1.0.0",
        description = "A simple Rust Books API"
    ),
    paths(
        route::list_books,
        route::find_book,
        route::create_book,
        route::update_book,
        route::delete_book,
    ),
    components(schemas(BookResponse, CreateBookRequest, UpdateBookRequest)),
    tags((name = "Books", description = "Everything related to Books"))
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn document(config: &ServerConfig) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.servers = Some(vec![ServerBuilder::new()
            .url(format!("http://localhost:{}", config.port()))
            .description(Some("development"))
            .build()]);
        doc
    }
}

#[cfg(test)]
mod test {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_lists_book_routes() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(paths, vec!["/books", "/books/{id}"]);

        let books = &doc.paths.paths["/books"];
        assert!(books.get.is_some());
        assert!(books.post.is_some());

        let book = &doc.paths.paths["/books/{id}"];
        assert!(book.get.is_some());
        assert!(book.put.is_some());
        assert!(book.delete.is_some());
    }

    #[test]
    fn document_describes_book_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components are generated");
        assert!(components.schemas.contains_key("BookResponse"));
        assert!(components.schemas.contains_key("CreateBookRequest"));
        assert!(components.schemas.contains_key("UpdateBookRequest"));
    }
}
