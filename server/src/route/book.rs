use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::{BookPresenter, BookResponse};
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route("/books", get(list_books).post(create_book)).route(
            "/books/:id",
            get(find_book).put(update_book).delete(delete_book),
        )
    }
}

fn accepted<T>(body: Result<Json<T>, JsonRejection>) -> Option<T> {
    match body {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            tracing::debug!("Ignoring request body: {rejection}");
            None
        }
    }
}

/// Get a list of all Books
#[utoipa::path(
    get,
    path = "/books",
    tag = "Books",
    responses(
        (
            status = 200,
            description = "We receive a list of all the Books",
            body = Vec<BookResponse>
        ),
        (status = 500, description = "Server Error")
    )
)]
pub async fn list_books(
    State(module): State<AppModule>,
) -> Result<Json<Vec<BookResponse>>, ErrorStatus> {
    Controller::new((), BookPresenter)
        .bypass(|| async move { module.get_all_books().await })
        .await
        .map_err(ErrorStatus::from)
}

/// Get a specific Book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "The Book id")),
    responses(
        (status = 200, description = "We receive a Book by id", body = BookResponse),
        (status = 404, description = "The Book with that specific id was not found"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn find_book(
    State(module): State<AppModule>,
    Path(id): Path<String>,
) -> Result<Response, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(GetBookRequest::new(id))
        .handle(|dto| async move { module.get_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
        .map(|res| {
            res.map(BookResponse::into_response)
                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
        })
}

/// Create a new Book
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    request_body = CreateBookRequest,
    responses(
        (status = 200, description = "The Book was successfully created", body = BookResponse),
        (status = 400, description = "Neither title nor author was supplied"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn create_book(
    State(module): State<AppModule>,
    body: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<BookResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(accepted(body))
        .handle(|dto| async move { module.create_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

/// Update a specific Book by id
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "The Book id")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "The Book was successfully Updated", body = BookResponse),
        (status = 400, description = "The Request Body did not include all required fields"),
        (status = 404, description = "The Book with that specific id was not found"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn update_book(
    State(module): State<AppModule>,
    Path(id): Path<String>,
    body: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<BookResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake((id, accepted(body)))
        .handle(|dto| async move { module.update_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

/// Delete a specific Book by id
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "The Book id")),
    responses(
        (status = 200, description = "The Book was successfully Deleted"),
        (status = 404, description = "The Book with that specific id was not found"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn delete_book(
    State(module): State<AppModule>,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(DeleteBookRequest::new(id))
        .handle(|dto| async move { module.delete_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}
