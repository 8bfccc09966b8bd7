use crate::controller::Exhaust;
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// A book as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    /// The generated id of the book
    #[schema(example = 0)]
    id: i64,
    /// The title of the book
    #[schema(example = "Example Title")]
    title: String,
    /// The author of the book
    #[schema(example = "Example Author")]
    author: String,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        let BookDto { id, title, author } = value;
        Self { id, title, author }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::OK
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
