use crate::controller::Intake;
use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /books`. Both fields may be omitted individually, but not together.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    #[schema(example = "Example Title")]
    title: Option<String>,
    #[schema(example = "Example Author")]
    author: Option<String>,
}

/// Body of `PUT /books/{id}`. Empty or missing fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    #[schema(example = "Example Title")]
    title: Option<String>,
    #[schema(example = "Example Author")]
    author: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

// An absent or unreadable body is treated like one carrying neither field.
impl Intake<Option<CreateBookRequest>> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: Option<CreateBookRequest>) -> Self::To {
        let CreateBookRequest { title, author } = input.unwrap_or_default();
        CreateBookDto { title, author }
    }
}

impl Intake<(String, Option<UpdateBookRequest>)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, Option<UpdateBookRequest>)) -> Self::To {
        let (id, input) = input;
        let UpdateBookRequest { title, author } = input.unwrap_or_default();
        UpdateBookDto { id, title, author }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
