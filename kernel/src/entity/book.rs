mod author;
mod id;
mod title;

pub use self::{author::*, id::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor) -> Self {
        Self { id, title, author }
    }
}
