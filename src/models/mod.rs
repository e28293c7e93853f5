//! Data models for the library catalog

pub mod author;
pub mod author_book;
pub mod book;

pub use author::{Author, AuthorData};
pub use author_book::{AuthorBook, AuthorBookData};
pub use book::{Book, BookData};
