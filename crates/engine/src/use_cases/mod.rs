//! Use cases - application services orchestrating the domain and ports.

pub mod generate_book;

pub use generate_book::{GenerateBook, GenerateBookRequest};
