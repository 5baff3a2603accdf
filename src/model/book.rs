use serde::{Deserialize, Serialize};

/// A book as carried in order payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: u64,
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl Book {
    pub fn new(isbn: u64, title: &str, author: &str, price: f64) -> Self {
        Self {
            isbn,
            title: title.to_string(),
            author: author.to_string(),
            price,
        }
    }
}
