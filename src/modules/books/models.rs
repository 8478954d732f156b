use serde::{Deserialize, Serialize};

/// Full book record as exposed over HTTP. The identity is backend-assigned
/// and immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book, UUID-shaped
    pub guid: String,
    /// Title of the book
    pub name: String,
    /// Author of the book
    pub author: String,
    /// Category identifier or name, by convention
    pub category: String,
    /// Free-form description
    pub description: String,
    /// Page count
    pub pages: i32,
    /// Publication year, kept as a free-form string on purpose
    pub year: String,
}

/// Request model for creating a new book; never carries an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub pages: i32,
    pub year: String,
}

/// One page of books plus the total count, as the backend shapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<Book>,
    pub count: i32,
}
