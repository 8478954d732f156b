//! Backend service clients for the bookgate gateway.
//!
//! One typed handle per resource family (book, category), each owning its
//! channel to the backend RPC services. Handles take typed request messages
//! and return raw JSON payloads, leaving interpretation to the caller.

pub mod book;
pub mod category;
pub mod channel;
pub mod error;
pub mod registry;

pub use book::{BookDraft, BookRecord, BookService, BookServiceClient};
pub use category::{CategoryDraft, CategoryRecord, CategoryService, CategoryServiceClient};
pub use error::ClientError;
pub use registry::ServiceRegistry;
