//! Bookgate Application Library
//!
//! Resource translator modules mapping HTTP CRUD requests onto the backend
//! book and category services.

pub mod modules;
