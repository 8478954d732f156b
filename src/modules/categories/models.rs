use serde::{Deserialize, Serialize};

/// Full category record as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category, UUID-shaped
    pub guid: String,
    /// Display name of the category
    pub name: String,
}

/// Request model for creating a new category; never carries an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}
