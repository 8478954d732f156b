//! Per-operation identity validation policy.
//!
//! Only the get-by-id paths check that an identifier has UUID lexical form;
//! delete and update forward identifiers verbatim and leave rejection to
//! the backend. The asymmetry is part of the observed wire contract, so it
//! lives in one explicit table instead of being scattered across handlers.

use bookgate_http::GatewayError;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Book,
    Category,
}

impl Resource {
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Book => "book",
            Resource::Category => "category",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetById,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Reject identifiers that are not UUID lexical form before calling
    /// the backend.
    RequireUuid,
    /// Forward the identifier verbatim; the backend is authoritative.
    Forward,
}

const ID_POLICIES: &[(Resource, Operation, IdPolicy)] = &[
    (Resource::Book, Operation::GetById, IdPolicy::RequireUuid),
    (Resource::Book, Operation::Update, IdPolicy::Forward),
    (Resource::Book, Operation::Delete, IdPolicy::Forward),
    (Resource::Category, Operation::GetById, IdPolicy::RequireUuid),
    (Resource::Category, Operation::Update, IdPolicy::Forward),
    (Resource::Category, Operation::Delete, IdPolicy::Forward),
];

pub fn id_policy(resource: Resource, operation: Operation) -> IdPolicy {
    ID_POLICIES
        .iter()
        .find(|(res, op, _)| *res == resource && *op == operation)
        .map(|(_, _, policy)| *policy)
        .unwrap_or(IdPolicy::Forward)
}

/// Enforce the identity policy for one (resource, operation) pair.
pub fn ensure_id(
    resource: Resource,
    operation: Operation,
    id: &str,
) -> Result<(), GatewayError> {
    match id_policy(resource, operation) {
        IdPolicy::Forward => Ok(()),
        IdPolicy::RequireUuid => {
            if Uuid::parse_str(id).is_ok() {
                Ok(())
            } else {
                let message = format!("{} id is not valid", resource.label());
                Err(GatewayError::validation(message.clone(), message))
            }
        }
    }
}
