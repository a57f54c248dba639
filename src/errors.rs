//! Process-level error types
//!
//! Lookups that match nothing are not errors in this crate; they surface as
//! `None` and serialize to `null`. The variants here cover startup and
//! transport failures that abort the binary.

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// CORS origin could not be parsed as a header value
    #[error("Invalid CORS origin '{origin}': {reason}")]
    InvalidCorsOrigin { origin: String, reason: String },

    /// Seed file could not be read from disk
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: String,
        source: std::io::Error,
    },

    /// Seed file contents are not a valid seed document
    #[error("Failed to parse seed file {path}: {reason}")]
    SeedParse { path: String, reason: String },

    /// Two seed rows of the same kind share an identifier
    #[error("Duplicate {entity} id {id} in seed data")]
    DuplicateSeedId { entity: &'static str, id: i32 },

    /// Seed id leaves no room for the id counter to advance
    #[error("Seed {entity} id {id} is out of range")]
    SeedIdOutOfRange { entity: &'static str, id: i32 },

    /// A table has handed out every identifier it can represent
    #[error("No {entity} ids left to assign")]
    IdsExhausted { entity: &'static str },

    /// TCP listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// Server loop terminated with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RosterError::InvalidCorsOrigin { .. } => "INVALID_CORS_ORIGIN",
            RosterError::SeedRead { .. } => "SEED_READ",
            RosterError::SeedParse { .. } => "SEED_PARSE",
            RosterError::DuplicateSeedId { .. } => "DUPLICATE_SEED_ID",
            RosterError::SeedIdOutOfRange { .. } => "SEED_ID_OUT_OF_RANGE",
            RosterError::IdsExhausted { .. } => "IDS_EXHAUSTED",
            RosterError::Bind { .. } => "BIND",
            RosterError::Serve(_) => "SERVE",
        }
    }
}

/// Errors reaching a resolver carry their code in the GraphQL extensions.
impl ErrorExtensions for RosterError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            if let RosterError::IdsExhausted { entity } = self {
                e.set("entity", *entity);
            }
        })
    }
}
