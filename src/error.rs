use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("{method} {url} failed: {source}")]
    Network {
        method: &'static str,
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Contact '{0}' not found. Use 'contacts list' to see available contacts.")]
    ContactNotFound(String),

    #[error("Contact ID must not be empty")]
    EmptyContactId,

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid status '{0}'. Expected 'active' or 'inactive'")]
    InvalidStatus(String),

    #[error("Invalid sync strategy '{0}'. Expected 'refetch' or 'apply'")]
    InvalidSyncStrategy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContactsError {
    /// True for failures that came from talking to the API rather than from
    /// local input or configuration.
    pub fn is_remote(&self) -> bool {
        matches!(self, ContactsError::Network { .. } | ContactsError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
