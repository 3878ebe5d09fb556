//! OCAT Client Library
//!
//! A Rust client for the Chandra X-ray Observatory observation catalog
//! (OCAT), exposed by the Chandra Data Archive as a tab-delimited text
//! web service.
//!
//! This library provides tools for:
//! - Querying the OCAT details service by observation ID or arbitrary
//!   search criteria
//! - Parsing the tab-delimited response with proper header/data handling
//! - Coercing known columns to their numeric types and physical units
//! - Caching fetched observations in memory for O(1) repeat lookups
//! - Opening the ChaSeR viewer page for a cached observation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_cache;
        pub mod ocat_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CatalogRow, Field, FieldValue, Unit};
pub use app::services::catalog_cache::{CatalogCache, SearchCriteria};
pub use app::services::ocat_parser::TypingTable;
pub use config::ClientConfig;

/// Result type alias for OCAT client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog fetch, parse, and lookup operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request failed to complete (connection, DNS, timeout).
    /// Surfaced unmodified; the client never retries.
    #[error("catalog request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service returned a well-formed table with zero data rows
    #[error("no observations matched the criteria: {criteria}")]
    EmptyResult { criteria: String },

    /// The response body does not follow the OCAT text table format
    #[error("malformed catalog table: {message}")]
    TableFormat { message: String },

    /// A declared column held a value that cannot be coerced to its type
    #[error("cannot coerce column '{column}' value '{value}' to {target}")]
    Coercion {
        column: String,
        value: String,
        target: String,
    },

    /// A targeted fetch completed but the identifier is still absent.
    /// Distinct from [`Error::EmptyResult`]; covers schema drift where the
    /// service answers with rows that do not carry the requested OBSID.
    #[error("observation '{obsid}' not present after fetch")]
    ObsidNotFound { obsid: String },
}

impl Error {
    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create an empty-result error carrying the originating criteria
    pub fn empty_result(criteria: impl Into<String>) -> Self {
        Self::EmptyResult {
            criteria: criteria.into(),
        }
    }

    /// Create a table format error
    pub fn table_format(message: impl Into<String>) -> Self {
        Self::TableFormat {
            message: message.into(),
        }
    }

    /// Create a coercion error for a declared column
    pub fn coercion(
        column: impl Into<String>,
        value: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::Coercion {
            column: column.into(),
            value: value.into(),
            target: target.into(),
        }
    }

    /// Create a lookup-miss error for a targeted fetch
    pub fn obsid_not_found(obsid: impl Into<String>) -> Self {
        Self::ObsidNotFound {
            obsid: obsid.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "catalog request failed".to_string(),
            source: error,
        }
    }
}
