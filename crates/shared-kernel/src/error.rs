// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Every failure a fix run can surface, grouped by the layer that raised it.
#[derive(Debug, Error)]
pub enum FixPathsError {
    /// A layer-level error with a note about what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FixPathsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, FixPathsError>;

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid alias pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// A run stopped on the first failing step; the cause is kept as the source.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to scan '{root}'")]
    ScanFailed {
        root: PathBuf,
        #[source]
        source: Box<FixPathsError>,
    },

    #[error("Failed to fix '{path}'")]
    FixFailed {
        path: PathBuf,
        #[source]
        source: Box<FixPathsError>,
    },
}

/// Filesystem and output failures.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render JSON summary: {0}")]
    SummaryRender(#[from] serde_json::Error),

    #[error("Failed to write summary: {0}")]
    SummaryWrite(#[source] io::Error),
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// CLI values that parse but cannot be used.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<serde_json::Error> for FixPathsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::SummaryRender(err).into()
    }
}

impl FixPathsError {
    /// The innermost infrastructure error, looking through context and application wrappers.
    pub fn infrastructure(&self) -> Option<&InfrastructureError> {
        match self {
            Self::Infrastructure(err) => Some(err),
            Self::Context { source, .. }
            | Self::Application(ApplicationError::ScanFailed { source, .. })
            | Self::Application(ApplicationError::FixFailed { source, .. }) => {
                source.infrastructure()
            }
            _ => None,
        }
    }
}

/// Attach a note to any error convertible into [`FixPathsError`].
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FixPathsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FixPathsError::Context { context: f(), source: Box::new(e.into()) })
    }
}
