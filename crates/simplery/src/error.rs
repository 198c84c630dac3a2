//! Error types for gallery initialization and configuration.

use gcss::GcssError;
use thiserror::Error;

/// Errors surfaced while configuring or initializing a gallery.
///
/// Initialization failures that a browser host would swallow silently
/// (no container selector, nothing matched) are reported explicitly here.
/// Callers that prefer the silent behavior can discard them with `.ok()`.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// No container selector was configured, or it was empty.
    #[error("no container selector configured")]
    MissingContainer,

    /// The container selector matched nothing.
    #[error("container `{0}` not found")]
    ContainerNotFound(String),

    /// The item selector matched nothing.
    #[error("no items matching `{0}` found")]
    NoItemsFound(String),

    /// Column count must be at least one.
    #[error("items-per-row must be at least 1, got {0}")]
    InvalidItemsPerRow(usize),

    /// A numeric option was negative, zero where a width is required, or not finite.
    #[error("invalid value for `{name}`: {value}")]
    InvalidNumber { name: &'static str, value: f64 },

    /// A declaration named an option the gallery does not know.
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    /// A declaration list or value could not be parsed.
    #[error("invalid option: {0}")]
    InvalidOption(#[from] GcssError),

    /// The log file could not be opened, or the host's I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Another logger was installed first.
    #[error("a logger is already installed")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
