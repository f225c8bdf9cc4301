//! Error type shared by the controller, the page model and option loading.

use std::path::PathBuf;

/// Everything that can go wrong while wiring a catalog filter to a document.
///
/// Missing optional collaborators (caption, menu mount points) and absent
/// subject data are deliberately not represented here: those degrade to
/// no-ops.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// No usable container element could be resolved to render rows into.
    #[error("No container to render into (`{selector}`): {reason}")]
    Configuration {
        /// Selector that was used to look up the container.
        selector: String,
        reason: String,
    },

    /// A selector string uses syntax the page model does not understand.
    #[error("Invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// The page markup could not be parsed.
    #[error("Failed to parse document: {0}")]
    Document(#[from] roxmltree::Error),

    /// Filter options could not be loaded.
    #[error("Failed to load options from {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T, E = FilterError> = std::result::Result<T, E>;
