use thiserror::Error;

/// Errors raised by path resolution and the builder operations.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A path segment did not match any child of the current container.
    /// Carries the full offending path as supplied by the caller.
    #[error("Menu path not found: {0}")]
    NotFound(String),
    /// The path resolved to an action item where a container was required.
    #[error("Menu path does not name a menu: {0}")]
    NotAMenu(String),
    /// The path resolved to a container where an action item was required.
    #[error("Menu path does not name an action item: {0}")]
    NotAnItem(String),
    /// Action items and separators cannot attach directly to the root bar.
    #[error("Cannot attach directly to the menu bar: {0}")]
    BarAttachment(String),
    /// An icon resource could not be read.
    #[error("Failed to load icon resource: {path}")]
    Icon {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
