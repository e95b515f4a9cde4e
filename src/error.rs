use thiserror::Error;

/// Errors generated when constructing a vector adapter
#[derive(Error, Debug)]
pub enum VectorError {
    /// Backing storage for a 3D vector must expose at least 3 addressable
    /// components
    #[error("Backing storage has {found} components, need at least 3")]
    TooFewComponents {
        /// The number of components the given storage actually had
        found: usize,
    },
}
