//! Misuse of the algebra that cannot be ruled out by the type system.

use thiserror::Error;

/// Errors raised when an algebra operation gets input it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A `NonEmpty` was requested from a collection with no elements.
    #[error("non-empty sequence cannot be built from an empty collection")]
    EmptyCollection,

    /// `swap` was called on an `EmptySuccess` outcome.
    #[error("empty success has no payload to move onto the failure track")]
    EmptySuccessSwap,
}
