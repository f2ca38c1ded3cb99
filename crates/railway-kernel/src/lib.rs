//! # Railway Kernel
//!
//! Two-track values: every fallible step yields a value on the success track
//! or on the error track, and composition short-circuits on the first error.
//!
//! This crate is **error-agnostic**: it does not prescribe what an error is.
//! It only prescribes how two-track values compose.
//!
//! ## Architecture
//!
//! ```text
//! TriBool               ← Condition type returned by every is_* query
//!     │
//! Either<L, R>          ← Left (error track) | Right (success track)
//!     │
//! ├── Maybe<T>          ← None | Some(T)              ≅ Either<(), T>
//! ├── Outcome<F, S>     ← Failure | Success | EmptySuccess
//! └── Validation<I, V>  ← Invalid | Valid             ≅ Either<I, V>
//!     │
//! NonEmpty<T>           ← Sequence that is never empty (accumulated errors)
//! ```

pub mod either;
pub mod error;
pub mod logic;
pub mod maybe;
pub mod nonempty;
pub mod outcome;
pub mod validation;

pub use either::{Either, lift, lift2, partition, sequence, traverse};
pub use error::AlgebraError;
pub use logic::{NullableTriBool, TriBool};
pub use maybe::Maybe;
pub use nonempty::NonEmpty;
pub use outcome::Outcome;
pub use validation::Validation;
