use crate::kind::{Category, ErrorKind};
use crate::system::SystemError;
use thiserror::Error;

/// Misuse of the anomaly layer and configuration failures.
#[derive(Debug, Error)]
pub enum AnomalyError {
    /// An accumulating failure was built from an empty error list.
    #[error("a failure needs at least one validation error")]
    EmptyFailure,

    /// A family name outside the taxonomy.
    #[error("unknown error family: {0}")]
    UnknownFamily(String),

    /// The report config file could not be read.
    #[error("failed to read report config: {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The report config file is not valid TOML for `ReportConfig`.
    #[error("invalid toml at {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A [`SystemError`] raised for `?`-based propagation, classified by the
/// error's category.
#[derive(Debug, Clone, Error)]
pub enum Fault {
    /// Validation-category errors.
    #[error("invalid argument: {0}")]
    InvalidArgument(Box<SystemError>),

    /// Contract-category errors.
    #[error("invalid state: {0}")]
    InvalidState(Box<SystemError>),

    /// Security-category errors.
    #[error("permission denied: {0}")]
    PermissionDenied(Box<SystemError>),

    /// Every other category.
    #[error("{0}")]
    Runtime(Box<SystemError>),
}

impl Fault {
    pub fn from_error(error: SystemError) -> Self {
        let boxed = Box::new(error);
        match boxed.kind().category() {
            Category::Validation => Self::InvalidArgument(boxed),
            Category::Contract => Self::InvalidState(boxed),
            Category::Security => Self::PermissionDenied(boxed),
            _ => Self::Runtime(boxed),
        }
    }

    pub fn error(&self) -> &SystemError {
        match self {
            Self::InvalidArgument(error)
            | Self::InvalidState(error)
            | Self::PermissionDenied(error)
            | Self::Runtime(error) => error,
        }
    }

    pub fn into_error(self) -> SystemError {
        match self {
            Self::InvalidArgument(error)
            | Self::InvalidState(error)
            | Self::PermissionDenied(error)
            | Self::Runtime(error) => *error,
        }
    }
}

impl From<SystemError> for Fault {
    fn from(error: SystemError) -> Self {
        Self::from_error(error)
    }
}
