//! # Railway Anomaly
//!
//! A closed taxonomy of error kinds layered on the railway kernel.
//!
//! Every kind carries a stable code, a unique type number, a message
//! template, a suggested HTTP status and the metadata needed to render an
//! RFC 7807 problem report. Kinds are grouped into seven families, each with
//! its own number block:
//!
//! ```text
//! 1xxx parameter      4xxx business_rule   7xxx invariant
//! 2xxx precondition   5xxx authorization
//! 3xxx postcondition  6xxx resource
//! ```
//!
//! On top of the taxonomy sit the error values ([`SystemError`] and
//! [`ValidationError`]), accumulation ([`AccumulatingResult`]), field
//! validators, contract checks and report rendering ([`ReportConfig`]).

pub mod accumulate;
pub mod config;
pub mod contracts;
pub mod error;
pub mod format;
pub mod kind;
pub mod problem;
pub mod system;
pub mod taxonomy;
pub mod validation_error;
pub mod validator;

pub use accumulate::AccumulatingResult;
pub use config::{ReportConfig, ValidationReportConfig};
pub use error::{AnomalyError, Fault};
pub use kind::{Category, ErrorKind, Family, KindDescriptor, Severity};
pub use problem::ProblemReport;
pub use system::{
    AuthorizationError, BusinessRuleError, InvariantError, KindError, ParameterError,
    PostconditionError, PreconditionError, ResourceError, SystemError,
};
pub use taxonomy::{
    AuthorizationErrorKind, BusinessRuleErrorKind, InvariantErrorKind, ParameterErrorKind,
    PostconditionErrorKind, PreconditionErrorKind, ResourceErrorKind, TaxonomyKind,
};
pub use validation_error::ValidationError;
pub use validator::{Field, ObjectValidator};
