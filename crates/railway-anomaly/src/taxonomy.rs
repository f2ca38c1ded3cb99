//! The closed error taxonomy.
//!
//! Seven family enums, one per [`Family`], and the [`TaxonomyKind`] union
//! over all of them. Type numbers are unique across the whole taxonomy; the
//! family fixes the thousand-block they live in.

use crate::kind::{Category, ErrorKind, Family, KindDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

const BAD_REQUEST: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
const FORBIDDEN: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.3";
const NOT_FOUND: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.4";
const METHOD_NOT_ALLOWED: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.5";
const CONFLICT: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.8";
const INTERNAL_SERVER_ERROR: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.1";
const BAD_GATEWAY: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.3";
const SERVICE_UNAVAILABLE: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.4";
const PRECONDITION_FAILED: &str = "https://tools.ietf.org/html/rfc7232#section-4.2";
const UNAUTHORIZED: &str = "https://tools.ietf.org/html/rfc7235#section-3.1";
const TOO_MANY_REQUESTS: &str = "https://tools.ietf.org/html/rfc6585#section-4";
const UNPROCESSABLE: &str = "https://tools.ietf.org/html/rfc4918#section-11.2";
const LOCKED: &str = "https://tools.ietf.org/html/rfc4918#section-11.3";

/// Declares a family enum with one static descriptor per member.
macro_rules! family_kinds {
    (
        $(#[$meta:meta])*
        $name:ident in $family:ident {
            $(
                $variant:ident => (
                    $code:literal, $number:literal, $template:literal, $status:literal,
                    $problem_type:expr, $title:literal, $category:ident
                )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl ErrorKind for $name {
            fn family(&self) -> Family {
                Family::$family
            }

            fn descriptor(&self) -> &'static KindDescriptor {
                match self {
                    $(
                        Self::$variant => {
                            static DESCRIPTOR: KindDescriptor = KindDescriptor {
                                code: $code,
                                type_number: $number,
                                template: $template,
                                status: $status,
                                problem_type: $problem_type,
                                title: $title,
                                category: Category::$category,
                            };
                            &DESCRIPTOR
                        }
                    )+
                }
            }
        }

        impl From<$name> for TaxonomyKind {
            fn from(kind: $name) -> Self {
                Self::$family(kind)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

family_kinds! {
    /// Bad arguments supplied by the caller.
    ParameterErrorKind in Parameter {
        NullParameter => ("NULL_PARAMETER", 1001, "Parameter cannot be null", 400,
            BAD_REQUEST, "Bad Request - Null Parameter", Validation),
        OutOfRange => ("OUT_OF_RANGE", 1002, "Parameter value must be between %s and %s", 400,
            BAD_REQUEST, "Bad Request - Parameter Out Of Range", Validation),
        InvalidFormat => ("INVALID_FORMAT", 1003, "Parameter has invalid format", 400,
            BAD_REQUEST, "Bad Request - Invalid Parameter Format", Validation),
        TooLong => ("TOO_LONG", 1004, "Parameter exceeds maximum length of %d", 400,
            BAD_REQUEST, "Bad Request - Parameter Too Long", Validation),
        TooShort => ("TOO_SHORT", 1005, "Parameter is shorter than minimum length of %d", 400,
            BAD_REQUEST, "Bad Request - Parameter Too Short", Validation),
        Empty => ("EMPTY", 1006, "Parameter cannot be empty", 400,
            BAD_REQUEST, "Bad Request - Empty Parameter", Validation),
        UnsupportedValue => ("UNSUPPORTED_VALUE", 1007, "Parameter value is not supported", 400,
            BAD_REQUEST, "Bad Request - Unsupported Parameter Value", Validation),
        InvalidCombination => ("INVALID_COMBINATION", 1008, "Invalid combination of parameters: %s", 400,
            BAD_REQUEST, "Bad Request - Invalid Parameter Combination", Validation),
        Required => ("REQUIRED", 1009, "Required field is missing", 400,
            BAD_REQUEST, "Bad Request - Required Field Missing", Validation),
    }
}

family_kinds! {
    /// The system was not in a state that allows the operation.
    PreconditionErrorKind in Precondition {
        SystemNotReady => ("SYSTEM_NOT_READY", 2001, "System is not ready: %s", 503,
            SERVICE_UNAVAILABLE, "Service Unavailable - System Not Ready", System),
        ConflictingState => ("CONFLICTING_STATE", 2002, "Operation conflicts with current state: %s", 409,
            CONFLICT, "Conflict - Conflicting State", BusinessLogic),
        InsufficientPermissions => ("INSUFFICIENT_PERMISSIONS", 2003, "Insufficient permissions: %s required", 403,
            FORBIDDEN, "Forbidden - Insufficient Permissions", Security),
        ResourceLocked => ("RESOURCE_LOCKED", 2004, "%s %s is currently locked", 423,
            LOCKED, "Locked - Resource Unavailable", Resource),
        OperationNotAllowed => ("OPERATION_NOT_ALLOWED", 2005, "Operation '%s' not allowed in state '%s'", 405,
            METHOD_NOT_ALLOWED, "Method Not Allowed - Operation Not Permitted", BusinessLogic),
        RateLimitExceeded => ("RATE_LIMIT_EXCEEDED", 2006, "Rate limit exceeded: %s", 429,
            TOO_MANY_REQUESTS, "Too Many Requests - Rate Limit Exceeded", RateLimit),
        MaintenanceMode => ("MAINTENANCE_MODE", 2007, "System in maintenance mode (estimated duration: %s)", 503,
            SERVICE_UNAVAILABLE, "Service Unavailable - Maintenance Mode", System),
        DependencyUnavailable => ("DEPENDENCY_UNAVAILABLE", 2008, "Required dependency unavailable: %s", 502,
            BAD_GATEWAY, "Bad Gateway - Dependency Unavailable", ExternalService),
        PreconditionFailed => ("PRECONDITION_FAILED", 2009, "Precondition failed: %s", 412,
            PRECONDITION_FAILED, "Precondition Failed", BusinessLogic),
    }
}

family_kinds! {
    /// The operation ran but did not leave the system in the promised state.
    PostconditionErrorKind in Postcondition {
        ExpectedStateNotReached => ("EXPECTED_STATE_NOT_REACHED", 3001, "Expected state '%s' was not reached", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Expected State Not Reached", System),
        InvariantViolated => ("INVARIANT_VIOLATED", 3002, "System invariant violated: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Invariant Violation", Contract),
        SideEffectFailed => ("SIDE_EFFECT_FAILED", 3003, "Required side effect failed: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Side Effect Failed", System),
        PersistenceFailed => ("PERSISTENCE_FAILED", 3004, "Failed to persist %s with ID %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Persistence Failed", System),
        NotificationFailed => ("NOTIFICATION_FAILED", 3005, "Failed to send %s notification to %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Notification Failed", ExternalService),
        ConsistencyViolated => ("CONSISTENCY_VIOLATED", 3006, "Data consistency rule violated: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Data Consistency Violated", System),
        IntegrationFailed => ("INTEGRATION_FAILED", 3007, "Integration with %s failed for operation %s", 502,
            BAD_GATEWAY, "Bad Gateway - External Integration Failed", ExternalService),
        TransactionRollback => ("TRANSACTION_ROLLBACK", 3008, "Transaction was rolled back: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Transaction Rollback", System),
        AsyncOperationFailed => ("ASYNC_OPERATION_FAILED", 3009, "Asynchronous operation failed: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Async Operation Failed", System),
        ResourceCleanupFailed => ("RESOURCE_CLEANUP_FAILED", 3010, "Failed to clean up resources: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Resource Cleanup Failed", System),
    }
}

family_kinds! {
    BusinessRuleErrorKind in BusinessRule {
        InsufficientFunds => ("INSUFFICIENT_FUNDS", 4001,
            "Account %s has insufficient funds: requested %s, available %s", 422,
            UNPROCESSABLE, "Unprocessable Entity - Insufficient Funds", BusinessLogic),
        AgeRestriction => ("AGE_RESTRICTION", 4002, "Minimum age %d required, actual age %d", 422,
            UNPROCESSABLE, "Unprocessable Entity - Age Restriction", BusinessLogic),
    }
}

family_kinds! {
    AuthorizationErrorKind in Authorization {
        NotAuthenticated => ("NOT_AUTHENTICATED", 5001, "Authentication required", 401,
            UNAUTHORIZED, "Unauthorized", Security),
        InsufficientPermissions => ("INSUFFICIENT_PERMISSIONS", 5002, "Insufficient permissions: %s required", 403,
            FORBIDDEN, "Forbidden", Security),
    }
}

family_kinds! {
    ResourceErrorKind in Resource {
        NotFound => ("NOT_FOUND", 6001, "Resource with ID %s not found", 404,
            NOT_FOUND, "Not Found", Resource),
        AlreadyExists => ("ALREADY_EXISTS", 6002, "Resource with ID %s already exists", 409,
            CONFLICT, "Conflict - Resource Already Exists", Resource),
    }
}

family_kinds! {
    InvariantErrorKind in Invariant {
        ObjectConsistency => ("OBJECT_CONSISTENCY", 7001, "Object consistency violated: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Object Consistency Violated", Contract),
        DataCorruption => ("DATA_CORRUPTION", 7002, "Data corruption detected: %s", 500,
            INTERNAL_SERVER_ERROR, "Internal Server Error - Data Corruption", System),
    }
}

/// Any member of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", content = "kind", rename_all = "snake_case")]
pub enum TaxonomyKind {
    Parameter(ParameterErrorKind),
    Precondition(PreconditionErrorKind),
    Postcondition(PostconditionErrorKind),
    BusinessRule(BusinessRuleErrorKind),
    Authorization(AuthorizationErrorKind),
    Resource(ResourceErrorKind),
    Invariant(InvariantErrorKind),
}

impl ErrorKind for TaxonomyKind {
    fn family(&self) -> Family {
        match self {
            Self::Parameter(_) => Family::Parameter,
            Self::Precondition(_) => Family::Precondition,
            Self::Postcondition(_) => Family::Postcondition,
            Self::BusinessRule(_) => Family::BusinessRule,
            Self::Authorization(_) => Family::Authorization,
            Self::Resource(_) => Family::Resource,
            Self::Invariant(_) => Family::Invariant,
        }
    }

    fn descriptor(&self) -> &'static KindDescriptor {
        match self {
            Self::Parameter(kind) => kind.descriptor(),
            Self::Precondition(kind) => kind.descriptor(),
            Self::Postcondition(kind) => kind.descriptor(),
            Self::BusinessRule(kind) => kind.descriptor(),
            Self::Authorization(kind) => kind.descriptor(),
            Self::Resource(kind) => kind.descriptor(),
            Self::Invariant(kind) => kind.descriptor(),
        }
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Members of one family, in type-number order.
pub fn of_family(family: Family) -> Vec<TaxonomyKind> {
    fn collect<K: Copy + Into<TaxonomyKind>>(kinds: &[K]) -> Vec<TaxonomyKind> {
        kinds.iter().copied().map(Into::into).collect()
    }

    match family {
        Family::Parameter => collect(ParameterErrorKind::ALL),
        Family::Precondition => collect(PreconditionErrorKind::ALL),
        Family::Postcondition => collect(PostconditionErrorKind::ALL),
        Family::BusinessRule => collect(BusinessRuleErrorKind::ALL),
        Family::Authorization => collect(AuthorizationErrorKind::ALL),
        Family::Resource => collect(ResourceErrorKind::ALL),
        Family::Invariant => collect(InvariantErrorKind::ALL),
    }
}

/// Every member, family by family.
pub fn all() -> Vec<TaxonomyKind> {
    Family::ALL.into_iter().flat_map(of_family).collect()
}

pub fn by_type_number(type_number: u32) -> Option<TaxonomyKind> {
    all().into_iter().find(|kind| kind.type_number() == type_number)
}

/// Members whose code matches, ignoring case. A code may occur in more than
/// one family (`INSUFFICIENT_PERMISSIONS`).
pub fn by_code(code: &str) -> Vec<TaxonomyKind> {
    all()
        .into_iter()
        .filter(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn type_numbers_are_unique() {
        let kinds = all();
        let numbers: HashSet<u32> = kinds.iter().map(|kind| kind.type_number()).collect();
        assert_eq!(numbers.len(), kinds.len());
        assert_eq!(kinds.len(), 36);
    }

    #[test]
    fn type_numbers_stay_in_family_block() {
        for kind in all() {
            let block = kind.family().block();
            assert!(
                (block + 1..block + 1000).contains(&kind.type_number()),
                "{} ({}) outside block {block}",
                kind.code(),
                kind.type_number()
            );
        }
    }

    #[test]
    fn serde_names_match_codes() {
        for kind in all() {
            let json = serde_json::to_value(kind).expect("serialize");
            assert_eq!(json["kind"], kind.code(), "serde name drifted for {kind}");
            let back: TaxonomyKind = serde_json::from_value(json).expect("deserialize");
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn templates_are_well_formed() {
        for kind in all() {
            assert!(
                crate::format::arity(kind.message_template()).is_some(),
                "bad template for {kind}"
            );
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(
            by_type_number(1001),
            Some(TaxonomyKind::Parameter(ParameterErrorKind::NullParameter))
        );
        assert_eq!(by_type_number(9999), None);
        assert_eq!(by_code("insufficient_permissions").len(), 2);
        assert_eq!(of_family(Family::Resource).len(), 2);
    }

    #[test]
    fn severity_follows_family() {
        use crate::kind::Severity;
        assert_eq!(ParameterErrorKind::TooLong.severity(), Severity::Warning);
        assert_eq!(PreconditionErrorKind::SystemNotReady.severity(), Severity::Error);
        assert_eq!(PostconditionErrorKind::IntegrationFailed.severity(), Severity::Critical);
        assert_eq!(InvariantErrorKind::DataCorruption.severity(), Severity::Critical);
    }

    #[test]
    fn error_ids_combine_type_number_and_instance() {
        assert_eq!(ParameterErrorKind::NullParameter.generate_error_id(42), "1001-42");
        assert!(
            ResourceErrorKind::NotFound
                .generate_error_id_now()
                .starts_with("6001-")
        );
    }

    #[test]
    fn format_message_falls_back_to_template() {
        let kind = ParameterErrorKind::OutOfRange;
        assert_eq!(
            kind.format_message(&[serde_json::json!(1), serde_json::json!(10)]),
            "Parameter value must be between 1 and 10"
        );
        assert_eq!(kind.format_message(&[]), kind.message_template());
        assert_eq!(
            kind.format_message(&[serde_json::json!(1)]),
            kind.message_template()
        );
        let ages = BusinessRuleErrorKind::AgeRestriction;
        assert_eq!(
            ages.format_message(&[serde_json::json!("eighteen"), serde_json::json!(12)]),
            ages.message_template()
        );
    }

    #[test]
    fn client_and_server_ranges() {
        assert!(ResourceErrorKind::NotFound.is_client_error());
        assert!(!ResourceErrorKind::NotFound.is_retryable());
        assert!(PreconditionErrorKind::DependencyUnavailable.is_server_error());
        assert!(PreconditionErrorKind::DependencyUnavailable.is_retryable());
    }
}
