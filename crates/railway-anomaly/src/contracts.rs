//! Design-by-contract checks.
//!
//! `require_*` and `ensure_*` return `Result<_, Fault>` so a violation
//! propagates with `?`. The `check_*` functions are the railway
//! counterparts: they keep the violation as data on the left track.

use crate::error::Fault;
use crate::system::{
    InvariantError, ParameterError, PostconditionError, PreconditionError, SystemError,
};
use railway_kernel::{Either, Outcome, TriBool};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

const CONTRACT_SUBJECT: &str = "contract";

fn raise(error: SystemError) -> Fault {
    tracing::debug!(
        code = error.code(),
        category = %error.category(),
        "contract violated: {}",
        error.message()
    );
    error.into_fault()
}

pub fn require_precondition(condition: impl Into<TriBool>, message: &str) -> Result<(), Fault> {
    if condition.into().is_true() {
        return Ok(());
    }
    Err(raise(PreconditionError::failed(CONTRACT_SUBJECT, message).into()))
}

/// The present value, or a `NULL_PARAMETER` fault naming `name`.
pub fn require_non_absent<T>(value: Option<T>, name: &str) -> Result<T, Fault> {
    value.ok_or_else(|| raise(ParameterError::null_parameter(name).into()))
}

/// `value` when it satisfies `predicate`, or an `UNSUPPORTED_VALUE` fault
/// recording it.
pub fn require_argument<T: Serialize>(
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    name: &str,
) -> Result<T, Fault> {
    if predicate(&value) {
        return Ok(value);
    }
    Err(raise(ParameterError::unsupported_value(name, recorded(&value)).into()))
}

pub fn require_invariant(condition: impl Into<TriBool>, message: &str) -> Result<(), Fault> {
    if condition.into().is_true() {
        return Ok(());
    }
    Err(raise(InvariantError::object_consistency(CONTRACT_SUBJECT, message).into()))
}

pub fn ensure_postcondition(condition: impl Into<TriBool>, message: &str) -> Result<(), Fault> {
    if condition.into().is_true() {
        return Ok(());
    }
    Err(raise(
        PostconditionError::expected_state_not_reached(CONTRACT_SUBJECT, message).into(),
    ))
}

/// The produced value, or an `EXPECTED_STATE_NOT_REACHED` fault when the
/// operation produced nothing.
pub fn ensure_present<T>(value: Option<T>, message: &str) -> Result<T, Fault> {
    value.ok_or_else(|| {
        raise(PostconditionError::expected_state_not_reached(CONTRACT_SUBJECT, message).into())
    })
}

pub fn check_precondition<T>(
    value: T,
    condition: impl Into<TriBool>,
    message: &str,
) -> Either<SystemError, T> {
    Either::from_bool(
        condition,
        || PreconditionError::failed(CONTRACT_SUBJECT, message).into(),
        || value,
    )
}

/// Like [`check_precondition`], with the rejected value recorded as the
/// error's actual value.
pub fn check_precondition_with<T: Serialize>(
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    message: &str,
) -> Either<SystemError, T> {
    if predicate(&value) {
        return Either::Right(value);
    }
    Either::Left(
        PreconditionError::failed(CONTRACT_SUBJECT, message)
            .with_actual_value(recorded(&value))
            .into(),
    )
}

pub fn check_postcondition<T: Serialize>(
    value: T,
    condition: impl Into<TriBool>,
    message: &str,
) -> Either<SystemError, T> {
    if condition.into().is_true() {
        return Either::Right(value);
    }
    Either::Left(unreached(message, &value))
}

/// Runs `computation` and checks `postcondition` on its value. A failing
/// computation and a failing postcondition both become failures.
pub fn with_postcondition<T: Serialize, E: Display>(
    computation: impl FnOnce() -> Result<T, E>,
    postcondition: impl FnOnce(&T) -> bool,
    message: &str,
) -> Outcome<SystemError, T> {
    match computation() {
        Ok(value) => {
            if postcondition(&value) {
                Outcome::success(value)
            } else {
                Outcome::failure(unreached(message, &value))
            }
        }
        Err(error) => {
            tracing::debug!("computation failed before postcondition check: {error}");
            Outcome::failure(
                PostconditionError::side_effect_failed(CONTRACT_SUBJECT, error.to_string()).into(),
            )
        }
    }
}

fn unreached<T: Serialize>(message: &str, value: &T) -> SystemError {
    PostconditionError::expected_state_not_reached(CONTRACT_SUBJECT, message)
        .with_actual_value(recorded(value))
        .into()
}

fn recorded<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Category;

    fn withdraw(balance: i64, amount: i64) -> Result<i64, Fault> {
        require_precondition(amount > 0, "amount must be positive")?;
        let remaining = balance - amount;
        ensure_postcondition(remaining >= 0, "balance is non-negative")?;
        Ok(remaining)
    }

    #[test]
    fn question_mark_propagates_faults() {
        assert_eq!(withdraw(10, 3).ok(), Some(7));

        let fault = withdraw(10, 0).expect_err("precondition");
        assert_eq!(fault.error().code(), "PRECONDITION_FAILED");
        assert_eq!(
            fault.error().message(),
            "contract: Precondition failed: amount must be positive"
        );

        let fault = withdraw(1, 3).expect_err("postcondition");
        assert_eq!(fault.error().code(), "EXPECTED_STATE_NOT_REACHED");
        assert!(matches!(fault, Fault::Runtime(_)));
    }

    #[test]
    fn absent_argument_is_a_validation_fault() {
        let fault = require_non_absent(None::<i32>, "x").expect_err("absent");
        assert_eq!(fault.error().category(), Category::Validation);
        assert_eq!(fault.error().suggested_status(), 400);
        assert!(matches!(fault, Fault::InvalidArgument(_)));
        assert_eq!(require_non_absent(Some(1), "x").ok(), Some(1));
    }

    #[test]
    fn rejected_argument_records_actual_value() {
        let fault = require_argument(-4, |v| *v >= 0, "count").expect_err("negative");
        assert_eq!(fault.error().code(), "UNSUPPORTED_VALUE");
        assert_eq!(fault.error().actual_value(), Some(&Value::from(-4)));
        assert_eq!(require_argument(4, |v| *v >= 0, "count").ok(), Some(4));
    }

    #[test]
    fn broken_invariant_is_invalid_state() {
        let fault = require_invariant(false, "total equals sum of lines").expect_err("broken");
        assert!(matches!(fault, Fault::InvalidState(_)));
        assert_eq!(
            fault.to_string(),
            "invalid state: [OBJECT_CONSISTENCY] Invariant 'contract': Object consistency violated: total equals sum of lines"
        );
    }

    #[test]
    fn ensure_present_unwraps_or_faults() {
        assert_eq!(ensure_present(Some("v"), "value produced").ok(), Some("v"));
        assert!(ensure_present(None::<&str>, "value produced").is_err());
    }

    #[test]
    fn check_variants_stay_on_the_railway() {
        assert_eq!(check_precondition(5, true, "ready").or_none(), Some(5));
        let left = check_precondition(5, false, "ready").left_or_none().expect("left");
        assert_eq!(left.code(), "PRECONDITION_FAILED");

        let left = check_precondition_with(3, |v| *v > 4, "above four").left_or_none().expect("left");
        assert_eq!(left.message(), "contract: Precondition failed: above four");

        assert!(check_postcondition("done", false, "saved").is_left().is_true());
        assert_eq!(check_postcondition(7, true, "saved").or_none(), Some(7));
    }

    #[test]
    fn checked_values_are_recorded_on_violation() {
        let left = check_precondition_with(3, |v| *v > 4, "above four").left_or_none().expect("left");
        assert_eq!(left.actual_value(), Some(&Value::from(3)));
        assert_eq!(
            left.format(),
            "[PRECONDITION_FAILED] contract: Precondition failed: above four (actual value: 3)"
        );

        let left = check_postcondition(7, false, "saved").left_or_none().expect("left");
        assert_eq!(left.actual_value(), Some(&Value::from(7)));

        let broken = with_postcondition(|| Ok::<_, String>(-1), |v| *v > 0, "positive");
        let error = broken.failure_or_none().expect("failure");
        assert_eq!(error.actual_value(), Some(&Value::from(-1)));
    }

    #[test]
    fn with_postcondition_covers_both_failure_modes() {
        let ok = with_postcondition(|| Ok::<_, String>(4), |v| *v > 0, "positive");
        assert_eq!(ok.or_none(), Some(4));

        let broken = with_postcondition(|| Ok::<_, String>(-1), |v| *v > 0, "positive");
        let error = broken.failure_or_none().expect("failure");
        assert_eq!(error.code(), "EXPECTED_STATE_NOT_REACHED");

        let failed = with_postcondition(|| Err::<i32, _>("disk full"), |_| true, "saved");
        let error = failed.failure_or_none().expect("failure");
        assert_eq!(error.code(), "SIDE_EFFECT_FAILED");
        assert_eq!(error.message(), "contract: Required side effect failed: disk full");
    }
}
