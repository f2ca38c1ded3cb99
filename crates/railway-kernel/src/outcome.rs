//! Success or failure, where a success may carry no payload.
//!
//! `EmptySuccess` is a unit variant: every payload-less success is the same
//! value, and it is distinct from `Success(())`.

use crate::either::Either;
use crate::error::AlgebraError;
use crate::logic::TriBool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<F, S> {
    Failure(F),
    Success(S),
    EmptySuccess,
}

impl<F, S> Outcome<F, S> {
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    pub const fn empty() -> Self {
        Self::EmptySuccess
    }

    pub const fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// The first success among `outcomes`, otherwise the first outcome.
    /// `None` only when there are no outcomes at all.
    pub fn first_success(outcomes: impl IntoIterator<Item = Outcome<F, S>>) -> Option<Self> {
        let mut first = None;
        for outcome in outcomes {
            if outcome.is_success().is_true() {
                return Some(outcome);
            }
            if first.is_none() {
                first = Some(outcome);
            }
        }
        first
    }

    /// True for both `Success` and `EmptySuccess`.
    pub fn is_success(&self) -> TriBool {
        TriBool::of(!matches!(self, Self::Failure(_)))
    }

    pub fn is_failure(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Failure(_)))
    }

    pub fn is_empty_success(&self) -> TriBool {
        TriBool::of(matches!(self, Self::EmptySuccess))
    }

    pub fn as_ref(&self) -> Outcome<&F, &S> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
            Self::EmptySuccess => Outcome::EmptySuccess,
        }
    }

    /// `on_success` receives `None` for an empty success.
    pub fn fold<U>(
        self,
        on_failure: impl FnOnce(F) -> U,
        on_success: impl FnOnce(Option<S>) -> U,
    ) -> U {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(Some(value)),
            Self::EmptySuccess => on_success(None),
        }
    }

    pub fn map<S2>(self, f: impl FnOnce(S) -> S2) -> Outcome<F, S2> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(f(value)),
            Self::EmptySuccess => Outcome::EmptySuccess,
        }
    }

    pub fn map_failure<F2>(self, f: impl FnOnce(F) -> F2) -> Outcome<F2, S> {
        match self {
            Self::Failure(error) => Outcome::Failure(f(error)),
            Self::Success(value) => Outcome::Success(value),
            Self::EmptySuccess => Outcome::EmptySuccess,
        }
    }

    /// An empty success has no payload to feed `f` and propagates unchanged.
    pub fn flat_map<S2>(self, f: impl FnOnce(S) -> Outcome<F, S2>) -> Outcome<F, S2> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => f(value),
            Self::EmptySuccess => Outcome::EmptySuccess,
        }
    }

    pub fn and_then<S2>(self, f: impl FnOnce(S) -> Outcome<F, S2>) -> Outcome<F, S2> {
        self.flat_map(f)
    }

    /// Runs `next` after any success, empty or not.
    pub fn then<S2>(self, next: impl FnOnce() -> Outcome<F, S2>) -> Outcome<F, S2> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(_) | Self::EmptySuccess => next(),
        }
    }

    pub fn recover(self, f: impl FnOnce(F) -> Outcome<F, S>) -> Self {
        match self {
            Self::Failure(error) => f(error),
            success => success,
        }
    }

    /// A success whose payload fails `predicate` becomes a failure. An
    /// empty success has nothing to test and is kept.
    pub fn filter(self, predicate: impl FnOnce(&S) -> bool, else_error: impl FnOnce() -> F) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(else_error())
                }
            }
            other => other,
        }
    }

    pub fn or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) | Self::EmptySuccess => default,
        }
    }

    pub fn or_none(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::EmptySuccess => None,
        }
    }

    pub fn failure_or_none(self) -> Option<F> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::EmptySuccess => None,
        }
    }

    /// Exchanges tracks. An empty success cannot become a failure because
    /// a failure always carries a value.
    pub fn swap(self) -> Result<Outcome<S, F>, AlgebraError> {
        match self {
            Self::Failure(error) => Ok(Outcome::Success(error)),
            Self::Success(value) => Ok(Outcome::Failure(value)),
            Self::EmptySuccess => Err(AlgebraError::EmptySuccessSwap),
        }
    }

    /// Inverse of [`Outcome::into_either`]: `Right(None)` is the empty success.
    pub fn from_either(value: Either<F, Option<S>>) -> Self {
        match value {
            Either::Left(error) => Self::Failure(error),
            Either::Right(Some(value)) => Self::Success(value),
            Either::Right(None) => Self::EmptySuccess,
        }
    }

    pub fn into_either(self) -> Either<F, Option<S>> {
        self.fold(Either::Left, Either::Right)
    }

    pub fn into_result(self) -> Result<Option<S>, F> {
        self.into_either().into_result()
    }
}

impl<F, S> From<Either<F, S>> for Outcome<F, S> {
    fn from(value: Either<F, S>) -> Self {
        value.fold(Self::Failure, Self::Success)
    }
}

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    fn from(value: Result<S, F>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Step = Outcome<String, i32>;

    #[test]
    fn empty_success_is_not_unit_success() {
        assert_ne!(Outcome::<String, ()>::EmptySuccess, Outcome::Success(()));
        assert_eq!(Step::empty(), Step::EmptySuccess);
    }

    #[test]
    fn flat_map_propagates_empty_success_unchanged() {
        let chained = Step::empty().flat_map(|_| -> Step { panic!("no payload to feed") });
        assert_eq!(chained, Step::EmptySuccess);
    }

    #[test]
    fn then_runs_after_any_success() {
        assert_eq!(Step::empty().then(|| Step::success(1)), Step::success(1));
        assert_eq!(Step::success(0).then(|| Step::success(1)), Step::success(1));
        assert_eq!(
            Step::failure("boom".into()).then(|| Step::success(1)),
            Step::failure("boom".into())
        );
    }

    #[test]
    fn fold_passes_none_for_empty_success() {
        let render = |o: Step| o.fold(|e| e, |v| format!("{v:?}"));
        assert_eq!(render(Step::empty()), "None");
        assert_eq!(render(Step::success(2)), "Some(2)");
        assert_eq!(render(Step::failure("x".into())), "x");
    }

    #[test]
    fn swap_rejects_empty_success() {
        assert_eq!(Step::success(1).swap(), Ok(Outcome::Failure(1)));
        assert_eq!(Step::empty().swap(), Err(AlgebraError::EmptySuccessSwap));
    }

    #[test]
    fn filter_keeps_empty_success() {
        let filtered = Step::empty().filter(|v| *v > 0, || "negative".into());
        assert_eq!(filtered, Step::EmptySuccess);
        let rejected = Step::success(-1).filter(|v| *v > 0, || "negative".into());
        assert_eq!(rejected, Step::failure("negative".into()));
    }

    #[test]
    fn first_success_falls_back_to_first_outcome() {
        let picked = Step::first_success([
            Step::failure("a".into()),
            Step::success(2),
            Step::success(3),
        ]);
        assert_eq!(picked, Some(Step::success(2)));

        let none_succeeded = Step::first_success([Step::failure("a".into()), Step::failure("b".into())]);
        assert_eq!(none_succeeded, Some(Step::failure("a".into())));
        assert_eq!(Step::first_success([]), None);
    }

    #[test]
    fn converts_through_either() {
        assert_eq!(Step::empty().into_either(), Either::Right(None));
        let back = Step::from_either(Either::Right(None));
        assert_eq!(back, Step::EmptySuccess);
        let lifted: Step = Either::<String, i32>::Right(3).into();
        assert_eq!(lifted, Step::success(3));
        assert_eq!(Step::from(Ok::<i32, String>(4)), Step::success(4));
    }
}
