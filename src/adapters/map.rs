//! Lazy mapped view.

use crate::caps::{Advance, FrontVal, Sequence};
use crate::probe::{Absent, Bool};
use crate::synth::{self, FrontValImpl, ValPlanOf};

/// Applies `f` to each element of the underlying sequence on read.
///
/// `f` must be `Fn`: reads stay repeatable, exactly like a declared
/// `front_val`.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(inner: S, f: F) -> Self {
        Map { inner, f }
    }
}

impl<S, F, T> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> T,
{
    type Item = T;
    // value-readable exactly when the underlying sequence is
    type HasFrontVal = <S::HasFrontVal as Bool>::Or<S::HasFrontRef>;
    type HasFrontRef = Absent;
    type HasPull = Absent;
    type HasAdvance = S::HasAdvance;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn is_boundless(&self) -> bool {
        self.inner.is_boundless()
    }
}

impl<S, F, T> FrontVal for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> T,
    ValPlanOf<S>: FrontValImpl<S>,
{
    fn front_val(&self) -> T {
        (self.f)(synth::front_value(&self.inner))
    }
}

impl<S, F, T> Advance for Map<S, F>
where
    S: Advance,
    F: Fn(S::Item) -> T,
{
    fn advance(&mut self) {
        self.inner.advance();
    }
}
