//! Lazy filtered view.

use crate::caps::{Advance, FrontVal, Sequence};
use crate::probe::{Absent, Bool};
use crate::synth::{self, FrontImpl, FrontPlanOf, FrontValImpl, ValPlanOf};

/// Exposes only the elements satisfying `pred`.
///
/// Invariant: either the view is empty or the underlying cursor stands on
/// an element satisfying `pred` — established at construction and
/// re-established after every `advance`.
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    inner: S,
    pred: P,
}

impl<S, P> Filter<S, P>
where
    S: Advance,
    P: FnMut(&S::Item) -> bool,
    FrontPlanOf<S>: FrontImpl<S>,
{
    pub(crate) fn new(inner: S, pred: P) -> Self {
        let mut filtered = Filter { inner, pred };
        filtered.skip_to_match();
        filtered
    }

    fn skip_to_match(&mut self) {
        let Filter { inner, pred } = self;
        while !inner.is_empty() && !synth::front_with(inner, |item| pred(item)) {
            inner.advance();
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type HasFrontVal = <S::HasFrontVal as Bool>::Or<S::HasFrontRef>;
    type HasFrontRef = Absent;
    type HasPull = Absent;
    type HasAdvance = S::HasAdvance;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S, P> FrontVal for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
    ValPlanOf<S>: FrontValImpl<S>,
{
    fn front_val(&self) -> S::Item {
        synth::front_value(&self.inner)
    }
}

impl<S, P> Advance for Filter<S, P>
where
    S: Advance,
    P: FnMut(&S::Item) -> bool,
    FrontPlanOf<S>: FrontImpl<S>,
{
    fn advance(&mut self) {
        self.inner.advance();
        self.skip_to_match();
    }
}
