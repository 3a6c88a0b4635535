//! # Layer 2: Synthesis
//!
//! Derives the full operation set from whatever subset a sequence
//! declares. Each derivable operation has a *plan*: an ordered cascade of
//! [`Bool::If`] selections over the declared profile that picks the first
//! applicable strategy token. The token then executes the operation
//! through the real primitives, with the real trait bounds.
//!
//! Plans, in priority order:
//!
//! - value read: declared `front_val` → copy-out of `front_ref`
//! - in-place visit: `front_ref` → a `front_val` temporary
//! - pull: declared `pull` → `front_val`+`advance` → `front_ref`+`advance`
//!
//! A type with no applicable strategy resolves to [`NoPlan`], which
//! implements nothing: the operation drops out of the overload set at
//! compile time.

use crate::caps::{Advance, FrontRef, FrontVal, Pull, Sequence};
use crate::error::Exhausted;
use crate::probe::Bool;

/// Strategy token: the sequence declares the operation itself.
#[derive(Debug, Clone, Copy)]
pub struct ByPull;

/// Strategy token: go through `front_val`.
#[derive(Debug, Clone, Copy)]
pub struct ByVal;

/// Strategy token: go through `front_ref`, copying out where a value is
/// needed.
#[derive(Debug, Clone, Copy)]
pub struct ByRef;

/// No applicable strategy; terminates every cascade.
#[derive(Debug, Clone, Copy)]
pub struct NoPlan;

/// Value-read plan: declared `front_val`, else copy-out of `front_ref`.
pub type ValPlanOf<S> = <<S as Sequence>::HasFrontVal as Bool>::If<
    ByVal,
    <<S as Sequence>::HasFrontRef as Bool>::If<ByRef, NoPlan>,
>;

/// Borrow-or-value plan: prefer `front_ref`, fall back to `front_val`.
pub type FrontPlanOf<S> = <<S as Sequence>::HasFrontRef as Bool>::If<
    ByRef,
    <<S as Sequence>::HasFrontVal as Bool>::If<ByVal, NoPlan>,
>;

/// Pull plan: declared `pull`, else `front_val`+`advance`, else
/// `front_ref`+`advance`.
pub type PullPlanOf<S> = <<S as Sequence>::HasPull as Bool>::If<
    ByPull,
    <<<S as Sequence>::HasFrontVal as Bool>::And<<S as Sequence>::HasAdvance> as Bool>::If<
        ByVal,
        <<<S as Sequence>::HasFrontRef as Bool>::And<<S as Sequence>::HasAdvance> as Bool>::If<
            ByRef,
            NoPlan,
        >,
    >,
>;

// =============================================================================
// Strategy execution
// =============================================================================

/// Executes a value read for the chosen strategy.
#[diagnostic::on_unimplemented(
    message = "cannot read values out of `{S}`",
    label = "`{S}` declares neither `front_val` nor a cloneable `front_ref`",
    note = "single-pass sources only support `pull`"
)]
pub trait FrontValImpl<S: Sequence> {
    fn front_value(s: &S) -> S::Item;
}

impl<S: FrontVal> FrontValImpl<S> for ByVal {
    #[inline]
    fn front_value(s: &S) -> S::Item {
        s.front_val()
    }
}

impl<S: FrontRef> FrontValImpl<S> for ByRef
where
    S::Item: Clone,
{
    #[inline]
    fn front_value(s: &S) -> S::Item {
        s.front_ref().clone()
    }
}

/// Visits the current element in place for the chosen strategy. The
/// `front_ref` route hands out the real storage location; the
/// `front_val` route visits a temporary.
#[diagnostic::on_unimplemented(
    message = "cannot inspect the front of `{S}`",
    label = "`{S}` declares neither `front_ref` nor `front_val`"
)]
pub trait FrontImpl<S: Sequence> {
    fn with_front<R>(s: &S, visit: impl FnOnce(&S::Item) -> R) -> R;
}

impl<S: FrontRef> FrontImpl<S> for ByRef {
    #[inline]
    fn with_front<R>(s: &S, visit: impl FnOnce(&S::Item) -> R) -> R {
        visit(s.front_ref())
    }
}

impl<S: FrontVal> FrontImpl<S> for ByVal {
    #[inline]
    fn with_front<R>(s: &S, visit: impl FnOnce(&S::Item) -> R) -> R {
        let current = s.front_val();
        visit(&current)
    }
}

/// Executes a destructive read for the chosen strategy.
#[diagnostic::on_unimplemented(
    message = "cannot pull from `{S}`",
    label = "`{S}` has no declared `pull` and no `front_*` + `advance` pair to synthesize one from"
)]
pub trait PullImpl<S: Sequence> {
    fn pull(s: &mut S) -> S::Item;
}

impl<S: Pull> PullImpl<S> for ByPull {
    #[inline]
    fn pull(s: &mut S) -> S::Item {
        s.pull()
    }
}

impl<S: FrontVal + Advance> PullImpl<S> for ByVal {
    #[inline]
    fn pull(s: &mut S) -> S::Item {
        let taken = s.front_val();
        s.advance();
        taken
    }
}

impl<S: FrontRef + Advance> PullImpl<S> for ByRef
where
    S::Item: Clone,
{
    #[inline]
    fn pull(s: &mut S) -> S::Item {
        let taken = s.front_ref().clone();
        s.advance();
        taken
    }
}

// =============================================================================
// Synthesized entry points
// =============================================================================

/// Current element by value, through the declared `front_val` or a copy
/// of the declared `front_ref` — whichever the registration provides.
///
/// Requires `!s.is_empty()`.
///
/// Sequences with no value route are rejected at compile time:
///
/// ```compile_fail
/// use tola_seq::prelude::*;
/// // a stream declares only `pull`; there is no repeatable read to go through
/// let s = from_iter([1, 2, 3]);
/// let _ = front_value(&s);
/// ```
pub fn front_value<S>(s: &S) -> S::Item
where
    S: Sequence,
    ValPlanOf<S>: FrontValImpl<S>,
{
    <ValPlanOf<S> as FrontValImpl<S>>::front_value(s)
}

/// Apply `visit` to the current element without consuming it, borrowing
/// in place when the sequence has reference access.
///
/// Requires `!s.is_empty()`.
pub fn front_with<S, R>(s: &S, visit: impl FnOnce(&S::Item) -> R) -> R
where
    S: Sequence,
    FrontPlanOf<S>: FrontImpl<S>,
{
    <FrontPlanOf<S> as FrontImpl<S>>::with_front(s, visit)
}

/// Read the current element and move past it in one step.
///
/// Requires `!s.is_empty()`; see [`try_pull`] for the checked variant.
pub fn pull<S>(s: &mut S) -> S::Item
where
    S: Sequence,
    PullPlanOf<S>: PullImpl<S>,
{
    <PullPlanOf<S> as PullImpl<S>>::pull(s)
}

/// Checked [`pull`]: reports [`Exhausted`] instead of trampling the
/// empty-sequence precondition.
pub fn try_pull<S>(s: &mut S) -> Result<S::Item, Exhausted>
where
    S: Sequence,
    PullPlanOf<S>: PullImpl<S>,
{
    if s.is_empty() { Err(Exhausted) } else { Ok(pull(s)) }
}
