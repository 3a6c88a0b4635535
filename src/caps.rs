//! # Layer 1: Capability registry
//!
//! A type takes part in this crate by implementing [`Sequence`]: the
//! registration carries the element type, the mandatory emptiness test
//! and the declared-capability profile. The optional primitives each live
//! in their own trait; a type implements exactly the ones it can honor
//! natively and the synthesis layer derives the rest.
//!
//! The profile must mirror the declared impls (`Present` iff the trait is
//! implemented). A profile that claims more than the impls provide cannot
//! corrupt behavior: every synthesis strategy carries the real trait
//! bounds, so over-claiming surfaces as a compile error at the first use.

use crate::probe::{And, Bool, Or};

/// Registration trait: a type is a sequence iff this impl exists.
///
/// Requirements beyond the emptiness test: at least one of the read
/// primitives ([`FrontVal`], [`FrontRef`], [`Pull`]), and [`Advance`]
/// unless the type declares [`Pull`] directly.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence",
    label = "no sequence registration exists for `{Self}`",
    note = "containers are converted, not registered: go through `into_seq()` (or `seq`/`from_iter`) first"
)]
pub trait Sequence {
    /// Element type produced by reads. Always an owned value.
    type Item;

    /// Declared capability profile, consulted by the synthesis layer.
    type HasFrontVal: Bool;
    type HasFrontRef: Bool;
    type HasPull: Bool;
    type HasAdvance: Bool;

    /// No more elements can be produced. Pure and repeatable.
    fn is_empty(&self) -> bool;

    /// Whether this sequence is known to never run out. Length-strict
    /// zipping excuses boundless members from draining in lockstep.
    fn is_boundless(&self) -> bool {
        false
    }
}

/// Discard the current element and move the cursor to the next one.
///
/// Requires `!is_empty()`.
pub trait Advance: Sequence {
    fn advance(&mut self);
}

/// Read the current element by value. Repeated calls without an
/// intervening `advance` return equal values.
///
/// Requires `!is_empty()`.
pub trait FrontVal: Sequence {
    fn front_val(&self) -> Self::Item;
}

/// Borrow the current element in place; repeated calls alias the same
/// storage location.
///
/// Requires `!is_empty()`.
pub trait FrontRef: Sequence {
    fn front_ref(&self) -> &Self::Item;
}

/// Exclusive in-place access to the current element, for sequences whose
/// storage can be written through.
pub trait FrontMut: FrontRef {
    fn front_mut(&mut self) -> &mut Self::Item;
}

/// Read the current element and advance past it, as a single step. The
/// natural primitive for single-pass sources that cannot re-read a
/// position.
///
/// Requires `!is_empty()`.
pub trait Pull: Sequence {
    fn pull(&mut self) -> Self::Item;
}

// =============================================================================
// Capability-closure queries
// =============================================================================

macro_rules! cap_markers {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        paste::paste! {
            $(
                $(#[$doc])*
                #[derive(Debug, Clone, Copy)]
                pub struct [<$name Cap>];
            )+
        }
    };
}

cap_markers! {
    /// Value reads: declared `front_val`, or copy-out through `front_ref`.
    Val,
    /// In-place reference access (`front_ref`).
    Ref,
    /// Single-step read-and-advance, declared or synthesized.
    Pull,
    /// Cursor movement (`advance`).
    Advance,
}

/// Capability-closure query: which operations are invocable on `Self`
/// once synthesis is taken into account. The answer is a superset of the
/// declared profile, computed entirely at the type level.
pub trait Resolves<C> {
    type Out: Bool;
    /// The boolean result of the query as a constant.
    const PRESENT: bool = <Self::Out as Bool>::VALUE;
}

impl<S: Sequence> Resolves<ValCap> for S {
    type Out = Or<S::HasFrontVal, S::HasFrontRef>;
}

impl<S: Sequence> Resolves<RefCap> for S {
    type Out = S::HasFrontRef;
}

impl<S: Sequence> Resolves<AdvanceCap> for S {
    type Out = S::HasAdvance;
}

impl<S: Sequence> Resolves<PullCap> for S {
    type Out = Or<S::HasPull, And<S::HasAdvance, Or<S::HasFrontVal, S::HasFrontRef>>>;
}
