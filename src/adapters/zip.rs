//! Zipped sequences: a fixed-arity tuple of members driven in lockstep.
//!
//! Three access policies, chosen at construction:
//!
//! - [`ValPolicy`] (`zip_val`): members are read through their value
//!   plan; finite members must drain together (checked in debug builds),
//!   boundless members are excused.
//! - [`MixPolicy`] (`zip`): per member, the reference route when the
//!   member has one, the value route otherwise; stops at the shortest
//!   member.
//! - [`RefPolicy`] (`zip_ref`): every member must have reference access;
//!   reads and mutation alias the members' storage; stops at the
//!   shortest member.

use core::marker::PhantomData;

use crate::caps::{Advance, FrontMut, FrontRef, FrontVal, Sequence};
use crate::pipe::IntoSeq;
use crate::probe::{Absent, Present};
use crate::synth::{FrontPlanOf, FrontValImpl, ValPlanOf};

/// Value elements, strict length.
#[derive(Debug, Clone, Copy)]
pub struct ValPolicy;

/// Reference route per member where available, relaxed length.
#[derive(Debug, Clone, Copy)]
pub struct MixPolicy;

/// Aliasing access through every member, relaxed length.
#[derive(Debug, Clone, Copy)]
pub struct RefPolicy;

/// Tuple of sequences advancing together; `P` selects the access policy.
#[derive(Debug, Clone)]
pub struct Zip<T, P> {
    members: T,
    _policy: PhantomData<P>,
}

impl<T, P> Zip<T, P> {
    pub fn from_members(members: T) -> Self {
        Zip { members, _policy: PhantomData }
    }

    /// The member tuple, for direct primitive access.
    pub fn members(&self) -> &T {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut T {
        &mut self.members
    }

    pub fn into_members(self) -> T {
        self.members
    }
}

macro_rules! zip_tuple {
    ($(($M:ident, $idx:tt)),+) => {
        // ---- value policy: strict length --------------------------------

        impl<$($M: Sequence),+> Sequence for Zip<($($M,)+), ValPolicy> {
            type Item = ($($M::Item,)+);
            type HasFrontVal = Present;
            type HasFrontRef = Absent;
            type HasPull = Absent;
            type HasAdvance = Present;

            fn is_empty(&self) -> bool {
                if $( !self.members.$idx.is_empty() )&&+ {
                    return false;
                }
                // Finite members zipped strictly must drain together;
                // survivors are only excused when they cannot drain at all.
                debug_assert!(
                    $( (self.members.$idx.is_empty() || self.members.$idx.is_boundless()) )&&+,
                    "zip_val: members drained at different lengths"
                );
                true
            }

            fn is_boundless(&self) -> bool {
                $( self.members.$idx.is_boundless() )&&+
            }
        }

        impl<$($M: Sequence),+> FrontVal for Zip<($($M,)+), ValPolicy>
        where
            $( ValPlanOf<$M>: FrontValImpl<$M>, )+
        {
            fn front_val(&self) -> Self::Item {
                ($( <ValPlanOf<$M> as FrontValImpl<$M>>::front_value(&self.members.$idx), )+)
            }
        }

        // ---- mixed policy: relaxed length -------------------------------

        impl<$($M: Sequence),+> Sequence for Zip<($($M,)+), MixPolicy> {
            type Item = ($($M::Item,)+);
            type HasFrontVal = Present;
            type HasFrontRef = Absent;
            type HasPull = Absent;
            type HasAdvance = Present;

            fn is_empty(&self) -> bool {
                $( self.members.$idx.is_empty() )||+
            }

            fn is_boundless(&self) -> bool {
                $( self.members.$idx.is_boundless() )&&+
            }
        }

        impl<$($M: Sequence),+> FrontVal for Zip<($($M,)+), MixPolicy>
        where
            $( FrontPlanOf<$M>: FrontValImpl<$M>, )+
        {
            fn front_val(&self) -> Self::Item {
                ($( <FrontPlanOf<$M> as FrontValImpl<$M>>::front_value(&self.members.$idx), )+)
            }
        }

        // ---- reference policy: relaxed length ---------------------------

        impl<$($M: Sequence),+> Sequence for Zip<($($M,)+), RefPolicy> {
            type Item = ($($M::Item,)+);
            type HasFrontVal = Present;
            type HasFrontRef = Absent;
            type HasPull = Absent;
            type HasAdvance = Present;

            fn is_empty(&self) -> bool {
                $( self.members.$idx.is_empty() )||+
            }

            fn is_boundless(&self) -> bool {
                $( self.members.$idx.is_boundless() )&&+
            }
        }

        impl<$($M: FrontRef),+> FrontVal for Zip<($($M,)+), RefPolicy>
        where
            $( $M::Item: Clone, )+
        {
            fn front_val(&self) -> Self::Item {
                ($( self.members.$idx.front_ref().clone(), )+)
            }
        }

        impl<$($M: FrontRef),+> Zip<($($M,)+), RefPolicy> {
            /// Borrow every member's current element in place.
            pub fn fronts(&self) -> ($(&$M::Item,)+) {
                ($( self.members.$idx.front_ref(), )+)
            }
        }

        impl<$($M: FrontMut),+> Zip<($($M,)+), RefPolicy> {
            /// Exclusive access to every member's current element.
            pub fn fronts_mut(&mut self) -> ($(&mut $M::Item,)+) {
                ($( self.members.$idx.front_mut(), )+)
            }
        }

        impl<$($M: FrontMut + Advance),+> Zip<($($M,)+), RefPolicy> {
            /// Drain, handing `visit` aliasing access to each lockstep tuple.
            pub fn for_each_mut(mut self, mut visit: impl FnMut(($(&mut $M::Item,)+))) {
                while !self.is_empty() {
                    visit(($( self.members.$idx.front_mut(), )+));
                    self.advance();
                }
            }
        }

        // ---- shared ------------------------------------------------------

        impl<Pol, $($M: Advance),+> Advance for Zip<($($M,)+), Pol>
        where
            Zip<($($M,)+), Pol>: Sequence,
        {
            fn advance(&mut self) {
                $( self.members.$idx.advance(); )+
            }
        }
    };
}

zip_tuple!((A, 0), (B, 1));
zip_tuple!((A, 0), (B, 1), (C, 2));
zip_tuple!((A, 0), (B, 1), (C, 2), (D, 3));

// =============================================================================
// Entry points
// =============================================================================

/// Lockstep zip with value elements and strict length; non-sequence
/// operands are converted first.
pub fn zip_val<A: IntoSeq, B: IntoSeq>(a: A, b: B) -> Zip<(A::Seq, B::Seq), ValPolicy> {
    Zip::from_members((a.into_seq(), b.into_seq()))
}

/// Lockstep zip, per-member access route, truncating to the shortest
/// member.
pub fn zip<A: IntoSeq, B: IntoSeq>(a: A, b: B) -> Zip<(A::Seq, B::Seq), MixPolicy> {
    Zip::from_members((a.into_seq(), b.into_seq()))
}

/// Lockstep zip over members with reference access, truncating to the
/// shortest member.
pub fn zip_ref<A: IntoSeq, B: IntoSeq>(a: A, b: B) -> Zip<(A::Seq, B::Seq), RefPolicy> {
    Zip::from_members((a.into_seq(), b.into_seq()))
}

/// N-ary [`zip_val`].
#[macro_export]
macro_rules! zip_val {
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::adapters::zip::Zip::<_, $crate::adapters::zip::ValPolicy>::from_members(
            ($crate::pipe::IntoSeq::into_seq($a), $($crate::pipe::IntoSeq::into_seq($rest)),+)
        )
    };
}

/// N-ary [`zip`].
#[macro_export]
macro_rules! zip {
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::adapters::zip::Zip::<_, $crate::adapters::zip::MixPolicy>::from_members(
            ($crate::pipe::IntoSeq::into_seq($a), $($crate::pipe::IntoSeq::into_seq($rest)),+)
        )
    };
}

/// N-ary [`zip_ref`].
#[macro_export]
macro_rules! zip_ref {
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::adapters::zip::Zip::<_, $crate::adapters::zip::RefPolicy>::from_members(
            ($crate::pipe::IntoSeq::into_seq($a), $($crate::pipe::IntoSeq::into_seq($rest)),+)
        )
    };
}
