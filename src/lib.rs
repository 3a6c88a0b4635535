#![cfg_attr(not(feature = "std"), no_std)]

//! # tola-seq
//!
//! **Capability-driven sequence abstraction for Rust.**
//!
//! A *sequence* is any value registered through the [`Sequence`] trait.
//! The registration names the primitives the type supports natively
//! (`empty`, `advance`, `front_val`, `front_ref`, `pull`); the synthesis
//! layer derives every operation that is reachable from that subset, and
//! the pipeline layer drives a small fixed set of combinators through the
//! synthesized interface — the same code path no matter which underlying
//! representation is used.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Probe                                                   |
//! |  - Type-level booleans (Present/Absent, If/And/Or/Not)            |
//! |  - implements! trait detection (inherent-const fallback)          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability registry                                     |
//! |  - Sequence registration + declared-capability profile            |
//! |  - Primitive traits: Advance, FrontVal, FrontRef, FrontMut, Pull  |
//! |  - Resolves<Cap>: capability-closure queries                      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Synthesis                                               |
//! |  - Plans: ordered If-cascades over the profile                    |
//! |  - Strategy tokens (ByPull/ByVal/ByRef) execute with real bounds  |
//! |  - front_value / front_with / pull / try_pull                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layers 3+4: Adapters & Pipeline                                  |
//! |  - Interval, SliceCursor(Mut), Owned, IterSeq, Map, Filter, Zip   |
//! |  - IntoSeq conversion, method-chaining combinators, SeqIter       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Misuse is rejected where it is written: an operation a type cannot
//! support (directly or by synthesis) simply does not resolve, with a
//! diagnostic naming the missing capability. The only runtime error is
//! [`Exhausted`], from the explicitly checked [`try_pull`].
//!
//! ## Quick start
//!
//! ```
//! use tola_seq::prelude::*;
//!
//! // lazily square the odd numbers below ten, then collect
//! let odds_squared = ints(10)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .collect();
//! assert_eq!(odds_squared, vec![1, 9, 25, 49, 81]);
//!
//! // zip an interval against borrowed storage
//! let names = ["zero", "one", "two"];
//! let pairs = zip(ints(3), &names[..]).collect();
//! assert_eq!(pairs, vec![(0, "zero"), (1, "one"), (2, "two")]);
//!
//! // owning sequences keep their elements alive for the whole drain
//! let total: i32 = seq(vec![100, 110, 120]).accumulate();
//! assert_eq!(total, 330);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Probe (no dependencies)
// =============================================================================
pub mod probe;

// =============================================================================
// Layer 1: Capability registry
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 2: Synthesis
// =============================================================================
pub mod synth;

pub mod error;

// =============================================================================
// Layer 3: Adapters
// =============================================================================
pub mod adapters;

// =============================================================================
// Layer 4: Pipeline
// =============================================================================
pub mod pipe;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use probe::{Absent, Bool, Present};

pub use caps::{
    Advance, AdvanceCap, FrontMut, FrontRef, FrontVal, Pull, PullCap, RefCap, Resolves, Sequence,
    ValCap,
};

pub use synth::{front_value, front_with, pull, try_pull};

pub use error::Exhausted;

pub use adapters::filter::Filter;
pub use adapters::interval::{Interval, ints, naturals, span};
pub use adapters::map::Map;
pub use adapters::owned::{Owned, Store};
pub use adapters::slice::{SliceCursor, SliceCursorMut};
pub use adapters::stream::{IterSeq, from_iter};
pub use adapters::zip::{MixPolicy, RefPolicy, ValPolicy, Zip, zip, zip_ref, zip_val};

pub use pipe::{IntoSeq, Pipeline, SeqIter, seq};

/// Common items for working with sequences.
pub mod prelude {
    pub use crate::adapters::interval::{ints, naturals, span};
    pub use crate::adapters::stream::from_iter;
    pub use crate::adapters::zip::{zip, zip_ref, zip_val};
    pub use crate::caps::{Advance, FrontMut, FrontRef, FrontVal, Pull, Sequence};
    pub use crate::pipe::{IntoSeq, Pipeline, seq};
    pub use crate::synth::{front_value, front_with, pull, try_pull};
}
