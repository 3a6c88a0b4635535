//! # Layer 0: Probe
//!
//! Compile-time predicates everything else is built on:
//! - `bool.rs`: type-level boolean logic (Present/Absent).
//! - `detect.rs`: trait-existence probing for concrete types.

pub mod bool;
pub mod detect;

pub use bool::{Absent, And, Bool, If, Not, Or, Present, SelectBool};
