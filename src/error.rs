//! The one runtime failure this crate defines.

/// Returned by [`try_pull`](crate::synth::try_pull) when the sequence has
/// already been drained. Every other misuse is a compile-time rejection
/// or a caller-side contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pull from an exhausted sequence")]
pub struct Exhausted;
