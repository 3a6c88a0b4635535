//! Compile-time trait detection for concrete types.
//!
//! `implements!(Type, Trait)` resolves to a `bool` without evaluating
//! anything: the probe type is never constructed, so the check also works
//! for types that have no default value — or no values at all.

/// Check if a concrete type implements a trait at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const exactly when the bound is satisfied.
///
/// **Note**: only meaningful for concrete types. In a generic context the
/// answer always comes from the fallback.
///
/// # Usage
///
/// ```
/// use tola_seq::implements;
/// use tola_seq::caps::{FrontRef, FrontVal, Sequence};
///
/// assert!(implements!(tola_seq::Interval<i32>, Sequence));
/// assert!(implements!(tola_seq::Interval<i32>, FrontVal));
/// assert!(!implements!(tola_seq::Interval<i32>, FrontRef));
/// assert!(!implements!(i32, Sequence));
/// ```
#[macro_export]
macro_rules! implements {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T>(core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn detects_std_traits() {
        assert!(implements!(i32, Clone));
        assert!(implements!(i32, Copy));
        assert!(!implements!(&'static mut [u8], Copy));
    }

    #[test]
    fn detects_custom_traits() {
        trait Marker {}
        impl Marker for u8 {}

        assert!(implements!(u8, Marker));
        assert!(!implements!(u16, Marker));
    }
}
