//! Single-pass stream adapter.

use crate::caps::{Pull, Sequence};
use crate::probe::{Absent, Present};

/// Wraps any [`Iterator`] as a pull-only sequence: one element of
/// lookahead so `is_empty` is answerable, no repeatable reads.
#[derive(Debug, Clone)]
pub struct IterSeq<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

impl<I: Iterator> IterSeq<I> {
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        IterSeq { iter, head }
    }
}

/// Wrap an iterator (or anything that converts into one) as a sequence.
pub fn from_iter<I: IntoIterator>(src: I) -> IterSeq<I::IntoIter> {
    IterSeq::new(src.into_iter())
}

impl<I: Iterator> Sequence for IterSeq<I> {
    type Item = I::Item;
    type HasFrontVal = Absent;
    type HasFrontRef = Absent;
    type HasPull = Present;
    type HasAdvance = Absent;

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<I: Iterator> Pull for IterSeq<I> {
    fn pull(&mut self) -> I::Item {
        let taken = self.head.take().expect("pull from an exhausted sequence");
        self.head = self.iter.next();
        taken
    }
}
