//! Synthesized operations behave exactly like the manual composition of
//! the primitives they are derived from, and pick their route in the
//! documented priority order.

use core::cell::Cell;

use tola_seq::prelude::*;
use tola_seq::synth;
use tola_seq::{Absent, Exhausted, Present};

/// Counts `[0, limit)` and declares nothing but `front_val` + `advance`.
#[derive(Clone)]
struct Counter {
    at: u32,
    limit: u32,
}

impl Counter {
    fn upto(limit: u32) -> Self {
        Counter { at: 0, limit }
    }
}

impl Sequence for Counter {
    type Item = u32;
    type HasFrontVal = Present;
    type HasFrontRef = Absent;
    type HasPull = Absent;
    type HasAdvance = Present;

    fn is_empty(&self) -> bool {
        self.at >= self.limit
    }
}

impl FrontVal for Counter {
    fn front_val(&self) -> u32 {
        self.at
    }
}

impl Advance for Counter {
    fn advance(&mut self) {
        self.at += 1;
    }
}

/// Declares `front_ref` only; value reads must copy out.
struct Window<'a> {
    rest: &'a [u32],
}

impl Sequence for Window<'_> {
    type Item = u32;
    type HasFrontVal = Absent;
    type HasFrontRef = Present;
    type HasPull = Absent;
    type HasAdvance = Present;

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }
}

impl FrontRef for Window<'_> {
    fn front_ref(&self) -> &u32 {
        &self.rest[0]
    }
}

impl Advance for Window<'_> {
    fn advance(&mut self) {
        self.rest = &self.rest[1..];
    }
}

/// Declares both read primitives and counts which one fires.
struct Tally<'a> {
    value: u32,
    live: bool,
    refs: &'a Cell<u32>,
    vals: &'a Cell<u32>,
}

impl Sequence for Tally<'_> {
    type Item = u32;
    type HasFrontVal = Present;
    type HasFrontRef = Present;
    type HasPull = Absent;
    type HasAdvance = Present;

    fn is_empty(&self) -> bool {
        !self.live
    }
}

impl FrontVal for Tally<'_> {
    fn front_val(&self) -> u32 {
        self.vals.set(self.vals.get() + 1);
        self.value
    }
}

impl FrontRef for Tally<'_> {
    fn front_ref(&self) -> &u32 {
        self.refs.set(self.refs.get() + 1);
        &self.value
    }
}

impl Advance for Tally<'_> {
    fn advance(&mut self) {
        self.live = false;
    }
}

/// Produces nothing but unit values.
struct Ticks {
    left: u32,
}

impl Sequence for Ticks {
    type Item = ();
    type HasFrontVal = Present;
    type HasFrontRef = Absent;
    type HasPull = Absent;
    type HasAdvance = Present;

    fn is_empty(&self) -> bool {
        self.left == 0
    }
}

impl FrontVal for Ticks {
    fn front_val(&self) {}
}

impl Advance for Ticks {
    fn advance(&mut self) {
        self.left -= 1;
    }
}

#[test]
fn pull_synthesized_from_front_val_and_advance() {
    let mut synthesized = Counter::upto(6);
    let mut manual = Counter::upto(6);

    while !manual.is_empty() {
        let expected = manual.front_val();
        manual.advance();
        assert_eq!(synth::pull(&mut synthesized), expected);
    }
    assert!(synthesized.is_empty());
}

#[test]
fn front_value_copies_out_of_front_ref() {
    let data = [7u32, 8, 9];
    let mut w = Window { rest: &data };

    assert_eq!(front_value(&w), 7);
    assert_eq!(front_value(&w), 7); // repeatable
    w.advance();
    assert_eq!(front_value(&w), 8);
}

#[test]
fn pull_synthesized_from_front_ref_and_advance() {
    let data = [1u32, 2, 3];
    let mut w = Window { rest: &data };

    assert_eq!(synth::pull(&mut w), 1);
    assert_eq!(synth::pull(&mut w), 2);
    assert_eq!(synth::pull(&mut w), 3);
    assert!(w.is_empty());
}

#[test]
fn declared_pull_drives_single_pass_sources() {
    let mut s = from_iter([3u8, 1, 4]);

    assert_eq!(pull(&mut s), 3);
    assert_eq!(try_pull(&mut s), Ok(1));
    assert_eq!(pull(&mut s), 4);
    assert!(s.is_empty());
    assert_eq!(try_pull(&mut s), Err(Exhausted));
}

#[test]
fn front_with_prefers_the_reference_route() {
    let refs = Cell::new(0);
    let vals = Cell::new(0);
    let t = Tally { value: 9, live: true, refs: &refs, vals: &vals };

    let seen = front_with(&t, |x| *x);
    assert_eq!(seen, 9);
    assert_eq!(refs.get(), 1);
    assert_eq!(vals.get(), 0);
}

#[test]
fn front_value_prefers_the_declared_front_val() {
    let refs = Cell::new(0);
    let vals = Cell::new(0);
    let t = Tally { value: 9, live: true, refs: &refs, vals: &vals };

    assert_eq!(front_value(&t), 9);
    assert_eq!(vals.get(), 1);
    assert_eq!(refs.get(), 0);
}

#[test]
fn pull_prefers_the_value_route_over_the_reference_route() {
    let refs = Cell::new(0);
    let vals = Cell::new(0);
    let mut t = Tally { value: 9, live: true, refs: &refs, vals: &vals };

    assert_eq!(pull(&mut t), 9);
    assert!(t.is_empty());
    assert_eq!(vals.get(), 1);
    assert_eq!(refs.get(), 0);
}

#[test]
fn unit_elements_pull_like_any_other_value() {
    let mut ticks = Ticks { left: 3 };

    #[allow(clippy::unit_cmp)]
    while !ticks.is_empty() {
        assert_eq!(pull(&mut ticks), ());
    }
    assert_eq!(try_pull(&mut ticks), Err(Exhausted));
}
