//! Owning sequences and the conversion surface.

use tola_seq::prelude::*;
use tola_seq::{Interval, Owned, implements};

#[test]
fn owning_sequence_keeps_a_temporary_alive() {
    let drained = seq(vec![3, 1, 4, 1, 5]).collect();
    assert_eq!(drained, vec![3, 1, 4, 1, 5]);
}

#[test]
fn owning_sequence_from_an_array_by_value() {
    let total: i32 = seq([100, 110, 120]).accumulate();
    assert_eq!(total, 330);
}

#[test]
fn owning_sequence_from_a_boxed_slice() {
    let boxed: Box<[i32]> = vec![2, 4, 6].into_boxed_slice();
    assert_eq!(seq(boxed).collect(), vec![2, 4, 6]);
}

#[test]
fn owning_sequence_moves_but_does_not_copy() {
    let owned = seq(vec![1, 2]);
    let moved = owned;
    assert!(!moved.is_empty());
    assert!(!implements!(Owned<Vec<i32>>, Clone));
}

#[test]
fn front_mut_reaches_the_owned_storage() {
    let mut owned = seq([10, 20, 30]);
    *owned.front_mut() += 100;
    assert_eq!(owned.accumulate(), 160);
}

#[test]
fn owned_view_tracks_the_cursor() {
    let mut owned = seq(vec![1, 2, 3]);
    owned.advance();
    assert_eq!(owned.as_slice(), &[2, 3]);
    assert_eq!(owned.into_store(), vec![1, 2, 3]);
}

#[test]
fn conversions_cover_the_storage_shapes() {
    let v = vec![1, 2, 3];
    assert_eq!(seq(&v).collect(), vec![1, 2, 3]); // &Vec<T>
    assert_eq!(seq(&v[..]).collect(), vec![1, 2, 3]); // &[T]
    assert_eq!(seq(1..4).collect(), vec![1, 2, 3]); // Range<I>
    assert_eq!(seq(v).collect(), vec![1, 2, 3]); // Vec<T> by value
}

#[test]
fn identity_passthrough_for_sequences() {
    let s = ints(3);
    let same: Interval<i32> = seq(s);
    assert_eq!(same.collect(), vec![0, 1, 2]);
}

#[test]
fn mutable_conversions_write_through() {
    let mut v = vec![1, 2, 3];
    seq(&mut v).for_each_mut(|x| *x *= 10);
    assert_eq!(v, vec![10, 20, 30]);
}
