// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The min-max heap itself.

use std::fmt::{self, Debug};
use std::iter;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

use crate::order::LessThan;

// A min-max heap is a complete binary tree with the following properties:
//
// (1) Nodes on odd levels (the root is level 1) are min-levels: each one is
//     less than or equal to every item in its subtree.
// (2) Nodes on even levels are max-levels: each one is greater than or
//     equal to every item in its subtree.
//
// This implies that the min item is the root and the max item is the
// greater of the root's children (or the root itself if it has none).
//
// The tree is stored in a Vec. All the helpers below work on 1-based
// *positions* so that the usual arithmetic holds; position `p` lives at
// offset `p - 1`:
//
//                1            <- min
//             /     \
//           2         3       <- max
//          / \       / \
//         4   5     6   7     <- min
//        / \
//       8   9                 <- max
//
// Children of `p` are `2p` and `2p + 1`, its parent is `p / 2` and its
// grandparent is `p / 4`. A position of 0 means "no such node".

fn parent(pos: usize) -> usize { pos >> 1 }

fn grandparent(pos: usize) -> usize { pos >> 2 }

/// The level of a position is its bit length; odd levels are min-levels.
fn is_min_level(pos: usize) -> bool {
    debug_assert!(pos > 0);
    (usize::BITS - pos.leading_zeros()) & 1 == 1
}

/// Children and grandchildren of `pos`, in increasing position order.
fn descendants(pos: usize) -> [usize; 6] {
    let l = pos << 1;
    let r = l + 1;
    [l, r, l << 1, (l << 1) + 1, r << 1, (r << 1) + 1]
}

fn less<T, C: Compare<T>>(v: &[T], cmp: &C, a: usize, b: usize) -> bool {
    cmp.compares_lt(&v[a - 1], &v[b - 1])
}

fn swap<T>(v: &mut [T], a: usize, b: usize) { v.swap(a - 1, b - 1); }

/// Position of the greatest item of a non-empty heap.
fn max_position<T, C: Compare<T>>(v: &[T], cmp: &C) -> usize {
    debug_assert!(!v.is_empty());
    match v.len() {
        n @ 1..=2 => n,
        _ if less(v, cmp, 2, 3) => 3,
        _ => 2,
    }
}

/// The first `v.len() - 1` items are considered a valid min-max heap
/// and the last item is to be inserted.
fn min_max_heap_push<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let pos = v.len();
    let par = parent(pos);
    if par == 0 { return; }
    // One comparison across levels decides which grandparent chain the new
    // item belongs to; after that it never crosses levels again.
    if is_min_level(pos) {
        if less(v, cmp, par, pos) {
            swap(v, par, pos);
            bubble_up_max(v, cmp, par);
        } else {
            bubble_up_min(v, cmp, pos);
        }
    } else if less(v, cmp, pos, par) {
        swap(v, pos, par);
        bubble_up_min(v, cmp, par);
    } else {
        bubble_up_max(v, cmp, pos);
    }
}

fn bubble_up_min<T, C: Compare<T>>(v: &mut [T], cmp: &C, mut pos: usize) {
    loop {
        let gp = grandparent(pos);
        if gp == 0 || !less(v, cmp, pos, gp) { return; }
        swap(v, pos, gp);
        pos = gp;
    }
}

fn bubble_up_max<T, C: Compare<T>>(v: &mut [T], cmp: &C, mut pos: usize) {
    loop {
        let gp = grandparent(pos);
        if gp == 0 || !less(v, cmp, gp, pos) { return; }
        swap(v, pos, gp);
        pos = gp;
    }
}

/// The item at the min-level position `pos` of an otherwise valid min-max
/// heap has been replaced. This function restores the heap properties.
fn trickle_down_min<T, C: Compare<T>>(v: &mut [T], cmp: &C, mut pos: usize) {
    debug_assert!(is_min_level(pos));
    loop {
        let mut m = pos;
        for &d in descendants(pos).iter() {
            if d > v.len() { break; }
            if less(v, cmp, d, m) { m = d; }
        }
        if m == pos { return; }
        swap(v, m, pos);
        if parent(m) == pos { return; }
        // m is a grandchild; its parent is a max-level node that may now be
        // smaller than the item that just moved down.
        let p = parent(m);
        if less(v, cmp, p, m) { swap(v, p, m); }
        pos = m;
    }
}

/// The item at the max-level position `pos` of an otherwise valid min-max
/// heap has been replaced. This function restores the heap properties.
fn trickle_down_max<T, C: Compare<T>>(v: &mut [T], cmp: &C, mut pos: usize) {
    debug_assert!(!is_min_level(pos));
    loop {
        let mut m = pos;
        for &d in descendants(pos).iter() {
            if d > v.len() { break; }
            if less(v, cmp, m, d) { m = d; }
        }
        if m == pos { return; }
        swap(v, m, pos);
        if parent(m) == pos { return; }
        let p = parent(m);
        if less(v, cmp, m, p) { swap(v, p, m); }
        pos = m;
    }
}

/// A double-ended priority queue implemented with a min-max heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
///
/// Items that compare equal may be returned in any order relative to each
/// other.
#[derive(Clone)]
pub struct MinMaxHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for MinMaxHeap<T, C> {
    #[inline]
    fn default() -> MinMaxHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> MinMaxHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// The capacity is only a pre-allocation hint.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> MinMaxHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.min_max(), Some((&1, &6)));
    /// ```
    fn from(vec: Vec<T>) -> MinMaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, F> MinMaxHeap<T, LessThan<F>> where F: Fn(&T, &T) -> bool {
    /// Returns an empty heap ordered by a `less(a, b)` predicate.
    ///
    /// `less` must be a strict weak ordering. See [`LessThan`].
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let mut heap = MinMaxHeap::with_less(|a: &i32, b: &i32| a > b);
    /// heap.extend(vec![1, 3, 2]);
    /// assert_eq!(heap.min(), Some(&3));
    /// assert_eq!(heap.max(), Some(&1));
    /// ```
    pub fn with_less(less: F) -> MinMaxHeap<T, LessThan<F>> {
        Self::with_comparator(LessThan::new(less))
    }
}

impl<T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: vec![], cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> MinMaxHeap<T, C> {
        for to in 2..vec.len() + 1 {
            min_max_heap_push(&mut vec[..to], &cmp);
        }
        let heap = MinMaxHeap { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn max(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return None; }
        Some(&self.data[max_position(&self.data, &self.cmp) - 1])
    }

    /// Returns references to the smallest and greatest items in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_min(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return None; }
        let res = self.data.swap_remove(0);
        if !self.data.is_empty() {
            trickle_down_min(&mut self.data, &self.cmp, 1);
        }
        debug_assert!(self.is_valid());
        Some(res)
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_max(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return None; }
        let pos = max_position(&self.data, &self.cmp);
        let res = self.data.swap_remove(pos - 1);
        // A one- or two-item heap loses its last item; nothing to fix up.
        if pos <= self.data.len() {
            trickle_down_max(&mut self.data, &self.cmp, pos);
        }
        debug_assert!(self.is_valid());
        Some(res)
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        min_max_heap_push(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Consumes the heap and returns its items as a vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        // The heap shrinks from the back; each round moves its max into the
        // slot that just left it.
        for end in (1..vec.len()).rev() {
            let pos = max_position(&vec[..=end], &self.cmp);
            vec.swap(pos - 1, end);
            if pos <= end {
                trickle_down_max(&mut vec[..end], &self.cmp, pos);
            }
        }
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if every item is
    ///
    /// 1. greater than or equal to its parent and grandparent when those are
    ///    on a min-level, AND
    /// 2. less than or equal to its parent and grandparent when those are on
    ///    a max-level.
    ///
    /// Checking only two levels up is enough: every descendant of a node is
    /// reachable through a chain of such links of the same kind.
    fn is_valid(&self) -> bool {
        let v = &self.data;
        let ok = |anc: usize, pos: usize| {
            if is_min_level(anc) {
                !less(v, &self.cmp, pos, anc)
            } else {
                !less(v, &self.cmp, anc, pos)
            }
        };
        (2..v.len() + 1).all(|pos| {
            let gp = grandparent(pos);
            ok(parent(pos), pos) && (gp == 0 || ok(gp, pos))
        })
    }
}

impl<T: Debug, C: Compare<T>> Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for MinMaxHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinMaxHeap<T, C> {
        MinMaxHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`MinMaxHeap::iter`](struct.MinMaxHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `MinMaxHeap` in arbitrary order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`MinMaxHeap::drain`](struct.MinMaxHeap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for MinMaxHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinMaxHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

#[cfg(test)]
mod test {
    use rand::seq::SliceRandom;
    use rand::{thread_rng, Rng};
    use super::{is_min_level, MinMaxHeap};

    #[test]
    fn test_levels() {
        assert!(is_min_level(1));
        assert!(!is_min_level(2));
        assert!(!is_min_level(3));
        assert!((4..8).all(is_min_level));
        assert!((8..16).all(|p| !is_min_level(p)));
        assert!(is_min_level(16));
    }

    #[test]
    fn test_pop_min_in_order() {
        let mut heap = MinMaxHeap::new();
        for &x in &[5, 1, 4, 2, 3] { heap.push(x); }
        let popped: Vec<_> = (0..5).map(|_| heap.pop_min().unwrap()).collect();
        assert_eq!(popped, vec![1, 2, 3, 4, 5]);
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn test_pop_max_in_order() {
        let mut heap = MinMaxHeap::new();
        for &x in &[5, 1, 4, 2, 3] { heap.push(x); }
        let popped: Vec<_> = (0..5).map(|_| heap.pop_max().unwrap()).collect();
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn test_empty() {
        let mut heap = MinMaxHeap::<i32>::new();
        assert_eq!(heap.min(), None);
        assert_eq!(heap.max(), None);
        assert_eq!(heap.min_max(), None);
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.pop_max(), None);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_small_heaps() {
        let mut heap = MinMaxHeap::new();
        heap.push(7);
        assert_eq!(heap.min_max(), Some((&7, &7)));
        heap.push(3);
        assert_eq!(heap.min_max(), Some((&3, &7)));
        assert_eq!(heap.pop_max(), Some(7));
        assert_eq!(heap.min_max(), Some((&3, &3)));
        assert_eq!(heap.pop_max(), Some(3));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_alternating_pops() {
        let mut arr: Vec<i32> = (0..100).chain((0..100).map(|i| 1000 - i)).collect();
        arr.shuffle(&mut thread_rng());
        let mut heap = MinMaxHeap::new();
        for &x in &arr { heap.push(x); }
        for i in 0..100 {
            assert_eq!(heap.pop_min(), Some(i));
            assert_eq!(heap.len(), 200 - 2 * i as usize - 1);
            assert_eq!(heap.pop_max(), Some(1000 - i));
            assert_eq!(heap.len(), 200 - 2 * i as usize - 2);
        }
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MinMaxHeap::new();
        for &x in &[2, 2, 1, 1, 3, 3, 2] { heap.push(x); }
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn fuzz_push_into_sorted_vec() {
        let mut rng = thread_rng();
        let mut tmp = Vec::with_capacity(100);
        for _ in 0..100 {
            tmp.clear();
            let mut heap = MinMaxHeap::from(tmp);
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            tmp = heap.into_sorted_vec();
            for pair in tmp.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_interleaved_pops() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut pushed: Vec<u32> = (0..100).map(|_| rng.gen_range(0..50)).collect();
            let mut heap: MinMaxHeap<u32> = MinMaxHeap::new();
            heap.extend(&pushed);
            let (mut mins, mut maxs) = (vec![], vec![]);
            while !heap.is_empty() {
                if rng.gen() {
                    mins.push(heap.pop_min().unwrap());
                } else {
                    maxs.push(heap.pop_max().unwrap());
                }
            }
            assert!(mins.windows(2).all(|w| w[0] <= w[1]));
            assert!(maxs.windows(2).all(|w| w[0] >= w[1]));
            let mut popped: Vec<u32> = mins.into_iter().chain(maxs).collect();
            popped.sort();
            pushed.sort();
            assert_eq!(popped, pushed);
        }
    }

    #[test]
    fn fuzz_push_pop_mixed() {
        let mut rng = thread_rng();
        let mut heap = MinMaxHeap::new();
        let mut model: Vec<i64> = vec![];
        for _ in 0..2000 {
            match rng.gen_range(0..4) {
                0 => {
                    model.sort();
                    assert_eq!(heap.pop_min(), if model.is_empty() { None } else { Some(model.remove(0)) });
                }
                1 => {
                    model.sort();
                    assert_eq!(heap.pop_max(), model.pop());
                }
                _ => {
                    let x = rng.gen_range(-100..100);
                    heap.push(x);
                    model.push(x);
                }
            }
            assert!(heap.is_valid());
            assert_eq!(heap.len(), model.len());
            assert_eq!(heap.min(), model.iter().min());
            assert_eq!(heap.max(), model.iter().max());
        }
    }

    #[test]
    fn test_from_vec() {
        let heap = MinMaxHeap::<i32>::from(vec![]);
        assert_eq!(heap.min_max(), None);

        let heap = MinMaxHeap::from(vec![2]);
        assert_eq!(heap.min_max(), Some((&2, &2)));

        let heap = MinMaxHeap::from(vec![2, 1]);
        assert_eq!(heap.min_max(), Some((&1, &2)));

        let heap = MinMaxHeap::from(vec![2, 1, 3]);
        assert_eq!(heap.min_max(), Some((&1, &3)));

        let heap: MinMaxHeap<i32> = vec![9, 4, 7, 1, 8].into_iter().collect();
        assert_eq!(heap.min_max(), Some((&1, &9)));
    }

    #[test]
    fn test_with_less() {
        let mut heap = MinMaxHeap::with_less(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
        heap.push((3, 'c'));
        heap.push((1, 'a'));
        heap.push((2, 'b'));
        assert_eq!(heap.pop_max(), Some((3, 'c')));
        assert_eq!(heap.pop_min(), Some((1, 'a')));
        assert_eq!(heap.pop_min(), Some((2, 'b')));
    }

    #[test]
    fn test_drain_and_clear() {
        let mut heap = MinMaxHeap::from(vec![4, 2, 9]);
        let mut drained: Vec<_> = heap.drain().collect();
        drained.sort();
        assert_eq!(drained, vec![2, 4, 9]);
        assert!(heap.is_empty());

        heap.push(1);
        heap.clear();
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_is_valid() {
        fn new(data: Vec<i32>) -> MinMaxHeap<i32> {
            MinMaxHeap { data, cmp: ::compare::natural() }
        }

        assert!(new(vec![]).is_valid());
        assert!(new(vec![1]).is_valid());
        assert!(new(vec![1, 1]).is_valid());
        assert!(new(vec![1, 5, 3]).is_valid());
        assert!(new(vec![1, 9, 8, 2, 3, 4, 5]).is_valid());
        assert!(new(vec![1, 9, 8, 2, 3, 4, 5, 6]).is_valid());

        assert!(!new(vec![2, 1]).is_valid());             // max-level child below the root
        assert!(!new(vec![1, 5, 3, 6]).is_valid());       // min-level node above its max parent
        assert!(!new(vec![2, 9, 8, 1]).is_valid());       // min-level node below the root
        assert!(!new(vec![1, 9, 8, 2, 3, 4, 5, 10]).is_valid()); // above its max grandparent
    }
}
