// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Comparators built from `less(a, b)` predicates.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use compare::Compare;

/// A comparator defined by a strict "less than" predicate.
///
/// The predicate must be a strict weak ordering: irreflexive, asymmetric and
/// transitive, with incomparability transitive as well. Two items for which
/// neither `less(a, b)` nor `less(b, a)` holds compare as equal.
///
/// This is a caller obligation. It is not checked, and a predicate that breaks
/// it leaves the order of items coming out of a heap unspecified (it never
/// makes the heap panic or lose items).
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use compare::Compare;
/// use min_max_heap::LessThan;
///
/// let by_last_digit = LessThan::new(|a: &u32, b: &u32| a % 10 < b % 10);
/// assert_eq!(by_last_digit.compare(&21, &3), Ordering::Less);
/// assert_eq!(by_last_digit.compare(&12, &2), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Default)]
pub struct LessThan<F>(F);

impl<F> LessThan<F> {
    /// Wraps `less` into a comparator.
    pub fn new(less: F) -> LessThan<F> { LessThan(less) }

    /// Returns the wrapped predicate.
    pub fn into_inner(self) -> F { self.0 }
}

impl<T: ?Sized, F> Compare<T> for LessThan<F> where F: Fn(&T, &T) -> bool {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) {
            Ordering::Less
        } else if (self.0)(r, l) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn compares_lt(&self, l: &T, r: &T) -> bool { (self.0)(l, r) }

    fn compares_gt(&self, l: &T, r: &T) -> bool { (self.0)(r, l) }

    fn compares_le(&self, l: &T, r: &T) -> bool { !(self.0)(r, l) }

    fn compares_ge(&self, l: &T, r: &T) -> bool { !(self.0)(l, r) }
}

impl<F> Debug for LessThan<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("LessThan")
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use compare::Compare;
    use super::LessThan;

    #[test]
    fn test_compare() {
        let cmp = LessThan::new(|a: &i32, b: &i32| a < b);
        assert_eq!(cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(cmp.compare(&2, &1), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
        assert!(cmp.compares_le(&2, &2));
        assert!(cmp.compares_ge(&2, &2));
        assert!(!cmp.compares_lt(&2, &2));
        assert!(cmp.compares_gt(&3, &2));
    }

    #[test]
    fn test_equivalence_classes() {
        // Only the tens digit is compared.
        let cmp = LessThan::new(|a: &u32, b: &u32| a / 10 < b / 10);
        assert_eq!(cmp.compare(&11, &19), Ordering::Equal);
        assert_eq!(cmp.compare(&19, &20), Ordering::Less);
    }
}
