// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue implemented with a min-max heap.
//!
//! A [`MinMaxHeap`] can be used wherever a [`BinaryHeap`][bh] can, but gives access to both its
//! smallest and its greatest item and accepts custom comparators, either any
//! [`compare::Compare`] implementation or a plain `less(a, b)` predicate through [`LessThan`].
//!
//! Insertion and popping the smallest or greatest item are `O(log n)`. Retrieving the smallest
//! or greatest item is `O(1)`.
//!
//! [`BoundedQueue`] wraps a heap for use from many threads. It hands out the smallest item
//! first and keeps its size near a fixed capacity by discarding the greatest items.
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

mod bounded;
mod error;
mod heap;
mod order;

pub use crate::bounded::{BoundedQueue, OverflowPolicy};
pub use crate::error::{Error, Result};
pub use crate::heap::{Drain, IntoIter, Iter, MinMaxHeap};
pub use crate::order::LessThan;
