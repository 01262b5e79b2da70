// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::result;

use thiserror::Error;

/// Errors reported by [`BoundedQueue`](crate::BoundedQueue).
///
/// An empty [`MinMaxHeap`](crate::MinMaxHeap) reports `None` from its
/// peeks and pops instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The queue was asked to hold fewer than one item.
    #[error("invalid capacity {0}: capacity must be at least 1")]
    InvalidCapacity(usize),
    /// A non-blocking pop found nothing to take.
    #[error("queue is empty")]
    Empty,
    /// The cancellation signal fired before an item became available.
    #[error("pop cancelled")]
    Cancelled,
    /// The timeout elapsed before an item became available.
    #[error("pop timed out")]
    Timeout,
}

pub type Result<T> = result::Result<T, Error>;
