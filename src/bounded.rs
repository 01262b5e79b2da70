// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A thread-safe, capacity-bounded min-max heap.

use std::fmt;
use std::time::Duration;

use compare::{natural, Compare, Natural};
use crossbeam::channel::{self, select, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::heap::MinMaxHeap;
use crate::order::LessThan;

// Upper bound on what the capacity pre-allocates; larger queues grow on demand.
const MAX_PREALLOC: usize = 1024;

/// When a [`BoundedQueue`] discards items to honour its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Pushes always succeed and may leave the queue over capacity. Each pop
    /// from an over-capacity queue also discards its greatest item.
    EvictOnPop,
    /// A push that takes the queue over capacity discards the greatest item
    /// right away, so the queue never holds more than its capacity.
    EvictOnPush,
}

impl Default for OverflowPolicy {
    fn default() -> OverflowPolicy { OverflowPolicy::EvictOnPop }
}

struct Inner<T, C: Compare<T>> {
    heap: MinMaxHeap<T, C>,
    evicted: u64,
}

/// A priority queue shared between threads that hands out its smallest item
/// first and works its way back down to `capacity` items by discarding its
/// greatest ones, one per pop.
///
/// Every item in the heap is backed by one token in an unbounded channel.
/// Consumers claim a token before they touch the heap, which is what lets
/// them block, be cancelled or time out without holding the lock. A consumer
/// that gives up never takes a token, so it leaves no trace.
///
/// Between operations `len()` equals the number of items in the heap.
///
/// # Examples
///
/// ```
/// use min_max_heap::BoundedQueue;
///
/// let queue = BoundedQueue::new(3).unwrap();
/// for &x in &[5, 1, 4, 2, 3] {
///     queue.push(x);
/// }
/// assert_eq!(queue.pop(), 1);
/// assert_eq!(queue.pop(), 2);
/// assert_eq!(queue.pop(), 3);
/// assert_eq!(queue.len(), 1);
/// assert_eq!(queue.evicted(), 1);
/// ```
pub struct BoundedQueue<T, C: Compare<T> = Natural<T>> {
    inner: Mutex<Inner<T, C>>,
    tokens_tx: Sender<()>,
    tokens_rx: Receiver<()>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl<T: Ord> BoundedQueue<T> {
    /// Returns an empty queue ordered according to the natural order of its items.
    ///
    /// Fails with `Error::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<BoundedQueue<T>> {
        Self::with_comparator(capacity, natural())
    }
}

impl<T, F> BoundedQueue<T, LessThan<F>> where F: Fn(&T, &T) -> bool {
    /// Returns an empty queue ordered by a `less(a, b)` predicate.
    pub fn with_less(capacity: usize, less: F) -> Result<BoundedQueue<T, LessThan<F>>> {
        Self::with_comparator(capacity, LessThan::new(less))
    }
}

impl<T, C: Compare<T>> BoundedQueue<T, C> {
    /// Returns an empty queue ordered according to the given comparator, using
    /// the default `OverflowPolicy::EvictOnPop`.
    pub fn with_comparator(capacity: usize, cmp: C) -> Result<BoundedQueue<T, C>> {
        Self::with_policy(capacity, OverflowPolicy::default(), cmp)
    }

    /// Returns an empty queue ordered according to the given comparator and
    /// discarding items according to `policy`.
    pub fn with_policy(capacity: usize, policy: OverflowPolicy, cmp: C) -> Result<BoundedQueue<T, C>> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        let (tokens_tx, tokens_rx) = channel::unbounded();
        let heap = MinMaxHeap::with_capacity_and_comparator(capacity.min(MAX_PREALLOC), cmp);
        debug!(capacity, ?policy, "created bounded queue");
        Ok(BoundedQueue {
            inner: Mutex::new(Inner { heap, evicted: 0 }),
            tokens_tx,
            tokens_rx,
            capacity,
            policy,
        })
    }

    /// Pushes an item onto the queue. Never blocks.
    ///
    /// With `OverflowPolicy::EvictOnPop` the queue may temporarily hold more
    /// than `capacity` items.
    pub fn push(&self, item: T) {
        let mut inner = self.inner.lock();
        inner.heap.push(item);
        if self.policy == OverflowPolicy::EvictOnPush && inner.heap.len() > self.capacity {
            // The evicted item's token is simply never published.
            inner.heap.pop_max();
            inner.evicted += 1;
            trace!(capacity = self.capacity, "evicted greatest item on push");
            return;
        }
        self.tokens_tx.send(()).expect("token receiver lives as long as the queue");
    }

    /// Removes the smallest item from the queue, blocking until there is one.
    pub fn pop(&self) -> T {
        self.tokens_rx.recv().expect("token sender lives as long as the queue");
        self.take()
    }

    /// Removes the smallest item from the queue if there is one.
    ///
    /// Fails with `Error::Empty` without blocking otherwise.
    pub fn try_pop(&self) -> Result<T> {
        match self.tokens_rx.try_recv() {
            Ok(()) => Ok(self.take()),
            Err(_) => Err(Error::Empty),
        }
    }

    /// Removes the smallest item from the queue, blocking until there is one
    /// or `done` fires.
    ///
    /// `done` fires when it receives a message or when all of its senders are
    /// dropped. If it fires first this fails with `Error::Cancelled` and the
    /// queue is left untouched. An item that is already available is returned
    /// even if `done` has fired.
    pub fn pop_with_done(&self, done: &Receiver<()>) -> Result<T> {
        if let Ok(()) = self.tokens_rx.try_recv() {
            return Ok(self.take());
        }
        select! {
            recv(self.tokens_rx) -> token => {
                token.expect("token sender lives as long as the queue");
                Ok(self.take())
            }
            recv(done) -> _ => {
                trace!("pop cancelled");
                Err(Error::Cancelled)
            }
        }
    }

    /// Removes the smallest item from the queue, blocking for at most `timeout`.
    ///
    /// Fails with `Error::Timeout`, leaving the queue untouched, if no item
    /// became available in time.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T> {
        match self.tokens_rx.recv_timeout(timeout) {
            Ok(()) => Ok(self.take()),
            Err(RecvTimeoutError::Timeout) => {
                trace!(?timeout, "pop timed out");
                Err(Error::Timeout)
            }
            Err(RecvTimeoutError::Disconnected) => unreachable!("token sender lives as long as the queue"),
        }
    }

    /// Returns the number of items available to consumers.
    pub fn len(&self) -> usize {
        self.tokens_rx.len()
    }

    /// Returns `true` if no item is available to consumers.
    pub fn is_empty(&self) -> bool {
        self.tokens_rx.is_empty()
    }

    /// Returns the number of items the queue holds on to.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the policy used to discard items over capacity.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns how many items have been discarded to honour the capacity.
    pub fn evicted(&self) -> u64 {
        self.inner.lock().evicted
    }

    /// Called with one token already claimed. Discards the greatest item if
    /// the heap is over capacity, then removes its smallest item.
    fn take(&self) -> T {
        let mut inner = self.inner.lock();
        // Only an unclaimed item may be discarded. Without a free token the
        // surplus belongs to consumers waiting on the lock.
        if inner.heap.len() > self.capacity && self.tokens_rx.try_recv().is_ok() {
            inner.heap.pop_max();
            inner.evicted += 1;
            trace!(len = inner.heap.len(), capacity = self.capacity, "evicted greatest item on pop");
        }
        inner.heap.pop_min().expect("a claimed token is always backed by an item")
    }
}

impl<T, C: Compare<T>> fmt::Debug for BoundedQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish()
    }
}
