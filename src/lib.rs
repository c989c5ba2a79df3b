//! This crate provides [`IntervalMap`], a Compressed Interval Map: a
//! total map from an ordered key space to values which is stored as a
//! minimal set of breakpoints in a [`BTreeMap`].
//!
//! `cimap` stands for Compressed Interval Map.
//!
//! ## Example
//!
//! ```rust
//! use cimap::IntervalMap;
//!
//! let mut map = IntervalMap::new('?');
//!
//! map.assign(4, 8, 'a');
//! map.assign(8, 12, 'b');
//! map.assign(12, 100, 'c');
//!
//! assert_eq!(map.get(&0), &'?');
//! assert_eq!(map.get(&5), &'a');
//! assert_eq!(map.get(&8), &'b');
//! assert_eq!(map.get(&1000), &'?');
//!
//! // Overwrite part of the map, the value at 9 becomes 'a' so the
//! // breakpoint at 8 is no longer needed
//! map.assign(6, 10, 'a');
//!
//! assert_eq!(
//! 	map.iter().collect::<Vec<_>>(),
//! 	[(&4, &'a'), (&10, &'b'), (&12, &'c'), (&100, &'?')]
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Totality
//!
//! An [`IntervalMap`] has a value at every key. It is made with a
//! background value which the map takes at every key until something
//! else is assigned. There is no way to "unset" a key, you can only
//! assign it the background value again.
//!
//! ### Breakpoints
//!
//! Internally the map stores an ordered set of breakpoints: `(key, value)`
//! pairs meaning "from `key` onwards, until the next breakpoint, the map
//! takes `value`". Before the first breakpoint the map takes its background
//! value.
//!
//! ### Runs
//!
//! A run is a maximal interval of keys over which the map is constant,
//! see [`IntervalMap::runs()`]. A map with `n` breakpoints has `n + 1`
//! runs.
//!
//! ### Canonical Form
//!
//! The breakpoints of an [`IntervalMap`] are always minimal: no breakpoint
//! has the same value as the one before it, and the first breakpoint never
//! has the background value. As a consequence two maps compare equal if and
//! only if they have the same background value and take the same value at
//! every key.
//!
//! The breakpoints are private, the only ways to change them are
//! [`IntervalMap::assign()`], which keeps the map canonical, and
//! [`IntervalMap::from_breakpoints()`], which canonicalises its input.
//!
//! ### Invalid Intervals
//!
//! Intervals are half-open: `assign(a, b, v)` changes every key `k` with
//! `a <= k < b`. If `!(a < b)` the interval contains no keys and `assign`
//! does nothing at all. This is not an error.
//!
//! ### Key Ordering
//!
//! Keys only need to be [`Ord`]. If the [`Ord`] implementation is not a
//! total order the behavior of the map is unspecified, it stays memory-safe
//! but may return wrong values or panic.
//!
//! ### Thread Safety
//!
//! [`IntervalMap::assign()`] takes `&mut self`, so it can never run
//! concurrently with another `assign` or with a lookup. The map is
//! [`Send`] and [`Sync`] whenever its keys and values are, to share one
//! between threads wrap it in a `Mutex` or `RwLock`.
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub(crate) mod utils;

pub mod map;
pub mod run;

pub use crate::map::IntervalMap;
pub use crate::run::{Run, Runs};
