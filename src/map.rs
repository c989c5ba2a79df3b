//! A module containing [`IntervalMap`].

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::Range;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;

use crate::utils::{
	after_comp, before_comp, canonicalize, is_canonical, starts_comp,
};
use crate::{Run, Runs};

/// A total map from an ordered key space to values, stored as a canonical
/// set of breakpoints in a [`BTreeMap`].
///
/// `K` is the generic type parameter for the [`Ord`] key type.
///
/// `V` is the generic type parameter for the values of the map, it is only
/// ever compared using [`PartialEq`].
///
/// Every key has a value: the value of the greatest breakpoint at or before
/// it, or the background value if there is no such breakpoint.
///
/// # Examples
/// ```
/// use cimap::IntervalMap;
///
/// let mut map = IntervalMap::new('?');
///
/// map.assign(4, 8, 'a');
/// map.assign(8, 12, 'b');
///
/// assert_eq!(map.get(&0), &'?');
/// assert_eq!(map.get(&4), &'a');
/// assert_eq!(map.get(&11), &'b');
/// assert_eq!(map.get(&12), &'?');
///
/// // Iterate over the breakpoints of the map
/// for (key, value) in map.iter() {
/// 	println!("{key:?} -> {value:?}");
/// }
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
	background: V,
	pub(crate) inner: BTreeMap<K, V>,
}

impl<K, V> IntervalMap<K, V>
where
	K: Ord,
{
	/// Returns a reference to the value the map takes at the given key.
	///
	/// This is the value of the greatest breakpoint whose key is less than
	/// or equal to `key`, or the background value if there is none.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let map = IntervalMap::from_breakpoints('?', [(4, 'a'), (8, 'b')]);
	///
	/// assert_eq!(map.get(&3), &'?');
	/// assert_eq!(map.get(&4), &'a');
	/// assert_eq!(map.get(&7), &'a');
	/// assert_eq!(map.get(&100), &'b');
	/// ```
	pub fn get<Q>(&self, key: &Q) -> &V
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.inner
			.range(
				|_: &K| Ordering::Less,
				SearchBoundCustom::Included,
				|inner: &K| key.cmp(Borrow::<Q>::borrow(inner)),
				SearchBoundCustom::Included,
			)
			.next_back()
			.map_or(&self.background, |(_, value)| value)
	}

	/// Returns the [`Run`] containing the given key.
	///
	/// # Examples
	/// ```
	/// use cimap::{IntervalMap, Run};
	///
	/// let map = IntervalMap::from_breakpoints('?', [(4, 'a'), (8, 'b')]);
	///
	/// assert_eq!(
	/// 	map.run_at(&5),
	/// 	Run {
	/// 		start: Some(&4),
	/// 		end: Some(&8),
	/// 		value: &'a',
	/// 	}
	/// );
	/// assert_eq!(
	/// 	map.run_at(&0),
	/// 	Run {
	/// 		start: None,
	/// 		end: Some(&4),
	/// 		value: &'?',
	/// 	}
	/// );
	/// ```
	pub fn run_at<Q>(&self, key: &Q) -> Run<&K, &V>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		let before = self
			.inner
			.range(
				|_: &K| Ordering::Less,
				SearchBoundCustom::Included,
				|inner: &K| key.cmp(Borrow::<Q>::borrow(inner)),
				SearchBoundCustom::Included,
			)
			.next_back();
		let after = self
			.inner
			.range(
				after_comp(key),
				SearchBoundCustom::Included,
				|_: &K| Ordering::Greater,
				SearchBoundCustom::Included,
			)
			.next();

		Run {
			start: before.map(|(start, _)| start),
			end: after.map(|(end, _)| end),
			value: before.map_or(&self.background, |(_, value)| value),
		}
	}

	/// Allocates an `IntervalMap` with the given background value and
	/// loads the given breakpoints into it.
	///
	/// The breakpoints may come in any order, if a key is given more than
	/// once the last value given for it is used. Breakpoints which do not
	/// change the value of the map are dropped, so the resulting map is
	/// always in canonical form.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let map = IntervalMap::from_breakpoints(
	/// 	'?',
	/// 	[(8, 'b'), (2, '?'), (4, 'a'), (6, 'a'), (12, 'b')],
	/// );
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(&4, &'a'), (&8, &'b')]
	/// );
	/// ```
	pub fn from_breakpoints(
		background: V,
		breakpoints: impl IntoIterator<Item = (K, V)>,
	) -> Self
	where
		V: PartialEq,
	{
		let mut raw = alloc::collections::BTreeMap::new();
		raw.extend(breakpoints);

		let mut inner = BTreeMap::new();
		for (key, value) in canonicalize(&background, raw) {
			inner.insert(key, value, starts_comp());
		}
		debug_assert!(is_canonical(&background, inner.iter()));

		IntervalMap { background, inner }
	}
}

impl<K, V> IntervalMap<K, V>
where
	K: Ord,
	V: Clone + PartialEq,
{
	/// Sets the value of the map to `value` for every key in the
	/// half-open interval `key_begin..key_end`, the values of all other keys
	/// are left unchanged.
	///
	/// If `!(key_begin < key_end)` the interval is empty and the map is not
	/// modified.
	///
	/// Only breakpoints with keys in `key_begin..=key_end` are inserted,
	/// removed or overwritten. Afterwards the map is still in canonical form:
	/// a new breakpoint is only added at either end if the value in effect
	/// on the other side of that end differs from `value`.
	///
	/// # Panic Safety
	///
	/// Every value needed is compared and cloned before the map is modified,
	/// so a panic in `V::clone()` or `V::eq()` leaves the map as it was. A
	/// panic in `K::cmp()` while the map is being modified may leave it with
	/// redundant breakpoints.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let mut map =
	/// 	IntervalMap::from_breakpoints('?', [(4, 'a'), (8, 'b'), (12, 'c')]);
	///
	/// map.assign(0, 2, '!');
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(&0, &'!'), (&2, &'?'), (&4, &'a'), (&8, &'b'), (&12, &'c')]
	/// );
	///
	/// // The run starting at 4 swallows the breakpoint at 8
	/// map.assign(6, 10, 'a');
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(&0, &'!'), (&2, &'?'), (&4, &'a'), (&10, &'b'), (&12, &'c')]
	/// );
	///
	/// // Empty intervals do nothing
	/// map.assign(5, 5, 'z');
	/// map.assign(9, 1, 'z');
	/// assert_eq!(map.len(), 5);
	/// ```
	pub fn assign(&mut self, key_begin: K, key_end: K, value: V) {
		if !(key_begin < key_end) {
			return;
		}

		let left_absorbs = *self.value_before(&key_begin) == value;
		let right_value = self.get(&key_end);
		let right_edge = (*right_value != value).then(|| right_value.clone());

		{
			let mut cursor = self.inner.lower_bound_mut(
				|inner: &K| key_begin.cmp(inner),
				SearchBoundCustom::Included,
			);

			while cursor.key().is_some_and(|key| *key < key_end) {
				let _ = cursor.remove_current();
			}

			//the cursor now sits on the first breakpoint at or after key_end
			let on_key_end = cursor.key().is_some_and(|key| !(key_end < *key));

			if !left_absorbs {
				cursor.insert_before(key_begin, value);
			}

			match (right_edge, on_key_end) {
				(Some(right_value), false) => {
					cursor.insert_before(key_end, right_value);
				}
				(None, true) => {
					let _ = cursor.remove_current();
				}
				//an existing breakpoint at key_end already carries
				//right_value
				(Some(_), true) | (None, false) => {}
			}
		}

		#[cfg(test)]
		self.assert_invariants();
	}

	/// Sets the value of the map to `value` for every key in the given
	/// range. See [`IntervalMap::assign()`] for more details.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let mut map = IntervalMap::new(0_u8);
	///
	/// map.assign_range(10..20, 1);
	///
	/// assert_eq!(map.get(&9), &0);
	/// assert_eq!(map.get(&10), &1);
	/// assert_eq!(map.get(&20), &0);
	/// ```
	pub fn assign_range(&mut self, range: Range<K>, value: V) {
		self.assign(range.start, range.end, value);
	}

	fn value_before(&self, key: &K) -> &V {
		self.inner
			.range(
				|_: &K| Ordering::Less,
				SearchBoundCustom::Included,
				before_comp(key),
				SearchBoundCustom::Included,
			)
			.next_back()
			.map_or(&self.background, |(_, value)| value)
	}
}

impl<K, V> IntervalMap<K, V> {
	/// Makes a new `IntervalMap` which takes the given background value at
	/// every key.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let map: IntervalMap<u32, bool> = IntervalMap::new(false);
	///
	/// assert_eq!(map.get(&7), &false);
	/// assert!(map.is_empty());
	/// ```
	pub fn new(background: V) -> Self {
		IntervalMap {
			background,
			inner: BTreeMap::new(),
		}
	}

	/// Returns the value the map takes at every key before its first
	/// breakpoint.
	pub fn background(&self) -> &V {
		&self.background
	}

	/// Returns the number of breakpoints in the map.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let mut map = IntervalMap::new('?');
	///
	/// assert_eq!(map.len(), 0);
	/// map.assign(0, 1, 'a');
	/// assert_eq!(map.len(), 2);
	/// ```
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the map has no breakpoints, that is if it takes
	/// its background value at every key.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let mut map = IntervalMap::new('?');
	///
	/// assert_eq!(map.is_empty(), true);
	/// map.assign(0, 1, 'a');
	/// assert_eq!(map.is_empty(), false);
	/// map.assign(0, 1, '?');
	/// assert_eq!(map.is_empty(), true);
	/// ```
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every breakpoint in the map in ascending
	/// order.
	///
	/// This is meant for testing and debugging, use [`IntervalMap::runs()`]
	/// to walk over the intervals of the map.
	///
	/// # Examples
	/// ```
	/// use cimap::IntervalMap;
	///
	/// let mut map = IntervalMap::new('?');
	/// map.assign(4, 8, 'a');
	///
	/// let mut iter = map.iter();
	///
	/// assert_eq!(iter.next(), Some((&4, &'a')));
	/// assert_eq!(iter.next(), Some((&8, &'?')));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
		self.inner.iter()
	}

	/// Returns an iterator over every [`Run`] of the map in ascending
	/// order.
	///
	/// There is always one more run than there are breakpoints, the first
	/// run is unbounded below and the last run is unbounded above.
	///
	/// # Examples
	/// ```
	/// use cimap::{IntervalMap, Run};
	///
	/// let mut map = IntervalMap::new('?');
	/// map.assign(4, 8, 'a');
	///
	/// assert_eq!(
	/// 	map.runs().collect::<Vec<_>>(),
	/// 	[
	/// 		Run {
	/// 			start: None,
	/// 			end: Some(&4),
	/// 			value: &'?',
	/// 		},
	/// 		Run {
	/// 			start: Some(&4),
	/// 			end: Some(&8),
	/// 			value: &'a',
	/// 		},
	/// 		Run {
	/// 			start: Some(&8),
	/// 			end: None,
	/// 			value: &'?',
	/// 		},
	/// 	]
	/// );
	/// ```
	pub fn runs(&self) -> Runs<'_, K, V> {
		Runs::new(self)
	}

	/// Returns the first breakpoint in the map, if any.
	pub fn first_key_value(&self) -> Option<(&K, &V)>
	where
		K: Ord,
	{
		self.inner.first_key_value()
	}

	/// Returns the last breakpoint in the map, if any.
	pub fn last_key_value(&self) -> Option<(&K, &V)>
	where
		K: Ord,
	{
		self.inner.last_key_value()
	}
}

#[cfg(test)]
impl<K, V> IntervalMap<K, V>
where
	V: PartialEq,
{
	pub(crate) fn assert_invariants(&self) {
		assert!(
			is_canonical(&self.background, self.inner.iter()),
			"map is not in canonical form"
		);
	}
}

// Trait Impls ==========================

impl<K, V> IntoIterator for IntervalMap<K, V> {
	type Item = (K, V);
	type IntoIter = IntoIter<K, V>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_iter(),
		}
	}
}
/// An owning iterator over the breakpoints of an [`IntervalMap`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalMap`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<K, V> {
	inner: BTreeMapIntoIter<K, V>,
}
impl<K, V> Iterator for IntoIter<K, V> {
	type Item = (K, V);
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}
impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}

impl<K, V> Default for IntervalMap<K, V>
where
	V: Default,
{
	fn default() -> Self {
		IntervalMap::new(V::default())
	}
}

impl<K, V> Extend<(Range<K>, V)> for IntervalMap<K, V>
where
	K: Ord,
	V: Clone + PartialEq,
{
	fn extend<T: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: T) {
		for (range, value) in iter {
			self.assign_range(range, value);
		}
	}
}
