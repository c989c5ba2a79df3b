//! A module containing [`Run`] and the [`Runs`] iterator.

use core::borrow::Borrow;
use core::mem;

use btree_monstrousity::btree_map;

use crate::IntervalMap;

/// A maximal piece of an [`IntervalMap`]'s key space over which the map is
/// constant.
///
/// `start` is inclusive and `end` is exclusive, a `None` on either side means
/// the run is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<K, V> {
	/// The inclusive start of the run, `None` if it is unbounded below.
	pub start: Option<K>,
	/// The exclusive end of the run, `None` if it is unbounded above.
	pub end: Option<K>,
	/// The value of the map over the whole run.
	pub value: V,
}

impl<K, V> Run<K, V> {
	/// Returns `true` if the given point lies within the run.
	///
	/// # Examples
	/// ```
	/// use cimap::Run;
	///
	/// let run = Run {
	/// 	start: Some(4_u32),
	/// 	end: None,
	/// 	value: 'a',
	/// };
	///
	/// assert_eq!(run.contains(&3_u32), false);
	/// assert_eq!(run.contains(&4_u32), true);
	/// assert_eq!(run.contains(&100_u32), true);
	/// ```
	pub fn contains<Q>(&self, point: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		!self
			.start
			.as_ref()
			.is_some_and(|start| point < Borrow::<Q>::borrow(start))
			&& !self
				.end
				.as_ref()
				.is_some_and(|end| Borrow::<Q>::borrow(end) <= point)
	}
}

/// An iterator over the [`Run`]s of an [`IntervalMap`] in ascending order.
///
/// This `struct` is created by [`IntervalMap::runs()`]. See its
/// documentation for more.
#[derive(Clone)]
pub struct Runs<'a, K, V> {
	state: Option<RunsState<'a, K, V>>,
}

#[derive(Clone)]
struct RunsState<'a, K, V> {
	start: Option<&'a K>,
	value: &'a V,
	breakpoints: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Runs<'a, K, V> {
	pub(crate) fn new(map: &'a IntervalMap<K, V>) -> Self {
		Runs {
			state: Some(RunsState {
				start: None,
				value: map.background(),
				breakpoints: map.inner.iter(),
			}),
		}
	}
}

impl<'a, K, V> Iterator for Runs<'a, K, V> {
	type Item = Run<&'a K, &'a V>;

	fn next(&mut self) -> Option<Self::Item> {
		let state = self.state.as_mut()?;

		match state.breakpoints.next() {
			Some((key, value)) => Some(Run {
				start: mem::replace(&mut state.start, Some(key)),
				end: Some(key),
				value: mem::replace(&mut state.value, value),
			}),
			None => {
				let last = Run {
					start: state.start,
					end: None,
					value: state.value,
				};
				self.state = None;
				Some(last)
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.state {
			Some(state) => {
				let (lower, upper) = state.breakpoints.size_hint();
				(lower + 1, upper.map(|upper| upper + 1))
			}
			None => (0, Some(0)),
		}
	}
}

impl<K, V> ExactSizeIterator for Runs<'_, K, V> {}

impl<K, V> core::iter::FusedIterator for Runs<'_, K, V> {}

#[cfg(test)]
mod tests {
	use alloc::vec;
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;

	fn run<'a>(
		start: Option<&'a i8>,
		end: Option<&'a i8>,
		value: &'a char,
	) -> Run<&'a i8, &'a char> {
		Run { start, end, value }
	}

	#[test]
	fn empty_map_is_one_run() {
		let map: IntervalMap<i8, char> = IntervalMap::new('?');

		assert_eq!(map.runs().collect::<Vec<_>>(), [run(None, None, &'?')]);
		assert_eq!(map.runs().len(), 1);
	}

	#[test]
	fn runs_tile_the_key_space() {
		let map: IntervalMap<i8, char> = IntervalMap::from_breakpoints(
			'?',
			[(4, 'a'), (8, 'b'), (12, 'c')],
		);

		let runs = map.runs().collect::<Vec<_>>();
		assert_eq!(
			runs,
			vec![
				run(None, Some(&4), &'?'),
				run(Some(&4), Some(&8), &'a'),
				run(Some(&8), Some(&12), &'b'),
				run(Some(&12), None, &'c'),
			]
		);

		for point in i8::MIN..=i8::MAX {
			let containing = runs
				.iter()
				.filter(|run| run.contains(&point))
				.collect::<Vec<_>>();
			assert_eq!(containing.len(), 1);
			assert_eq!(containing[0].value, map.get(&point));
		}
	}

	#[test]
	fn size_hint_counts_down() {
		let map: IntervalMap<i8, char> =
			IntervalMap::from_breakpoints('?', [(1, 'a'), (2, 'b')]);

		let mut runs = map.runs();
		assert_eq!(runs.len(), 3);
		runs.next();
		assert_eq!(runs.len(), 2);
		runs.next();
		runs.next();
		assert_eq!(runs.len(), 0);
		assert_eq!(runs.next(), None);
	}

	#[test]
	fn contains_tests() {
		let bounded = Run {
			start: Some(2_i8),
			end: Some(5_i8),
			value: (),
		};
		assert!(!bounded.contains(&1_i8));
		assert!(bounded.contains(&2_i8));
		assert!(bounded.contains(&4_i8));
		assert!(!bounded.contains(&5_i8));

		let below = Run {
			start: None,
			end: Some(0_i8),
			value: (),
		};
		assert!(below.contains(&i8::MIN));
		assert!(!below.contains(&0_i8));
	}
}
