use alloc::collections::BTreeMap;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::iter;

use itertools::Itertools;

pub(crate) fn starts_comp<K>() -> impl FnMut(&K, &K) -> Ordering
where
	K: Ord,
{
	|inner: &K, new: &K| new.cmp(inner)
}
/// Orders as a point just below `point`, for searching the last breakpoint
/// strictly before it.
pub(crate) fn before_comp<'a, K>(
	point: &'a K,
) -> impl FnMut(&K) -> Ordering + 'a
where
	K: Ord,
{
	move |inner: &K| {
		if point <= inner {
			Ordering::Less
		} else {
			Ordering::Greater
		}
	}
}
/// Orders as a point just above `point`, for searching the first breakpoint
/// strictly after it.
pub(crate) fn after_comp<'a, K, Q>(
	point: &'a Q,
) -> impl FnMut(&K) -> Ordering + 'a
where
	K: Borrow<Q> + 'a,
	Q: Ord + ?Sized,
{
	move |inner: &K| {
		if Borrow::<Q>::borrow(inner) <= point {
			Ordering::Greater
		} else {
			Ordering::Less
		}
	}
}

/// Drops every breakpoint that doesn't change the value in effect before it,
/// the first breakpoint being compared against `background`.
pub(crate) fn canonicalize<K, V>(
	background: &V,
	raw: BTreeMap<K, V>,
) -> BTreeMap<K, V>
where
	K: Ord,
	V: PartialEq,
{
	//after the skip only the first breakpoint of each equal-valued streak
	//survives the dedup, which is exactly the breakpoint that changes the
	//value
	raw.into_iter()
		.skip_while(|(_, value)| value == background)
		.dedup_by(|(_, previous), (_, next)| previous == next)
		.collect()
}

pub(crate) fn is_canonical<'a, K, V>(
	background: &'a V,
	breakpoints: impl Iterator<Item = (&'a K, &'a V)>,
) -> bool
where
	K: 'a,
	V: PartialEq + 'a,
{
	iter::once(background)
		.chain(breakpoints.map(|(_, value)| value))
		.tuple_windows::<(_, _)>()
		.all(|(previous, next)| previous != next)
}
