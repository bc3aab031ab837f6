// Copyright 2026 the plainset developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `PlainSet`: a hash set whose mutations report whether anything changed.
//! Elements are the keys of a `hashbrown::HashMap` with `()` values, so
//! only key presence carries information.

use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;

use ahash::RandomState;
use hashbrown::hash_map::IntoKeys;
use hashbrown::hash_map::Keys;
use hashbrown::HashMap;
use hashbrown::HashSet;

/// Borrowing iterator over the elements of a [`PlainSet`], in arbitrary order.
///
/// [`PlainSet`]: struct.PlainSet.html
pub type Iter<'a, T> = Keys<'a, T, ()>;

/// Owning iterator over the elements of a [`PlainSet`], in arbitrary order.
///
/// [`PlainSet`]: struct.PlainSet.html
pub type IntoIter<T> = IntoKeys<T, ()>;

/// An unordered collection of unique elements.
///
/// Elements must implement [`Eq`] and [`Hash`], usually via
/// `#[derive(PartialEq, Eq, Hash)]`, and the usual rule applies: two equal
/// elements must hash equally, and an element must not be mutated in a way
/// that changes its hash or equality while it is in the set.
///
/// Every mutation reports whether the membership actually changed:
/// [`insert`] and [`remove`] for a single element, and the bulk forms
/// [`insert_all`], [`remove_all`] and [`retain_all`] for a sequence. A bulk
/// call behaves exactly as if the single-element operation ran once per
/// input element; neither the final membership nor the returned flag
/// depends on the order the input is processed in. No operation can fail:
/// empty inputs are legal and leave the set untouched.
///
/// Iteration order is unspecified and may differ between two calls on the
/// same set; callers must not rely on it. The set performs no internal
/// synchronization, so sharing it across threads requires an external lock,
/// as usual for `&mut`-based mutation.
///
/// # Examples
///
/// ```
/// use plainset::plain_set::PlainSet;
///
/// let mut primes = PlainSet::new();
/// assert!(primes.insert_all(vec![2, 3, 5, 7]));
/// assert!(!primes.insert(5)); // already there
///
/// assert!(primes.contains_all(&[2, 7]));
///
/// // Keep only the odd ones.
/// assert!(primes.retain_all(&[3, 5, 7, 9]));
/// assert_eq!(primes.len(), 3);
/// assert!(!primes.contains(&9)); // retain never adds
/// ```
#[derive(Clone)]
pub struct PlainSet<T: Eq + Hash, S: BuildHasher = RandomState> {
    map: HashMap<T, (), S>,
}

impl<T: Eq + Hash> PlainSet<T, RandomState> {
    /// Creates an empty `PlainSet` with a randomly seeded default hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    /// let set: PlainSet<i32> = PlainSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn new() -> PlainSet<T, RandomState> {
        PlainSet { map: HashMap::with_hasher(RandomState::new()) }
    }
}

impl<T, S> PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    /// Creates an empty `PlainSet` which will use the given hasher to hash
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    /// use ahash::RandomState;
    ///
    /// let mut set = PlainSet::with_hasher(RandomState::new());
    /// set.insert(2);
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> PlainSet<T, S> {
        PlainSet { map: HashMap::with_hasher(hasher) }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut v = PlainSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// An iterator visiting all elements in arbitrary order.
    /// The iterator element type is `&'a T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    /// let mut set = PlainSet::new();
    /// set.insert(7);
    /// set.insert(22);
    ///
    /// // Will print in an arbitrary order.
    /// for x in set.iter() {
    ///     println!("{}", x);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<T> {
        self.map.keys()
    }

    /// Removes all elements. The set itself stays usable and keeps its
    /// identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut v = PlainSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Returns `true` if the set contains the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let set: PlainSet<_> = [1, 2, 3].iter().cloned().collect();
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns `true` if the set contains every given value. An empty
    /// input is vacuously true.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let set: PlainSet<_> = [1, 2, 3].iter().cloned().collect();
    /// assert_eq!(set.contains_all(&[1, 2]), true);
    /// assert_eq!(set.contains_all(&[1, 4]), false);
    /// assert_eq!(set.contains_all(&[] as &[i32]), true);
    /// ```
    pub fn contains_all<'a, I>(&self, values: I) -> bool
        where I: IntoIterator<Item = &'a T>,
              T: 'a
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was absent, `false` if it was already
    /// present (the set is unchanged in that case).
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut set = PlainSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Adds every given value to the set. Values already present, and
    /// duplicates within the input, are no-ops.
    ///
    /// Returns `true` if at least one value was newly inserted, so an
    /// empty input returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut set = PlainSet::new();
    /// set.insert(1);
    ///
    /// assert_eq!(set.insert_all(vec![1, 2]), true);
    /// assert_eq!(set.insert_all(vec![1, 2]), false);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert_all<I>(&mut self, values: I) -> bool
        where I: IntoIterator<Item = T>
    {
        let mut changed = false;
        for value in values {
            changed |= self.insert(value);
        }
        changed
    }

    /// Removes a value from the set. Returns `true` if the value was
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut set = PlainSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    /// Removes every given value from the set. Values not present are
    /// no-ops.
    ///
    /// Returns `true` if at least one value was removed, so an empty
    /// input returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut set: PlainSet<_> = [1, 2, 3].iter().cloned().collect();
    ///
    /// assert_eq!(set.remove_all(&[2, 3, 4]), true);
    /// assert_eq!(set.remove_all(&[2, 3, 4]), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove_all<'a, I>(&mut self, values: I) -> bool
        where I: IntoIterator<Item = &'a T>,
              T: 'a
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove(value);
        }
        changed
    }

    /// Retains only the values that appear in the given input: the set
    /// becomes the intersection of its current membership and the input.
    /// Input values that are not in the set are ignored, never added.
    ///
    /// Returns `true` if at least one value was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut set: PlainSet<_> = [1, 2, 3].iter().cloned().collect();
    ///
    /// assert_eq!(set.retain_all(&[2, 3, 4]), true);
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&4));
    /// assert_eq!(set.retain_all(&[2, 3, 4]), false);
    /// ```
    pub fn retain_all<'a, I>(&mut self, values: I) -> bool
        where I: IntoIterator<Item = &'a T>,
              T: 'a
    {
        // Hash the input once so the pass over the set is O(n).
        let keep: HashSet<&T, RandomState> = values.into_iter().collect();
        let len = self.map.len();
        self.map.retain(|value, _| keep.contains(value));
        len != self.map.len()
    }

    /// Returns a newly allocated `Vec` containing every element of the set
    /// exactly once, in arbitrary order. The order is not guaranteed to be
    /// the same across calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let set: PlainSet<_> = [1, 2, 3].iter().cloned().collect();
    /// let mut v = set.to_vec();
    /// v.sort();
    /// assert_eq!(v, vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }
}

impl<T, S> PartialEq for PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    /// Two sets are equal when they hold the same elements, regardless of
    /// iteration order or hasher state.
    fn eq(&self, other: &PlainSet<T, S>) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T, S> Eq for PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{}

impl<T, S> fmt::Debug for PlainSet<T, S>
    where T: Eq + Hash + fmt::Debug,
          S: BuildHasher
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> fmt::Display for PlainSet<T, S>
    where T: Eq + Hash + fmt::Debug,
          S: BuildHasher
{
    /// Renders the elements as a list, in the same arbitrary order
    /// [`to_vec`] would produce. Diagnostics only: the format is not
    /// stable and not meant to be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainset::plain_set::PlainSet;
    ///
    /// let mut set = PlainSet::new();
    /// set.insert(7);
    /// assert_eq!(set.to_string(), "[7]");
    /// ```
    ///
    /// [`to_vec`]: struct.PlainSet.html#method.to_vec
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S> Default for PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher + Default
{
    fn default() -> PlainSet<T, S> {
        PlainSet { map: HashMap::default() }
    }
}

impl<T, S> FromIterator<T> for PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher + Default
{
    /// Collects an iterator into a set; duplicates in the input collapse
    /// silently.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PlainSet<T, S> {
        let mut set = PlainSet::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|value| (value, ())));
    }
}

impl<'a, T, S> IntoIterator for &'a PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for PlainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator that moves each element out of the set
    /// in arbitrary order.
    fn into_iter(self) -> IntoIter<T> {
        self.map.into_keys()
    }
}

#[cfg(test)]
mod test_set {
    use super::PlainSet;
    use ahash::RandomState;

    #[test]
    fn test_insert_reports_change() {
        let mut s = PlainSet::new();
        assert!(s.insert(3));
        assert!(!s.insert(3));
        assert_eq!(s.len(), 1);
        assert!(s.contains(&3));
    }

    #[test]
    fn test_insert_all_reports_change() {
        let mut s = PlainSet::new();
        assert!(s.insert_all(vec![1, 2, 2, 3]));
        assert_eq!(s.len(), 3);

        // everything already present
        assert!(!s.insert_all(vec![1, 2, 3]));
        assert_eq!(s.len(), 3);

        // one newcomer is enough
        assert!(s.insert_all(vec![3, 4]));
        assert_eq!(s.len(), 4);

        assert!(!s.insert_all(std::iter::empty::<i32>()));
    }

    #[test]
    fn test_insert_all_matches_single_inserts() {
        let mut bulk = PlainSet::new();
        bulk.insert_all(vec![7, 3]);

        let mut one_by_one = PlainSet::new();
        one_by_one.insert(3);
        one_by_one.insert(7);

        assert_eq!(bulk, one_by_one);
    }

    #[test]
    fn test_remove_reports_change() {
        let mut s = PlainSet::new();
        s.insert(1);
        assert!(s.remove(&1));
        assert!(!s.remove(&1));
        assert!(!s.contains(&1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_remove_all_reports_change() {
        let mut s: PlainSet<i32> = [1, 2, 3].iter().cloned().collect();
        assert!(!s.remove_all(&[4, 5]));
        assert_eq!(s.len(), 3);

        assert!(s.remove_all(&[2, 4]));
        assert_eq!(s.len(), 2);

        assert!(!s.remove_all(&[] as &[i32]));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_retain_all_is_intersection() {
        let mut s: PlainSet<i32> = [1, 2, 3].iter().cloned().collect();
        assert!(s.retain_all(&[2, 3, 4]));
        let expected: PlainSet<i32> = [2, 3].iter().cloned().collect();
        assert_eq!(s, expected);
        // 4 was only in the argument; it must not appear.
        assert!(!s.contains(&4));
    }

    #[test]
    fn test_retain_all_no_change() {
        let mut s: PlainSet<i32> = [1, 2].iter().cloned().collect();
        assert!(!s.retain_all(&[1, 2, 3]));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_retain_all_empty_keep_clears() {
        let mut s: PlainSet<i32> = [1, 2].iter().cloned().collect();
        assert!(s.retain_all(&[] as &[i32]));
        assert!(s.is_empty());

        let mut empty = PlainSet::<i32>::new();
        assert!(!empty.retain_all(&[] as &[i32]));
    }

    #[test]
    fn test_contains_all() {
        let s: PlainSet<i32> = [1, 2, 3].iter().cloned().collect();
        assert!(s.contains_all(&[1, 3]));
        assert!(!s.contains_all(&[1, 4]));
        assert!(s.contains_all(&[] as &[i32]));

        let empty = PlainSet::<i32>::new();
        assert!(empty.contains_all(&[] as &[i32]));
        assert!(!empty.contains_all(&[1]));
    }

    #[test]
    fn test_clear() {
        let mut s: PlainSet<i32> = (0..10).collect();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);

        // the cleared set is still usable
        assert!(s.insert(1));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_len_matches_to_vec() {
        let mut s = PlainSet::new();
        for i in 0..50 {
            s.insert(i % 7);
            assert_eq!(s.len(), s.to_vec().len());
        }
        assert_eq!(s.len(), 7);
    }

    #[test]
    fn test_iterate() {
        let mut a = PlainSet::new();
        for i in 0..32 {
            assert!(a.insert(i));
        }
        let mut observed: u32 = 0;
        for k in &a {
            observed |= 1 << *k;
        }
        assert_eq!(observed, 0xFFFF_FFFF);
    }

    #[test]
    fn test_from_iter_dedups() {
        let set: PlainSet<_> = [1, 2, 2, 3, 1].iter().cloned().collect();
        assert_eq!(set.len(), 3);
        for x in &[1, 2, 3] {
            assert!(set.contains(x));
        }
    }

    #[test]
    fn test_move_iter() {
        let ps = {
            let mut ps = PlainSet::new();

            ps.insert('a');
            ps.insert('b');

            ps
        };

        let v = ps.into_iter().collect::<Vec<char>>();
        assert!(v == ['a', 'b'] || v == ['b', 'a']);
    }

    #[test]
    fn test_eq() {
        let mut s1 = PlainSet::new();

        s1.insert(1);
        s1.insert(2);
        s1.insert(3);

        let mut s2 = PlainSet::new();

        s2.insert(1);
        s2.insert(2);

        assert!(s1 != s2);

        s2.insert(3);

        assert_eq!(s1, s2);
    }

    #[test]
    fn test_show() {
        let mut set = PlainSet::new();
        let empty = PlainSet::<i32>::new();

        set.insert(1);
        set.insert(2);

        let set_str = format!("{:?}", set);

        assert!(set_str == "{1, 2}" || set_str == "{2, 1}");
        assert_eq!(format!("{:?}", empty), "{}");
    }

    #[test]
    fn test_display() {
        let mut set = PlainSet::new();
        let empty = PlainSet::<i32>::new();

        set.insert(1);
        set.insert(2);

        let set_str = format!("{}", set);

        assert!(set_str == "[1, 2]" || set_str == "[2, 1]");
        assert_eq!(format!("{}", empty), "[]");
    }

    #[test]
    fn test_non_copy_elements() {
        let mut s = PlainSet::new();
        assert!(s.insert("alpha".to_string()));
        assert!(!s.insert("alpha".to_string()));
        assert!(s.insert_all(vec!["beta".to_string(), "gamma".to_string()]));
        assert!(s.remove_all(&["alpha".to_string(), "delta".to_string()]));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_custom_hasher() {
        let mut s = PlainSet::with_hasher(RandomState::with_seeds(1, 2, 3, 4));
        assert!(s.insert_all(vec![1, 2, 3]));
        assert!(s.contains_all(&[1, 2, 3]));
        assert!(s.remove_all(&[3]));
        assert_eq!(s.len(), 2);
    }
}
