//! A double-ended queue with a unique constraint enforced by a `HashSet`.
//!
//! As with the `HashSet` type, a `UniqueDeque` requires that the elements
//! implement the `Eq` and `Hash` traits. This can frequently be achieved by
//! using `#[derive(PartialEq, Eq, Hash)]`. If you implement these yourself,
//! it is important that the following property holds:
//!
//! ```text
//! k1 == k2 -> hash(k1) == hash(k2)
//! ```
//!
//! In other words, if two keys are equal, their hashes must be equal.
//!
//!
//! It is a logic error for an item to be modified in such a way that the
//! item's hash, as determined by the `Hash` trait, or its equality, as
//! determined by the `Eq` trait, changes while it is in the deque. This is
//! normally only possible through `Cell`, `RefCell`, global state, I/O, or
//! unsafe code.
//!
//! The `UniqueDeque` allows pushing and popping elements at either end
//! in amortized constant time. Positions are plain `usize` offsets from the
//! front, with `len()` acting as the end position.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::hash_map::RandomState;
use std::collections::{vec_deque, HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Bound, Index, RangeBounds};

use log::{debug, trace};

use crate::error::{Error, Result};

/// A double-ended queue that keeps every element at most once.
///
/// Internally the deque is made of two stores that are always updated
/// together: a `VecDeque` holding the elements in order and a `HashSet`
/// holding the same elements for constant time membership checks. Every
/// mutation first asks the set whether the element is new and only then
/// touches the sequence.
///
/// The hashing strategy can be swapped through the `S` type parameter, in
/// the same way as for `HashSet`.
///
/// # Examples
///
/// ```
/// use containerofunique_collections::UniqueDeque;
///
/// let mut deque: UniqueDeque<_> = [1, 2, 2, 3, 3, 4].into_iter().collect();
/// assert_eq!(deque.len(), 4);
///
/// assert!(deque.push_front(0));
/// assert!(!deque.push_back(2));
///
/// let elements: Vec<_> = deque.iter().copied().collect();
/// assert_eq!(elements, [0, 1, 2, 3, 4]);
/// ```
pub struct UniqueDeque<T, S = RandomState> {
    deque: VecDeque<T>,
    set: HashSet<T, S>,
}

/// An iterator over the elements of a `UniqueDeque`.
///
/// This `struct` is created by the [`iter`] method on [`UniqueDeque`]. See its
/// documentation for more.
///
/// [`iter`]: struct.UniqueDeque.html#method.iter
/// [`UniqueDeque`]: struct.UniqueDeque.html
#[derive(Clone, Debug)]
pub struct Iter<'a, T: 'a> {
    iter: vec_deque::Iter<'a, T>,
}

/// An owning iterator over the elements of a `UniqueDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`UniqueDeque`][`UniqueDeque`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: struct.UniqueDeque.html#method.into_iter
/// [`UniqueDeque`]: struct.UniqueDeque.html
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    iter: vec_deque::IntoIter<T>,
}

impl<T> UniqueDeque<T, RandomState> {
    /// Creates an empty `UniqueDeque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let deque: UniqueDeque<u32> = UniqueDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty `UniqueDeque` with space for at least `capacity` elements
    /// in both stores.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> UniqueDeque<T, S> {
    /// Creates an empty `UniqueDeque` which will use the given hash builder to
    /// hash its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::hash_map::RandomState;
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::with_hasher(RandomState::new());
    /// deque.push_back(2);
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        UniqueDeque {
            deque: VecDeque::new(),
            set: HashSet::with_hasher(hasher),
        }
    }

    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        UniqueDeque {
            deque: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns a reference to the deque's `BuildHasher`.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.set.hasher()
    }

    /// Read-only view of the sequence store.
    #[inline]
    pub fn deque(&self) -> &VecDeque<T> {
        &self.deque
    }

    /// Read-only view of the membership index. Its iteration order is
    /// unrelated to the order of the deque.
    #[inline]
    pub fn set(&self) -> &HashSet<T, S> {
        &self.set
    }

    /// Provides a front-to-back iterator. Use `.rev()` for the reverse order.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let deque = UniqueDeque::from([0, 1, 2]);
    ///
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    ///
    /// let reversed: Vec<_> = deque.iter().rev().collect();
    /// assert_eq!(reversed, [&2, &1, &0]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.deque.iter(),
        }
    }

    /// Returns `true` if the `UniqueDeque` is empty.
    ///
    /// This operation should compute in O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_front("foo");
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of elements in the `UniqueDeque`.
    ///
    /// This operation should compute in O(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Provides a reference to the front element, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::new();
    /// assert_eq!(deque.front(), None);
    ///
    /// deque.push_front(1);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.deque.front()
    }

    /// Provides a reference to the back element, or `None` if the deque is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.deque.back()
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.deque.get(index)
    }

    /// Returns the element at `index`, failing with [`Error::OutOfRange`] if
    /// `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::{Error, UniqueDeque};
    ///
    /// let deque = UniqueDeque::from(['a', 'b']);
    /// assert_eq!(deque.at(1), Ok(&'b'));
    /// assert_eq!(deque.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.deque.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.deque.len(),
        })
    }

    /// Removes all elements from the `UniqueDeque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from([1, 2]);
    /// deque.clear();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.deque.clear();
        self.set.clear();
    }

    /// Exchanges the contents of two deques, including their hashers.
    ///
    /// This operation computes in O(1) time and never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T, S> UniqueDeque<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the `UniqueDeque` contains an element equal to the
    /// given value.
    ///
    /// This only consults the membership index and computes in amortized
    /// O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let deque = UniqueDeque::from([String::from("apple")]);
    ///
    /// assert!(deque.contains("apple"));
    /// assert!(!deque.contains("pear"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.contains(x)
    }

    /// Returns the position of the element equal to the given value, or
    /// `None` if there is no such element.
    ///
    /// Misses are answered by the membership index alone. Hits require a
    /// scan of the sequence to locate the position.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let deque = UniqueDeque::from([10, 20, 30]);
    /// assert_eq!(deque.find(&20), Some(1));
    /// assert_eq!(deque.find(&40), None);
    /// ```
    pub fn find<Q>(&self, x: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.set.contains(x) {
            return None;
        }
        self.deque.iter().position(|elt| elt.borrow() == x)
    }

    /// Removes and returns the element equal to the
    /// given value if present, otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from([0]);
    ///
    /// assert_eq!(deque.remove(&0), Some(0));
    /// assert_eq!(deque.remove(&10), None);
    /// ```
    pub fn remove<Q>(&mut self, x: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(x)?;
        self.set.remove(x);
        self.deque.remove(pos)
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// This operation should compute in amortized O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut d = UniqueDeque::new();
    /// assert_eq!(d.pop_front(), None);
    ///
    /// d.push_front(1);
    /// d.push_front(3);
    /// assert_eq!(d.pop_front(), Some(3));
    /// assert_eq!(d.pop_front(), Some(1));
    /// assert_eq!(d.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let elt = self.deque.pop_front()?;
        self.set.remove(&elt);
        Some(elt)
    }

    /// Removes the last element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// This operation should compute in amortized O(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        let elt = self.deque.pop_back()?;
        self.set.remove(&elt);
        Some(elt)
    }

    /// Removes the element at `pos` and returns the position of the element
    /// that follows it, which is `pos` itself (or `len()` if the removed
    /// element was the last one).
    ///
    /// Erasing from an empty deque, or at a position past the last element,
    /// does nothing and returns `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from([1, 2, 3]);
    /// assert_eq!(deque.erase(0), 0);
    /// assert_eq!(deque.front(), Some(&2));
    ///
    /// let mut empty: UniqueDeque<i32> = UniqueDeque::new();
    /// assert_eq!(empty.erase(0), 0);
    /// ```
    pub fn erase(&mut self, pos: usize) -> usize {
        match self.deque.remove(pos) {
            Some(elt) => {
                self.set.remove(&elt);
                pos
            }
            None => self.deque.len(),
        }
    }

    /// Removes the elements in the given range and returns the position
    /// following the removed range.
    ///
    /// An empty range removes nothing and returns its end bound.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from([1, 2, 3, 4, 5]);
    /// assert_eq!(deque.erase_range(1..3), 1);
    /// assert_eq!(deque, UniqueDeque::from([1, 4, 5]));
    ///
    /// assert_eq!(deque.erase_range(..), 0);
    /// assert!(deque.is_empty());
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end + 1,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.deque.len(),
        };

        let set = &mut self.set;
        let mut num_removed = 0usize;
        for elt in self.deque.drain(start..end) {
            set.remove(&elt);
            num_removed += 1;
        }

        if num_removed > 0 {
            debug!(start, num_removed, "Erased range");
        }
        start
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, removes all elements `e` for which `f(&e)` returns
    /// `false`. The predicate is called exactly once per element, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from([1, 2, 3, 4]);
    /// deque.retain(|&x| x % 2 == 0);
    /// assert_eq!(deque, UniqueDeque::from([2, 4]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.deque.len();
        // The predicate runs before either store is touched, so a panicking
        // predicate leaves both of them unchanged.
        let keep: Vec<bool> = self.deque.iter().map(&mut f).collect();

        let set = &mut self.set;
        let mut keep = keep.into_iter();
        self.deque.retain(|elt| {
            let kept = keep.next().unwrap_or(true);
            if !kept {
                set.remove(elt);
            }
            kept
        });

        let num_removed = len - self.deque.len();
        if num_removed > 0 {
            debug!(num_removed, "Retained elements");
        }
    }

    /// Reserves capacity for at least `additional` more elements in both
    /// stores.
    pub fn reserve(&mut self, additional: usize) {
        self.deque.reserve(additional);
        self.set.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.deque.shrink_to_fit();
        self.set.shrink_to_fit();
    }

    /// Checks that the sequence and the membership index agree: both hold
    /// the same number of elements, every element of the sequence is in the
    /// index, and no element appears twice in the sequence.
    pub fn verify(&self) -> bool {
        if self.deque.len() != self.set.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.deque.len());
        self.deque
            .iter()
            .all(|elt| seen.insert(elt) && self.set.contains(elt))
    }
}

impl<T, S> UniqueDeque<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Records `elt` in the membership index if it is not there yet.
    /// Callers must put `elt` into the sequence iff this returns `true`.
    fn register(&mut self, elt: &T) -> bool {
        if self.set.contains(elt) {
            return false;
        }
        self.set.insert(elt.clone());
        true
    }

    /// Adds an element first in the deque if it is not yet present.
    /// Returns whether the element was inserted.
    ///
    /// This operation should compute in amortized O(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::new();
    ///
    /// assert!(deque.push_front(2));
    /// assert!(deque.push_front(1));
    /// assert!(!deque.push_front(2));
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) -> bool {
        if !self.register(&elt) {
            trace!("Rejected duplicate at front");
            return false;
        }
        self.deque.push_front(elt);
        true
    }

    /// Appends an element to the back of the deque if it is not yet present.
    /// Returns whether the element was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut d = UniqueDeque::new();
    /// assert!(d.push_back(1));
    /// assert!(d.push_back(3));
    /// assert!(!d.push_back(1));
    /// assert_eq!(d.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) -> bool {
        if !self.register(&elt) {
            trace!("Rejected duplicate at back");
            return false;
        }
        self.deque.push_back(elt);
        true
    }

    /// Inserts `elt` at `pos` if it is not yet present.
    ///
    /// Returns `(pos, true)` if the element was inserted, in which case it now
    /// lives at `pos`. Returns `(pos, false)` and leaves the deque untouched
    /// if an equal element already exists.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is greater than the deque's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from(["hello", "world"]);
    /// assert_eq!(deque.insert(1, "goodbye"), (1, true));
    /// assert_eq!(deque.insert(3, "hello"), (3, false));
    /// assert_eq!(deque, UniqueDeque::from(["hello", "goodbye", "world"]));
    /// ```
    pub fn insert(&mut self, pos: usize, elt: T) -> (usize, bool) {
        let len = self.deque.len();
        assert!(
            pos <= len,
            "insertion position (is {pos}) should be <= len (is {len})"
        );

        if !self.register(&elt) {
            trace!(pos, "Rejected duplicate insert");
            return (pos, false);
        }
        self.deque.insert(pos, elt);
        (pos, true)
    }

    /// Inserts the elements of `iter` at `pos`, keeping their relative order
    /// and skipping every element that is already present, including
    /// elements that repeat earlier ones from the same iterator.
    ///
    /// The insertion point advances past each accepted element. Returns the
    /// position of the first inserted element, or `pos` if nothing was
    /// inserted. Both coincide since the first accepted element always lands
    /// on `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is greater than the deque's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from(["hello", "world"]);
    /// let pos = deque.insert_iter(0, ["good", "world", "morning", "good"]);
    /// assert_eq!(pos, 0);
    /// assert_eq!(deque, UniqueDeque::from(["good", "morning", "hello", "world"]));
    /// ```
    pub fn insert_iter<I>(&mut self, pos: usize, iter: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.deque.len();
        assert!(
            pos <= len,
            "insertion position (is {pos}) should be <= len (is {len})"
        );

        let mut at = pos;
        let mut num_skipped = 0usize;
        for elt in iter {
            if self.register(&elt) {
                self.deque.insert(at, elt);
                at += 1;
            } else {
                num_skipped += 1;
            }
        }

        debug!(
            pos,
            num_inserted = at - pos,
            num_skipped,
            "Inserted elements"
        );
        pos
    }

    /// Builds an element from `args` and inserts it at `pos` if it is not yet
    /// present. The candidate is checked against the membership index before
    /// it is placed into the sequence, so a duplicate never occupies a slot.
    ///
    /// Returns `(pos, true)` on success and `(pos, false)` on a duplicate.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is greater than the deque's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque: UniqueDeque<String> = UniqueDeque::new();
    /// assert_eq!(deque.emplace(0, "hello"), (0, true));
    /// assert_eq!(deque.emplace(1, "hello"), (1, false));
    /// ```
    pub fn emplace<A>(&mut self, pos: usize, args: A) -> (usize, bool)
    where
        A: Into<T>,
    {
        self.insert(pos, args.into())
    }

    /// Builds an element from `args` and pushes it to the front if it is not
    /// yet present.
    ///
    /// Returns a reference to the stored element, or `None` on a duplicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque: UniqueDeque<String> = UniqueDeque::new();
    /// assert_eq!(deque.emplace_front("world").map(String::as_str), Some("world"));
    /// assert_eq!(deque.emplace_front("world"), None);
    /// ```
    pub fn emplace_front<A>(&mut self, args: A) -> Option<&T>
    where
        A: Into<T>,
    {
        if self.push_front(args.into()) {
            self.deque.front()
        } else {
            None
        }
    }

    /// Builds an element from `args` and pushes it to the back if it is not
    /// yet present.
    ///
    /// Returns a reference to the stored element, or `None` on a duplicate.
    pub fn emplace_back<A>(&mut self, args: A) -> Option<&T>
    where
        A: Into<T>,
    {
        if self.push_back(args.into()) {
            self.deque.back()
        } else {
            None
        }
    }

    /// Replaces the contents of the deque with the elements of `iter`,
    /// keeping the first occurrence of each.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque = UniqueDeque::from([1, 2, 3]);
    /// deque.assign([4, 5, 4]);
    /// assert_eq!(deque, UniqueDeque::from([4, 5]));
    /// ```
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(iter);
    }

    /// Moves all elements from `other` to the back of the deque, skipping
    /// those that are already present. After this operation, `other` is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containerofunique_collections::UniqueDeque;
    ///
    /// let mut deque1 = UniqueDeque::from(['a']);
    /// let mut deque2 = UniqueDeque::from(['b', 'a', 'c']);
    ///
    /// deque1.append(&mut deque2);
    ///
    /// let mut iter = deque1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(deque2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let len = self.deque.len();
        while let Some(elt) = other.pop_front() {
            self.push_back(elt);
        }
        debug!(num_appended = self.deque.len() - len, "Appended deque");
    }
}

/// Removes the element equal to `value` from `deque`, returning the number of
/// removed elements (0 or 1).
///
/// # Examples
///
/// ```
/// use containerofunique_collections::{erase, UniqueDeque};
///
/// let mut deque = UniqueDeque::from([String::from("apple"), String::from("banana")]);
/// assert_eq!(erase(&mut deque, "banana"), 1);
/// assert_eq!(erase(&mut deque, "grape"), 0);
/// assert_eq!(deque.len(), 1);
/// ```
pub fn erase<T, S, Q>(deque: &mut UniqueDeque<T, S>, value: &Q) -> usize
where
    T: Hash + Eq + Borrow<Q>,
    S: BuildHasher,
    Q: Hash + Eq + ?Sized,
{
    usize::from(deque.remove(value).is_some())
}

/// Removes every element of `deque` that satisfies `pred` and returns how
/// many were removed. The predicate is called exactly once per element, in
/// order.
///
/// # Examples
///
/// ```
/// use containerofunique_collections::{erase_if, UniqueDeque};
///
/// let mut deque = UniqueDeque::from([1, 2, 3, 4, 5, 6]);
/// assert_eq!(erase_if(&mut deque, |x| x % 2 == 0), 3);
/// assert_eq!(deque, UniqueDeque::from([1, 3, 5]));
/// ```
pub fn erase_if<T, S, F>(deque: &mut UniqueDeque<T, S>, mut pred: F) -> usize
where
    T: Hash + Eq,
    S: BuildHasher,
    F: FnMut(&T) -> bool,
{
    let len = deque.len();
    deque.retain(|elt| !pred(elt));
    len - deque.len()
}

impl<T, S> Default for UniqueDeque<T, S>
where
    S: Default,
{
    /// Creates an empty `UniqueDeque<T, S>`.
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Clone for UniqueDeque<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        UniqueDeque {
            deque: self.deque.clone(),
            set: self.set.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.deque.clone_from(&source.deque);
        self.set.clone_from(&source.set);
    }
}

impl<T, S> Index<usize> for UniqueDeque<T, S> {
    type Output = T;

    /// Panics if `index` is out of bounds. Use [`UniqueDeque::at`] for a
    /// checked access.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.deque[index]
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, S> FromIterator<T> for UniqueDeque<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        deque.extend(iter);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for UniqueDeque<T, RandomState>
where
    T: Hash + Eq + Clone,
{
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, S> From<Vec<T>> for UniqueDeque<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, S> IntoIterator for UniqueDeque<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque into an iterator yielding elements by value.
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.deque.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a UniqueDeque<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> Extend<T> for UniqueDeque<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for UniqueDeque<T, S>
where
    T: 'a + Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, S1, S2> PartialEq<UniqueDeque<T, S2>> for UniqueDeque<T, S1>
where
    T: PartialEq,
{
    fn eq(&self, other: &UniqueDeque<T, S2>) -> bool {
        self.deque == other.deque
    }
}

impl<T: Eq, S> Eq for UniqueDeque<T, S> {}

impl<T, S1, S2> PartialOrd<UniqueDeque<T, S2>> for UniqueDeque<T, S1>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &UniqueDeque<T, S2>) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, S> Ord for UniqueDeque<T, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for UniqueDeque<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: Hash, S> Hash for UniqueDeque<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

// Ensure that `UniqueDeque` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: UniqueDeque<&'static str>) -> UniqueDeque<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(feature = "serde-derive")]
mod serde_derive {
    use std::fmt;
    use std::hash::{BuildHasher, Hash};
    use std::marker::PhantomData;

    use serde::{
        de::{Deserialize, Deserializer, SeqAccess, Visitor},
        ser::{Serialize, SerializeSeq, Serializer},
    };

    use super::UniqueDeque;

    // Caps the preallocation driven by an untrusted length prefix.
    const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

    impl<T, S> Serialize for UniqueDeque<T, S>
    where
        T: Serialize,
    {
        fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
        where
            Ser: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;

            for elt in self.iter() {
                seq.serialize_element(elt)?;
            }

            seq.end()
        }
    }

    impl<'de, T, S> Deserialize<'de> for UniqueDeque<T, S>
    where
        T: Deserialize<'de> + Hash + Eq + Clone,
        S: BuildHasher + Default,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_seq(UniqueDequeVisitor(PhantomData))
        }
    }

    struct UniqueDequeVisitor<T, S>(PhantomData<(T, S)>);

    impl<'de, T, S> Visitor<'de> for UniqueDequeVisitor<T, S>
    where
        T: Deserialize<'de> + Hash + Eq + Clone,
        S: BuildHasher + Default,
    {
        type Value = UniqueDeque<T, S>;

        fn expecting(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
            write!(f, "a sequence")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<UniqueDeque<T, S>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let capacity = seq
                .size_hint()
                .unwrap_or(0)
                .min(MAX_PREALLOCATED_ELEMENTS);
            let mut deque = UniqueDeque::with_capacity_and_hasher(capacity, S::default());

            while let Some(elt) = seq.next_element()? {
                deque.push_back(elt);
            }

            Ok(deque)
        }
    }
}
