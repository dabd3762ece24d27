//! A [`Deck`] is a double-ended queue kept in a single contiguous buffer.
//!
//! Pushing or popping at either end is O(1) amortized, and because the live elements are always
//! one contiguous run the deck can be handed to anything expecting a slice. Use one end only and
//! it is a stack; push at one end and pop at the other and it is a queue.
//!
//! Looking at or taking from an empty deck is not an error: [`peek_front`](Deck::peek_front),
//! [`peek_back`](Deck::peek_back), [`pop_front`](Deck::pop_front) and [`pop_back`](Deck::pop_back)
//! return [`None`] and leave the deck untouched.

use crate::settings::{seal_drop_behavior, seal_rebalance_behavior, End};
use crate::{BackToFront, DropBehavior, FrontToBack, Middle, RebalanceBehavior};
use std::alloc::Layout;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use tracing::trace;

/// Slots allocated by the first push into an unallocated deck.
const INITIAL_CAPACITY: usize = 4;

/// Iterator over shared references to a deck's elements, front to back.
pub type Iter<'a, T> = std::slice::Iter<'a, T>;

/// Iterator over mutable references to a deck's elements, front to back.
pub type IterMut<'a, T> = std::slice::IterMut<'a, T>;

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

/// A double-ended queue backed by one contiguous buffer with spare room on both sides.
///
/// # Examples
/// ```
/// use deck::Deck;
/// let mut deck = Deck::new();
/// deck.push_back("youtube.com");
/// deck.push_front("google.com");
/// deck.push_back("ithsdistans.se");
/// assert_eq!(deck.peek_front(), Some(&"google.com"));
/// assert_eq!(deck.pop_back(), Some("ithsdistans.se"));
/// assert_eq!(&*deck, &["google.com", "youtube.com"]);
/// ```
///
/// # Drop Order
/// Elements still in the deck when it is dropped or [cleared](Deck::clear) are dropped front to
/// back by default. Use [`BackToFront`] as the `DropOrder` parameter to reverse that.
///
/// # Rebalance Behavior
/// When a push finds no free slot on its side, the deck first tries to re-centre its contents if
/// at least half of the buffer is free. Otherwise the buffer doubles and the `Rebalance` parameter
/// decides where the contents land:
/// - [`Middle`] (default) centres them.
/// - [`FavorCrowdedSide`](crate::FavorCrowdedSide) gives most of the new room to the side that ran
///   out.
/// - [`OnlyChangeCrowdedSide`](crate::OnlyChangeCrowdedSide) gives all of it to that side.
pub struct Deck<T, DropOrder = FrontToBack, Rebalance = Middle>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    ptr: NonNull<T>,
    start: usize,
    cap: usize,
    len: usize,
    drop_order: DropOrder,
    rebalance: Rebalance,
    marker: PhantomData<T>,
}

// SAFETY: a deck owns its elements exactly like a Vec does
unsafe impl<T: Send, DropOrder, Rebalance> Send for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
}
// SAFETY: shared access only hands out shared references to elements
unsafe impl<T: Sync, DropOrder, Rebalance> Sync for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
}

impl<T> Deck<T> {
    /// Creates a new, empty `Deck` without allocating.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::new();
    /// assert!(deck.is_empty());
    /// deck.push_back(1);
    /// assert_eq!(deck.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Deck {
            ptr: NonNull::dangling(),
            start: 0,
            cap: if std::mem::size_of::<T>() == 0 {
                usize::MAX
            } else {
                0
            },
            len: 0,
            drop_order: FrontToBack,
            rebalance: Middle,
            marker: PhantomData,
        }
    }

    /// Converts the deck to drop its remaining elements from the back.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::new();
    /// deck.push_back(1);
    /// deck.push_back(2);
    /// let deck = deck.as_back_to_front();
    /// assert_eq!(&*deck, &[1, 2]);
    /// ```
    #[inline]
    #[must_use = "the converted deck owns the elements; dropping it drops them"]
    pub fn as_back_to_front(self) -> Deck<T, BackToFront> {
        self.with_drop_order()
    }
}

impl<T, DropOrder, Rebalance> Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    const IS_ZST: bool = std::mem::size_of::<T>() == 0;

    fn unallocated() -> Self {
        Deck {
            ptr: NonNull::dangling(),
            start: 0,
            cap: if Self::IS_ZST { usize::MAX } else { 0 },
            len: 0,
            drop_order: Default::default(),
            rebalance: Default::default(),
            marker: PhantomData,
        }
    }

    /// Creates a new, empty `Deck` with `cap` slots, split evenly between the two ends.
    ///
    /// Zero-sized types never allocate and always report a capacity of [`usize::MAX`].
    ///
    /// # Panics
    /// Panics if the allocation would exceed [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let deck: Deck<i32> = Deck::with_capacity(10);
    /// assert_eq!(deck.capacity(), 10);
    /// assert_eq!(deck.space_front(), 5);
    /// assert_eq!(deck.space_back(), 5);
    /// ```
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        if Self::IS_ZST || cap == 0 {
            return Self::unallocated();
        }
        Deck {
            ptr: Self::allocate(cap),
            start: cap / 2,
            cap,
            len: 0,
            drop_order: Default::default(),
            rebalance: Default::default(),
            marker: PhantomData,
        }
    }

    /// Changes the drop order without touching the elements.
    #[inline]
    #[must_use = "the converted deck owns the elements; dropping it drops them"]
    pub fn with_drop_order<D>(self) -> Deck<T, D, Rebalance>
    where
        D: DropBehavior,
    {
        let this = std::mem::ManuallyDrop::new(self);
        Deck {
            ptr: this.ptr,
            start: this.start,
            cap: this.cap,
            len: this.len,
            drop_order: Default::default(),
            rebalance: this.rebalance,
            marker: PhantomData,
        }
    }

    /// Changes the growth strategy without touching the elements.
    ///
    /// # Examples
    /// ```
    /// use deck::{Deck, OnlyChangeCrowdedSide};
    /// let mut plates = Deck::new().with_rebalance_behavior::<OnlyChangeCrowdedSide>();
    /// for plate in ["Blue plate", "Red plate", "Green plate"] {
    ///     plates.push_front(plate);
    /// }
    /// assert_eq!(plates.pop_front(), Some("Green plate"));
    /// ```
    #[inline]
    #[must_use = "the converted deck owns the elements; dropping it drops them"]
    pub fn with_rebalance_behavior<R>(self) -> Deck<T, DropOrder, R>
    where
        R: RebalanceBehavior,
    {
        let this = std::mem::ManuallyDrop::new(self);
        Deck {
            ptr: this.ptr,
            start: this.start,
            cap: this.cap,
            len: this.len,
            drop_order: this.drop_order,
            rebalance: Default::default(),
            marker: PhantomData,
        }
    }

    fn layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        let layout = Self::layout(cap);
        // SAFETY: T is not zero-sized and cap > 0, so the layout has a non-zero size
        let raw = unsafe { std::alloc::alloc(layout) };
        match NonNull::new(raw as *mut T) {
            Some(ptr) => ptr,
            None => std::alloc::handle_alloc_error(layout),
        }
    }

    /// Moves the live elements so the first one sits at `new_start`.
    fn shift_to(&mut self, new_start: usize) {
        debug_assert!(new_start + self.len <= self.cap);
        if new_start == self.start {
            return;
        }
        // SAFETY: both ranges lie inside the buffer and `copy` allows overlap
        unsafe {
            let base = self.ptr.as_ptr();
            std::ptr::copy(base.add(self.start), base.add(new_start), self.len);
        }
        self.start = new_start;
    }

    /// Doubles the buffer, placing the contents according to the rebalance strategy.
    fn grow(&mut self, crowded: End) {
        // zero-sized types start at usize::MAX, so running out means the length overflowed
        if Self::IS_ZST {
            capacity_overflow();
        }

        let new_cap = if self.cap == 0 {
            INITIAL_CAPACITY
        } else {
            self.cap.checked_mul(2).unwrap_or_else(|| capacity_overflow())
        };
        let new_layout = Self::layout(new_cap);
        let new_start = <Rebalance as seal_rebalance_behavior::Sealed>::STRATEGY.new_start(
            crowded,
            self.len,
            self.space_front(),
            self.space_back(),
            new_cap,
        );

        let raw = if self.cap == 0 {
            // SAFETY: new_layout has a non-zero size
            unsafe { std::alloc::alloc(new_layout) }
        } else {
            let old_layout = Self::layout(self.cap);
            // SAFETY: ptr was allocated with old_layout and the new size is non-zero
            unsafe { std::alloc::realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) }
        };
        self.ptr = match NonNull::new(raw as *mut T) {
            Some(ptr) => ptr,
            None => std::alloc::handle_alloc_error(new_layout),
        };

        trace!(
            old_cap = self.cap,
            new_cap,
            len = self.len,
            ?crowded,
            "grew deck buffer"
        );
        self.cap = new_cap;
        self.shift_to(new_start);
    }

    /// Frees at least one slot on the `crowded` side, re-centring in place when half the buffer is
    /// free and growing otherwise.
    fn make_room(&mut self, crowded: End) {
        if !Self::IS_ZST && self.len <= self.cap / 2 {
            let centred = (self.cap - self.len) / 2;
            let fits = match crowded {
                End::Front => centred > 0,
                End::Back => centred + self.len < self.cap,
            };
            if fits {
                self.shift_to(centred);
                return;
            }
        }
        self.grow(crowded);
    }

    /// Pushes an element onto the back of the deck.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut history = Deck::new();
    /// history.push_back("google.com");
    /// history.push_back("youtube.com");
    /// assert_eq!(history.peek_back(), Some(&"youtube.com"));
    /// ```
    #[inline]
    pub fn push_back(&mut self, elem: T) {
        if Self::IS_ZST {
            self.len = self.len.checked_add(1).unwrap_or_else(|| capacity_overflow());
            std::mem::forget(elem);
            return;
        }

        while self.space_back() == 0 {
            self.make_room(End::Back);
        }
        // SAFETY: the slot right after the last element is inside the buffer and unoccupied
        unsafe {
            self.ptr.as_ptr().add(self.start + self.len).write(elem);
        }
        self.len += 1;
    }

    /// Pushes an element onto the front of the deck.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut stack = Deck::new();
    /// stack.push_front("Blue plate");
    /// stack.push_front("Red plate");
    /// assert_eq!(stack.peek_front(), Some(&"Red plate"));
    /// ```
    #[inline]
    pub fn push_front(&mut self, elem: T) {
        if Self::IS_ZST {
            self.len = self.len.checked_add(1).unwrap_or_else(|| capacity_overflow());
            std::mem::forget(elem);
            return;
        }

        while self.start == 0 {
            self.make_room(End::Front);
        }
        self.start -= 1;
        // SAFETY: start was positive, so the slot before the first element is unoccupied
        unsafe {
            self.ptr.as_ptr().add(self.start).write(elem);
        }
        self.len += 1;
    }

    /// Removes the back element and returns it, or [`None`] if the deck is empty.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::from([42, 10]);
    /// assert_eq!(deck.pop_back(), Some(10));
    /// assert_eq!(deck.pop_back(), Some(42));
    /// assert_eq!(deck.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot held the last live element and is now outside the live range
        Some(unsafe { self.ptr.as_ptr().add(self.start + self.len).read() })
    }

    /// Removes the front element and returns it, or [`None`] if the deck is empty.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::from([42, 10]);
    /// assert_eq!(deck.pop_front(), Some(42));
    /// assert_eq!(deck.pop_front(), Some(10));
    /// assert_eq!(deck.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the slot holds the first live element, which is removed from the live range below
        let elem = unsafe { self.ptr.as_ptr().add(self.start).read() };
        self.len -= 1;
        if !Self::IS_ZST {
            self.start += 1;
        }
        Some(elem)
    }

    /// Returns the front element without removing it, or [`None`] if the deck is empty.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.peek_front(), None);
    /// deck.push_back(1);
    /// deck.push_back(2);
    /// assert_eq!(deck.peek_front(), Some(&1));
    /// assert_eq!(deck.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek_front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the back element without removing it, or [`None`] if the deck is empty.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.peek_back(), None);
    /// deck.push_back(1);
    /// deck.push_back(2);
    /// assert_eq!(deck.peek_back(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    #[must_use]
    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    #[must_use]
    pub fn peek_back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns an iterator over the elements from front to back.
    ///
    /// Each call starts over at the current front.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::new();
    /// deck.push_front(2);
    /// deck.push_front(1);
    /// deck.push_back(3);
    /// assert_eq!(deck.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// deck.pop_front();
    /// assert_eq!(deck.iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the number of elements in the deck.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the deck holds no elements.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::new();
    /// assert!(deck.is_empty());
    /// deck.push_back('x');
    /// assert!(!deck.is_empty());
    /// deck.pop_back();
    /// assert!(deck.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of slots in the buffer, occupied or not.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns how many elements can be pushed at the front before the deck has to make room.
    #[inline]
    #[must_use]
    pub fn space_front(&self) -> usize {
        if Self::IS_ZST {
            self.cap - self.len
        } else {
            self.start
        }
    }

    /// Returns how many elements can be pushed at the back before the deck has to make room.
    #[inline]
    #[must_use]
    pub fn space_back(&self) -> usize {
        self.cap - (self.start + self.len)
    }

    /// Makes sure at least `additional` elements can be pushed at the back without reallocating.
    ///
    /// # Panics
    /// Panics if the new buffer would exceed [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::from([1, 2]);
    /// deck.reserve_back(10);
    /// assert!(deck.space_back() >= 10);
    /// assert_eq!(&*deck, &[1, 2]);
    /// ```
    pub fn reserve_back(&mut self, additional: usize) {
        while self.space_back() < additional {
            self.grow(End::Back);
        }
    }

    /// Makes sure at least `additional` elements can be pushed at the front without reallocating.
    ///
    /// # Panics
    /// Panics if the new buffer would exceed [`isize::MAX`] bytes.
    pub fn reserve_front(&mut self, additional: usize) {
        while self.space_front() < additional {
            self.grow(End::Front);
        }
    }

    /// Centres the elements inside the current buffer so both ends have the same spare room.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck: Deck<i32> = Deck::with_capacity(10);
    /// for i in 0..4 {
    ///     deck.push_front(i);
    /// }
    /// assert_eq!(deck.space_front(), 1);
    /// deck.rebalance();
    /// assert_eq!(deck.space_front(), 3);
    /// assert_eq!(deck.space_back(), 3);
    /// assert_eq!(&*deck, &[3, 2, 1, 0]);
    /// ```
    pub fn rebalance(&mut self) {
        if !Self::IS_ZST {
            self.shift_to((self.cap - self.len) / 2);
        }
    }

    /// Drops every element, in the deck's drop order. The buffer is kept.
    ///
    /// # Examples
    /// ```
    /// # use deck::Deck;
    /// let mut deck = Deck::from([1, 2, 3]);
    /// let cap = deck.capacity();
    /// deck.clear();
    /// assert!(deck.is_empty());
    /// assert_eq!(deck.capacity(), cap);
    /// ```
    pub fn clear(&mut self) {
        match <DropOrder as seal_drop_behavior::Sealed>::FIRST {
            End::Front => while self.pop_front().is_some() {},
            End::Back => while self.pop_back().is_some() {},
        }
        if !Self::IS_ZST {
            self.start = self.cap / 2;
        }
    }

    /// Extracts a slice of the whole deck, front to back.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Extracts a mutable slice of the whole deck, front to back.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, DropOrder, Rebalance> Default for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    #[inline]
    fn default() -> Self {
        Self::unallocated()
    }
}

impl<T, DropOrder, Rebalance> Drop for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn drop(&mut self) {
        self.clear();
        if !Self::IS_ZST && self.cap != 0 {
            // SAFETY: the buffer was allocated with this layout and holds no live elements
            unsafe {
                std::alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout(self.cap));
            }
        }
    }
}

impl<T, DropOrder, Rebalance> Deref for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: [start, start + len) are initialized elements of the buffer
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr().add(self.start), self.len) }
    }
}

impl<T, DropOrder, Rebalance> DerefMut for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: [start, start + len) are initialized elements of the buffer
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr().add(self.start), self.len) }
    }
}

impl<T, DropOrder, Rebalance> AsRef<[T]> for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, DropOrder, Rebalance> AsMut<[T]> for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Debug, DropOrder, Rebalance> Debug for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Clone, DropOrder, Rebalance> Clone for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// An owning iterator over a [`Deck`], front to back.
///
/// It pops from whichever end is asked for; elements that are never reached are dropped with the
/// iterator, in the deck's drop order.
pub struct IntoIter<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    deck: Deck<T, DropOrder, Rebalance>,
}

impl<T: Debug, DropOrder, Rebalance> Debug for IntoIter<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deck).finish()
    }
}

impl<T, DropOrder, Rebalance> Iterator for IntoIter<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deck.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deck.len(), Some(self.deck.len()))
    }
}

impl<T, DropOrder, Rebalance> DoubleEndedIterator for IntoIter<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deck.pop_back()
    }
}

impl<T, DropOrder, Rebalance> ExactSizeIterator for IntoIter<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
}

impl<T, DropOrder, Rebalance> std::iter::FusedIterator for IntoIter<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
}

impl<T, DropOrder, Rebalance> IntoIterator for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    type Item = T;
    type IntoIter = IntoIter<T, DropOrder, Rebalance>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deck: self }
    }
}

impl<'a, T, DropOrder, Rebalance> IntoIterator for &'a Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, DropOrder, Rebalance> IntoIterator for &'a mut Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    /// Takes over the vector's buffer without copying; the elements start at the front of it.
    fn from(vec: Vec<T>) -> Self {
        let mut vec = std::mem::ManuallyDrop::new(vec);
        let (ptr, len, cap) = (vec.as_mut_ptr(), vec.len(), vec.capacity());
        Deck {
            // SAFETY: a Vec's pointer is never null
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            start: 0,
            cap,
            len,
            drop_order: FrontToBack,
            rebalance: Middle,
            marker: PhantomData,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Deck<T> {
    fn from(array: [T; N]) -> Self {
        <Deck<T>>::from(Vec::from(array))
    }
}

impl<T, DropOrder, Rebalance> FromIterator<T> for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        <Deck<T>>::from(iter.into_iter().collect::<Vec<T>>())
            .with_drop_order()
            .with_rebalance_behavior()
    }
}

impl<T, DropOrder, Rebalance> Extend<T> for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_back(iter.size_hint().0);
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<'a, T: Copy + 'a, DropOrder, Rebalance> Extend<&'a T> for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

// comparisons and hashing go through the live slice, so buffer layout never matters
impl<T: PartialEq, DropOrder, Rebalance> PartialEq for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, DropOrder, Rebalance> PartialEq<[T]> for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, DropOrder, Rebalance, const N: usize> PartialEq<[T; N]>
    for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, DropOrder, Rebalance> Eq for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
}

impl<T: PartialOrd, DropOrder, Rebalance> PartialOrd for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, DropOrder, Rebalance> Ord for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: std::hash::Hash, DropOrder, Rebalance> std::hash::Hash for Deck<T, DropOrder, Rebalance>
where
    DropOrder: DropBehavior,
    Rebalance: RebalanceBehavior,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, DropOrder, Rebalance> Serialize for Deck<T, DropOrder, Rebalance>
    where
        T: Serialize,
        DropOrder: DropBehavior,
        Rebalance: RebalanceBehavior,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T, DropOrder, Rebalance> Deserialize<'de> for Deck<T, DropOrder, Rebalance>
    where
        T: Deserialize<'de>,
        DropOrder: DropBehavior,
        Rebalance: RebalanceBehavior,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = Vec::<T>::deserialize(deserializer)?;
            Ok(<Deck<T>>::from(vec)
                .with_drop_order()
                .with_rebalance_behavior())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn json_round_trip() {
            for pages in [vec!["google.com", "youtube.com", "ithsdistans.se"], vec![]] {
                let mut deck: Deck<String> = Deck::new();
                for page in &pages {
                    deck.push_back(page.to_string());
                }
                let json = serde_json::to_string(&deck).unwrap();
                assert_eq!(json, serde_json::to_string(&pages).unwrap());
                let back: Deck<String, BackToFront> = serde_json::from_str(&json).unwrap();
                assert_eq!(back.as_slice(), deck.as_slice());
            }
        }
    }
}

/// Creates a [`Deck`] from a list of elements, like [`vec!`].
///
/// # Examples
/// ```
/// use deck::{deck, Deck};
/// let plates = deck!["Green plate", "Red plate", "Blue plate"];
/// assert_eq!(plates.peek_front(), Some(&"Green plate"));
///
/// let zeros = deck![0; 3];
/// assert_eq!(&*zeros, &[0, 0, 0]);
///
/// let empty: Deck<i32> = deck![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! deck {
    () => {
        <$crate::Deck<_>>::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::Deck<_>>::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::Deck<_>>::from(::std::vec![$($x),+])
    };
}
