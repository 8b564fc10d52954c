use core::{
    alloc::Layout,
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    iter::{Extend, FromIterator},
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

use log::{debug, trace};

use crate::error::ListError;

mod cursor;
mod iters;

pub use cursor::{Cursor, CursorMut};
pub use iters::{IntoIter, Iter, IterMut};

use cursor::Position;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A singly linked list.
///
/// The list keeps a sentinel link in front of the first element. Every
/// structural change is expressed as "insert after" or "erase after" some
/// position, the sentinel being the position before the first element, so
/// front insertion and removal are not special cases.
///
/// # Examples
/// ```
/// use single_linked_list::SingleLinkedList;
/// let mut list = SingleLinkedList::from([2, 3]);
/// list.push_front(1);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct SingleLinkedList<T> {
    /// The sentinel: its target is the first element.
    head: Link<T>,
    len: usize,
    marker: PhantomData<Node<T>>,
}

// Nodes are exclusively owned, the same as a `Box<Node<T>>` chain.
unsafe impl<T: Send> Send for SingleLinkedList<T> {}
unsafe impl<T: Sync> Sync for SingleLinkedList<T> {}

impl<T> SingleLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Builds a list whose iteration order matches `iter`, stopping at the
    /// first failed allocation. Nodes already built are freed on failure.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, ListError> {
        let mut list = Self::new();
        let mut tail = list.before_begin_mut();
        for value in iter {
            tail.try_insert_after(value)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.len == 0);
        self.head.is_none()
    }

    /// Inserts an element at the beginning of the list.
    ///
    /// # Examples
    /// ```
    /// use single_linked_list::SingleLinkedList;
    /// let mut list = SingleLinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            err.handle()
        }
    }

    /// Inserts an element at the beginning of the list, leaving the list
    /// untouched if the node cannot be allocated.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ListError> {
        unsafe { self.link_after(Position::BeforeBegin, value) }.map(|_| ())
    }

    /// Removes the first element. Does nothing on an empty list.
    ///
    /// # Examples
    /// ```
    /// use single_linked_list::SingleLinkedList;
    /// let mut list = SingleLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        unsafe { self.unlink_after(Position::BeforeBegin) }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    pub fn contains<Q: PartialEq<T>>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// Drops every element. The sentinel stays, so the list is reusable.
    pub fn clear(&mut self) {
        trace!("clearing {} list nodes", self.len);
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        trace!("swapping lists of {} and {} nodes", self.len, other.len);
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Clones the list, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, ListError>
    where
        T: Clone,
    {
        Self::try_from_iter(self.iter().cloned())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.len)
    }

    /// A read-only cursor at the sentinel, one step before the first element.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin)
    }

    /// A mutable cursor at the sentinel. Inserting after it is the same as
    /// [`push_front`](Self::push_front).
    ///
    /// # Examples
    /// ```
    /// use single_linked_list::SingleLinkedList;
    /// let mut list = SingleLinkedList::from([3]);
    /// let mut cursor = list.before_begin_mut();
    /// cursor.insert_after(1);
    /// cursor.insert_after(2);
    /// assert_eq!(list, SingleLinkedList::from([1, 2, 3]));
    /// ```
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::BeforeBegin)
    }

    /// A read-only cursor at the first element, or at the end if empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from_link(self.head))
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let position = Position::from_link(self.head);
        CursorMut::new(self, position)
    }

    /// The end-of-sequence position.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Returns the link following `position`: the sentinel for the
    /// before-begin position, a node's `next` otherwise.
    ///
    /// # Safety
    /// `position` must be the before-begin or end position, or a node owned by
    /// this list.
    unsafe fn link_mut(&mut self, position: Position<T>) -> Option<&mut Link<T>> {
        match position {
            Position::BeforeBegin => Some(&mut self.head),
            Position::Node(node) => Some(&mut (*node.as_ptr()).next),
            Position::End => None,
        }
    }

    /// Links a new node holding `value` directly after `position`.
    ///
    /// # Safety
    /// Same as [`link_mut`](Self::link_mut).
    unsafe fn link_after(
        &mut self,
        position: Position<T>,
        value: T,
    ) -> Result<NonNull<Node<T>>, ListError> {
        let link = self
            .link_mut(position)
            .ok_or(ListError::InvalidPosition)?;
        let node = Node::try_new(value, *link)?;
        *link = Some(node);
        self.len += 1;
        Ok(node)
    }

    /// Unlinks and frees the node directly after `position`, if any.
    ///
    /// # Safety
    /// Same as [`link_mut`](Self::link_mut).
    unsafe fn unlink_after(&mut self, position: Position<T>) -> Option<T> {
        let link = self.link_mut(position)?;
        let node = (*link)?;
        let (value, next) = Node::into_parts(node);
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Position of the last element, or the sentinel when empty.
    fn tail_position(&self) -> Position<T> {
        let mut position = Position::BeforeBegin;
        let mut link = self.head;
        while let Some(node) = link {
            position = Position::Node(node);
            link = unsafe { (*node.as_ptr()).next };
        }
        position
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        let mut reachable = 0;
        let mut link = self.head;
        while let Some(node) = link {
            reachable += 1;
            assert!(reachable <= self.len, "chain is longer than the recorded length");
            link = unsafe { (*node.as_ptr()).next };
        }
        assert_eq!(reachable, self.len);
    }
}

/// Swaps the contents of two lists in O(1).
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs)
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-assignment: the copy is built first and swapped in, so a panic
    /// while cloning an element leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: Debug> Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SingleLinkedList {{ length: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SingleLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SingleLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SingleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Appends to the back of the list.
impl<T> Extend<T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let position = self.tail_position();
        let mut tail = CursorMut::new(self, position);
        for value in iter {
            tail.insert_after(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

pub(crate) struct Node<T> {
    next: Link<T>,
    value: T,
}

impl<T> Node<T> {
    const LAYOUT: Layout = Layout::new::<Self>();

    /// Allocates a node on the global allocator. The caller owns the result.
    fn try_new(value: T, next: Link<T>) -> Result<NonNull<Self>, ListError> {
        // never zero sized: a node always holds its link
        let ptr = NonNull::new(unsafe { alloc::alloc::alloc(Self::LAYOUT) }.cast::<Self>());
        let Some(ptr) = ptr else {
            debug!("list node allocation of {} bytes failed", Self::LAYOUT.size());
            return Err(ListError::AllocFailed {
                layout: Self::LAYOUT,
            });
        };
        unsafe { ptr::write(ptr.as_ptr(), Self { next, value }) };
        Ok(ptr)
    }

    /// Consumes the node at `ptr`, returning its value and link.
    ///
    /// # Safety
    /// `ptr` must come from [`Node::try_new`] and must not be used afterwards.
    unsafe fn into_parts(ptr: NonNull<Self>) -> (T, Link<T>) {
        let Self { next, value } = ptr::read(ptr.as_ptr());
        alloc::alloc::dealloc(ptr.as_ptr().cast(), Self::LAYOUT);
        (value, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::{cell::Cell, collections::hash_map::DefaultHasher, rc::Rc};

    fn to_vec<T: Clone>(list: &SingleLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_is_empty() {
        let list: SingleLinkedList<i32> = SingleLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn push_front_reverses_order() {
        let mut list = SingleLinkedList::new();
        for i in 0..10 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 10);
        assert_eq!(to_vec(&list), (0..10).rev().collect::<Vec<_>>());
        list.check_invariants();
    }

    #[test]
    fn from_array_keeps_order() {
        let list = SingleLinkedList::from([1, 2, 3]);
        assert_eq!(to_vec(&list), [1, 2, 3]);

        let mut pushed = SingleLinkedList::new();
        pushed.push_front(3);
        pushed.push_front(2);
        pushed.push_front(1);
        assert_eq!(list, pushed);
        list.check_invariants();
    }

    #[test]
    fn push_pop_round_trip() {
        let mut list = SingleLinkedList::new();
        list.push_front(String::from("only"));
        assert_eq!(list.pop_front().as_deref(), Some("only"));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_and_reuses() {
        let mut list: SingleLinkedList<_> = (0..100).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.clear();
        assert!(list.is_empty());
        list.push_front(7);
        assert_eq!(to_vec(&list), [7]);
        list.check_invariants();
    }

    #[test]
    fn drop_releases_every_element() {
        let tracker = Rc::new(());
        {
            let mut list = SingleLinkedList::new();
            for _ in 0..20 {
                list.push_front(Rc::clone(&tracker));
            }
            assert_eq!(Rc::strong_count(&tracker), 21);
            list.pop_front();
            assert_eq!(Rc::strong_count(&tracker), 20);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn front_mut_and_iter_mut() {
        let mut list: SingleLinkedList<i32> = (0..5).collect();
        if let Some(front) = list.front_mut() {
            *front = 10;
        }
        for elem in list.iter_mut() {
            *elem += 1;
        }
        assert_eq!(to_vec(&list), [11, 2, 3, 4, 5]);
        for elem in &mut list {
            *elem *= 2;
        }
        assert_eq!(to_vec(&list), [22, 4, 6, 8, 10]);
    }

    #[test]
    fn contains() {
        let list = SingleLinkedList::from([1, 2, 3]);
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
    }

    #[test]
    fn clone_is_deep() {
        let mut original = SingleLinkedList::from([1, 2, 3]);
        let mut copy = original.clone();
        original.push_front(0);
        assert_eq!(copy.len(), 3);
        assert_eq!(to_vec(&copy), [1, 2, 3]);

        copy.pop_front();
        if let Some(front) = copy.front_mut() {
            *front = 20;
        }
        assert_eq!(to_vec(&original), [0, 1, 2, 3]);
        assert_eq!(to_vec(&copy), [20, 3]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = SingleLinkedList::from([4, 5, 6]);
        let mut target = SingleLinkedList::from([1, 2]);
        target.clone_from(&source);
        assert_eq!(target, source);
        target.push_front(3);
        assert_eq!(source.len(), 3);
        target.check_invariants();
    }

    #[test]
    fn self_assignment_is_unchanged() {
        let mut list = SingleLinkedList::from([1, 2, 3]);
        list = list.clone();
        assert_eq!(to_vec(&list), [1, 2, 3]);
    }

    #[derive(Debug)]
    struct PanicsOnClone {
        value: i32,
        clones_left: Rc<Cell<usize>>,
    }

    impl Clone for PanicsOnClone {
        fn clone(&self) -> Self {
            let left = self.clones_left.get();
            if left == 0 {
                panic!("clone budget exhausted");
            }
            self.clones_left.set(left - 1);
            Self {
                value: self.value,
                clones_left: Rc::clone(&self.clones_left),
            }
        }
    }

    #[test]
    fn clone_from_is_strongly_exception_safe() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let budget = Rc::new(Cell::new(usize::MAX));
        let make = |value| PanicsOnClone {
            value,
            clones_left: Rc::clone(&budget),
        };
        let source: SingleLinkedList<_> = (0..5).map(make).collect();
        let mut target: SingleLinkedList<_> = (10..12).map(make).collect();

        budget.set(3);
        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(
            target.iter().map(|p| p.value).collect::<Vec<_>>(),
            [10, 11]
        );
        target.check_invariants();

        // the partial copy and everything else is released
        drop(source);
        drop(target);
        assert_eq!(Rc::strong_count(&budget), 1);
    }

    #[test]
    fn try_clone_and_try_from_iter() {
        let list = SingleLinkedList::try_from_iter(0..4).unwrap();
        assert_eq!(to_vec(&list), [0, 1, 2, 3]);
        let copy = list.try_clone().unwrap();
        assert_eq!(copy, list);
    }

    #[test]
    fn swap_exchanges_without_moving_nodes() {
        let mut a = SingleLinkedList::from([1, 2, 3]);
        let mut b = SingleLinkedList::from([9]);
        let a_front = a.front().map(|x| x as *const i32);
        let b_front = b.front().map(|x| x as *const i32);

        swap(&mut a, &mut b);

        assert_eq!(to_vec(&a), [9]);
        assert_eq!(to_vec(&b), [1, 2, 3]);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);
        assert_eq!(a.front().map(|x| x as *const i32), b_front);
        assert_eq!(b.front().map(|x| x as *const i32), a_front);

        a.swap(&mut b);
        assert_eq!(to_vec(&a), [1, 2, 3]);
        a.check_invariants();
        b.check_invariants();
    }

    #[test]
    fn swap_with_empty() {
        let mut a = SingleLinkedList::from([1, 2]);
        let mut b = SingleLinkedList::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(to_vec(&b), [1, 2]);
    }

    #[test]
    fn equality() {
        assert_eq!(
            SingleLinkedList::from([1, 2, 3]),
            SingleLinkedList::from([1, 2, 3])
        );
        assert_ne!(
            SingleLinkedList::from([1, 2, 3]),
            SingleLinkedList::from([1, 2])
        );
        assert_ne!(
            SingleLinkedList::from([1, 2, 3]),
            SingleLinkedList::from([1, 2, 4])
        );
        assert_eq!(
            SingleLinkedList::<i32>::new(),
            SingleLinkedList::<i32>::new()
        );
    }

    #[test]
    fn lexicographical_ordering() {
        let l123 = SingleLinkedList::from([1, 2, 3]);
        let l124 = SingleLinkedList::from([1, 2, 4]);
        let l12 = SingleLinkedList::from([1, 2]);
        let empty = SingleLinkedList::new();

        assert!(l123 < l124);
        assert!(l12 < l123);
        assert!(l123 <= l123.clone());
        assert!(l124 > l123);
        assert!(l123 >= l12);
        assert!(empty < l12);
        assert_eq!(l123.cmp(&l123.clone()), Ordering::Equal);

        let nan = SingleLinkedList::from([f64::NAN]);
        assert_eq!(nan.partial_cmp(&nan), None);
    }

    #[test]
    fn hash_matches_for_equal_lists() {
        fn hash_of(list: &SingleLinkedList<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        }
        let a = SingleLinkedList::from([1, 2, 3]);
        let b: SingleLinkedList<i32> = (1..4).collect();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn extend_appends_at_back() {
        let mut list: SingleLinkedList<i32> = SingleLinkedList::from([1, 2]);
        list.extend([3, 4]);
        list.extend(&[5]);
        assert_eq!(to_vec(&list), [1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 5);

        let mut empty: SingleLinkedList<i32> = SingleLinkedList::new();
        empty.extend(0..3);
        assert_eq!(to_vec(&empty), [0, 1, 2]);
        list.check_invariants();
    }

    #[test]
    fn into_iter_yields_in_order() {
        let list = SingleLinkedList::from(["a", "b", "c"]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn debug_format() {
        let list = SingleLinkedList::from([1, 2, 3]);
        assert_eq!(
            format!("{list:?}"),
            "SingleLinkedList { length: 3, items: {1, 2, 3} }"
        );
        let empty: SingleLinkedList<i32> = SingleLinkedList::new();
        assert_eq!(
            format!("{empty:?}"),
            "SingleLinkedList { length: 0, items: {} }"
        );
    }

    #[test]
    fn zero_sized_elements() {
        let mut list = SingleLinkedList::new();
        for _ in 0..4 {
            list.push_front(());
        }
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().count(), 4);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn matches_vec_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut list: SingleLinkedList<u16> = SingleLinkedList::new();
        let mut model: Vec<u16> = Vec::new();

        for _ in 0..2000 {
            match rng.gen_range(0..10) {
                0 | 1 => {
                    let v = rng.gen();
                    list.push_front(v);
                    model.insert(0, v);
                }
                2 => assert_eq!(list.pop_front(), (!model.is_empty()).then(|| model.remove(0))),
                3 | 4 | 5 => {
                    // position 0 is the sentinel, position i is element i - 1
                    let at = rng.gen_range(0..=model.len());
                    let v = rng.gen();
                    let mut cursor = list.before_begin_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    assert_eq!(*cursor.insert_after(v), v);
                    model.insert(at, v);
                }
                6 | 7 => {
                    let at = rng.gen_range(0..=model.len());
                    let mut cursor = list.before_begin_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    let expected = (at < model.len()).then(|| model.remove(at));
                    assert_eq!(cursor.erase_after(), expected);
                }
                8 => {
                    let copy = list.clone();
                    assert_eq!(copy, list);
                    copy.check_invariants();
                }
                _ => {
                    if rng.gen_ratio(1, 20) {
                        list.clear();
                        model.clear();
                    }
                }
            }
            assert_eq!(list.len(), model.len());
            assert_eq!(list.is_empty(), model.is_empty());
            list.check_invariants();
        }
        assert_eq!(to_vec(&list), model);
    }
}
