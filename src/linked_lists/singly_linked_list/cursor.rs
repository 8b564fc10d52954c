use core::{
    fmt::{self, Debug, Formatter},
    ptr::{self, NonNull},
};

use super::{Link, Node, SingleLinkedList};
use crate::error::ListError;

/// Where a cursor stands in the chain. Shared by both cursor flavors.
pub(crate) enum Position<T> {
    /// The sentinel, one step before the first element.
    BeforeBegin,
    Node(NonNull<Node<T>>),
    End,
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> Position<T> {
    pub(crate) fn from_link(link: Link<T>) -> Self {
        link.map_or(Position::End, Position::Node)
    }

    /// The link leaving this position, `head` being the sentinel's.
    ///
    /// # Safety
    /// A `Node` position must point at a live node.
    unsafe fn next_link(self, head: Link<T>) -> Option<Link<T>> {
        match self {
            Position::BeforeBegin => Some(head),
            Position::Node(node) => Some((*node.as_ptr()).next),
            Position::End => None,
        }
    }

    /// # Safety
    /// A `Node` position must point at a live node.
    unsafe fn successor(self, head: Link<T>) -> Self {
        match self.next_link(head) {
            Some(link) => Position::from_link(link),
            None => panic!("cursor advanced past the end of the list"),
        }
    }

    /// # Safety
    /// A `Node` position must point at a live node for `'a`.
    unsafe fn value<'a>(self) -> Option<&'a T> {
        match self {
            Position::Node(node) => Some(&(*node.as_ptr()).value),
            _ => None,
        }
    }

    /// # Safety
    /// A `Node` position must point at a live, unaliased node for `'a`.
    unsafe fn value_mut<'a>(self) -> Option<&'a mut T> {
        match self {
            Position::Node(node) => Some(&mut (*node.as_ptr()).value),
            _ => None,
        }
    }

    /// Same node, both at the end, or the sentinels of the same list.
    fn same_as(
        self,
        list: &SingleLinkedList<T>,
        other: Self,
        other_list: &SingleLinkedList<T>,
    ) -> bool {
        match (self, other) {
            (Position::BeforeBegin, Position::BeforeBegin) => ptr::eq(list, other_list),
            (Position::Node(a), Position::Node(b)) => a == b,
            (Position::End, Position::End) => true,
            _ => false,
        }
    }
}

/// A read-only position in a [`SingleLinkedList`].
///
/// A cursor stands on the before-begin sentinel, on an element, or at the
/// end. It borrows the list, so it can never outlive or dangle into it.
pub struct Cursor<'a, T> {
    position: Position<T>,
    list: &'a SingleLinkedList<T>,
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a SingleLinkedList<T>, position: Position<T>) -> Self {
        Self { position, list }
    }

    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin)
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// The element under the cursor. `None` on the sentinel and at the end.
    pub fn current(&self) -> Option<&'a T> {
        unsafe { self.position.value() }
    }

    /// The element after the cursor, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        unsafe {
            self.position
                .next_link(self.list.head)
                .and_then(|link| Position::from_link(link).value())
        }
    }

    /// Steps to the next position.
    ///
    /// # Panics
    /// If the cursor is already at the end.
    pub fn move_next(&mut self) {
        self.position = unsafe { self.position.successor(self.list.head) };
    }
}

impl<'a, T: Debug> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

/// A mutable position in a [`SingleLinkedList`], able to insert and erase
/// after itself.
///
/// # Examples
/// ```
/// use single_linked_list::SingleLinkedList;
/// let mut list = SingleLinkedList::from([1, 2, 4]);
/// let mut cursor = list.begin_mut();
/// cursor.move_next();
/// cursor.insert_after(3);
/// assert_eq!(cursor.current(), Some(&3));
/// assert_eq!(cursor.erase_after(), Some(4));
/// assert_eq!(list, SingleLinkedList::from([1, 2, 3]));
/// ```
pub struct CursorMut<'a, T> {
    position: Position<T>,
    list: &'a mut SingleLinkedList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut SingleLinkedList<T>, position: Position<T>) -> Self {
        Self { position, list }
    }

    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin)
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    pub fn current(&self) -> Option<&T> {
        unsafe { self.position.value() }
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        unsafe { self.position.value_mut() }
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        unsafe {
            self.position
                .next_link(self.list.head)
                .and_then(|link| Position::from_link(link).value_mut())
        }
    }

    /// Steps to the next position.
    ///
    /// # Panics
    /// If the cursor is already at the end.
    pub fn move_next(&mut self) {
        self.position = unsafe { self.position.successor(self.list.head) };
    }

    /// A read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.position)
    }

    /// Inserts `value` after the cursor and moves onto it.
    ///
    /// # Panics
    /// If the cursor is at the end. Allocation failure goes through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    pub fn insert_after(&mut self, value: T) -> &mut T {
        match self.try_insert_after(value) {
            Ok(value) => value,
            Err(err) => err.handle(),
        }
    }

    /// Inserts `value` after the cursor and moves onto it.
    ///
    /// On failure nothing changes: neither the list nor the cursor position.
    pub fn try_insert_after(&mut self, value: T) -> Result<&mut T, ListError> {
        let node = unsafe { self.list.link_after(self.position, value) }?;
        self.position = Position::Node(node);
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Removes the element after the cursor and returns it. The cursor stays,
    /// so what followed the removed element is now its successor.
    ///
    /// Without a successor (empty list, last element, end) this is a no-op.
    pub fn erase_after(&mut self) -> Option<T> {
        unsafe { self.list.unlink_after(self.position) }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.list, cursor.position)
    }
}

impl<'a, T: Debug> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current()).finish()
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.position.same_as(self.list, other.position, other.list)
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.position.same_as(self.list, other.position, &*other.list)
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.position.same_as(&*self.list, other.position, other.list)
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.position.same_as(&*self.list, other.position, &*other.list)
    }
}
