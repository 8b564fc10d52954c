pub mod singly_linked_list;

pub use singly_linked_list::{swap, Cursor, CursorMut, SingleLinkedList};
