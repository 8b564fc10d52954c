#![cfg_attr(not(test), no_std)]
//! A singly linked list with a before-begin sentinel, positional
//! insertion/removal through cursors, and value semantics (deep clone, swap,
//! lexicographical comparison).

extern crate alloc;

pub mod error;
pub mod linked_lists;

pub use error::ListError;
pub use linked_lists::{swap, Cursor, CursorMut, SingleLinkedList};
