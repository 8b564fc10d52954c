use core::alloc::Layout;

use thiserror::Error;

/// Errors reported by the fallible (`try_*`) list operations.
///
/// A failed operation never leaves a partial structural change behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The global allocator returned null while creating a node.
    #[error("failed to allocate {} bytes for a list node", .layout.size())]
    AllocFailed { layout: Layout },
    /// An insertion was attempted after the end-of-sequence position.
    #[error("cannot insert after the end of the list")]
    InvalidPosition,
}

impl ListError {
    /// Diverges the way the infallible twin of a `try_*` operation should.
    pub(crate) fn handle(self) -> ! {
        match self {
            ListError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
            ListError::InvalidPosition => panic!("{self}"),
        }
    }
}
