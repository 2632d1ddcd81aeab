use crate::cursor::{BoundaryPolicy, Cursor, CursorError};
use crate::index_cursor::IndexCursor;

/// Cursor over a borrowed collection. The items are only read, never copied.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: IndexCursor,
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        SliceCursor {
            slice: self.slice,
            index: self.index,
        }
    }
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn at_start(slice: &'a [T], policy: BoundaryPolicy) -> Result<Self, CursorError> {
        Self::with_pos(slice, policy, 0)
    }

    pub fn with_pos(
        slice: &'a [T],
        policy: BoundaryPolicy,
        pos: usize,
    ) -> Result<Self, CursorError> {
        let index = IndexCursor::new(slice.len(), policy, pos)?;
        Ok(SliceCursor { slice, index })
    }

    pub fn item(&self) -> &'a T {
        &self.slice[self.index.current()]
    }

    pub fn items(&self) -> &'a [T] {
        self.slice
    }

    /// Jumps to the first item matching `predicate`. Returns `None` and leaves the
    /// position alone when no item matches.
    pub fn select<P>(&mut self, mut predicate: P) -> Option<&'a T>
    where
        P: FnMut(&T) -> bool,
    {
        let found = self.slice.iter().position(|item| predicate(item))?;
        self.index.jump(found).ok()?;
        Some(self.item())
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    fn len(&self) -> usize {
        self.slice.len()
    }

    fn policy(&self) -> BoundaryPolicy {
        self.index.policy()
    }

    fn current(&self) -> usize {
        self.index.current()
    }

    fn jump(&mut self, index: usize) -> Result<usize, CursorError> {
        self.index.jump(index)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.index.advance_by(n)
    }

    fn revert_by(&mut self, n: usize) -> usize {
        self.index.revert_by(n)
    }
}
