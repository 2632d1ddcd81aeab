use std::sync::Arc;

use crate::cursor::{BoundaryPolicy, Cursor, CursorError};
use crate::index_cursor::IndexCursor;

/// Cursor over a collection shared read-only between sessions. Each session owns its
/// own cursor; the collection itself is loaded once.
#[derive(Debug)]
pub struct SharedVecCursor<T> {
    vec: Arc<Vec<T>>,
    index: IndexCursor,
}

impl<T> Clone for SharedVecCursor<T> {
    fn clone(&self) -> Self {
        SharedVecCursor {
            vec: self.vec.clone(),
            index: self.index,
        }
    }
}

impl<T> PartialEq for SharedVecCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vec, &other.vec) && self.index == other.index
    }
}

impl<T> SharedVecCursor<T> {
    pub fn get_shared_vec(&self) -> Arc<Vec<T>> {
        self.vec.clone()
    }

    pub fn at_start(vec: Arc<Vec<T>>, policy: BoundaryPolicy) -> Result<Self, CursorError> {
        Self::with_pos(vec, policy, 0)
    }

    pub fn with_pos(
        vec: Arc<Vec<T>>,
        policy: BoundaryPolicy,
        pos: usize,
    ) -> Result<Self, CursorError> {
        let index = IndexCursor::new(vec.len(), policy, pos)?;
        Ok(SharedVecCursor { vec, index })
    }

    pub fn item(&self) -> &T {
        &self.vec[self.index.current()]
    }

    /// See [`SliceCursor::select`](crate::SliceCursor::select).
    pub fn select<P>(&mut self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let found = self.vec.iter().position(predicate)?;
        self.index.jump(found).ok()?;
        Some(self.item())
    }
}

impl<T> Cursor for SharedVecCursor<T> {
    fn len(&self) -> usize {
        self.vec.len()
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
