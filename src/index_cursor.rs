use log::debug;

use crate::cursor::{BoundaryPolicy, Cursor, CursorError};

/// A position over a collection of `len` items, without the items themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexCursor {
    len: usize,
    policy: BoundaryPolicy,
    // Always in [0, len-1]; len is never zero.
    pos: usize,
}

impl IndexCursor {
    pub fn new(len: usize, policy: BoundaryPolicy, initial: usize) -> Result<Self, CursorError> {
        if len == 0 {
            return Err(CursorError::InvalidSize);
        }
        if initial >= len {
            return Err(CursorError::InvalidInitial { initial, len });
        }
        Ok(IndexCursor {
            len,
            policy,
            pos: initial,
        })
    }

    pub fn at_start(len: usize, policy: BoundaryPolicy) -> Result<Self, CursorError> {
        Self::new(len, policy, 0)
    }

    fn move_by(&mut self, delta: i128) -> usize {
        let from = self.pos;
        self.pos = self.policy.offset(self.pos, delta, self.len);
        debug!(
            "cursor moved {} -> {} ({:?}, {} items)",
            from, self.pos, self.policy, self.len
        );
        self.pos
    }
}

impl Cursor for IndexCursor {
    fn len(&self) -> usize {
        self.len
    }

    fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    fn current(&self) -> usize {
        self.pos
    }

    fn jump(&mut self, index: usize) -> Result<usize, CursorError> {
        if index >= self.len {
            debug!("rejected jump to {} with {} items", index, self.len);
            return Err(CursorError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.pos = index;
        Ok(self.pos)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.move_by(n as i128)
    }

    fn revert_by(&mut self, n: usize) -> usize {
        self.move_by(-(n as i128))
    }
}
