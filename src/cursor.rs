use num_integer::Integer;
use thiserror::Error;

use crate::control::Control;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("collection size must be at least 1")]
    InvalidSize,
    #[error("initial position {initial} is outside a collection of {len} items")]
    InvalidInitial { initial: usize, len: usize },
    #[error("index {index} is outside a collection of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rule applied when a step would move a cursor outside `[0, len-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Saturate at the first and the last position.
    Clamp,
    /// Cycle: stepping past the last position lands on the first and vice versa.
    Wrap,
}

impl BoundaryPolicy {
    /// Position reached by moving `delta` steps from `position` in a collection of
    /// `len` items.
    pub fn step(self, position: usize, delta: isize, len: usize) -> Result<usize, CursorError> {
        if len == 0 {
            return Err(CursorError::InvalidSize);
        }
        if position >= len {
            return Err(CursorError::InvalidInitial {
                initial: position,
                len,
            });
        }
        Ok(self.offset(position, delta as i128, len))
    }

    // Callers guarantee 0 <= position < len.
    pub(crate) fn offset(self, position: usize, delta: i128, len: usize) -> usize {
        debug_assert!(position < len, "position out of bounds");
        // Every usize fits in an i128 and so does the sum with any isize/usize delta.
        let len = len as i128;
        let target = position as i128 + delta;
        let landed = match self {
            BoundaryPolicy::Clamp => target.clamp(0, len - 1),
            BoundaryPolicy::Wrap => target.mod_floor(&len),
        };
        landed as usize
    }
}

/// Navigation over a fixed-size, ordered collection. The position always stays
/// within `[0, len-1]`, whatever sequence of calls is made.
pub trait Cursor {
    fn len(&self) -> usize;
    fn policy(&self) -> BoundaryPolicy;
    fn current(&self) -> usize;

    /// Moves directly to `index`. On error the position is left untouched.
    fn jump(&mut self, index: usize) -> Result<usize, CursorError>;

    /// Moves `n` steps forward under the boundary policy and returns the new position.
    fn advance_by(&mut self, n: usize) -> usize;

    /// Moves `n` steps backward under the boundary policy and returns the new position.
    fn revert_by(&mut self, n: usize) -> usize;

    fn next(&mut self) -> usize {
        self.advance_by(1)
    }

    fn previous(&mut self) -> usize {
        self.revert_by(1)
    }

    fn first(&mut self) -> usize {
        self.revert_by(self.current())
    }

    fn last(&mut self) -> usize {
        let remaining = self.len() - 1 - self.current();
        self.advance_by(remaining)
    }

    fn peek_next(&self) -> usize {
        self.policy().offset(self.current(), 1, self.len())
    }

    fn peek_prev(&self) -> usize {
        self.policy().offset(self.current(), -1, self.len())
    }

    fn at_start(&self) -> bool {
        self.current() == 0
    }

    fn at_end(&self) -> bool {
        self.current() == self.len() - 1
    }

    /// Runs the operation a display surface asked for.
    fn apply(&mut self, control: Control) -> Result<usize, CursorError> {
        match control {
            Control::Previous => Ok(self.previous()),
            Control::Next => Ok(self.next()),
            Control::First => Ok(self.first()),
            Control::Last => Ok(self.last()),
            Control::Jump(index) => self.jump(index),
        }
    }
}
