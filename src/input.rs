//! Sources of human moves.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::error::InputError;

/// A line-oriented source of move text.
///
/// Each call blocks until one line is available. The line is matched
/// against the legal moves by the caller, so implementations hand it over
/// as-is.
pub trait MoveSource {
    /// Returns the next line of input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] when no more lines will arrive, or
    /// [`InputError::Io`] when reading fails.
    fn next_line(&mut self) -> Result<String, InputError>;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_line(&mut self) -> Result<String, InputError> {
        (**self).next_line()
    }
}

/// A fixed queue of lines, handed out in order.
///
/// ```
/// use bjround::{MoveSource, Scripted};
///
/// let mut input = Scripted::new(["hit", "stay"]);
/// assert_eq!(input.next_line().unwrap(), "hit");
/// assert_eq!(input.remaining(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    lines: VecDeque<String>,
}

impl Scripted {
    /// Creates a source that yields `lines` and then reports closed.
    #[must_use]
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns how many lines have not been read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveSource for Scripted {
    fn next_line(&mut self) -> Result<String, InputError> {
        self.lines.pop_front().ok_or(InputError::Closed)
    }
}
