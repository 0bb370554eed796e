//! Console adapters for the move source and observer traits.

use std::io::{BufRead, Write};

use crate::error::InputError;
use crate::event::{Event, Observer};
use crate::input::MoveSource;

/// Reads one move per line from any buffered reader, such as stdin.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> MoveSource for LineSource<R> {
    fn next_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line),
            Err(err) => Err(InputError::Io(err.to_string())),
        }
    }
}

/// Writes the text of every event to a writer, one event per line.
///
/// Write failures do not interrupt the round. The first one is kept and
/// can be collected with [`WriteObserver::take_error`].
#[derive(Debug)]
pub struct WriteObserver<W> {
    writer: W,
    error: Option<std::io::Error>,
}

impl<W: Write> WriteObserver<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the first write error seen, if any.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Observer for WriteObserver<W> {
    fn on_event(&mut self, event: &Event<'_>) {
        let result = writeln!(self.writer, "{event}").and_then(|()| self.writer.flush());
        if let Err(err) = result {
            log::warn!("failed to write event: {err}");
            self.error.get_or_insert(err);
        }
    }
}
