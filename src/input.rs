//! Input abstractions shared by the plain executor and the debugger.
//!
//! The executor only ever needs single bytes (`ByteSource`); the debugger
//! needs whole lines so it can recognise meta-commands before any byte
//! reaches the VM (`LineSource`). Keeping these as separate traits lets the
//! debugger sit in front of a `LineSource` while still handing the executor
//! a plain `ByteSource`.

use std::collections::VecDeque;
use std::io::BufRead;

/// A source of input bytes for the `in` instruction.
pub trait ByteSource {
    /// Returns the next byte, or `None` if the source is exhausted.
    fn next_byte(&mut self) -> Option<u8>;
}

/// A source of input lines, as consumed by the debugger's meta-command
/// layer. A line never includes its terminating `\n`.
pub trait LineSource {
    fn next_line(&mut self) -> Option<String>;
}

/// Adapts any buffered reader (stdin, a script file) into a `LineSource`.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader { inner }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(_) => None,
        }
    }
}

/// Feeds the executor from a plain `LineSource`, one byte at a time,
/// reinserting the newline the program expects to see after each line.
///
/// This is the `ByteSource` the non-debugging `run` subcommand uses: no
/// meta-command interception, every byte the line source produces reaches
/// the VM unchanged.
pub struct LineBuffered<S> {
    source: S,
    pending: VecDeque<u8>,
}

impl<S: LineSource> LineBuffered<S> {
    pub fn new(source: S) -> Self {
        LineBuffered { source, pending: VecDeque::new() }
    }
}

impl<S: LineSource> ByteSource for LineBuffered<S> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.pending.is_empty() {
            let line = self.source.next_line()?;
            self.pending.extend(line.into_bytes());
            self.pending.push_back(b'\n');
        }
        self.pending.pop_front()
    }
}

/// A `ByteSource` over an already-buffered queue of bytes, borrowed from a
/// longer-lived owner. Used by the debugger to hand the executor exactly the
/// bytes of one line without giving it access to the debugger itself.
pub struct QueueSource<'a>(pub &'a mut VecDeque<u8>);

impl<'a> ByteSource for QueueSource<'a> {
    fn next_byte(&mut self) -> Option<u8> {
        self.0.pop_front()
    }
}
