//! The blocking "continue?" pause between timed combinations.

use std::fmt;
use std::io::{self, BufRead};

use console::Term;

/// Blocks until the operator releases the driver.
pub trait OperatorPrompt {
    /// Called after the timed run of the combination titled `title`.
    ///
    /// An error of kind [`io::ErrorKind::Interrupted`] is taken as the
    /// operator cancelling the run.
    fn wait_for_continue(&mut self, title: &str) -> io::Result<()>;
}

impl<P: OperatorPrompt + ?Sized> OperatorPrompt for &mut P {
    fn wait_for_continue(&mut self, title: &str) -> io::Result<()> {
        (**self).wait_for_continue(title)
    }
}

/// Writes `message` to `term` and blocks until a line of input arrives.
///
/// An attended terminal is read through [`Term::read_line`]. Otherwise the
/// line comes from the process's stdin, so the pause still holds when output
/// is piped or redirected. End of input releases the pause.
pub fn wait_for_line(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(message)?;
    if term.is_term() {
        return release_on_eof(term.read_line().map(|_| ()));
    }
    read_confirmation(&mut io::stdin().lock())
}

/// Consumes exactly one line from `input`. `Ok` at end of input.
fn read_confirmation<R: BufRead + ?Sized>(input: &mut R) -> io::Result<()> {
    let mut line = String::new();
    release_on_eof(input.read_line(&mut line).map(|_| ()))
}

fn release_on_eof(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => other,
    }
}

enum Input {
    Stdin,
    Reader(Box<dyn BufRead + Send>),
}

/// Prompts on the controlling terminal and waits for a line of input.
///
/// Any line releases the pause, and so does end of input.
pub struct TerminalPrompt {
    term: Term,
    input: Input,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::with_term(Term::stdout())
    }

    pub fn with_term(term: Term) -> Self {
        Self {
            term,
            input: Input::Stdin,
        }
    }

    /// Reads confirmations from `input` instead of the terminal or stdin.
    pub fn with_input(mut self, input: impl BufRead + Send + 'static) -> Self {
        self.input = Input::Reader(Box::new(input));
        self
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TerminalPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalPrompt")
            .field("term", &self.term)
            .field("stdin", &matches!(self.input, Input::Stdin))
            .finish()
    }
}

impl OperatorPrompt for TerminalPrompt {
    fn wait_for_continue(&mut self, title: &str) -> io::Result<()> {
        let message = format!("Finished timing '{title}'. Type carriage return to continue:");
        match &mut self.input {
            Input::Stdin => wait_for_line(&self.term, &message),
            Input::Reader(reader) => {
                self.term.write_line(&message)?;
                read_confirmation(reader)
            }
        }
    }
}
