//! Yes/no confirmation before mutating anything

use std::io::{self, BufRead, Write};

/// Asks the user to confirm an action
pub trait Confirm {
    /// `Ok(true)` only for an explicit affirmative answer
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Reads answers line by line from a reader, echoing the question to a writer
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} [y/N] ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF leaves `answer` empty, which declines.
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// `y` or `yes`, ignoring case and surrounding whitespace
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
