//! Operator confirmation before committing.

use std::io::{BufRead, IsTerminal, Write as _};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use dialoguer::Input;

use crate::error::PromptError;

/// The operator's answer to the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
    /// Ctrl-C, SIGINT or end of input while waiting for an answer.
    Interrupted,
}

type Answer = Result<Confirmation, PromptError>;

impl Confirmation {
    /// Interpret a typed answer: only `y` (any case, surrounding whitespace
    /// ignored) accepts.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("y") {
            Self::Accepted
        } else {
            Self::Declined
        }
    }
}

/// Trait for asking the operator a yes/no question.
///
/// This abstraction allows mocking the prompt in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt {
    fn confirm(&self, question: &str) -> Result<Confirmation, PromptError>;
}

/// Prompt on the terminal, or read one line from stdin when it is piped.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<Confirmation, PromptError> {
        let question = question.to_string();

        if !std::io::stdin().is_terminal() {
            return confirm_interruptibly(move || {
                read_piped_answer(&question, &mut std::io::stdin().lock())
            });
        }

        confirm_interruptibly(move || read_terminal_answer(&question))
    }
}

/// Wait for `read`, or for SIGINT, whichever comes first.
///
/// The handler stays installed for the rest of the process; it is only
/// ever installed once, since there is a single confirmation per run.
fn confirm_interruptibly<F>(read: F) -> Answer
where
    F: FnOnce() -> Answer + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let interrupt = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt.send(Ok(Confirmation::Interrupted));
    })
    .map_err(PromptError::Signal)?;

    first_answer(read, tx, &rx)
}

/// Run `read` on a worker thread and return the first message on `rx`.
///
/// A reader still blocked on input is abandoned; it dies with the process.
fn first_answer<F>(read: F, tx: Sender<Answer>, rx: &Receiver<Answer>) -> Answer
where
    F: FnOnce() -> Answer + Send + 'static,
{
    thread::spawn(move || {
        let _ = tx.send(read());
    });

    rx.recv().unwrap_or(Ok(Confirmation::Interrupted))
}

fn read_terminal_answer(question: &str) -> Answer {
    let answer = Input::<String>::new()
        .with_prompt(question)
        .allow_empty(true)
        .interact_text();

    match answer {
        Ok(answer) => Ok(Confirmation::from_answer(&answer)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
            Ok(Confirmation::Interrupted)
        }
        Err(dialoguer::Error::IO(e)) => Err(PromptError::Io(e)),
    }
}

fn read_piped_answer<R: BufRead>(question: &str, input: &mut R) -> Answer {
    let mut stdout = std::io::stdout();
    write!(stdout, "{question} ").map_err(PromptError::Io)?;
    stdout.flush().map_err(PromptError::Io)?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(PromptError::Io)?;
    println!();

    if read == 0 {
        return Ok(Confirmation::Interrupted);
    }
    Ok(Confirmation::from_answer(&answer))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_from_answer_accepts_only_y() {
        assert_eq!(Confirmation::from_answer("y"), Confirmation::Accepted);
        assert_eq!(Confirmation::from_answer("  Y \n"), Confirmation::Accepted);
        assert_eq!(Confirmation::from_answer("yes"), Confirmation::Declined);
        assert_eq!(Confirmation::from_answer("n"), Confirmation::Declined);
        assert_eq!(Confirmation::from_answer(""), Confirmation::Declined);
    }

    #[test]
    fn test_piped_answer_reads_one_line() {
        let mut input = Cursor::new("Y\nignored\n");
        let answer = read_piped_answer("Commit? (y/n):", &mut input).unwrap();
        assert_eq!(answer, Confirmation::Accepted);
    }

    #[test]
    fn test_interrupt_wins_over_blocked_reader() {
        let (tx, rx) = mpsc::channel();
        let (_release, blocked) = mpsc::channel::<()>();

        tx.send(Ok(Confirmation::Interrupted)).unwrap();
        let answer = first_answer(
            move || {
                let _ = blocked.recv();
                Ok(Confirmation::Accepted)
            },
            tx,
            &rx,
        )
        .unwrap();

        assert_eq!(answer, Confirmation::Interrupted);
    }

    #[test]
    fn test_reader_answer_is_returned() {
        let (tx, rx) = mpsc::channel();
        let answer = first_answer(|| Ok(Confirmation::Declined), tx, &rx).unwrap();
        assert_eq!(answer, Confirmation::Declined);
    }

    #[test]
    fn test_reader_error_is_returned() {
        let (tx, rx) = mpsc::channel();
        let answer = first_answer(
            || Err(PromptError::Io(std::io::Error::other("stdin closed"))),
            tx,
            &rx,
        );
        assert!(matches!(answer, Err(PromptError::Io(_))));
    }

    #[test]
    fn test_piped_eof_is_interrupted() {
        let mut input = Cursor::new("");
        let answer = read_piped_answer("Commit? (y/n):", &mut input).unwrap();
        assert_eq!(answer, Confirmation::Interrupted);
    }
}
