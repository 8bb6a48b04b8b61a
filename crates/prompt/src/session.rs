//! The prompt session.
//!
//! A [`Prompt`] owns one input source, one output sink and a
//! [`FormattingPolicy`]. Every operation writes its prompt, flushes, then
//! blocks reading exactly one line. Nothing is remembered between calls.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use lineprompt_core::{AppError, AppResult, FormattingPolicy};

use crate::format::{render_choice, render_prompt};
use crate::types::{InputOptions, SelectOptions, Selection};

/// Answers that [`Prompt::confirm`] treats as "yes".
pub const AFFIRMATIVE_ANSWERS: [&str; 2] = ["y", "yes"];

/// An interactive prompt session over a reader and a writer.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use lineprompt_prompt::{FormattingPolicy, InputOptions, Prompt};
///
/// let mut prompt = Prompt::new(Cursor::new("\n"), Vec::new(), FormattingPolicy::standard());
/// let answer = prompt
///     .ask("what is the meaning of life", Some(&InputOptions::new().with_default("42")))
///     .unwrap();
/// assert_eq!(answer, "42");
///
/// let (_, output) = prompt.into_parts();
/// assert_eq!(output, b"what is the meaning of life? [42] ");
/// ```
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    policy: FormattingPolicy,
}

/// Session bound to the process's stdin and stdout.
pub fn stdio(policy: FormattingPolicy) -> Prompt<StdinLock<'static>, Stdout> {
    Prompt::new(io::stdin().lock(), io::stdout(), policy)
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W, policy: FormattingPolicy) -> Self {
        Self {
            reader,
            writer,
            policy,
        }
    }

    /// Create a session from an optional policy; `None` disables all
    /// decoration.
    pub fn with_policy(reader: R, writer: W, policy: Option<FormattingPolicy>) -> Self {
        Self::new(reader, writer, policy.unwrap_or_default())
    }

    pub fn policy(&self) -> &FormattingPolicy {
        &self.policy
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Ask a free-text question.
    ///
    /// Empty input resolves to the default when one is set and fails with
    /// [`AppError::EmptyInput`] otherwise. The validator only sees typed
    /// answers; a default is trusted as given.
    pub fn ask(&mut self, text: &str, opts: Option<&InputOptions>) -> AppResult<String> {
        let default = opts.filter(|o| o.has_default()).map(|o| o.default.as_str());
        let force = opts.is_some_and(|o| o.append_question_mark);

        let prompt = render_prompt(text, &self.policy, force, default);
        self.write_prompt(&prompt)?;
        let input = self.read_line()?;

        if input.is_empty() {
            return match default {
                Some(default) => {
                    tracing::debug!("Empty answer, using default");
                    Ok(default.to_string())
                }
                None => Err(AppError::EmptyInput),
            };
        }

        if let Some(validator) = opts.and_then(|o| o.validator.as_ref()) {
            validator.validate(&input).map_err(|reason| {
                tracing::debug!("Answer rejected by validator: {}", reason);
                AppError::ValidationFailed(reason)
            })?;
        }

        Ok(input)
    }

    /// Ask a yes/no question.
    ///
    /// Only `y` and `yes` count as yes. Any other answer is `false`, not an
    /// error. The validator runs on the answer after default substitution.
    pub fn confirm(&mut self, text: &str, opts: Option<&InputOptions>) -> AppResult<bool> {
        let default = opts.filter(|o| o.has_default()).map(|o| o.default.as_str());
        let force = opts.is_some_and(|o| o.append_question_mark);

        let prompt = render_prompt(text, &self.policy, force, default);
        self.write_prompt(&prompt)?;
        let input = self.read_line()?;

        let answer = if input.is_empty() {
            match default {
                Some(default) => {
                    tracing::debug!("Empty answer, using default");
                    default.to_string()
                }
                None => return Err(AppError::EmptyInput),
            }
        } else {
            input
        };

        if let Some(validator) = opts.and_then(|o| o.validator.as_ref()) {
            validator.validate(&answer).map_err(|reason| {
                tracing::debug!("Answer rejected by validator: {}", reason);
                AppError::ValidationFailed(reason)
            })?;
        }

        Ok(is_affirmative(&answer))
    }

    /// Ask the operator to pick one of `choices`.
    ///
    /// Choices are listed 1-based, one per line, before the question. The
    /// returned [`Selection`] carries the 0-based index. An empty list fails
    /// with [`AppError::EmptyChoiceList`] before anything is written or read.
    pub fn select<S: AsRef<str>>(
        &mut self,
        text: &str,
        choices: &[S],
        opts: Option<&SelectOptions>,
    ) -> AppResult<Selection> {
        if choices.is_empty() {
            return Err(AppError::EmptyChoiceList);
        }

        for (i, choice) in choices.iter().enumerate() {
            self.writer
                .write_all(render_choice(i + 1, choice.as_ref()).as_bytes())?;
        }

        let default = opts
            .filter(|o| o.has_default())
            .map(|o| o.default.to_string());
        let force = opts.is_some_and(|o| o.append_question_mark);

        let prompt = render_prompt(text, &self.policy, force, default.as_deref());
        self.write_prompt(&prompt)?;
        let input = self.read_line()?;

        let index = resolve_position(&input, choices.len(), opts)?;
        Ok(Selection {
            text: choices[index].as_ref().to_string(),
            index,
        })
    }

    /// Keep asking until the answer is accepted, at most `max_attempts` times.
    ///
    /// Retryable errors (see [`AppError::is_retryable`]) are written to the
    /// output on their own line before asking again. Other errors, and the
    /// error of the last attempt, are returned.
    pub fn ask_until_valid(
        &mut self,
        text: &str,
        opts: Option<&InputOptions>,
        max_attempts: usize,
    ) -> AppResult<String> {
        let attempts = max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.ask(text, opts) {
                Ok(answer) => return Ok(answer),
                Err(err) if err.is_retryable() && attempt < attempts => {
                    tracing::debug!(attempt, "Retrying prompt after: {}", err);
                    writeln!(self.writer, "{}", err)?;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Write the prompt and flush so it is visible before we block on input.
    fn write_prompt(&mut self, prompt: &str) -> AppResult<()> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line and trim it.
    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;

        // A line cut off by EOF is not an answer
        if read == 0 || !line.ends_with('\n') {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }

        tracing::trace!("Read {} bytes: {:?}", read, line);
        Ok(line.trim().to_string())
    }
}

/// Whether `answer` is one of [`AFFIRMATIVE_ANSWERS`].
///
/// The match is exact and case-sensitive; `"ny"` or `"maybe"` are not yes.
pub fn is_affirmative(answer: &str) -> bool {
    AFFIRMATIVE_ANSWERS.contains(&answer)
}

/// Resolve trimmed selection input to a 0-based index into `count` choices.
fn resolve_position(input: &str, count: usize, opts: Option<&SelectOptions>) -> AppResult<usize> {
    let position: i64 = if input.is_empty() {
        match opts.filter(|o| o.has_default()) {
            Some(o) => {
                tracing::debug!("Empty selection, using default {}", o.default);
                i64::try_from(o.default).map_err(|_| {
                    AppError::InvalidSelection(format!("default {} is out of range", o.default))
                })?
            }
            None => return Err(AppError::EmptyInput),
        }
    } else {
        if let Some(validator) = opts.and_then(|o| o.validator.as_ref()) {
            validator
                .validate(input)
                .map_err(AppError::ValidationFailed)?;
        }

        input
            .parse::<i64>()
            .map_err(|_| AppError::InvalidSelection(format!("{:?} is not a number", input)))?
    };

    let upper = i64::try_from(count).unwrap_or(i64::MAX);
    if position < 1 || position > upper {
        tracing::debug!("Selection {} outside 1..={}", position, count);
        return Err(AppError::InvalidSelection(format!(
            "{} is not between 1 and {}",
            position, count
        )));
    }

    Ok((position - 1) as usize)
}
