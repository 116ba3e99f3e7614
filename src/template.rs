//! Marker rules webq applies when it loads a searcher template.
//!
//! A template holds positional markers `{0}`, `{1}`, ... numbered from zero
//! without gaps. Anything else between braces makes webq refuse the searcher.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TemplateError {
    #[error("missing closing marker `}}`")]
    Unclosed,
    #[error("no number between markers")]
    Empty,
    #[error("marker contains a non-digit: {0}")]
    NotADigit(char),
    #[error("marker repeats digit {0}")]
    Repeated(u32),
    #[error("markers are not sequential from 0")]
    NotSequential,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Opened,
    Digit,
    Closed,
}

/// Counts the positional markers in `template`.
pub fn markers(template: &str) -> Result<usize, TemplateError> {
    let mut seen: u16 = 0;
    let mut count = 0;
    let mut state = State::Closed;
    for c in template.chars() {
        match (c, state) {
            ('{', State::Closed) => state = State::Opened,
            ('{', _) => return Err(TemplateError::Unclosed),
            ('}', State::Digit) => state = State::Closed,
            ('}', _) => return Err(TemplateError::Empty),
            (c, State::Opened) => {
                let digit = c.to_digit(10).ok_or(TemplateError::NotADigit(c))?;
                if seen & (1 << digit) != 0 {
                    return Err(TemplateError::Repeated(digit));
                }
                seen |= 1 << digit;
                count += 1;
                state = State::Digit;
            }
            _ => {}
        }
    }
    if seen != (1 << count) - 1 {
        return Err(TemplateError::NotSequential);
    }
    if state != State::Closed {
        return Err(TemplateError::Unclosed);
    }
    Ok(count)
}
