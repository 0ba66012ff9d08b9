//! Duration encoding: the gaps between consecutive beats, and the textual
//! `3+3+2` form with leading separators encoding a rotation offset.

use crate::error::{ParseError, Result};
use crate::pattern::Pattern;
use logos::Logos;

/// Tokens of the duration-string grammar
/// `^([+-]*)([1-9][0-9]*([+-][1-9][0-9]*)*)$`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Token {
    #[token("+")]
    #[token("-")]
    Separator,

    #[regex(r"[1-9][0-9]*", |lex| lex.slice().parse::<usize>().ok())]
    Number(usize),
}

#[derive(Clone, Copy)]
enum State {
    Leading,
    AfterNumber,
    AfterSeparator,
}

impl Pattern {
    /// Durations between consecutive beats, starting from the first beat
    /// and wrapping past the end. Empty for a silent pattern.
    ///
    /// ```
    /// use rhythmic_core::Pattern;
    ///
    /// assert_eq!(Pattern::from_pattern("x--x--x-").durations(), vec![3, 3, 2]);
    /// assert_eq!(Pattern::from_pattern("--x--x-x").durations(), vec![3, 2, 3]);
    /// ```
    pub fn durations(&self) -> Vec<usize> {
        let len = self.pulses.len();
        let Some(first) = self.first_beat() else {
            return Vec::new();
        };
        let mut durations = Vec::new();
        let mut current = 1;
        for i in 1..=len {
            if self.pulses[(first + i) % len].is_beat() {
                durations.push(current);
                current = 1;
            } else {
                current += 1;
            }
        }
        durations
    }

    /// Like [`durations`](Pattern::durations) but anchored at position 0:
    /// the gap before the first beat comes first, and nothing wraps.
    /// A silent pattern yields its whole length as one gap.
    pub fn gaps(&self) -> Vec<usize> {
        let Some(first) = self.first_beat() else {
            return vec![self.pulses.len()];
        };
        let mut gaps = Vec::new();
        if first > 0 {
            gaps.push(first);
        }
        let mut previous = first;
        for i in first + 1..self.pulses.len() {
            if self.pulses[i].is_beat() {
                gaps.push(i - previous);
                previous = i;
            }
        }
        gaps.push(self.pulses.len() - previous);
        gaps
    }

    /// Serialize the durations, joined by `separator` and preceded by one
    /// separator per leading rest. Empty for a silent pattern.
    pub fn to_duration_string(&self, separator: &str) -> String {
        let Some(first) = self.first_beat() else {
            return String::new();
        };
        let values: Vec<String> = self.durations().iter().map(|d| d.to_string()).collect();
        separator.repeat(first) + &values.join(separator)
    }

    /// Build a pattern from a list of durations: one beat per value, each
    /// followed by `value - 1` rests.
    pub fn from_durations(durations: &[usize]) -> Pattern {
        let mut pattern = Pattern::new();
        pattern.beat_each(durations);
        pattern
    }

    /// Parse a duration string such as `3+3+2` or `++1+3`. Leading `+` or
    /// `-` separators encode a rotation applied after building, so the
    /// result round-trips through
    /// [`to_duration_string`](Pattern::to_duration_string).
    ///
    /// Input not matching `([+-]*)([1-9][0-9]*([+-][1-9][0-9]*)*)` is a
    /// hard error.
    pub fn from_duration_str(input: &str) -> Result<Pattern> {
        let malformed = || ParseError::MalformedDurations {
            input: input.to_string(),
        };

        let mut rotation = 0usize;
        let mut values = Vec::new();
        let mut state = State::Leading;

        for token in Token::lexer(input) {
            state = match (state, token.map_err(|_| malformed())?) {
                (State::Leading, Token::Separator) => {
                    rotation += 1;
                    State::Leading
                }
                (State::Leading | State::AfterSeparator, Token::Number(n)) => {
                    values.push(n);
                    State::AfterNumber
                }
                (State::AfterNumber, Token::Separator) => State::AfterSeparator,
                _ => return Err(malformed()),
            };
        }
        if !matches!(state, State::AfterNumber) {
            return Err(malformed());
        }

        // Right rotation puts one rest in front per leading separator,
        // inverting to_duration_string exactly.
        let mut pattern = Pattern::from_durations(&values);
        pattern.rotate(rotation as i64);
        Ok(pattern)
    }
}
