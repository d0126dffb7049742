use std::ffi::OsString;
use std::fmt;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::parser::FlagParser;

/// An ordered, owned list of command-line tokens.
///
/// Every transforming operation consumes the sequence and hands back the
/// updated one next to whatever it extracted, so calls chain:
///
/// ```text
/// let (seq, prog) = TokenSequence::from_env().pop();
/// let (seq, verbose) = seq.flag("v");
/// ```
///
/// Lookups that miss never fail; they yield `""`, `false`, `None` or the
/// sequence unchanged. Use [`TokenSequence::require_arg`] and
/// [`TokenSequence::require_ternary`] when the caller needs to know why.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TokenSequence(Vec<String>);

/// Where `arg` found its value
enum ArgMatch {
    /// `-name value`: flag at this index, value in the next token
    Separate(usize),
    /// `--name=value` at this index
    Joined(usize, String),
}

impl TokenSequence {
    /// Copy `tokens` into a new sequence
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The process arguments, program name first
    pub fn from_env() -> Self {
        Self::from_os_args(std::env::args_os())
    }

    /// Copy platform strings into a new sequence, replacing invalid
    /// UTF-8 with `U+FFFD`
    pub fn from_os_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        args.into_iter()
            .map(|arg| {
                arg.into_string()
                    .unwrap_or_else(|arg| arg.to_string_lossy().into_owned())
            })
            .collect()
    }

    /// Remove the first `-name value` or `--name=value` and return the value.
    ///
    /// A trailing `-name` yields `""`, which is indistinguishable from an
    /// absent flag here; see [`TokenSequence::require_arg`].
    pub fn arg(self, name: &str) -> (Self, String) {
        match self.locate_arg(name) {
            Some(ArgMatch::Separate(i)) => {
                let value = self.get(i + 1).to_owned();
                debug!("arg `{name}` at {i}: {value:?}");
                (self.remove(i, 2), value)
            }
            Some(ArgMatch::Joined(i, value)) => {
                debug!("arg `{name}` at {i} (joined): {value:?}");
                (self.remove(i, 1), value)
            }
            None => {
                trace!("arg `{name}` not present");
                (self, String::new())
            }
        }
    }

    /// Remove the first `-name` and report whether it was there
    pub fn flag(self, name: &str) -> (Self, bool) {
        match self.locate_flag(name) {
            Some(i) => {
                debug!("flag `{name}` at {i}");
                (self.remove(i, 1), true)
            }
            None => {
                trace!("flag `{name}` not present");
                (self, false)
            }
        }
    }

    /// Remove the first `-name first second` block and return both values.
    ///
    /// Values missing past the end come back as `""`.
    pub fn ternary(self, name: &str) -> (Self, String, String) {
        match self.locate_flag(name) {
            Some(i) => {
                let first = self.get(i + 1).to_owned();
                let second = self.get(i + 2).to_owned();
                debug!("ternary `{name}` at {i}: ({first:?}, {second:?})");
                (self.remove(i, 3), first, second)
            }
            None => {
                trace!("ternary `{name}` not present");
                (self, String::new(), String::new())
            }
        }
    }

    /// Like [`TokenSequence::arg`], but tells an absent flag apart from one
    /// without a value. On error the sequence comes back untouched.
    pub fn require_arg(self, name: &str) -> (Self, Result<String, TokenError>) {
        match self.locate_arg(name) {
            Some(ArgMatch::Separate(i)) if i + 1 >= self.len() => {
                (self, Err(TokenError::MissingValue(name.to_owned())))
            }
            Some(_) => {
                let (seq, value) = self.arg(name);
                (seq, Ok(value))
            }
            None => (self, Err(TokenError::NotFound(name.to_owned()))),
        }
    }

    /// Like [`TokenSequence::ternary`], but fails unless both values are
    /// present. On error the sequence comes back untouched.
    pub fn require_ternary(self, name: &str) -> (Self, Result<(String, String), TokenError>) {
        match self.locate_flag(name) {
            Some(i) if i + 2 >= self.len() => {
                let found = self.len() - i - 1;
                let err = TokenError::MissingTernaryValues {
                    flag: name.to_owned(),
                    found,
                };
                (self, Err(err))
            }
            Some(_) => {
                let (seq, first, second) = self.ternary(name);
                (seq, Ok((first, second)))
            }
            None => (self, Err(TokenError::NotFound(name.to_owned()))),
        }
    }

    /// Position of the first token equal to `value`
    pub fn index(&self, value: &str) -> Option<usize> {
        self.0.iter().position(|token| token == value)
    }

    /// Position of the first of `values` that differs from the token at the
    /// same index, or `None` if all of them match.
    ///
    /// Positions past the end compare against `""`.
    pub fn mismatch<I, S>(&self, values: I) -> Option<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .enumerate()
            .find(|(i, value)| value.as_ref() != self.get(*i))
            .map(|(i, _)| i)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove and return the first token, or `""` if there is none
    pub fn pop(mut self) -> (Self, String) {
        if self.0.is_empty() {
            return (self, String::new());
        }
        let head = self.0.remove(0);
        (self, head)
    }

    /// Prepend `tokens`, keeping their order
    pub fn push<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.splice(0..0, tokens.into_iter().map(Into::into));
        self
    }

    /// Insert `tokens` before the token at `i`, or append them if `i` is
    /// past the last token.
    pub fn insert<I, S>(mut self, i: usize, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into);
        if i >= self.0.len() {
            self.0.extend(tokens);
        } else {
            self.0.splice(i..i, tokens);
        }
        self
    }

    /// Remove up to `n` tokens starting at `i`
    pub fn remove(mut self, i: usize, n: usize) -> Self {
        let len = self.0.len();
        if i < len && n >= 1 {
            let end = i.saturating_add(n).min(len);
            self.0.drain(i..end);
        }
        self
    }

    /// Copy of up to `n` tokens starting at `i`; `None` takes the rest.
    pub fn slice(&self, i: usize, n: Option<usize>) -> Vec<String> {
        let len = self.0.len();
        if i >= len {
            return Vec::new();
        }
        let end = n.map_or(len, |n| i.saturating_add(n).min(len));
        self.0[i..end].to_vec()
    }

    /// Token at `i`, or `""` if out of range
    pub fn get(&self, i: usize) -> &str {
        self.0.get(i).map(String::as_str).unwrap_or_default()
    }

    /// Tokens concatenated with `sep` between them
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }

    /// Borrow the tokens
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the tokens in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Unwrap into the underlying tokens
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    fn locate_flag(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|token| {
            FlagParser::parse_token(token).is_some_and(|flag| flag.is(name))
        })
    }

    fn locate_arg(&self, name: &str) -> Option<ArgMatch> {
        self.0.iter().enumerate().find_map(|(i, token)| {
            let flag = FlagParser::parse_token(token)?;
            if flag.is(name) {
                Some(ArgMatch::Separate(i))
            } else {
                flag.assigned(name)
                    .map(|value| ArgMatch::Joined(i, value.to_owned()))
            }
        })
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" "))
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for TokenSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[String]> for TokenSequence {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
