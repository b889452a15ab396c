#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Validated student names.

use std::{fmt::Display, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::{NameRule, RecordError};

/// A word made of Unicode letters (general category `L`) and nothing else.
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letter pattern is valid"));

/// A student's full name.
///
/// Every whitespace-separated word consists of letters only and is
/// capitalized: an uppercase letter can only start a word and every following
/// letter is lowercase. `"Ivanov Ivan Ivanovich"` is accepted, `"petrov Ivan"`,
/// `"McDonald"` and `"R2D2"` are not. Letter numbers such as `"Ⅻ"` are not
/// letters. A name without any words has nothing to reject and is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName(String);

impl StudentName {
    /// Validates `name` and wraps it.
    pub fn new(name: impl Into<String>) -> Result<Self, RecordError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// The name exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Checks every word of `name`, reporting the first one that fails.
fn validate(name: &str) -> Result<(), RecordError> {
    for word in name.split_whitespace() {
        let rule = if !LETTERS.is_match(word) {
            Some(NameRule::NotAlphabetic)
        } else if !is_title_case(word) {
            Some(NameRule::NotTitleCase)
        } else {
            None
        };

        if let Some(rule) = rule {
            return Err(RecordError::InvalidName {
                token: word.to_string(),
                rule,
            });
        }
    }

    Ok(())
}

/// True when uppercase letters only follow uncased characters, lowercase
/// letters only follow cased ones, and there is at least one cased letter.
fn is_title_case(word: &str) -> bool {
    let mut previous_cased = false;
    let mut any_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }

    any_cased
}

impl FromStr for StudentName {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for StudentName {
    type Error = RecordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for StudentName {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for StudentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
