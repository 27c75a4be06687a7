//! Status lines
//!
//! The first line of every server response: a 3-digit decimal code and a
//! free-text message. Status lines never wrap.

use crate::error::{DictError, Result};

use super::atoms::split_atoms;

/// A parsed status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// 3-digit status code
    pub code: u16,

    /// Message text after the code, untokenized
    pub message: String,
}

impl Status {
    /// Parse a status line
    ///
    /// The leading token must be exactly three ASCII digits; anything
    /// else is a protocol error.
    pub fn parse(line: &str) -> Result<Status> {
        let trimmed = line.trim_start();
        let (token, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest),
            None => (trimmed, ""),
        };

        if token.len() != 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DictError::Protocol(format!(
                "invalid status line: {line:?}"
            )));
        }

        // Three ASCII digits always fit in u16
        let code = token.parse::<u16>().map_err(|_| {
            DictError::Protocol(format!("invalid status code in line: {line:?}"))
        })?;

        Ok(Status {
            code,
            message: rest.trim().to_string(),
        })
    }

    /// The message tokenized into atoms
    pub fn message_atoms(&self) -> Vec<String> {
        split_atoms(&self.message)
    }

    /// Leading numeric atom of the message, if any
    ///
    /// Used for the definition count announced by a 150 status.
    pub fn leading_count(&self) -> Option<usize> {
        self.message
            .split_whitespace()
            .next()
            .and_then(|atom| atom.parse::<usize>().ok())
    }
}
