//! Command definitions
//!
//! Outgoing command lines sent to the server.

use crate::model::DatabaseSelector;

use super::atoms::{quote_atom, quote_atom_always};

/// A command to send to the server
#[derive(Debug, Clone)]
pub enum Command {
    /// List all databases
    ShowDatabases,

    /// List all matching strategies
    ShowStrategies,

    /// List words matching a pattern
    Match {
        database: DatabaseSelector,
        strategy: String,
        word: String,
    },

    /// Retrieve definitions of a word
    Define {
        database: DatabaseSelector,
        word: String,
    },

    /// Close the session
    Quit,
}

impl Command {
    /// Render the command as a wire line (without the trailing CRLF)
    pub fn line(&self) -> String {
        match self {
            Command::ShowDatabases => "SHOW DB".to_string(),
            Command::ShowStrategies => "SHOW STRATEGIES".to_string(),
            Command::Match {
                database,
                strategy,
                word,
            } => format!(
                "MATCH {} {} {}",
                quote_atom(database.as_str()),
                quote_atom(strategy),
                quote_atom_always(word)
            ),
            Command::Define { database, word } => {
                format!("DEFINE {} {}", quote_atom(database.as_str()), quote_atom(word))
            }
            Command::Quit => "QUIT".to_string(),
        }
    }
}
