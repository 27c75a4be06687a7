//! Model types
//!
//! Immutable value objects built while parsing server responses. None of
//! them hold a reference back to the connection that produced them.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

// =============================================================================
// Database
// =============================================================================

/// A dictionary database offered by the server
///
/// Compared and hashed by `name` only; the description is display text.
#[derive(Debug, Clone, Serialize)]
pub struct Database {
    /// Short identifier used in commands (e.g. `wn`)
    pub name: String,

    /// Human-readable description (e.g. `WordNet (r) 3.0`)
    pub description: String,
}

impl Database {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Database {}

impl Hash for Database {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

// =============================================================================
// MatchingStrategy
// =============================================================================

/// A matching strategy supported by MATCH (e.g. exact, prefix)
///
/// Same shape as [`Database`]; discovery order is meaningful, servers may
/// list strategies in preference order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchingStrategy {
    /// Identifier used in MATCH commands
    pub name: String,

    /// Human-readable description
    pub description: String,
}

impl MatchingStrategy {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl PartialEq for MatchingStrategy {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MatchingStrategy {}

impl Hash for MatchingStrategy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for MatchingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

// =============================================================================
// Definition
// =============================================================================

/// One definition of a word from one database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// The queried word
    pub word: String,

    /// Identifier of the database the definition came from
    pub database: String,

    /// Body text, lines joined with `\n`
    pub text: String,
}

impl Definition {
    pub fn new(word: impl Into<String>, database: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            database: database.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.word, self.database)?;
        write!(f, "{}", self.text)
    }
}

// =============================================================================
// DatabaseSelector
// =============================================================================

/// Database argument of a MATCH or DEFINE command
///
/// The `*` and `!` sentinels are not real databases; they pass through
/// outgoing commands literally and are never resolved against the known
/// database set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DatabaseSelector {
    /// `*` - query all databases
    All,

    /// `!` - query only the first database with a result
    First,

    /// A named database
    Named(String),
}

impl DatabaseSelector {
    /// The identifier as it appears on the wire
    pub fn as_str(&self) -> &str {
        match self {
            DatabaseSelector::All => "*",
            DatabaseSelector::First => "!",
            DatabaseSelector::Named(name) => name,
        }
    }
}

impl From<&str> for DatabaseSelector {
    fn from(s: &str) -> Self {
        match s {
            "*" => DatabaseSelector::All,
            "!" => DatabaseSelector::First,
            name => DatabaseSelector::Named(name.to_string()),
        }
    }
}

impl From<&Database> for DatabaseSelector {
    fn from(db: &Database) -> Self {
        DatabaseSelector::Named(db.name.clone())
    }
}

impl fmt::Display for DatabaseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
