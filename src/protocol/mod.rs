//! Protocol Module
//!
//! The DICT wire protocol (RFC 2229): text lines over TCP.
//!
//! ## Exchange Format
//!
//! ```text
//! C: MATCH * exact "cat"
//! S: 152 2 matches found
//! S: wn "cat"
//! S: foo "cat"
//! S: .
//! ```
//!
//! Every exchange is one command line followed by one status line; status
//! codes that announce data are followed by lines terminated by a lone
//! `.`. Lines are CRLF-terminated on the wire; the reader also accepts
//! bare LF.
//!
//! ### Commands
//! - `SHOW DB`                      - list databases
//! - `SHOW STRATEGIES`              - list matching strategies
//! - `MATCH <db> <strategy> "<w>"`  - list matching words
//! - `DEFINE <db> <word>`           - retrieve definitions
//! - `QUIT`                         - close the session
//!
//! ### Status Codes
//! - 220 banner, 226 closing
//! - 110/554 database list / none present
//! - 111/555 strategy list / none available
//! - 152/552 matches follow / no match (550/551 invalid db/strategy)
//! - 150/151/552 definitions follow, per-definition header / not found

mod atoms;
mod status;
mod command;
mod codec;

pub use atoms::{quote_atom, quote_atom_always, split_atoms, split_first_atom};
pub use status::Status;
pub use command::Command;
pub use codec::{read_data_block, read_line, read_status, read_text_block, write_line};
