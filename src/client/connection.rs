//! Connection Engine
//!
//! Owns the socket and a buffered reader/writer pair over it. Every
//! operation sends one command line, reads one status line, and drains
//! whatever data the status announces before returning. The whole
//! exchange runs under one mutex, so callers on multiple threads
//! serialize instead of desynchronizing the read cursor.
//!
//! After any I/O or protocol error the connection is unusable; callers
//! should close and discard it. There are no retries and no built-in
//! timeouts (socket deadlines are configured separately).

use std::collections::HashMap;
use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::error::{DictError, Result};
use crate::model::{Database, DatabaseSelector, Definition, MatchingStrategy};
use crate::protocol::{
    read_data_block, read_status, read_text_block, split_atoms, split_first_atom, write_line,
    Command, Status,
};
use crate::DEFAULT_PORT;

/// A connection to a DICT server
#[derive(Debug)]
pub struct DictConnection {
    /// Reader/writer pair; locked for the full request/response exchange
    io: Mutex<ConnectionIo>,

    /// Peer address for logging
    peer_addr: String,
}

/// Buffered channels over the socket, 1:1 with the connection
#[derive(Debug)]
struct ConnectionIo {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl ConnectionIo {
    fn send(&mut self, command: &Command) -> Result<()> {
        write_line(&mut self.writer, &command.line())
    }

    fn read_status(&mut self) -> Result<Status> {
        read_status(&mut self.reader)
    }
}

impl DictConnection {
    /// Connect to a DICT server and perform the welcome handshake
    ///
    /// The server must greet with status 220; any other code, an
    /// unresolvable host, or an I/O failure fails the call and the
    /// socket is closed on the way out.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).map_err(|e| {
            DictError::Connection(format!("failed to connect to {host}:{port}: {e}"))
        })?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| format!("{host}:{port}"));

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        let mut io = ConnectionIo {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
        };

        let banner = io.read_status()?;
        if banner.code != 220 {
            return Err(DictError::Connection(format!(
                "server refused session: {} {}",
                banner.code, banner.message
            )));
        }

        tracing::debug!("Connected to {} ({})", peer_addr, banner.message);

        Ok(Self {
            io: Mutex::new(io),
            peer_addr,
        })
    }

    /// Connect using the default DICT port (2628)
    pub fn connect_default(host: &str) -> Result<Self> {
        Self::connect(host, DEFAULT_PORT)
    }

    /// Connect using a [`ClientConfig`], applying its socket timeouts
    pub fn connect_config(config: &ClientConfig) -> Result<Self> {
        let conn = Self::connect(&config.host, config.port)?;
        conn.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;
        Ok(conn)
    }

    /// Configure socket deadlines (0 disables)
    pub fn set_timeouts(&self, read_ms: u64, write_ms: u64) -> Result<()> {
        let io = self.io.lock();
        let read_stream = io.reader.get_ref();
        let write_stream = io.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    // -------------------------------------------------------------------------
    // Query Operations
    // -------------------------------------------------------------------------

    /// List all databases the server offers (`SHOW DB`)
    ///
    /// Returns an empty map on status 554 (no databases present).
    pub fn database_list(&self) -> Result<HashMap<String, Database>> {
        let mut io = self.io.lock();
        io.send(&Command::ShowDatabases)?;

        let status = io.read_status()?;
        match status.code {
            110 => {
                let databases = read_data_block(&mut io.reader, |line, _| {
                    let (name, description) = parse_listing_line("SHOW DB", line)?;
                    Ok(Database::new(name, description))
                })?;
                tracing::debug!("{}: {} databases", self.peer_addr, databases.len());
                Ok(databases
                    .into_iter()
                    .map(|db| (db.name.clone(), db))
                    .collect())
            }
            554 => Ok(HashMap::new()),
            code => Err(DictError::unexpected_status("SHOW DB", code, &status.message)),
        }
    }

    /// List all matching strategies the server supports (`SHOW STRATEGIES`)
    ///
    /// Discovery order is preserved and duplicate names are dropped.
    /// Returns an empty list on status 555 (no strategies available).
    pub fn strategy_list(&self) -> Result<Vec<MatchingStrategy>> {
        let mut io = self.io.lock();
        io.send(&Command::ShowStrategies)?;

        let status = io.read_status()?;
        match status.code {
            111 => {
                let parsed = read_data_block(&mut io.reader, |line, _| {
                    let (name, description) = parse_listing_line("SHOW STRATEGIES", line)?;
                    Ok(MatchingStrategy::new(name, description))
                })?;

                let mut strategies: Vec<MatchingStrategy> = Vec::with_capacity(parsed.len());
                for strategy in parsed {
                    if !strategies.contains(&strategy) {
                        strategies.push(strategy);
                    }
                }
                tracing::debug!("{}: {} strategies", self.peer_addr, strategies.len());
                Ok(strategies)
            }
            555 => Ok(Vec::new()),
            code => Err(DictError::unexpected_status(
                "SHOW STRATEGIES",
                code,
                &status.message,
            )),
        }
    }

    /// List words matching a pattern (`MATCH <db> <strategy> "<word>"`)
    ///
    /// Discovery order is preserved and duplicate words are dropped.
    /// Returns an empty list on status 552 (no match).
    pub fn match_list(
        &self,
        word: &str,
        strategy: &str,
        database: &DatabaseSelector,
    ) -> Result<Vec<String>> {
        let mut io = self.io.lock();
        io.send(&Command::Match {
            database: database.clone(),
            strategy: strategy.to_string(),
            word: word.to_string(),
        })?;

        let status = io.read_status()?;
        match status.code {
            152 => {
                let parsed = read_data_block(&mut io.reader, |_, atoms| match atoms {
                    // First atom is the database the match came from
                    [_, matched, ..] => Ok(matched.clone()),
                    _ => Err(DictError::Protocol(format!(
                        "MATCH: malformed match line: {atoms:?}"
                    ))),
                })?;

                let mut matches: Vec<String> = Vec::with_capacity(parsed.len());
                for m in parsed {
                    if !matches.contains(&m) {
                        matches.push(m);
                    }
                }
                tracing::debug!("{}: {} matches for {:?}", self.peer_addr, matches.len(), word);
                Ok(matches)
            }
            552 => Ok(Vec::new()),
            550 => Err(DictError::Connection(format!(
                "MATCH: invalid database {:?}",
                database.as_str()
            ))),
            551 => Err(DictError::Connection(format!(
                "MATCH: invalid strategy {strategy:?}"
            ))),
            code => Err(DictError::unexpected_status("MATCH", code, &status.message)),
        }
    }

    /// Retrieve all definitions of a word (`DEFINE <db> <word>`)
    ///
    /// A 150 status announces the definition count; exactly that many
    /// 151-headed, `.`-terminated blocks must follow. A count that
    /// disagrees with the stream fails closed rather than returning a
    /// partial result. Returns an empty list on status 552 (not found).
    pub fn definitions(&self, word: &str, database: &DatabaseSelector) -> Result<Vec<Definition>> {
        let mut io = self.io.lock();
        io.send(&Command::Define {
            database: database.clone(),
            word: word.to_string(),
        })?;

        let status = io.read_status()?;
        match status.code {
            150 => {
                let count = status.leading_count().ok_or_else(|| {
                    DictError::Protocol(format!(
                        "DEFINE: 150 status without definition count: {:?}",
                        status.message
                    ))
                })?;

                // The count is wire data; bound the capacity hint
                let mut definitions = Vec::with_capacity(count.min(64));
                for _ in 0..count {
                    definitions.push(Self::read_definition(&mut io)?);
                }
                tracing::debug!(
                    "{}: {} definitions for {:?}",
                    self.peer_addr,
                    definitions.len(),
                    word
                );
                Ok(definitions)
            }
            552 => Ok(Vec::new()),
            550 => Err(DictError::Connection(format!(
                "DEFINE: invalid database {:?}",
                database.as_str()
            ))),
            code => Err(DictError::unexpected_status("DEFINE", code, &status.message)),
        }
    }

    /// Read one 151 header and its `.`-terminated body
    fn read_definition(io: &mut ConnectionIo) -> Result<Definition> {
        let header = io.read_status()?;
        if header.code != 151 {
            return Err(DictError::Protocol(format!(
                "DEFINE: expected 151 definition header, got {} {}",
                header.code, header.message
            )));
        }

        // Header message atoms: word, database id, database description
        let atoms = header.message_atoms();
        let (word, database) = match atoms.as_slice() {
            [word, database, ..] => (word.clone(), database.clone()),
            _ => {
                return Err(DictError::Protocol(format!(
                    "DEFINE: malformed 151 header: {:?}",
                    header.message
                )))
            }
        };

        let text = read_text_block(&mut io.reader)?;
        Ok(Definition::new(word, database, text))
    }

    // -------------------------------------------------------------------------
    // Shutdown
    // -------------------------------------------------------------------------

    /// Close the connection, best effort
    ///
    /// Sends `QUIT` and reads its acknowledgment, swallowing protocol
    /// failures on the way out. Consuming `self` makes further use
    /// impossible. A failure to release the underlying socket is logged
    /// as an error so leakage is never silent.
    pub fn close(self) {
        let mut io = self.io.into_inner();

        if let Err(e) = io.send(&Command::Quit) {
            tracing::debug!("{}: QUIT not sent: {}", self.peer_addr, e);
        }
        match io.read_status() {
            Ok(status) if status.code == 226 => {
                tracing::debug!("{}: session closed ({})", self.peer_addr, status.message)
            }
            Ok(status) => tracing::debug!(
                "{}: unexpected status on QUIT: {} {}",
                self.peer_addr,
                status.code,
                status.message
            ),
            Err(e) => tracing::debug!("{}: no QUIT acknowledgment: {}", self.peer_addr, e),
        }

        if let Err(e) = io.writer.get_ref().shutdown(Shutdown::Both) {
            if e.kind() != std::io::ErrorKind::NotConnected {
                tracing::error!("{}: failed to release socket: {}", self.peer_addr, e);
            }
        }
    }
}

/// Parse a listing line into (identifier, description)
///
/// The description is the remaining text of the line after the
/// identifier: a single quoted span is unquoted, anything else is kept
/// verbatim, whitespace included.
fn parse_listing_line(operation: &str, line: &str) -> Result<(String, String)> {
    let malformed =
        || DictError::Protocol(format!("{operation}: malformed listing line: {line:?}"));

    let (name, rest) = split_first_atom(line).ok_or_else(&malformed)?;
    if rest.is_empty() {
        return Err(malformed());
    }

    let description = match split_atoms(rest).as_slice() {
        [single] => single.clone(),
        _ => rest.to_string(),
    };
    Ok((name, description))
}
