//! In-memory reference implementation of the connection trait.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::{ConnectionError, ServerConnection};

/// Default number of characters served per fragment.
pub const DEFAULT_FRAGMENT_SIZE: usize = 64;

/// An in-memory [`ServerConnection`] serving files from a map.
///
/// Acts as the reference implementation of the capability contract: it
/// accepts a single configured address, answers content requests from its
/// file map, and hands content back in fixed-size fragments. Driving it out
/// of protocol order (requesting before connecting, reading after close)
/// fails with [`ConnectionError::Protocol`].
///
/// # Example
///
/// ```
/// use retriever_core::connection::{FixtureConnection, ServerConnection};
///
/// let mut conn = FixtureConnection::new("localhost").with_file("a.txt", "hello");
/// assert!(conn.connect_to("localhost").unwrap());
/// assert!(conn.request_file_contents("a.txt").unwrap());
/// ```
#[derive(Debug)]
pub struct FixtureConnection {
    address: String,
    files: HashMap<String, String>,
    fragment_size: usize,
    connected: bool,
    pending: VecDeque<String>,
}

impl FixtureConnection {
    /// Creates a fixture server answering only at `address`.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            files: HashMap::new(),
            fragment_size: DEFAULT_FRAGMENT_SIZE,
            connected: false,
            pending: VecDeque::new(),
        }
    }

    /// Adds a file the fixture will serve.
    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }

    /// Overrides the fragment size (in characters, minimum 1).
    #[must_use]
    pub fn with_fragment_size(mut self, fragment_size: usize) -> Self {
        self.fragment_size = fragment_size.max(1);
        self
    }

    /// Returns true while a session is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn split_fragments(&self, content: &str) -> VecDeque<String> {
        let chars: Vec<char> = content.chars().collect();
        chars
            .chunks(self.fragment_size)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }
}

impl ServerConnection for FixtureConnection {
    fn connect_to(&mut self, address: &str) -> Result<bool, ConnectionError> {
        self.pending.clear();
        self.connected = address == self.address;
        debug!(address, accepted = self.connected, "fixture connect");
        Ok(self.connected)
    }

    fn request_file_contents(&mut self, name: &str) -> Result<bool, ConnectionError> {
        if !self.connected {
            return Err(ConnectionError::protocol("content request before connect"));
        }
        match self.files.get(name) {
            Some(content) => {
                self.pending = self.split_fragments(content);
                debug!(name, fragments = self.pending.len(), "fixture serving file");
                Ok(true)
            }
            None => {
                debug!(name, "fixture has no such file");
                Ok(false)
            }
        }
    }

    fn more_bytes(&mut self) -> Result<bool, ConnectionError> {
        if !self.connected {
            return Err(ConnectionError::protocol("poll on a closed connection"));
        }
        Ok(!self.pending.is_empty())
    }

    fn read(&mut self) -> Result<Option<String>, ConnectionError> {
        if !self.connected {
            return Err(ConnectionError::protocol("read on a closed connection"));
        }
        Ok(self.pending.pop_front())
    }

    fn close_connection(&mut self) -> Result<(), ConnectionError> {
        debug!("fixture close");
        self.connected = false;
        self.pending.clear();
        Ok(())
    }
}
