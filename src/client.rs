//! File-retrieval client driving an injected server connection.
//!
//! This module provides the [`Client`] struct, which orchestrates the
//! four-step retrieval protocol (connect, request, poll-and-read, close)
//! against any [`ServerConnection`] implementation and owns the precise
//! partial-failure behavior of that flow.

use tracing::{debug, warn};

use crate::connection::ServerConnection;

/// File-retrieval client owning exactly one connection collaborator.
///
/// The client performs no I/O of its own; every network interaction goes
/// through the injected [`ServerConnection`]. One client drives one
/// connection, supplied at construction, and may issue any number of
/// [`Client::request_file`] calls over its lifetime.
///
/// # Example
///
/// ```
/// use retriever_core::{Client, FixtureConnection};
///
/// let conn = FixtureConnection::new("srv").with_file("a.txt", "payload");
/// let mut client = Client::new(conn);
/// assert_eq!(client.request_file("srv", "a.txt").as_deref(), Some("payload"));
/// assert_eq!(client.last_result(), "payload");
/// ```
#[derive(Debug)]
pub struct Client<C: ServerConnection> {
    connection: C,
    last_result: String,
}

impl<C: ServerConnection> Client<C> {
    /// Creates a client around the given connection.
    ///
    /// `last_result` starts empty and is overwritten only by fully
    /// successful retrievals.
    #[must_use]
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            last_result: String::new(),
        }
    }

    /// Retrieves `file` from `server`, returning the concatenated content.
    ///
    /// Returns `None` on any terminal failure: the server refusing the
    /// connection, the file being unknown, or an I/O failure from the
    /// collaborator at any step. Callers cannot distinguish these cases
    /// from the return value; failures are logged via `tracing` instead.
    ///
    /// # Cleanup contract
    ///
    /// `close_connection` is called exactly once whenever the content
    /// request was answered (with `true` or `false`), including when the
    /// read loop is aborted by an I/O failure, and its own errors are
    /// always swallowed. It is deliberately NOT called when `connect_to`
    /// fails or when `request_file_contents` itself raises an I/O error.
    /// That asymmetry reproduces the behavior of the system this client
    /// was ported from and is a known resource-leak risk: on those paths
    /// a successfully opened connection is left unclosed.
    pub fn request_file(&mut self, server: &str, file: &str) -> Option<String> {
        debug!(server, file, "requesting file");

        match self.connection.connect_to(server) {
            Ok(true) => {}
            Ok(false) => {
                debug!(server, "server refused connection");
                return None;
            }
            Err(error) => {
                warn!(server, error = %error, "connect failed");
                return None;
            }
        }

        match self.connection.request_file_contents(file) {
            Ok(true) => {}
            Ok(false) => {
                debug!(file, "server has no such file");
                self.close_quietly();
                return None;
            }
            Err(error) => {
                // Connection stays open here on purpose; see the cleanup
                // contract above.
                warn!(file, error = %error, "content request failed");
                return None;
            }
        }

        // Fresh accumulator per call; fragments never leak across requests.
        let mut content = String::new();
        loop {
            match self.connection.more_bytes() {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) => {
                    warn!(file, error = %error, "poll failed mid-transfer");
                    self.close_quietly();
                    return None;
                }
            }

            match self.connection.read() {
                Ok(Some(fragment)) => content.push_str(&fragment),
                // An empty poll contributes nothing; end-of-file is decided
                // solely by more_bytes.
                Ok(None) => {}
                Err(error) => {
                    warn!(file, error = %error, "read failed mid-transfer");
                    self.close_quietly();
                    return None;
                }
            }
        }

        // All content is in hand; a close failure no longer voids the result.
        self.close_quietly();

        debug!(file, bytes = content.len(), "retrieval complete");
        self.last_result = content.clone();
        Some(content)
    }

    /// Returns the content of the most recent successful retrieval.
    ///
    /// Starts empty and is left untouched by failed calls.
    #[must_use]
    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// Returns the injected connection (test/debug accessor).
    #[must_use]
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Consumes the client, handing back its connection.
    #[must_use]
    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Best-effort close; errors never change the outcome already decided.
    fn close_quietly(&mut self) {
        if let Err(error) = self.connection.close_connection() {
            warn!(error = %error, "close failed; ignoring");
        }
    }
}
