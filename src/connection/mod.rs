//! Connection abstraction consumed by the retrieval client.
//!
//! The client never performs network I/O itself; it drives an injected
//! [`ServerConnection`] through a fixed capability surface. Concrete
//! transports (TCP, TLS, in-process fakes) live behind this trait and are
//! supplied at client construction time.
//!
//! # Architecture
//!
//! - [`ServerConnection`] - Capability trait every transport implements
//! - [`ConnectionError`] - Collaborator failure raised by any operation
//! - [`FixtureConnection`] - In-memory reference implementation serving
//!   files from a map, used in tests and documentation examples

mod error;
mod fixture;

pub use error::ConnectionError;
pub use fixture::FixtureConnection;

/// Capability interface for a logical session to a file server.
///
/// Operations take `&mut self` because a connection is a stateful
/// collaborator: connecting, requesting, and reading all advance its
/// internal protocol position. Any operation may fail with a
/// [`ConnectionError`]; the client decides what each failure means for the
/// retrieval in progress.
///
/// # Object Safety
///
/// The trait is object-safe, so callers that need runtime transport
/// selection can hold a `Box<dyn ServerConnection>`.
pub trait ServerConnection {
    /// Opens a session to the server at `address`.
    ///
    /// Returns `Ok(false)` when the server refuses or cannot be reached in
    /// a protocol-visible way, reserving `Err` for I/O-level failures.
    fn connect_to(&mut self, address: &str) -> Result<bool, ConnectionError>;

    /// Asks the server for the contents of `name`.
    ///
    /// Returns `Ok(false)` when the file is unknown or invalid on the
    /// server side.
    fn request_file_contents(&mut self, name: &str) -> Result<bool, ConnectionError>;

    /// Reports whether another fragment of the requested file is available.
    fn more_bytes(&mut self) -> Result<bool, ConnectionError>;

    /// Reads the next fragment of the requested file.
    ///
    /// `Ok(None)` means the poll produced no data; it is not an error and
    /// not end-of-file. End-of-file is signaled by [`Self::more_bytes`]
    /// returning `Ok(false)`.
    fn read(&mut self) -> Result<Option<String>, ConnectionError>;

    /// Closes the session, releasing any transport resources.
    fn close_connection(&mut self) -> Result<(), ConnectionError>;
}
