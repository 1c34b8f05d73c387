//! Retriever Core Library
//!
//! This library provides a minimal file-retrieval client that delegates all
//! network I/O to an injected connection collaborator. The crate contains no
//! sockets, DNS, or wire protocol; it owns only the orchestration contract
//! (connect, request, poll-and-read, close) and its partial-failure behavior.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`connection`] - The `ServerConnection` capability trait, its error
//!   type, and an in-memory reference implementation
//! - [`client`] - The retrieval client that drives a connection through the
//!   four-step protocol
//!
//! # Example
//!
//! ```
//! use retriever_core::{Client, FixtureConnection};
//!
//! let conn = FixtureConnection::new("fileserver.local")
//!     .with_file("notes.txt", "line one\nline two\n");
//! let mut client = Client::new(conn);
//!
//! let content = client.request_file("fileserver.local", "notes.txt");
//! assert_eq!(content.as_deref(), Some("line one\nline two\n"));
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod connection;

// Re-export commonly used types
pub use client::Client;
pub use connection::{ConnectionError, FixtureConnection, ServerConnection};
