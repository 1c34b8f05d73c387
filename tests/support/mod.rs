//! Shared test support: a scripted, call-recording connection double.

use std::collections::VecDeque;

use retriever_core::{ConnectionError, ServerConnection};

/// Installs a log subscriber honoring `RUST_LOG`; safe to call from every
/// test, later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One recorded invocation on the scripted connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ConnectTo(String),
    RequestFileContents(String),
    MoreBytes,
    Read,
    CloseConnection,
}

/// Scripted outcome for a single connection operation.
#[derive(Debug, Clone)]
pub enum Step<T> {
    /// The operation returns this value.
    Return(T),
    /// The operation raises an I/O error.
    Fail,
}

impl<T: Clone> Step<T> {
    fn resolve(&self, operation: &'static str) -> Result<T, ConnectionError> {
        match self {
            Step::Return(value) => Ok(value.clone()),
            Step::Fail => Err(ConnectionError::io(
                operation,
                std::io::Error::other("scripted failure"),
            )),
        }
    }
}

/// A [`ServerConnection`] whose every response is scripted up front and
/// whose every invocation is recorded in order.
///
/// Exhausted `more_bytes` scripts return `false` and exhausted `read`
/// scripts return `None`, so partial scripts stay safe.
#[derive(Debug)]
pub struct ScriptedConnection {
    connect: Step<bool>,
    request: Step<bool>,
    more: VecDeque<Step<bool>>,
    reads: VecDeque<Step<Option<String>>>,
    close: Step<()>,
    calls: Vec<Call>,
}

impl Default for ScriptedConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedConnection {
    /// A connection that accepts the connect and the content request but
    /// serves no fragments.
    pub fn new() -> Self {
        Self {
            connect: Step::Return(true),
            request: Step::Return(true),
            more: VecDeque::new(),
            reads: VecDeque::new(),
            close: Step::Return(()),
            calls: Vec::new(),
        }
    }

    /// A connection scripted to serve the given fragments in order.
    pub fn serving(fragments: &[&str]) -> Self {
        let mut conn = Self::new();
        conn.more = fragments.iter().map(|_| Step::Return(true)).collect();
        conn.more.push_back(Step::Return(false));
        conn.reads = fragments
            .iter()
            .map(|f| Step::Return(Some((*f).to_string())))
            .collect();
        conn
    }

    pub fn with_connect(mut self, step: Step<bool>) -> Self {
        self.connect = step;
        self
    }

    pub fn with_request(mut self, step: Step<bool>) -> Self {
        self.request = step;
        self
    }

    pub fn with_more(mut self, steps: Vec<Step<bool>>) -> Self {
        self.more = steps.into();
        self
    }

    pub fn with_reads(mut self, steps: Vec<Step<Option<String>>>) -> Self {
        self.reads = steps.into();
        self
    }

    pub fn with_close(mut self, step: Step<()>) -> Self {
        self.close = step;
        self
    }

    /// The ordered invocation log.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// How many times `close_connection` was invoked.
    pub fn close_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::CloseConnection))
            .count()
    }
}

impl ServerConnection for ScriptedConnection {
    fn connect_to(&mut self, address: &str) -> Result<bool, ConnectionError> {
        self.calls.push(Call::ConnectTo(address.to_string()));
        self.connect.resolve("connect_to")
    }

    fn request_file_contents(&mut self, name: &str) -> Result<bool, ConnectionError> {
        self.calls.push(Call::RequestFileContents(name.to_string()));
        self.request.resolve("request_file_contents")
    }

    fn more_bytes(&mut self) -> Result<bool, ConnectionError> {
        self.calls.push(Call::MoreBytes);
        match self.more.pop_front() {
            Some(step) => step.resolve("more_bytes"),
            None => Ok(false),
        }
    }

    fn read(&mut self) -> Result<Option<String>, ConnectionError> {
        self.calls.push(Call::Read);
        match self.reads.pop_front() {
            Some(step) => step.resolve("read"),
            None => Ok(None),
        }
    }

    fn close_connection(&mut self) -> Result<(), ConnectionError> {
        self.calls.push(Call::CloseConnection);
        self.close.resolve("close_connection")
    }
}
