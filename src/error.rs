//! Error taxonomy for resolution, fetching, and module execution.
//!
//! "Name not resolved under this root" is not an error: resolvers report it
//! as `Ok(None)` so the host can continue down the registry. These types
//! cover everything that must surface to the import call site instead.

use thiserror::Error;

/// Errors surfaced to the importer by resolution and loading.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No registered resolver could supply the name (terminal, walk-level).
    #[error("module not found: {name}")]
    NotFound { name: String },

    /// A descriptor's origin no longer has any content behind it.
    #[error("source not found for {name} at {origin}")]
    SourceNotFound { name: String, origin: String },

    /// Backend reachable but failed with something other than "not found"
    /// (non-404 HTTP status, transport failure). Fatal; never retried and
    /// never treated as unresolved.
    #[error("communication error for {origin}: {detail}")]
    Communication { origin: String, detail: String },

    /// Fetched bytes could not be decoded as UTF-8 source text.
    #[error("source at {origin} is not valid UTF-8")]
    Encoding {
        origin: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Filesystem read failed for a reason other than a missing file
    /// (permissions, I/O fault).
    #[error("read error for {origin}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The dotted name itself is invalid (empty, or an empty segment).
    #[error("malformed module name: {name:?}")]
    MalformedName { name: String },

    /// The fetched source failed to evaluate. Propagated verbatim; the
    /// framework adds no wrapping so "this code is broken" stays
    /// distinguishable from "this framework is broken".
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

/// Failure raised by the host while evaluating module source.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The source does not parse.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The source parsed but failed while running.
    #[error("runtime error: {0}")]
    Runtime(String),
}
