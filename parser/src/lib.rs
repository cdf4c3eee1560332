//! Curl command line parsing.
//!
//! This crate turns the text of a curl invocation (the form browsers emit
//! under "Copy as cURL") into a structured [`ParseOutcome`]. Parsing is a
//! strict three-stage pipeline:
//!
//! 1. [`tokenize`] — shell word-splitting with quote and escape handling.
//! 2. [`group_tokens`] — partitioning of the token sequence into
//!    flag/value [`Cluster`]s.
//! 3. [`mapper`] — alias resolution onto canonical fields and
//!    decomposition of compound values (URL query string, cookie lists,
//!    header lines).
//!
//! Data flows strictly forward; every stage is a pure function of its
//! input and any failure aborts the whole parse with a [`ParseError`].
//! Flags and positional tokens that do not resolve are retained in the
//! outcome's `unresolved` map instead of being dropped.
//!
//! # Example
//!
//! ```
//! use curl_schema_parser::parse_command;
//!
//! let outcome = parse_command(
//!     "curl 'http://localhost/x?a=1&a=2' -H 'Accept: */*'",
//! ).unwrap();
//!
//! assert_eq!(outcome.parsed.url, "http://localhost/x");
//! assert_eq!(outcome.parsed.method, "GET");
//! assert_eq!(outcome.parsed.headers.unwrap()["Accept"], "*/*");
//! ```
//!
//! # Crate type
//!
//! This is a **library-only crate** with no binary targets. For CLI usage,
//! use the `curl-schema-cli` crate which provides the `curl-parse` binary.

pub mod commands;
mod fields;
pub mod grouper;
pub mod mapper;
pub mod output;
pub mod tokenizer;

pub use commands::extract_commands;
pub use grouper::{Cluster, group_tokens};
pub use mapper::ParseError;
pub use output::{OutputFormat, format_outcome, format_outcomes};
pub use tokenizer::{TokenizeError, tokenize};

use curl_schema_core::ParseOutcome;
use tracing::debug;

/// Parses one shell-quoted curl command into a structured outcome.
///
/// The input may carry the leading `curl` program token and backslash line
/// continuations; both are handled by the tokenizer. The call is
/// idempotent: identical input always yields an identical outcome.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input has malformed quoting, produces
/// no tokens, or contains no usable URL. There is no partial result.
pub fn parse_command(command: &str) -> Result<ParseOutcome, ParseError> {
    let tokens = tokenizer::tokenize(command)?;
    debug!(token_count = tokens.len(), "tokenized command");

    let clusters = grouper::group_tokens(&tokens);
    debug!(cluster_count = clusters.len(), "grouped tokens into clusters");

    mapper::map_clusters(&clusters)
}
