//! Core request model types for curl command line parsing.
//!
//! This crate defines the foundational types the parser crate produces:
//!
//! - [`CanonicalField`] — the closed set of semantic fields a recognized
//!   flag can resolve to, with its flag spellings.
//! - [`ParsedRequest`] — the structured request: URL, query parameters,
//!   method, headers, cookies, body, and boolean switches.
//! - [`ParamValue`] — scalar-or-list value of one query parameter key.
//! - [`ParseOutcome`] — a [`ParsedRequest`] together with the unresolved
//!   leftovers that did not map to any canonical field.
//!
//! # Example
//!
//! ```
//! use curl_schema_core::{CanonicalField, ParsedRequest};
//!
//! let mut request = ParsedRequest::new("http://localhost/api");
//! request.method = "POST".to_string();
//! request.data = Some("{\"k\":\"v\"}".to_string());
//!
//! assert_eq!(CanonicalField::from_name("data"), Some(CanonicalField::Data));
//! assert!(serde_json::to_string(&request).unwrap().contains("\"request\":\"POST\""));
//! ```

mod types;

pub use types::*;
