//! Request model type definitions.
//!
//! This module defines the data model a parsed curl command line maps onto.
//! The types are designed for serialization with [`serde`] and round-trip
//! through JSON and YAML without loss.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical field a recognized curl flag resolves to.
///
/// This is a closed set: every flag spelling the parser understands maps to
/// exactly one of these variants. Exhaustive matches over the enum keep
/// field handling in sync when a variant is added.
///
/// # Examples
///
/// ```
/// use curl_schema_core::CanonicalField;
///
/// assert_eq!(CanonicalField::Headers.name(), "headers");
/// assert!(CanonicalField::Headers.spellings().contains(&"-H"));
/// assert_eq!(CanonicalField::from_name("cookie-jar"), Some(CanonicalField::CookieJar));
/// assert_eq!(CanonicalField::from_name("proxy"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalField {
    /// Explicit request method (`-X`).
    Request,
    /// Request header lines (`-H`).
    Headers,
    /// Request body (`-d`, `--data-raw`, ...).
    Data,
    /// Multipart form fields (`-F`).
    Form,
    /// Credentials (`-u`).
    User,
    /// Follow redirects (`-L`).
    Location,
    /// Skip certificate verification (`-k` / `--insecure`).
    Verify,
    /// Cookie header content (`-b`).
    Cookies,
    /// Cookie jar file path (`-c`).
    CookieJar,
    /// Verbose transfer output (`-v`).
    Verbose,
    /// Output file path (`-o`).
    Output,
}

impl CanonicalField {
    /// Every canonical field, in declaration order.
    pub const ALL: [CanonicalField; 11] = [
        CanonicalField::Request,
        CanonicalField::Headers,
        CanonicalField::Data,
        CanonicalField::Form,
        CanonicalField::User,
        CanonicalField::Location,
        CanonicalField::Verify,
        CanonicalField::Cookies,
        CanonicalField::CookieJar,
        CanonicalField::Verbose,
        CanonicalField::Output,
    ];

    /// The canonical field name used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            CanonicalField::Request => "request",
            CanonicalField::Headers => "headers",
            CanonicalField::Data => "data",
            CanonicalField::Form => "form",
            CanonicalField::User => "user",
            CanonicalField::Location => "location",
            CanonicalField::Verify => "verify",
            CanonicalField::Cookies => "cookies",
            CanonicalField::CookieJar => "cookie-jar",
            CanonicalField::Verbose => "verbose",
            CanonicalField::Output => "output",
        }
    }

    /// The flag spellings that resolve to this field.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            CanonicalField::Request => &["--request", "-X"],
            CanonicalField::Headers => &["--header", "-H"],
            CanonicalField::Data => &["--data", "-d", "--data-ascii", "--data-raw"],
            CanonicalField::Form => &["--form", "-F"],
            CanonicalField::User => &["--user", "-u"],
            CanonicalField::Location => &["--location", "-L"],
            CanonicalField::Verify => &["--insecure", "-k"],
            CanonicalField::Cookies => &["--cookie", "-b"],
            CanonicalField::CookieJar => &["--cookie-jar", "-c"],
            CanonicalField::Verbose => &["--verbose", "-v"],
            CanonicalField::Output => &["--output", "-o"],
        }
    }

    /// Parses a canonical field name back to its variant.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Value of a single query parameter key.
///
/// A key that appears once in the query string carries a scalar; a key that
/// appears several times carries its values as an ordered list. The untagged
/// serde representation keeps the serialized form flat.
///
/// # Examples
///
/// ```
/// use curl_schema_core::ParamValue;
///
/// let single = ParamValue::Single("1".into());
/// assert_eq!(serde_json::to_string(&single).unwrap(), "\"1\"");
///
/// let many = ParamValue::Many(vec!["1".into(), "2".into()]);
/// assert_eq!(serde_json::to_string(&many).unwrap(), "[\"1\",\"2\"]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// The key appeared exactly once.
    Single(String),
    /// The key appeared several times; values in encounter order.
    Many(Vec<String>),
}

/// Structured form of one curl command line.
///
/// The URL is the only required field; everything else is populated when the
/// corresponding flag was present. Boolean switches serialize only when set,
/// optional sections only when present, so the serialized form mirrors the
/// command it came from.
///
/// # Examples
///
/// ```
/// use curl_schema_core::ParsedRequest;
///
/// let request = ParsedRequest::new("http://localhost/api");
/// assert_eq!(request.method, "GET");
/// assert!(request.headers.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRequest {
    /// Target URL with query string and fragment stripped.
    pub url: String,
    /// Request method; inferred when no explicit method flag was given.
    #[serde(rename = "request", default = "default_method")]
    pub method: String,
    /// Query parameters extracted from the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, ParamValue>>,
    /// Header lines, split on the first colon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Cookie pairs, split from `;`-delimited `name=value` lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<BTreeMap<String, String>>,
    /// Request body, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Form fields, split on the first colon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<BTreeMap<String, String>>,
    /// Credentials, split on the first colon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BTreeMap<String, String>>,
    /// Cookie jar file path.
    #[serde(
        rename = "cookie-jar",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cookie_jar: Option<String>,
    /// Output file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Follow redirects.
    #[serde(default, skip_serializing_if = "is_false")]
    pub location: bool,
    /// Skip certificate verification.
    #[serde(default, skip_serializing_if = "is_false")]
    pub verify: bool,
    /// Verbose transfer output.
    #[serde(default, skip_serializing_if = "is_false")]
    pub verbose: bool,
}

impl ParsedRequest {
    /// Creates a request for the given URL with the default `GET` method
    /// and no optional sections.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: default_method(),
            params: None,
            headers: None,
            cookies: None,
            data: None,
            form: None,
            user: None,
            cookie_jar: None,
            output: None,
            location: false,
            verify: false,
            verbose: false,
        }
    }
}

fn default_method() -> String {
    "GET".to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Complete result of parsing one command line.
///
/// `parsed` holds everything that resolved to a canonical field;
/// `unresolved` retains clusters whose flag or positional lead token the
/// parser did not recognize, keyed by that token with the cluster's raw
/// values. Nothing is silently dropped.
///
/// # Examples
///
/// ```
/// use curl_schema_core::{ParseOutcome, ParsedRequest};
///
/// let outcome = ParseOutcome {
///     parsed: ParsedRequest::new("http://localhost/"),
///     unresolved: Default::default(),
/// };
/// assert!(outcome.unresolved.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Fields that resolved to the typed request model.
    pub parsed: ParsedRequest,
    /// Raw clusters that did not resolve, keyed by flag or lead token.
    #[serde(default)]
    pub unresolved: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_field_name_round_trip() {
        for field in CanonicalField::ALL {
            assert_eq!(CanonicalField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_spellings_are_unique_across_fields() {
        let mut seen = std::collections::HashSet::new();
        for field in CanonicalField::ALL {
            for spelling in field.spellings() {
                assert!(seen.insert(*spelling), "duplicate spelling {spelling}");
            }
        }
    }

    #[test]
    fn test_parsed_request_serializes_minimal_form() {
        let request = ParsedRequest::new("http://localhost/");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"url":"http://localhost/","request":"GET"}"#);
    }

    #[test]
    fn test_parsed_request_serializes_canonical_names() {
        let mut request = ParsedRequest::new("http://localhost/");
        request.cookie_jar = Some("jar.txt".to_string());
        request.verify = true;
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"cookie-jar\":\"jar.txt\""));
        assert!(json.contains("\"verify\":true"));
    }

    #[test]
    fn test_parsed_request_deserializes_with_defaults() {
        let request: ParsedRequest =
            serde_json::from_str(r#"{"url":"http://localhost/"}"#).unwrap();
        assert_eq!(request.method, "GET");
        assert!(!request.verbose);
        assert!(request.data.is_none());
    }

    #[test]
    fn test_param_value_untagged_round_trip() {
        let params: BTreeMap<String, ParamValue> =
            serde_json::from_str(r#"{"a":["1","2"],"b":"3"}"#).unwrap();
        assert_eq!(
            params["a"],
            ParamValue::Many(vec!["1".to_string(), "2".to_string()])
        );
        assert_eq!(params["b"], ParamValue::Single("3".to_string()));
    }

    #[test]
    fn test_outcome_serializes_unresolved_values() {
        let mut unresolved = BTreeMap::new();
        unresolved.insert("--foo".to_string(), vec!["bar".to_string()]);
        let outcome = ParseOutcome {
            parsed: ParsedRequest::new("http://localhost/"),
            unresolved,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""unresolved":{"--foo":["bar"]}"#));
    }
}
