//! Flag resolution and field assembly.
//!
//! Resolves each cluster's flag through the alias table, merges repeated
//! fields in encounter order, and applies the per-field sub-parsers to
//! produce the final [`ParseOutcome`]. Clusters that resolve to nothing are
//! retained as unresolved data rather than dropped.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use curl_schema_core::{CanonicalField, ParseOutcome, ParsedRequest};
use regex::Regex;
use tracing::debug;

use crate::fields;
use crate::grouper::Cluster;
use crate::tokenizer::TokenizeError;

/// Failure surfaced to callers when a command cannot be parsed.
///
/// Any error aborts the whole parse; there is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Malformed quoting or escaping in the input.
    #[error("tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),

    /// The command has no tokens or no usable URL.
    #[error("ambiguous input: {0}")]
    AmbiguousInput(String),

    /// The alias table names a canonical field the model does not know.
    /// Unreachable while the table is built from [`CanonicalField::ALL`].
    #[error("no canonical field for alias target '{0}'")]
    InternalMapping(String),
}

/// Flag spelling → canonical field name. Built once, read-only.
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for field in CanonicalField::ALL {
        for spelling in field.spellings() {
            table.insert(*spelling, field.name());
        }
    }
    table
});

/// Syntax check for positional URL tokens: http/https scheme, a hostname,
/// `localhost` or dotted-quad IPv4 host, optional port, optional
/// path/query.
static URL_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant; a failure here is a programmer error in the
    // pattern, not a runtime condition.
    Regex::new(
        r"(?i)^https?://(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("static regex must compile")
});

fn is_valid_url(candidate: &str) -> bool {
    URL_SYNTAX.is_match(candidate)
}

/// Clusters merged by canonical field, before field-specific resolution.
#[derive(Debug, Default)]
struct MixedClusters {
    url: Option<String>,
    /// Canonical fields with their raw values, in encounter order.
    fields: Vec<(CanonicalField, Vec<String>)>,
    unresolved: BTreeMap<String, Vec<String>>,
}

/// Resolves a cluster sequence into the final structured outcome.
pub fn map_clusters(clusters: &[Cluster]) -> Result<ParseOutcome, ParseError> {
    if clusters.is_empty() {
        return Err(ParseError::AmbiguousInput(
            "command produced no tokens".to_string(),
        ));
    }
    let mixed = mix_clusters(clusters)?;
    fill_fields(mixed)
}

fn mix_clusters(clusters: &[Cluster]) -> Result<MixedClusters, ParseError> {
    let mut mixed = MixedClusters::default();

    for cluster in clusters {
        match cluster.flag() {
            Some(flag) => match ALIASES.get(flag) {
                Some(&name) => {
                    let field = CanonicalField::from_name(name)
                        .ok_or_else(|| ParseError::InternalMapping(name.to_string()))?;
                    let values = cluster.values();
                    match mixed.fields.iter_mut().find(|(seen, _)| *seen == field) {
                        Some((_, merged)) => merged.extend(values),
                        None => mixed.fields.push((field, values)),
                    }
                }
                None => {
                    debug!(flag, "unrecognized flag kept as unresolved");
                    mixed
                        .unresolved
                        .entry(flag.to_string())
                        .or_default()
                        .extend(cluster.values());
                }
            },
            None => {
                let lead = cluster.lead();
                if is_valid_url(lead) {
                    mixed.url = Some(lead.to_string());
                } else {
                    debug!(lead, "positional cluster is not a URL");
                    mixed
                        .unresolved
                        .insert(lead.to_string(), cluster.tokens.clone());
                }
            }
        }
    }

    Ok(mixed)
}

fn fill_fields(mixed: MixedClusters) -> Result<ParseOutcome, ParseError> {
    let url = mixed.url.ok_or_else(|| {
        ParseError::AmbiguousInput("no usable URL in command".to_string())
    })?;
    let (base, params) = fields::split_url(&url)
        .map_err(|err| ParseError::AmbiguousInput(format!("URL '{url}' rejected: {err}")))?;

    let mut parsed = ParsedRequest::new(base);
    parsed.params = params;

    let mut explicit_method = None;
    let mut saw_data = false;

    for (field, values) in mixed.fields {
        match field {
            CanonicalField::Request => explicit_method = first_non_empty(&values),
            CanonicalField::Headers => parsed.headers = Some(fields::colon_pairs(&values)),
            CanonicalField::Data => {
                parsed.data = first_non_empty(&values);
                saw_data = true;
            }
            CanonicalField::Form => parsed.form = Some(fields::colon_pairs(&values)),
            CanonicalField::User => parsed.user = Some(fields::colon_pairs(&values)),
            CanonicalField::Cookies => parsed.cookies = Some(fields::cookie_pairs(&values)),
            CanonicalField::CookieJar => parsed.cookie_jar = first_non_empty(&values),
            CanonicalField::Output => parsed.output = first_non_empty(&values),
            CanonicalField::Location => parsed.location = true,
            CanonicalField::Verify => parsed.verify = true,
            CanonicalField::Verbose => parsed.verbose = true,
        }
    }

    parsed.method = match explicit_method {
        Some(method) => method,
        None if saw_data => "POST".to_string(),
        None => "GET".to_string(),
    };

    Ok(ParseOutcome {
        parsed,
        unresolved: mixed.unresolved,
    })
}

fn first_non_empty(values: &[String]) -> Option<String> {
    values.iter().find(|value| !value.is_empty()).cloned()
}
