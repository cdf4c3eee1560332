//! Grouping of shell words into flag/value clusters.
//!
//! Scans the token sequence left to right and closes a cluster at every
//! token that starts a new flag. A cluster is one flag spelling plus the
//! value tokens that follow it, or the leading positional run when the
//! command starts with a bare URL.

use std::collections::HashSet;

/// A contiguous run of tokens belonging to one flag, or the leading
/// positional run.
///
/// Duplicate tokens inside one cluster collapse when the cluster closes;
/// the first occurrence keeps its position. Order across clusters is the
/// encounter order of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Deduplicated tokens of the cluster, first occurrences in order.
    pub tokens: Vec<String>,
}

impl Cluster {
    /// Closes a scanned token range into a cluster, collapsing duplicates.
    fn close(range: &[String]) -> Self {
        let mut seen = HashSet::new();
        let tokens = range
            .iter()
            .filter(|token| seen.insert(token.as_str()))
            .cloned()
            .collect();
        Self { tokens }
    }

    /// First token of the cluster.
    pub fn lead(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    /// The flag spelling this cluster was opened with, if any.
    pub fn flag(&self) -> Option<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .find(|token| token.starts_with('-'))
    }

    /// Tokens that are values rather than flag spellings.
    pub fn values(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter(|token| !token.starts_with('-'))
            .cloned()
            .collect()
    }
}

/// Partitions the token sequence into clusters.
///
/// From each cluster start the scan keeps consuming while the next token
/// either does not start with `-` (a value) or is byte-identical to the
/// cluster's lead token (the same flag repeated). The scan stops at the
/// first token that starts with `-` and differs from the lead, which opens
/// the next cluster. An empty token sequence yields no clusters.
///
/// # Examples
///
/// ```
/// use curl_schema_parser::group_tokens;
///
/// let tokens: Vec<String> = ["http://localhost/", "-H", "a: 1", "-H", "b: 2", "-v"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let clusters = group_tokens(&tokens);
/// assert_eq!(clusters.len(), 3);
/// assert_eq!(clusters[0].lead(), "http://localhost/");
/// assert_eq!(clusters[1].flag(), Some("-H"));
/// assert_eq!(clusters[1].values(), vec!["a: 1", "b: 2"]);
/// ```
pub fn group_tokens(tokens: &[String]) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let lead = &tokens[cursor];
        let mut next = cursor + 1;
        while next < tokens.len() {
            let token = &tokens[next];
            if token.starts_with('-') && token != lead {
                break;
            }
            next += 1;
        }
        clusters.push(Cluster::close(&tokens[cursor..next]));
        cursor = next;
    }

    clusters
}
