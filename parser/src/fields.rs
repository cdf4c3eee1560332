//! Sub-parsers for compound field values.

use std::collections::BTreeMap;

use curl_schema_core::ParamValue;
use url::Url;

/// Splits `Name: value` entries on the first colon into a flat mapping.
///
/// Both sides are trimmed; entries without a colon are skipped. Later
/// duplicate names overwrite earlier ones.
pub(crate) fn colon_pairs(values: &[String]) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for value in values {
        if let Some((name, rest)) = value.split_once(':') {
            pairs.insert(name.trim().to_string(), rest.trim().to_string());
        }
    }
    pairs
}

/// Splits `;`-delimited `name=value` cookie lists into a flat mapping.
///
/// Segments are trimmed and empty segments dropped; each pair splits on the
/// first `=`. Segments without `=` are skipped. Later duplicate names
/// overwrite earlier ones.
pub(crate) fn cookie_pairs(values: &[String]) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for value in values {
        for segment in value.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if let Some((name, rest)) = segment.split_once('=') {
                pairs.insert(name.trim().to_string(), rest.trim().to_string());
            }
        }
    }
    pairs
}

/// Decomposes a URL into its base form and query parameters.
///
/// The base form keeps scheme, authority and path; query string and
/// fragment are stripped. Query pairs are percent-decoded; a key with one
/// value becomes a scalar, a key seen several times an ordered list.
pub(crate) fn split_url(
    raw: &str,
) -> Result<(String, Option<BTreeMap<String, ParamValue>>), url::ParseError> {
    let mut parsed = Url::parse(raw)?;

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in parsed.query_pairs() {
        grouped
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    parsed.set_query(None);
    parsed.set_fragment(None);

    let params = if grouped.is_empty() {
        None
    } else {
        Some(
            grouped
                .into_iter()
                .map(|(key, mut values)| {
                    let value = if values.len() == 1 {
                        ParamValue::Single(values.remove(0))
                    } else {
                        ParamValue::Many(values)
                    };
                    (key, value)
                })
                .collect(),
        )
    };

    Ok((parsed.to_string(), params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vals(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_colon_pairs_split_on_first_colon() {
        let pairs = colon_pairs(&vals(&["Referer: http://localhost:155/"]));
        assert_eq!(pairs["Referer"], "http://localhost:155/");
    }

    #[test]
    fn test_colon_pairs_trim_both_sides() {
        let pairs = colon_pairs(&vals(&["  Accept :  */*  "]));
        assert_eq!(pairs["Accept"], "*/*");
    }

    #[test]
    fn test_colon_pairs_skip_malformed_entries() {
        let pairs = colon_pairs(&vals(&["no colon here", "Accept: */*"]));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs["Accept"], "*/*");
    }

    #[test]
    fn test_cookie_pairs_split_semicolon_lists() {
        let pairs = cookie_pairs(&vals(&["a=1; b=2"]));
        assert_eq!(pairs["a"], "1");
        assert_eq!(pairs["b"], "2");
    }

    #[test]
    fn test_cookie_pairs_value_keeps_later_equals() {
        let pairs = cookie_pairs(&vals(&["token=abc=def"]));
        assert_eq!(pairs["token"], "abc=def");
    }

    #[test]
    fn test_cookie_pairs_later_duplicates_overwrite() {
        let pairs = cookie_pairs(&vals(&["a=1", "a=2; b=3"]));
        assert_eq!(pairs["a"], "2");
        assert_eq!(pairs["b"], "3");
    }

    #[test]
    fn test_cookie_pairs_drop_empty_and_bare_segments() {
        let pairs = cookie_pairs(&vals(&["a=1; ; bare; b=2;"]));
        assert_eq!(pairs.len(), 2);
        assert!(!pairs.contains_key("bare"));
    }

    #[test]
    fn test_split_url_strips_query_and_fragment() {
        let (base, params) = split_url("http://localhost:155/create?_t=99#top").unwrap();
        assert_eq!(base, "http://localhost:155/create");
        let params = params.unwrap();
        assert_eq!(params["_t"], ParamValue::Single("99".to_string()));
    }

    #[test]
    fn test_split_url_groups_repeated_keys_in_order() {
        let (_, params) = split_url("http://localhost/x?a=1&b=9&a=2").unwrap();
        let params = params.unwrap();
        assert_eq!(
            params["a"],
            ParamValue::Many(vec!["1".to_string(), "2".to_string()])
        );
        assert_eq!(params["b"], ParamValue::Single("9".to_string()));
    }

    #[test]
    fn test_split_url_decodes_percent_escapes() {
        let (_, params) = split_url("http://h/q?facets=a%2Cb&tz=Asia%2FShanghai").unwrap();
        let params = params.unwrap();
        assert_eq!(params["facets"], ParamValue::Single("a,b".to_string()));
        assert_eq!(params["tz"], ParamValue::Single("Asia/Shanghai".to_string()));
    }

    #[test]
    fn test_split_url_without_query() {
        let (base, params) = split_url("http://host/y").unwrap();
        assert_eq!(base, "http://host/y");
        assert!(params.is_none());
    }

    #[test]
    fn test_split_url_round_trips_query_params() {
        let (base, params) = split_url("http://h/p?x=1&y=2&x=3").unwrap();
        let params = params.unwrap();

        // Rebuild a query string from the decomposed params and split again;
        // the key set and values must survive even if the order does not.
        let mut rebuilt = vec![];
        for (key, value) in &params {
            match value {
                ParamValue::Single(v) => rebuilt.push(format!("{key}={v}")),
                ParamValue::Many(vs) => rebuilt.extend(vs.iter().map(|v| format!("{key}={v}"))),
            }
        }
        let (_, reparsed) = split_url(&format!("{base}?{}", rebuilt.join("&"))).unwrap();
        assert_eq!(reparsed.unwrap(), params);
    }
}
