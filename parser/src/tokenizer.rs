//! Shell word-splitting for raw command strings.
//!
//! Splits a command line the way a POSIX shell splits arguments: whitespace
//! separates words except inside quotes, single quotes are literal, double
//! quotes honor a small escape set, and a backslash-newline pair is a line
//! continuation. No expansion of any kind is performed.

/// Program name token stripped from the front of the input when present.
const PROGRAM_NAME: &str = "curl";

/// Errors from shell tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A quote opened with this character was never closed.
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    /// The input ends with an unescaped backslash.
    #[error("trailing backslash at end of input")]
    TrailingEscape,
}

/// Splits a raw command string into shell words.
///
/// A leading literal `curl` token is stripped from the trimmed input before
/// splitting. Outside quotes a backslash escapes the following character;
/// inside double quotes it escapes only `"`, `\` and newline; inside single
/// quotes everything is literal. A backslash directly before a newline drops
/// both characters (line continuation).
///
/// # Examples
///
/// ```
/// use curl_schema_parser::tokenize;
///
/// let tokens = tokenize("curl 'http://localhost/x' -H 'Accept: */*'").unwrap();
/// assert_eq!(tokens, vec!["http://localhost/x", "-H", "Accept: */*"]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let input = strip_program_name(input.trim());

    let mut tokens = Vec::new();
    let mut current = String::new();
    // Tracks whether `current` holds a word, so that a quoted empty string
    // still produces a token while bare whitespace does not.
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.push(inner),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some('"') => current.push('"'),
                            Some('\\') => current.push('\\'),
                            Some('\n') => {}
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(inner) => current.push(inner),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => match chars.next() {
                Some('\n') => {}
                Some(escaped) => {
                    in_word = true;
                    current.push(escaped);
                }
                None => return Err(TokenizeError::TrailingEscape),
            },
            ch if ch.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            ch => {
                in_word = true;
                current.push(ch);
            }
        }
    }

    if in_word {
        tokens.push(current);
    }
    Ok(tokens)
}

fn strip_program_name(input: &str) -> &str {
    match input.strip_prefix(PROGRAM_NAME) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => input,
    }
}
