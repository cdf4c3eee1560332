//! Splitting files that hold several concatenated commands.

/// Extracts individual curl commands from file content.
///
/// A command starts at a line whose trimmed text begins with the `curl`
/// token; following lines belong to it until the next such line or a blank
/// line. Continuation lines are joined with single spaces, so trailing
/// backslashes survive as escaped spaces and tokenize away cleanly.
///
/// # Examples
///
/// ```
/// use curl_schema_parser::extract_commands;
///
/// let content = "curl 'http://a/' -v\n\ncurl 'http://b/' \\\n  -H 'x: 1'\n";
/// let commands = extract_commands(content);
/// assert_eq!(commands.len(), 2);
/// assert!(commands[1].contains("-H 'x: 1'"));
/// ```
pub fn extract_commands(content: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            if !current.is_empty() {
                commands.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        if stripped.starts_with("curl") {
            if !current.is_empty() {
                commands.push(current.join(" "));
                current.clear();
            }
        }
        current.push(stripped);
    }
    if !current.is_empty() {
        commands.push(current.join(" "));
    }

    commands
}
