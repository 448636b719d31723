//! Line and token splitting for `c.mod` contents.
//!
//! Only `'\n'` separates lines and only `' '` separates tokens. Tabs and
//! carriage returns are ordinary token characters.

/// Iterate over the lines of `text` with their 1-indexed line numbers.
///
/// Blank lines are yielded too so that numbering matches the file.
pub fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').enumerate().map(|(i, line)| (i + 1, line))
}

/// Split one line into its non-empty space-delimited tokens.
pub fn tokens(line: &str) -> Vec<&str> {
    line.split(' ').filter(|t| !t.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_every_line() {
        let numbered: Vec<_> = lines("a\n\nb").collect();
        assert_eq!(numbered, vec![(1, "a"), (2, ""), (3, "b")]);
    }

    #[test]
    fn collapses_repeated_spaces() {
        assert_eq!(tokens("  os   linux  -O2 "), vec!["os", "linux", "-O2"]);
    }

    #[test]
    fn blank_line_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("    ").is_empty());
    }

    #[test]
    fn tabs_and_carriage_returns_are_not_delimiters() {
        assert_eq!(tokens("module\tfoo"), vec!["module\tfoo"]);
        assert_eq!(tokens("module foo\r"), vec!["module", "foo\r"]);
    }
}
