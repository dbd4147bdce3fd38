//! Shell-like word splitting for lines typed into the interactive shell.

/// Splits `input` into words.
///
/// Spaces and tabs separate words unless they appear inside double quotes.
/// Quote characters are dropped, and a backslash makes the following
/// character literal both inside and outside quotes. An unterminated quote is
/// not an error: whatever was collected becomes the last word.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaping = false;

    for ch in input.chars() {
        if escaping {
            current.push(ch);
            escaping = false;
            continue;
        }
        match ch {
            '\\' => escaping = true,
            '"' => in_quotes = !in_quotes,
            ' ' | '\t' if in_quotes => current.push(ch),
            ' ' | '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(tokenize("list"), vec!["list"]);
        assert_eq!(
            tokenize("  summary \t --month   3 "),
            vec!["summary", "--month", "3"]
        );
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn double_quotes_group_words() {
        assert_eq!(
            tokenize(r#"add --description "lunch with Bob" --amount 12.50"#),
            vec!["add", "--description", "lunch with Bob", "--amount", "12.50"]
        );
    }

    #[test]
    fn quotes_join_with_adjacent_text() {
        assert_eq!(tokenize(r#"pre"fix  mid"post"#), vec!["prefix  midpost"]);
    }

    #[test]
    fn tabs_inside_quotes_are_kept() {
        assert_eq!(tokenize("\"a\tb\""), vec!["a\tb"]);
    }

    #[test]
    fn escaped_quotes_are_literal() {
        assert_eq!(tokenize(r#"say \"hi\""#), vec!["say", "\"hi\""]);
    }

    #[test]
    fn escapes_work_inside_quotes() {
        assert_eq!(
            tokenize(r#"add --description "the \"best\" \\ cafe""#),
            vec!["add", "--description", r#"the "best" \ cafe"#]
        );
    }

    #[test]
    fn escaped_space_does_not_split() {
        assert_eq!(tokenize(r"coffee\ beans 4"), vec!["coffee beans", "4"]);
    }

    #[test]
    fn unterminated_quote_flushes_collected_text() {
        assert_eq!(tokenize(r#"add "open ended"#), vec!["add", "open ended"]);
    }

    #[test]
    fn empty_quotes_produce_no_token() {
        assert_eq!(
            tokenize(r#"add --description "" --amount 5"#),
            vec!["add", "--description", "--amount", "5"]
        );
    }

    #[test]
    fn trailing_backslash_is_dropped() {
        assert_eq!(tokenize(r"list \"), vec!["list"]);
    }
}
