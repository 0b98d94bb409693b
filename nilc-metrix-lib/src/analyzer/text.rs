/// Counts words the way the service's limits are defined: one more than the number of spaces.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.matches(' ').count() + 1
}

/// Rewrites text into the form the analyzer scripts expect on their command line.
///
/// Quotes, line breaks, and shell-sensitive punctuation become `{{placeholder}}` tokens that the scripts
/// restore. Grave-accented vowels lose their accent, except for the standalone crase ` à `.
#[must_use]
pub fn sanitize(text: &str) -> String {
    const CRASE: &str = " à ";
    const CRASE_PLACEHOLDER: &str = "\u{0}crase\u{0}";

    let text = text.replace(CRASE, CRASE_PLACEHOLDER);
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\u{201C}' | '\u{201D}' => out.push_str("{{quotes}}"),
            '\r' if chars.peek() == Some(&'\n') => {
                let _ = chars.next();
                out.push_str("{{enter}}");
            }
            '\n' => out.push_str("{{enter}}"),
            '!' => out.push_str("{{exclamation}}"),
            '#' => out.push_str("{{sharp}}"),
            '&' => out.push_str("{{ampersand}}"),
            '%' => out.push_str("{{percent}}"),
            '$' => out.push_str("{{dollar}}"),
            'à' => out.push('a'),
            'è' => out.push('e'),
            'ì' => out.push('i'),
            'ò' => out.push('o'),
            'ù' => out.push('u'),
            '`' | '\u{00B4}' => out.push('"'),
            _ => out.push(c),
        }
    }

    out.replace(CRASE_PLACEHOLDER, CRASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("uma"), 1);
        assert_eq!(word_count("uma frase curta"), 3);
        assert_eq!(word_count("dois  espaços"), 3);
    }

    #[test]
    fn test_word_count_at_limit() {
        let text = vec!["palavra"; 2000].join(" ");
        assert_eq!(word_count(&text), 2000);
        let text = vec!["palavra"; 2001].join(" ");
        assert_eq!(word_count(&text), 2001);
    }

    #[test]
    fn test_sanitize_placeholders() {
        assert_eq!(sanitize("Ele disse \"oi\"!"), "Ele disse {{quotes}}oi{{quotes}}{{exclamation}}");
        assert_eq!(sanitize("“aspas”"), "{{quotes}}aspas{{quotes}}");
        assert_eq!(sanitize("a\r\nb\nc"), "a{{enter}}b{{enter}}c");
        assert_eq!(sanitize("#1 & 50% $"), "{{sharp}}1 {{ampersand}} 50{{percent}} {{dollar}}");
    }

    #[test]
    fn test_sanitize_accents() {
        assert_eq!(sanitize("vou à praia"), "vou à praia");
        assert_eq!(sanitize("àquele"), "aquele");
        assert_eq!(sanitize("è ì ò ù"), "e i o u");
        assert_eq!(sanitize("`x´"), "\"x\"");
    }

    #[test]
    fn test_sanitize_lone_carriage_return() {
        assert_eq!(sanitize("a\rb"), "a\rb");
    }
}
