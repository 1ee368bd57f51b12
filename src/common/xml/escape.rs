use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const MARKUP: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

/// C0 controls XML 1.0 cannot carry; tab, LF and CR are allowed.
fn is_forbidden_control(c: char) -> bool {
    c < ' ' && !matches!(c, '\t' | '\n' | '\r')
}

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<(AhoCorasick, Vec<&'static str>)> = Lazy::new(|| {
    let controls: Vec<String> = ('\0'..' ')
        .filter(|&c| is_forbidden_control(c))
        .map(String::from)
        .collect();
    let patterns: Vec<&str> = MARKUP
        .iter()
        .map(|&(from, _)| from)
        .chain(controls.iter().map(String::as_str))
        .collect();
    let automaton = AhoCorasick::builder()
        .build(patterns)
        .expect("Failed to build XML escaper");
    let replacements = MARKUP
        .iter()
        .map(|&(_, to)| to)
        .chain(controls.iter().map(|_| ""))
        .collect();
    (automaton, replacements)
});

/// Escape XML special characters.
///
/// Control characters XML 1.0 forbids are dropped so the result is always
/// well-formed.
///
/// # Examples
///
/// ```
/// use scaleup_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("R&D <team>"), "R&amp;D &lt;team&gt;");
/// assert_eq!(escape_xml("₹6L"), "₹6L");
/// assert_eq!(escape_xml("Bad\u{1}title"), "Badtitle");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let (automaton, replacements) = &*XML_ESCAPER;
    automaton.replace_all(s, replacements.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_in_attributes() {
        assert_eq!(escape_xml(r#"say "hi" it's"#), "say &quot;hi&quot; it&apos;s");
    }

    #[test]
    fn test_escape_drops_forbidden_controls() {
        assert_eq!(escape_xml("a\u{0}b\u{8}c\u{B}\u{C}d\u{1F}e"), "abcde");
        assert_eq!(escape_xml("x\u{1}<y>"), "x&lt;y&gt;");
    }

    #[test]
    fn test_escape_keeps_xml_whitespace() {
        assert_eq!(escape_xml("one\ttwo\r\nthree"), "one\ttwo\r\nthree");
    }

    #[test]
    fn test_escape_keeps_non_ascii() {
        assert_eq!(escape_xml("✓ → ₹2.5Cr"), "✓ → ₹2.5Cr");
    }
}
