use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::profile::application::ports::outgoing::BioSanitizer;

/// Formatting tags a bio may keep. Every attribute is dropped.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "b", "em", "i", "u", "ul", "ol", "li", "blockquote",
];

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?(</script\s*>|$)").expect("Invalid regex")
});

static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?(</style\s*>|$)").expect("Invalid regex")
});

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(-->|$)").expect("Invalid regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*(/?)\s*([a-z][a-z0-9]*)\b[^>]*>").expect("Invalid regex")
});

/// Allow-list sanitizer built on regular expressions.
#[derive(Debug, Clone, Default)]
pub struct HtmlBioSanitizer;

impl HtmlBioSanitizer {
    pub fn new() -> Self {
        Self
    }

    fn rewrite_tag(caps: &Captures<'_>) -> Option<String> {
        let closing = &caps[1];
        let name = caps[2].to_ascii_lowercase();

        ALLOWED_TAGS
            .contains(&name.as_str())
            .then(|| format!("<{}{}>", closing, name))
    }

    fn escape_text(out: &mut String, text: &str) {
        for c in text.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                _ => out.push(c),
            }
        }
    }
}

impl BioSanitizer for HtmlBioSanitizer {
    fn sanitize(&self, html: &str) -> String {
        let stripped = SCRIPT_RE.replace_all(html, "");
        let stripped = STYLE_RE.replace_all(&stripped, "");
        let stripped = COMMENT_RE.replace_all(&stripped, "");

        let mut out = String::with_capacity(stripped.len());
        let mut last = 0;
        for caps in TAG_RE.captures_iter(&stripped) {
            let Some(whole) = caps.get(0) else { continue };
            Self::escape_text(&mut out, &stripped[last..whole.start()]);
            if let Some(tag) = Self::rewrite_tag(&caps) {
                out.push_str(&tag);
            }
            last = whole.end();
        }
        Self::escape_text(&mut out, &stripped[last..]);

        out.trim().to_string()
    }
}
