use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;
use regex::Regex;

const EXCERPT_CHARS: usize = 200;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Removes script, style and event-handler content from stored rich text
/// before it is handed to a renderer.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

pub fn strip_tags(content: &str) -> String {
    TAG_PATTERN.replace_all(content, "").into_owned()
}

/// The stored excerpt when present, otherwise the first 200 characters of the
/// tag-stripped content followed by `...`.
pub fn excerpt_or_fallback(excerpt: Option<&str>, content: &str) -> String {
    match excerpt.map(str::trim).filter(|e| !e.is_empty()) {
        Some(excerpt) => excerpt.to_string(),
        None => {
            let text: String = strip_tags(content).chars().take(EXCERPT_CHARS).collect();
            format!("{text}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_excerpt_strips_markup_and_truncates() {
        let content = format!("<p>{}</p>", "a".repeat(300));
        let excerpt = excerpt_or_fallback(None, &content);
        assert_eq!(excerpt, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn stored_excerpt_wins() {
        assert_eq!(excerpt_or_fallback(Some("Short intro"), "<p>body</p>"), "Short intro");
        assert_eq!(excerpt_or_fallback(Some("  "), "<b>body</b>"), "body...");
    }

    #[test]
    fn sanitizer_drops_scripts() {
        let cleaned = sanitize_html("<p onclick=\"x()\">hi</p><script>alert(1)</script>");
        assert_eq!(cleaned, "<p>hi</p>");
    }
}
