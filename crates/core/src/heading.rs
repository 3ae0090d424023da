//! Fragment identifiers for page headings.
//!
//! Identifiers are derived from the heading text, made URL-fragment safe and
//! de-duplicated against every identifier already present on the page.

use std::collections::HashSet;
use std::fmt;

/// A fragment-safe heading identifier.
///
/// Always non-empty, made of `[a-z0-9_-]`, never starting or ending with `-`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HeadingId(String);

impl HeadingId {
    /// Returns the string representation of this identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `#id` form used as a link `href`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for HeadingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup of identifiers that already exist on the page.
///
/// In the browser this is `document.getElementById`; tests use a set.
pub trait IdRegistry {
    fn contains(&self, id: &str) -> bool;
}

impl IdRegistry for HashSet<String> {
    fn contains(&self, id: &str) -> bool {
        HashSet::contains(self, id)
    }
}

/// Derives the raw identifier candidate from heading text.
///
/// Lower-cases and trims the text, drops everything except ASCII word
/// characters, whitespace and hyphens, turns each whitespace run into a single
/// hyphen and strips hyphens from both ends. The result may be empty.
///
/// Whitespace means the ECMAScript `\s` class, see [`is_js_whitespace`].
pub fn derive_candidate(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.trim_matches(is_js_whitespace).chars() {
        if is_js_whitespace(c) {
            in_whitespace = true;
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            continue;
        }
        if in_whitespace {
            out.push('-');
            in_whitespace = false;
        }
        out.push(c);
    }

    out.trim_matches('-').to_string()
}

/// ECMAScript WhiteSpace and LineTerminator: what `\s` and `trim()` match.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000b}' | '\u{000c}' | '\r' | ' '
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Assigns unique identifiers to headings in document order.
#[derive(Debug, Default)]
pub struct HeadingIdAllocator {
    assigned: HashSet<String>,
}

impl HeadingIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an identifier for the heading at `position` (0-based, in
    /// document order) with the given text.
    ///
    /// Text without any usable character falls back to a transliterated slug
    /// and then to `section-<position + 1>`. Collisions with `registry` or
    /// with anything this allocator handed out get `-1`, `-2`, ... appended.
    pub fn allocate(
        &mut self,
        text: &str,
        position: usize,
        registry: &dyn IdRegistry,
    ) -> HeadingId {
        let mut base = derive_candidate(text);
        if base.is_empty() {
            base = slug::slugify(text);
        }
        if base.is_empty() {
            base = format!("section-{}", position + 1);
        }

        let mut unique = base.clone();
        let mut counter = 1u32;
        while registry.contains(&unique) || self.assigned.contains(&unique) {
            unique = format!("{}-{}", base, counter);
            counter += 1;
        }

        if unique != base {
            log::debug!("Heading id '{}' taken, using '{}'", base, unique);
        }
        self.assigned.insert(unique.clone());
        HeadingId(unique)
    }

    /// Number of identifiers handed out so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Builds the absolute link copied to the clipboard for a heading.
pub fn section_url(origin: &str, path: &str, id: &HeadingId) -> String {
    format!("{}{}#{}", origin, path, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn test_derive_basic() {
        assert_eq!(derive_candidate("Hello World"), "hello-world");
        assert_eq!(derive_candidate("  Projects  "), "projects");
        assert_eq!(derive_candidate("Rust & WebAssembly!"), "rust-webassembly");
    }

    #[test]
    fn test_derive_keeps_underscores_and_hyphens() {
        assert_eq!(derive_candidate("snake_case"), "snake_case");
        assert_eq!(derive_candidate("Pre-built tools"), "pre-built-tools");
        assert_eq!(derive_candidate("a - b"), "a---b");
    }

    #[test]
    fn test_derive_strips_edge_hyphens() {
        assert_eq!(derive_candidate("-Intro-"), "intro");
        assert_eq!(derive_candidate("--Intro"), "intro");
        assert_eq!(derive_candidate("? Why"), "why");
    }

    #[test]
    fn test_derive_collapses_whitespace_runs() {
        assert_eq!(derive_candidate("Multi\t\n  Line"), "multi-line");
        assert_eq!(derive_candidate("One ! Two"), "one-two");
    }

    #[test]
    fn test_derive_uses_ecmascript_whitespace() {
        assert_eq!(derive_candidate("a\u{feff}b"), "a-b");
        assert_eq!(derive_candidate("a\u{0085}b"), "ab");
        assert_eq!(derive_candidate("\u{feff}Intro\u{3000}"), "intro");
        assert_eq!(derive_candidate("Non\u{00a0}breaking"), "non-breaking");
        assert!(!is_js_whitespace('\u{0085}'));
        assert!(is_js_whitespace('\u{2007}'));
    }

    #[test]
    fn test_derive_drops_non_ascii_letters() {
        assert_eq!(derive_candidate("Café Menu"), "caf-menu");
        assert_eq!(derive_candidate("日本"), "");
        assert_eq!(derive_candidate("!!!"), "");
    }

    #[test]
    fn test_allocate_unique_suffixes() {
        let registry = empty();
        let mut allocator = HeadingIdAllocator::new();

        let first = allocator.allocate("Overview", 0, &registry);
        let second = allocator.allocate("Overview", 1, &registry);
        let third = allocator.allocate("Overview", 2, &registry);

        assert_eq!(first.as_str(), "overview");
        assert_eq!(second.as_str(), "overview-1");
        assert_eq!(third.as_str(), "overview-2");
        assert_eq!(allocator.len(), 3);
    }

    #[test]
    fn test_allocate_respects_existing_page_ids() {
        let registry: HashSet<String> =
            ["about".to_string(), "about-1".to_string()].into_iter().collect();
        let mut allocator = HeadingIdAllocator::new();

        assert_eq!(allocator.allocate("About", 0, &registry).as_str(), "about-2");
    }

    #[test]
    fn test_allocate_transliterates_when_candidate_empty() {
        let mut allocator = HeadingIdAllocator::new();
        assert_eq!(allocator.allocate("Ελλάδα", 0, &empty()).as_str(), "ellada");
    }

    #[test]
    fn test_allocate_positional_fallback() {
        let mut allocator = HeadingIdAllocator::new();
        let registry = empty();

        assert_eq!(allocator.allocate("", 0, &registry).as_str(), "section-1");
        assert_eq!(allocator.allocate("***", 4, &registry).as_str(), "section-5");
        assert_eq!(allocator.allocate("", 0, &registry).as_str(), "section-1-1");
    }

    #[test]
    fn test_allocated_ids_are_fragment_safe() {
        let mut allocator = HeadingIdAllocator::new();
        let registry = empty();
        for (i, text) in ["  -- Odd -- ", "ÆØÅ", "#1 Pick", "", "tab\tsep"]
            .iter()
            .enumerate()
        {
            let id = allocator.allocate(text, i, &registry);
            let s = id.as_str();
            assert!(!s.is_empty());
            assert!(!s.starts_with('-') && !s.ends_with('-'), "{}", s);
            assert!(
                s.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "{}",
                s
            );
        }
    }

    #[test]
    fn test_section_url() {
        let mut allocator = HeadingIdAllocator::new();
        let id = allocator.allocate("Contact Me", 0, &empty());
        assert_eq!(id.fragment(), "#contact-me");
        assert_eq!(
            section_url("https://example.com", "/about.html", &id),
            "https://example.com/about.html#contact-me"
        );
    }
}
