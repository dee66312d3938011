// src/crawl/canonical.rs
// =============================================================================
// This module turns raw hrefs into canonical URLs, or rejects them.
//
// Canonicalization is what makes deduplication possible: two different hrefs
// pointing at the same article ("/wiki/Th%C3%A9" and "/wiki/Thé#Histoire")
// must normalize to the same CanonicalUrl, and anything that is not an
// article (anchors, media pages, categories) must be rejected before it can
// reach the visited set or the frontier.
//
// The pipeline for an accepted href:
// 1. Keep only article-path links (reject anchors, reserved paths, the rest)
// 2. Take the last path segment as the article name
// 3. Drop the anchor fragment (#...)
// 4. Percent-decode the name (leniently: malformed escapes pass through)
// 5. Prepend the site's base address
//
// Rust concepts:
// - Newtype pattern: CanonicalUrl wraps String so canonical and raw strings
//   cannot be mixed up by accident
// - Option<T>: Some(url) for accepted links, None for rejected ones
// - Byte-level string processing with safe re-assembly into UTF-8
// =============================================================================

use std::fmt;

use crate::site::SiteConfig;

// A normalized, comparable identifier for a crawlable page.
//
// Holds the full page address (base address + decoded article name).
// Immutable once built: every CanonicalUrl comes out of the canonicalize
// functions below, never from raw string juggling elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    /// Borrows the full address as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Canonicalizes a raw href extracted from a page.
//
// Parameters:
//   raw_link: the href attribute value, exactly as found in the document
//   site: the site profile (prefixes and base address)
//
// Returns: Some(CanonicalUrl) for crawlable article links, None otherwise
//
// Examples:
//   "/wiki/Chat"             -> Some(".../wiki/Chat")
//   "/wiki/Chat#Description" -> Some(".../wiki/Chat")
//   "/wiki/Th%C3%A9"         -> Some(".../wiki/Thé")
//   "#Histoire"              -> None (in-page anchor)
//   "/w/index.php?..."       -> None (reserved path)
//   "/wiki/Catégorie:Félin"  -> None (namespace page)
//
// This is a pure function: the same raw_link and site always produce the
// same result. The visited set relies on that.
pub fn canonicalize(raw_link: &str, site: &SiteConfig) -> Option<CanonicalUrl> {
    // In-page anchors and reserved (media/action) paths are never articles.
    if raw_link.starts_with('#') || raw_link.starts_with(&site.reserved_prefix) {
        return None;
    }

    // Only article-path links are crawlable. Absolute links to other hosts
    // and every other path shape fail this check.
    if !raw_link.starts_with(&site.article_prefix) {
        return None;
    }

    // Namespace pages (categories, talk pages, files) carry a ':' in the
    // href. The check runs on the still-encoded string.
    if raw_link.contains(':') {
        return None;
    }

    canonicalize_name(article_name(raw_link), site)
}

// Canonicalizes a bare article name (a command-line seed, or a name derived
// from a page title). Skips the path checks, applies everything else.
//
// Returns None if the name is empty once the anchor fragment is dropped.
pub fn canonicalize_name(name: &str, site: &SiteConfig) -> Option<CanonicalUrl> {
    let name = match name.find('#') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let decoded = percent_decode(name);
    if decoded.is_empty() {
        return None;
    }

    Some(CanonicalUrl(format!("{}{}", site.base_url, decoded)))
}

// Returns the last path segment of a link, or the whole string when there
// is no '/' at all.
fn article_name(link: &str) -> &str {
    match link.rfind('/') {
        Some(pos) => &link[pos + 1..],
        None => link,
    }
}

// Lenient percent-decoding.
//
// "%XX" with two hex digits becomes that byte, '+' becomes a space, and
// anything malformed ("%", "%G1", a truncated "%A") passes through
// unchanged instead of failing. The decoded bytes are read back as UTF-8
// with invalid sequences replaced, so the result is always a valid String.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

// Value of an ASCII hex digit, or None for anything else.
fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|value| value as u8)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the newtype pattern?
//    - Wrapping a type in a one-field struct: struct CanonicalUrl(String)
//    - The compiler then treats it as a distinct type
//    - A function taking CanonicalUrl cannot be handed a raw href by mistake
//
// 2. Why return Option instead of a Result?
//    - Rejecting a link is not an error, it is the common case
//    - None simply means "not an article link, skip it"
//    - Result is reserved for failures the caller must react to
//
// 3. Why decode into bytes first?
//    - Percent escapes encode bytes, not characters
//    - "é" arrives as two escapes ("%C3%A9") that only form a character
//      once both bytes are in place
//    - String::from_utf8_lossy turns the byte buffer back into a String
//
// 4. What does rfind do?
//    - Like find, but searches from the end of the string
//    - rfind('/') locates the final path separator, giving us the last
//      path segment in one step
// -----------------------------------------------------------------------------
