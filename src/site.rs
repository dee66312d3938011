// src/site.rs
// =============================================================================
// This file describes the wiki installation being crawled.
//
// Everything the crawler knows about its target lives in one SiteConfig
// value: where articles are served from, which href shapes count as article
// links, the name of the "random article" page, and how page titles are
// decorated. The default profile targets French Wikipedia.
//
// Keeping these as a value (instead of constants sprinkled around) lets the
// tests point the whole crawler at a local mock server.
//
// Rust concepts:
// - Structs: Group related configuration into one type
// - Default trait: Provides the standard configuration via SiteConfig::default()
// - Option<T>: Represents "no usable name" without sentinel strings
// =============================================================================

/// Article name that means "start from a random article".
pub const RANDOM_ARTICLE: &str = "Spécial:Page_au_hasard";

// Describes one wiki installation.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base address articles are served from; article names are appended
    /// to it to form full page addresses.
    pub base_url: String,

    /// Path prefix that marks an href as an article link.
    pub article_prefix: String,

    /// Path prefix for reserved (media/action) pages that are never articles.
    pub reserved_prefix: String,

    /// Article name of the random-article page.
    pub random_page: String,

    /// Suffix every page title carries; stripped when deriving an article
    /// name from a title.
    pub title_suffix: String,

    /// DOM id of the container holding the article body. Links outside it
    /// (navigation, footers) are not part of the article.
    pub content_container_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fr.wikipedia.org/wiki/".to_string(),
            article_prefix: "/wiki/".to_string(),
            reserved_prefix: "/w/".to_string(),
            random_page: RANDOM_ARTICLE.to_string(),
            title_suffix: " — Wikipédia".to_string(),
            content_container_id: "bodyContent".to_string(),
        }
    }
}

impl SiteConfig {
    // Derives an article name from a page title.
    //
    // Parameters:
    //   title: the text of the page's <title> element
    //
    // Returns: Some(article_name) or None if the title is empty
    //
    // Examples:
    //   "Chat — Wikipédia" -> Some("Chat")
    //   "Théorie des graphes — Wikipédia" -> Some("Théorie_des_graphes")
    //
    // Spaces become underscores so the derived name matches the form used
    // in article hrefs. A title without the expected suffix is used whole.
    pub fn article_name_from_title(&self, title: &str) -> Option<String> {
        let trimmed = title.trim();
        let name = trimmed
            .strip_suffix(&self.title_suffix)
            .unwrap_or(trimmed)
            .trim();

        if name.is_empty() {
            return None;
        }

        Some(name.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_suffix_is_stripped() {
        let site = SiteConfig::default();
        let name = site.article_name_from_title("Chat — Wikipédia");
        assert_eq!(name, Some("Chat".to_string()));
    }

    #[test]
    fn test_spaces_become_underscores() {
        let site = SiteConfig::default();
        let name = site.article_name_from_title("Théorie des graphes — Wikipédia");
        assert_eq!(name, Some("Théorie_des_graphes".to_string()));
    }

    #[test]
    fn test_title_without_suffix_is_used_whole() {
        let site = SiteConfig::default();
        let name = site.article_name_from_title("  Chat  ");
        assert_eq!(name, Some("Chat".to_string()));
    }

    #[test]
    fn test_empty_title_has_no_name() {
        let site = SiteConfig::default();
        assert_eq!(site.article_name_from_title(""), None);
        assert_eq!(site.article_name_from_title("   "), None);
    }

    #[test]
    fn test_default_targets_french_wikipedia() {
        let site = SiteConfig::default();
        assert_eq!(site.base_url, "https://fr.wikipedia.org/wiki/");
        assert_eq!(site.random_page, RANDOM_ARTICLE);
    }
}
