// src/page/html.rs
// =============================================================================
// This module extracts links and titles from fetched pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Link extraction is scoped to the article's content container when the
// page has one. Wiki pages wrap the article body in a well-known div, and
// everything outside it (navigation bars, sidebars, footers) links to the
// same few pages on every single article. If the container is missing the
// whole document is scanned instead.
//
// Rust concepts:
// - Iterators: filter_map to keep only elements with an href
// - if let: Handle the "container exists" case without nesting matches
// =============================================================================

use scraper::{Html, Selector};

// Extracts candidate hrefs from a page, in document order.
//
// Parameters:
//   html: the page body
//   container_id: DOM id of the content container to scope the search to
//
// Returns: raw href strings, exactly as written in the document
//
// The hrefs are not filtered or normalized here; deciding which ones are
// crawlable articles is the canonicalizer's job.
pub fn extract_links(html: &str, container_id: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because the selector is a constant and known
    // to be valid.
    let anchors = Selector::parse("a[href]").unwrap();

    // The container id comes from configuration, so its selector might not
    // parse; fall back to the whole document rather than failing.
    if let Ok(container) = Selector::parse(&format!("#{}", container_id)) {
        if let Some(body) = document.select(&container).next() {
            return body
                .select(&anchors)
                .filter_map(|element| element.value().attr("href"))
                .map(|href| href.to_string())
                .collect();
        }
    }

    document
        .select(&anchors)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

// Returns the text of the document's <title> element, if there is one.
//
// Used to learn which article the random-article page landed on.
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title = Selector::parse("title").unwrap();

    document
        .select(&title)
        .next()
        .map(|element| element.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_scoped_to_container() {
        let html = r#"
            <html><body>
                <a href="/wiki/Navigation">nav</a>
                <div id="bodyContent">
                    <a href="/wiki/Chat">chat</a>
                    <a href="/wiki/Chien">chien</a>
                </div>
                <a href="/wiki/Pied_de_page">footer</a>
            </body></html>
        "#;

        let links = extract_links(html, "bodyContent");
        assert_eq!(links, vec!["/wiki/Chat", "/wiki/Chien"]);
    }

    #[test]
    fn test_missing_container_falls_back_to_whole_document() {
        let html = r#"
            <html><body>
                <a href="/wiki/Chat">chat</a>
                <div><a href="/wiki/Chien">chien</a></div>
            </body></html>
        "#;

        let links = extract_links(html, "bodyContent");
        assert_eq!(links, vec!["/wiki/Chat", "/wiki/Chien"]);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let html = r#"
            <div id="bodyContent">
                <a href="/wiki/Un">1</a>
                <p><a href="/wiki/Deux">2</a></p>
                <a href="/wiki/Trois">3</a>
            </div>
        "#;

        let links = extract_links(html, "bodyContent");
        assert_eq!(links, vec!["/wiki/Un", "/wiki/Deux", "/wiki/Trois"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<div id="bodyContent"><a name="ici">no href</a></div>"#;
        let links = extract_links(html, "bodyContent");
        assert!(links.is_empty());
    }

    #[test]
    fn test_page_title_is_extracted() {
        let html = "<html><head><title>Chat — Wikipédia</title></head><body></body></html>";
        assert_eq!(page_title(html), Some("Chat — Wikipédia".to_string()));
    }

    #[test]
    fn test_missing_title_is_none() {
        let html = "<html><body><p>pas de titre</p></body></html>";
        assert_eq!(page_title(html), None);
    }
}
