// src/page/mod.rs
// =============================================================================
// This module deals with individual pages: fetching them over HTTP and
// pulling links and titles out of their HTML.
//
// Submodules:
// - fetch: the reqwest-backed page fetcher with timeout and redirects
// - html: scraper-backed link and title extraction
//
// The crawl engine only sees this module's API; it never touches reqwest
// or scraper directly.
// =============================================================================

mod fetch;
mod html;

// Re-export what the crawl engine consumes. FetchError stays internal:
// callers match on the error value without ever naming its type.
pub use fetch::PageFetcher;
pub use html::{extract_links, page_title};
