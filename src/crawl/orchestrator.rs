// src/crawl/orchestrator.rs
// =============================================================================
// This module drives the crawl itself.
//
// How it works:
// 1. Seed: canonicalize the start article and mark it visited
// 2. Visit: fetch the current page and extract its raw links
// 3. Extract: canonicalize each link, write an edge for every accepted one,
//    enqueue the targets never seen before
// 4. Spend one step; stop when the budget or the frontier runs out,
//    otherwise dequeue the next page and go back to 2
//
// The crawler owns everything it needs for one run: the site profile, the
// fetcher, the visited set, the frontier, the graph writer, and the step
// budget. run() consumes the crawler, so a finished crawl cannot be
// accidentally restarted with stale state.
//
// Failed fetches are reported and skipped; the only fatal conditions are an
// unusable start article, an unresolvable random start page, and a graph
// file that cannot be written.
//
// Rust concepts:
// - Consuming self: run(mut self) takes ownership, state cannot leak out
// - Sequential awaits: async code that still visits one page at a time
// - The ? operator: Fatal errors bubble up, recoverable ones are matched
// =============================================================================

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::GraphWriter;
use crate::page::{extract_links, page_title, PageFetcher};
use crate::site::SiteConfig;

use super::canonical::{canonicalize, canonicalize_name, CanonicalUrl};
use super::dedup::VisitedSet;
use super::frontier::Frontier;

// Fatal crawl failures. Everything else (failed fetches, pages without
// links) is reported and skipped.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The start article name canonicalized to nothing.
    #[error("invalid start article '{0}'")]
    InvalidStart(String),

    /// The random start page was fetched but its title could not be read,
    /// so the seed's identity is unknown and no edges can be attributed.
    #[error("could not resolve the title of the random start page")]
    SeedIdentity,

    /// Writing the graph file failed.
    #[error("graph output failed: {0}")]
    Graph(#[from] std::io::Error),
}

// Final crawl diagnostics, printed (or serialized) when the crawl ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    /// The resolved start page.
    pub start: String,
    /// Pages visited, counting failed fetches as visits.
    pub pages_visited: usize,
    /// Edge lines written to the graph file.
    pub edges_recorded: usize,
    /// URLs discovered but still unvisited when the crawl stopped.
    pub frontier_remaining: usize,
    /// Hash bucket collisions in the visited set.
    pub collisions: usize,
}

// Owns all crawl state for one run.
pub struct Crawler<W: Write> {
    site: SiteConfig,
    fetcher: PageFetcher,
    visited: VisitedSet,
    frontier: Frontier,
    graph: GraphWriter<W>,
    steps: usize,
    pages_visited: usize,
    edges_recorded: usize,
}

impl<W: Write> Crawler<W> {
    // Builds a crawler with empty state and a full step budget.
    pub fn new(
        site: SiteConfig,
        fetcher: PageFetcher,
        graph: GraphWriter<W>,
        steps: usize,
    ) -> Self {
        Self {
            site,
            fetcher,
            visited: VisitedSet::new(),
            frontier: Frontier::new(),
            graph,
            steps,
            pages_visited: 0,
            edges_recorded: 0,
        }
    }

    // Runs the crawl to completion and returns the final report.
    //
    // Parameters:
    //   start: an article name, either a concrete one or the site's
    //          random-article name (the command-line default)
    //
    // The graph frame is always written, even when the budget is zero or
    // every fetch fails.
    pub async fn run(mut self, start: &str) -> Result<CrawlReport, CrawlError> {
        let random_start = start == self.site.random_page;

        let mut current = match canonicalize_name(start, &self.site) {
            Some(url) => url,
            None => return Err(CrawlError::InvalidStart(start.to_string())),
        };

        // A concrete seed's identity is known up front. A random seed is
        // inserted later, once its real name is read from the fetched page.
        if !random_start {
            self.visited.insert(&current);
        }

        let mut start_page = current.to_string();

        self.graph.open()?;

        if self.steps > 0 {
            let mut resolve_identity = random_start;
            loop {
                self.visit(&mut current, resolve_identity).await?;
                if resolve_identity {
                    // The first visit replaced `current` with the page the
                    // random redirect actually landed on.
                    start_page = current.to_string();
                    resolve_identity = false;
                }

                self.steps -= 1;
                if self.steps == 0 {
                    break;
                }

                current = match self.frontier.dequeue() {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        self.graph.close()?;

        Ok(CrawlReport {
            start: start_page,
            pages_visited: self.pages_visited,
            edges_recorded: self.edges_recorded,
            frontier_remaining: self.frontier.len(),
            collisions: self.visited.collision_count(),
        })
    }

    // Visits one page: fetch, resolve the seed's identity if needed, then
    // hand the extracted links to ingest().
    //
    // When resolve_identity is set (only ever on the random seed's first
    // visit), `current` is replaced with the title-derived identity before
    // any edges are recorded, so every edge has the right source.
    async fn visit(
        &mut self,
        current: &mut CanonicalUrl,
        resolve_identity: bool,
    ) -> Result<(), CrawlError> {
        if resolve_identity {
            println!("  Exploring random page");
        } else {
            println!("  Exploring {}", current);
        }

        self.pages_visited += 1;

        let body = match self.fetcher.fetch(current.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                // Recoverable: skip this page, the crawl goes on.
                eprintln!("  Warning: failed to fetch {}: {}", current, e);
                return Ok(());
            }
        };

        if resolve_identity {
            let resolved = page_title(&body)
                .and_then(|title| self.site.article_name_from_title(&title))
                .and_then(|name| canonicalize_name(&name, &self.site));

            *current = match resolved {
                Some(url) => url,
                None => return Err(CrawlError::SeedIdentity),
            };

            self.visited.insert(current);
            println!("  Random page resolved to {}", current);
        }

        let raw_links = extract_links(&body, &self.site.content_container_id);
        if raw_links.is_empty() {
            println!("  No links found on this page");
            return Ok(());
        }

        let queued = self.ingest(current, &raw_links)?;
        println!("  Queued {} new links to explore", queued);

        Ok(())
    }

    // The extract step: canonicalize each raw href in document order,
    // record edges, enqueue unseen targets. Returns how many URLs were
    // newly queued.
    fn ingest(
        &mut self,
        current: &CanonicalUrl,
        raw_links: &[String],
    ) -> Result<usize, CrawlError> {
        let mut queued = 0;

        for raw in raw_links {
            let target = match canonicalize(raw, &self.site) {
                Some(url) => url,
                None => continue,
            };

            // Every raw occurrence of an accepted link becomes an edge,
            // already-visited targets included. Only self-links are dropped.
            if target != *current {
                self.graph.edge(current.as_str(), target.as_str())?;
                self.edges_recorded += 1;
            }

            if !self.visited.contains(&target) {
                self.visited.insert(&target);
                self.frontier.enqueue(target);
                queued += 1;
            }
        }

        Ok(queued)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does run() take `mut self` instead of `&mut self`?
//    - Taking self by value consumes the crawler
//    - After run() the visited set, frontier and counters are gone with it
//    - The type system enforces "one crawler, one crawl"
//
// 2. Why is the check-then-insert order important?
//    - A URL is enqueued only if contains() said it was unseen, and it is
//      inserted in the same breath
//    - That is what guarantees each page is enqueued (and visited) at most
//      once
//    - In a concurrent crawler this pair would need a lock around it; here
//      a single task runs the whole loop, so it cannot interleave
//
// 3. Why record the edge before the visited check?
//    - The graph should contain every discovered link, not just the links
//      that triggered a new visit
//    - A second path into an already-visited page is real information
//
// 4. Why `&mut CanonicalUrl` for visit()?
//    - The random seed's identity is only known after its page is fetched
//    - visit() rewrites `current` in place so the caller's loop variable
//      points at the resolved page from then on
// -----------------------------------------------------------------------------
