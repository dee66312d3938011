// src/crawl/mod.rs
// =============================================================================
// This module contains the crawl engine.
//
// Submodules:
// - canonical: turns raw hrefs into canonical URLs (or rejects them)
// - dedup: the visited set, so no page is ever explored twice
// - frontier: the FIFO queue that makes the crawl breadth-first
// - orchestrator: the loop tying fetch, extract, dedup and enqueue together
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API the rest of the application uses.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod canonical;
mod dedup;
mod frontier;
mod orchestrator;

// Re-export what the rest of the application consumes
// This lets users write `crawl::Crawler` instead of
// `crawl::orchestrator::Crawler`. The submodules reach each other
// directly, so only the orchestrator's surface is exported here.
pub use orchestrator::{CrawlReport, Crawler};
