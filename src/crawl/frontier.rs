// src/crawl/frontier.rs
// =============================================================================
// This module implements the frontier: the FIFO queue of canonical URLs
// waiting to be visited.
//
// Strict first-in-first-out order is what makes the crawl breadth-first:
// every page discovered at distance N is visited before any page at
// distance N+1. The visited set guarantees each URL is enqueued at most
// once, so the frontier never needs to deduplicate on its own.
//
// Rust concepts:
// - VecDeque: A ring-buffer queue with O(1) push_back and pop_front
// - Ownership transfer: dequeue moves the URL out to the caller, the queue
//   never touches it again
// =============================================================================

use std::collections::VecDeque;

use super::canonical::CanonicalUrl;

// FIFO queue of URLs awaiting a visit, in discovery order.
pub struct Frontier {
    queue: VecDeque<CanonicalUrl>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    // Adds a URL at the back of the queue, taking ownership of it.
    pub fn enqueue(&mut self, url: CanonicalUrl) {
        self.queue.push_back(url);
    }

    // Removes and returns the oldest queued URL.
    //
    // Returns None when the queue is empty. That is a normal outcome, not
    // an error: it is one of the two signals that end the crawl.
    pub fn dequeue(&mut self) -> Option<CanonicalUrl> {
        self.queue.pop_front()
    }

    /// Number of URLs still waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::canonical::canonicalize_name;
    use crate::site::SiteConfig;

    fn url(name: &str) -> CanonicalUrl {
        canonicalize_name(name, &SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.enqueue(url("Chat"));
        frontier.enqueue(url("Chien"));

        assert_eq!(frontier.dequeue(), Some(url("Chat")));
        assert_eq!(frontier.dequeue(), Some(url("Chien")));
        assert_eq!(frontier.dequeue(), None);
    }

    #[test]
    fn test_empty_dequeue_is_none() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.dequeue(), None);
    }

    #[test]
    fn test_len_tracks_queue() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.len(), 0);

        frontier.enqueue(url("Chat"));
        frontier.enqueue(url("Chien"));
        assert_eq!(frontier.len(), 2);

        frontier.dequeue();
        assert_eq!(frontier.len(), 1);
    }
}
