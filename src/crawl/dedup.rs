// src/crawl/dedup.rs
// =============================================================================
// This module implements the visited set: the record of every canonical URL
// the crawl has ever seen (seeded or enqueued).
//
// It is a hash set with a fixed number of buckets, chosen at construction
// and never resized. Colliding entries chain inside their bucket and are
// found by a linear scan with exact string comparison.
//
// Scaling limit: with a fixed bucket count, lookups degrade toward a linear
// scan once the number of entries dwarfs the number of buckets. The default
// of 10,000 buckets keeps chains short for crawls up to the tens of
// thousands of pages, which is far beyond any reasonable step budget.
//
// The set only ever grows. There is no remove operation: once a URL has
// been seen it stays seen for the lifetime of the crawl.
//
// Rust concepts:
// - Vec<Vec<String>>: An owned bucket table, no manual allocation
// - wrapping_mul: Integer multiplication with explicit wraparound
// - Iterator chains: filter/map/sum for the collision diagnostics
// =============================================================================

use super::canonical::CanonicalUrl;

/// Default number of buckets in the table.
pub const DEFAULT_BUCKET_COUNT: usize = 10_000;

// The set of every canonical URL ever inserted during a crawl.
pub struct VisitedSet {
    buckets: Vec<Vec<String>>,
}

impl VisitedSet {
    /// Creates an empty set with the default bucket count.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty set with a specific bucket count.
    ///
    /// The count is fixed for the set's lifetime. More buckets means fewer
    /// collisions but more idle memory; fewer means longer chains.
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be non-zero");
        Self {
            buckets: vec![Vec::new(); bucket_count],
        }
    }

    // Records a URL as seen.
    //
    // Duplicate inserts of the same URL are allowed and simply append a
    // second entry to the bucket. That wastes a little memory but never
    // breaks contains(), so callers are expected (not required) to check
    // membership first.
    pub fn insert(&mut self, url: &CanonicalUrl) {
        let index = self.bucket_index(url.as_str());
        let bucket = &mut self.buckets[index];

        if bucket.capacity() == 0 {
            // First entry in this bucket: start small, chains stay short.
            bucket.reserve(2);
        }

        bucket.push(url.as_str().to_owned());
    }

    // Membership test. Expected O(1): one hash, then a scan of a short chain.
    pub fn contains(&self, url: &CanonicalUrl) -> bool {
        let index = self.bucket_index(url.as_str());
        self.buckets[index].iter().any(|entry| entry == url.as_str())
    }

    // Number of entries sharing a bucket with an earlier entry, summed over
    // the whole table. Diagnostics only; correctness never depends on it.
    pub fn collision_count(&self) -> usize {
        self.buckets
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .map(|bucket| bucket.len() - 1)
            .sum()
    }

    fn bucket_index(&self, key: &str) -> usize {
        (fingerprint(key) as usize) % self.buckets.len()
    }
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}

// 32-bit fingerprint of a key.
//
// Seed 0x12345678; for each byte: xor it in, multiply by 0x5bd1e995, then
// xor the value with itself shifted right by 15. All arithmetic is 32-bit
// with wraparound.
//
// This must stay bit-exact: bucket placement, and the collision diagnostics
// built on it, are part of the observable behavior and the test fixtures
// below pin concrete values.
pub fn fingerprint(key: &str) -> u32 {
    let mut hash: u32 = 0x1234_5678;

    for &byte in key.as_bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x5bd1_e995);
        hash ^= hash >> 15;
    }

    hash
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why wrapping_mul instead of plain *?
//    - In debug builds, plain integer overflow panics
//    - This hash relies on 32-bit wraparound on every step
//    - wrapping_mul says "overflow is intended here" and never panics
//
// 2. What does Vec::reserve(2) do?
//    - Pre-allocates space for at least 2 elements
//    - A fresh Vec has capacity 0; the first push would allocate anyway
//    - Reserving a small amount up front keeps tiny chains in one allocation
//
// 3. Why store String copies instead of sharing the CanonicalUrl?
//    - The frontier takes ownership of the CanonicalUrl when it is enqueued
//    - The set keeps its own copy, so the two structures never fight over
//      one allocation
//
// 4. Why is there no remove()?
//    - A crawl only ever discovers more pages
//    - "Seen" is a one-way door; removing entries could let a page be
//      enqueued twice
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::canonical::canonicalize_name;
    use crate::site::SiteConfig;

    fn url(name: &str) -> CanonicalUrl {
        canonicalize_name(name, &SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_fingerprint_of_empty_string() {
        assert_eq!(fingerprint(""), 0x12345678);
    }

    #[test]
    fn test_fingerprint_fixtures() {
        assert_eq!(fingerprint("a"), 0x683b0dfa);
        assert_eq!(fingerprint("abc"), 0x01d5de28);
        assert_eq!(fingerprint("Chat"), 0x4de09b46);
    }

    #[test]
    fn test_contains_after_insert() {
        let mut set = VisitedSet::new();
        let chat = url("Chat");

        assert!(!set.contains(&chat));
        set.insert(&chat);
        assert!(set.contains(&chat));
    }

    #[test]
    fn test_no_false_positives() {
        let mut set = VisitedSet::new();
        set.insert(&url("Chat"));
        set.insert(&url("Chien"));

        assert!(!set.contains(&url("Cheval")));
    }

    #[test]
    fn test_membership_survives_forced_collisions() {
        // One bucket: every entry collides, lookups fall back to the chain.
        let mut set = VisitedSet::with_bucket_count(1);
        set.insert(&url("Chat"));
        set.insert(&url("Chien"));
        set.insert(&url("Cheval"));

        assert!(set.contains(&url("Chat")));
        assert!(set.contains(&url("Chien")));
        assert!(set.contains(&url("Cheval")));
        assert!(!set.contains(&url("Souris")));
    }

    #[test]
    fn test_collision_count() {
        let mut set = VisitedSet::with_bucket_count(1);
        assert_eq!(set.collision_count(), 0);

        set.insert(&url("Chat"));
        assert_eq!(set.collision_count(), 0);

        set.insert(&url("Chien"));
        set.insert(&url("Cheval"));
        assert_eq!(set.collision_count(), 2);
    }

    #[test]
    fn test_duplicate_insert_appends_but_still_works() {
        let mut set = VisitedSet::with_bucket_count(1);
        let chat = url("Chat");

        set.insert(&chat);
        set.insert(&chat);

        assert!(set.contains(&chat));
        assert_eq!(set.collision_count(), 1);
    }
}
