// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song id generation.
//!
//! Ids are random 64-bit values rendered as 16 lowercase hex digits, which
//! keeps them short and safe to drop into a URL path. The generator keeps
//! every id it has handed out and draws again on a repeat, so uniqueness
//! does not depend on clock resolution.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SongId;

/// Source of fresh, never repeated song ids
#[derive(Debug)]
pub struct SongIdGenerator {
    rng: StdRng,
    issued: HashSet<SongId>,
}

impl SongIdGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed (reproducible ids)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Produce an id that this generator has never produced before
    pub fn next_id(&mut self) -> SongId {
        loop {
            let raw: u64 = self.rng.gen();
            let id = SongId::new(format!("{:016x}", raw));
            if self.issued.insert(id.clone()) {
                return id;
            }
            tracing::debug!(%id, "song id collision, drawing again");
        }
    }

    /// Number of ids issued so far
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

impl Default for SongIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let mut ids = SongIdGenerator::with_seed(7);
        let id = ids.next_id();
        assert_eq!(id.as_str().len(), 16);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = SongIdGenerator::with_seed(42);
        let drawn: HashSet<SongId> = (0..5_000).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 5_000);
        assert_eq!(ids.issued_count(), 5_000);
    }

    #[test]
    fn test_seeded_generators_repeat() {
        let mut a = SongIdGenerator::with_seed(1);
        let mut b = SongIdGenerator::with_seed(1);
        assert_eq!(a.next_id(), b.next_id());
        assert_eq!(a.next_id(), b.next_id());
    }
}
