//! Stable snapshot hashing for determinism checks.
//! This module exists to keep hashing concerns out of simulation code.
//! It does not own what counts as a behavioral difference.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_i32(self.player.pos.y);
        hasher.write_i32(self.player.pos.x);
        hasher.write_i32(self.player.health);
        hasher.write_i32(self.player.score);
        hasher.write_i32(self.player.defense);
        hasher.write_i32(self.player.luck);
        hasher.write(&self.grid.canonical_bytes());
        hasher.finish()
    }
}
