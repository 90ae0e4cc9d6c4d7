//! A shared cache for the pawn-king part of the evaluation.
//!
//! The pawn and king-shelter terms only depend on the pawns and kings, so
//! their combined score can be reused across all positions that share a
//! pawn-king structure. The cache is a fixed-size, direct-mapped table,
//! keyed by the pawn-king Zobrist hash, where new entries simply overwrite
//! old ones.
//!
//! The table is shared between all search threads and written without
//! locks. Every slot stores its key XORed with both data words, so a torn
//! read fails the key check and degrades into a cache miss. A genuine hash
//! collision still yields a wrong (but sane) heuristic score, never an
//! illegal one.

use chess::bitboard::Bitboard;
use std::mem::size_of;
use std::sync::atomic::{AtomicU64, Ordering};

use super::util::S;
use crate::zobrist::ZHash;

/// The pawn-king data cached for one structure: the net (White minus Black)
/// pawn-king score and the passed pawns of both colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PawnKingEntry {
  pub passers: Bitboard,
  pub eval: S,
}

#[derive(Default)]
struct Slot {
  key: AtomicU64,
  passers: AtomicU64,
  eval: AtomicU64,
}

pub struct PawnKingCache {
  table: Vec<Slot>,
  size: usize,
}

impl PawnKingCache {
  /// Create a new table with the requested capacity in megabytes
  pub fn with_capacity(mb_size: usize) -> PawnKingCache {
    let size = (mb_size << 20) / size_of::<Slot>();
    let mut table = Vec::with_capacity(size);
    table.resize_with(size, Slot::default);

    PawnKingCache { table, size }
  }

  /// Derive the slot index for a hash, mapping the full 64-bit range evenly
  /// onto the table.
  fn index(&self, hash: ZHash) -> usize {
    ((hash.0 as u128 * self.size as u128) >> 64) as usize
  }

  /// Check whether the hash has a valid entry in the table, and return it
  /// if so.
  pub fn probe(&self, hash: ZHash) -> Option<PawnKingEntry> {
    if hash == ZHash::NULL {
      return None;
    }

    let slot = self.table.get(self.index(hash))?;
    let passers = slot.passers.load(Ordering::Relaxed);
    let eval = slot.eval.load(Ordering::Relaxed);
    let key = slot.key.load(Ordering::Relaxed);

    if key ^ passers ^ eval != hash.0 {
      return None;
    }

    Some(PawnKingEntry {
      passers: Bitboard(passers),
      eval: bytemuck::cast::<u32, S>(eval as u32),
    })
  }

  /// Store an entry, unconditionally overwriting whatever lives in its slot.
  pub fn insert(&self, hash: ZHash, passers: Bitboard, eval: S) {
    let Some(slot) = self.table.get(self.index(hash)) else {
      return;
    };

    let passers = passers.0;
    let eval = bytemuck::cast::<S, u32>(eval) as u64;

    slot.passers.store(passers, Ordering::Relaxed);
    slot.eval.store(eval, Ordering::Relaxed);
    slot.key.store(hash.0 ^ passers ^ eval, Ordering::Relaxed);
  }
}

impl Default for PawnKingCache {
  fn default() -> Self {
    Self::with_capacity(2)
  }
}

////////////////////////////////////////////////////////////////////////////////
//
// Tests
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use super::*;
  use crate::s;

  #[test]
  fn probe_empty() {
    let cache = PawnKingCache::default();
    assert_eq!(cache.probe(ZHash(0xDEADBEEF)), None);
  }

  #[test]
  fn insert_then_probe() {
    let cache = PawnKingCache::default();
    let hash = ZHash(0x1234_5678_9ABC_DEF0);
    let passers = Bitboard(0x0010_0000_0000_1000);
    let eval = s!(-45, 38);

    cache.insert(hash, passers, eval);

    let entry = cache.probe(hash).unwrap();
    assert_eq!(entry.passers, passers);
    assert_eq!(entry.eval, eval);
  }

  #[test]
  fn mismatched_hash_misses() {
    let cache = PawnKingCache::default();
    cache.insert(ZHash(42), Bitboard::EMPTY, s!(1, 1));

    assert_eq!(cache.probe(ZHash(43)), None);
  }

  #[test]
  fn overwrite_replaces() {
    let cache = PawnKingCache::default();
    let hash = ZHash(0xABCD);

    cache.insert(hash, Bitboard::EMPTY, s!(1, 2));
    cache.insert(hash, Bitboard(0xFF00), s!(3, 4));

    let entry = cache.probe(hash).unwrap();
    assert_eq!(entry.passers, Bitboard(0xFF00));
    assert_eq!(entry.eval, s!(3, 4));
  }

  #[test]
  fn shared_across_threads() {
    let cache = PawnKingCache::default();
    let hash = ZHash(0x5555_AAAA_5555_AAAA);

    std::thread::scope(|s| {
      s.spawn(|| cache.insert(hash, Bitboard(0xF0), s!(10, -10)));
    });

    assert_eq!(
      cache.probe(hash),
      Some(PawnKingEntry { passers: Bitboard(0xF0), eval: s!(10, -10) })
    );
  }
}
