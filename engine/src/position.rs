//! A `Position` wraps a [Board] along with the derived values the evaluator
//! consumes but does not want to recompute from scratch: the running
//! material + piece-square score and the pawn-king hash.
//!
//! A search layer would keep both up to date incrementally as moves are
//! played; here they are computed once when the position is created.

use crate::evaluate::psqt::PSQT;
use crate::evaluate::S;
use crate::zobrist::ZHash;
use chess::board::Board;
use chess::square::Square;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
  /// The board this position wraps
  pub board: Board,

  /// The sum of material and piece-square scores over all pieces on the
  /// board, from White's perspective.
  pub psqt: S,

  /// The Zobrist hash of the pawns and kings of both sides.
  pub pk_hash: ZHash,
}

impl Position {
  pub fn new(board: Board) -> Self {
    let mut psqt = S::default();

    for (sq_idx, piece) in board.piece_list.into_iter().enumerate() {
      if let Some(piece) = piece {
        psqt += PSQT[piece][Square::from(sq_idx)];
      }
    }

    Self {
      board,
      psqt,
      pk_hash: ZHash::pawn_king(&board),
    }
  }
}

impl FromStr for Position {
  type Err = anyhow::Error;

  fn from_str(fen: &str) -> anyhow::Result<Self> {
    Ok(Self::new(fen.parse()?))
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

  #[test]
  fn startpos_psqt_is_balanced() {
    let position: Position =
      "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();

    assert_eq!(position.psqt, S::default());
  }

  #[test]
  fn material_advantage_shows_in_psqt() {
    // White is up a full queen
    let position: Position =
      "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();

    assert!(position.psqt.mg() > 1000);
    assert!(position.psqt.eg() > 1000);
  }
}
