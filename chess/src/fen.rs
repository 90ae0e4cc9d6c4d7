//! Logic for parsing FEN strings
//!
//! A FEN string (short for Forsyth-Edwards Notation) captures an entire
//! board state at a given point in time. An example:
//!
//!   rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2
//!
//! The six space-separated fields are the piece placement (from the 8th rank
//! down), the side to move, the remaining castling rights, the en-passant
//! square, the half-move clock and the full-move counter.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castling::CastlingRights;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;
use anyhow::anyhow;
use itertools::Itertools;
use std::str::FromStr;

impl Board {
  /// Serialize a board into a FEN string
  pub fn to_fen(&self) -> String {
    let ranks = self.piece_list.into_iter().chunks(8);
    let ranks = ranks.into_iter().collect_vec();
    let mut rank_strs: Vec<String> = Vec::new();

    for rank in ranks.into_iter().rev() {
      let mut elements: Vec<String> = Vec::new();
      let piece_runs = rank.into_iter().group_by(|p| p.is_some());

      for run in &piece_runs {
        match run {
          (true, pieces) => {
            for piece in pieces {
              elements.push(piece.unwrap().to_string())
            }
          }
          (false, gaps) => elements.push(gaps.count().to_string()),
        }
      }

      rank_strs.push(elements.join(""));
    }

    let pieces = rank_strs.into_iter().join("/");
    let next_player = self.current;
    let castling = self.castling_rights;
    let en_passant = self
      .en_passant
      .map(|sq| sq.to_string())
      .unwrap_or(String::from("-"));
    let half_moves = self.half_moves;
    let full_moves = self.full_moves;

    format!("{pieces} {next_player} {castling} {en_passant} {half_moves} {full_moves}")
  }

  /// Parse a board from a FEN string
  pub fn from_fen(fen: &str) -> anyhow::Result<Board> {
    let mut parts = fen.split(' ');

    let piece_string = parts.next().ok_or(anyhow!("Invalid FEN string"))?;

    let mut piece_bbs = [Bitboard::EMPTY; PieceType::COUNT];
    let mut occupied_squares = [Bitboard::EMPTY; Color::COUNT];
    let mut piece_list = [None; Square::COUNT];
    let mut square_idx: usize = 0;

    // FEN starts with the 8th rank down, so we need to reverse the ranks
    // to go in ascending order
    for rank in piece_string.split('/').rev() {
      for c in rank.chars() {
        let c = c.to_string();

        if let Ok(gap) = usize::from_str(&c) {
          square_idx += gap;
        } else if let Ok(piece) = Piece::from_str(&c) {
          let square = Square::from(square_idx);
          let bb = Bitboard::from(square);

          piece_list[square_idx] = Some(piece);
          piece_bbs[piece.piece_type()] |= bb;
          occupied_squares[piece.color()] |= bb;

          square_idx += 1;
        } else {
          return Err(anyhow!("Invalid FEN string"));
        }
      }
    }

    let current: Color =
      parts.next().ok_or(anyhow!("Invalid FEN string"))?.parse()?;

    let castling_rights: CastlingRights =
      parts.next().ok_or(anyhow!("Invalid FEN string"))?.parse()?;

    let en_passant: Option<Square> = parts
      .next()
      .ok_or(anyhow!("Invalid FEN string"))?
      .parse()
      .ok();

    let half_moves =
      parts.next().ok_or(anyhow!("Invalid FEN string"))?.parse()?;

    let full_moves =
      parts.next().ok_or(anyhow!("Invalid FEN string"))?.parse()?;

    Ok(Board {
      current,
      piece_bbs,
      occupied_squares,
      piece_list,
      castling_rights,
      en_passant,
      half_moves,
      full_moves,
    })
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
  fn roundtrip_startpos() {
    let initial_fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let board = Board::from_str(initial_fen).unwrap();
    assert_eq!(initial_fen, board.to_fen());
  }

  #[test]
  fn roundtrip_midgame() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let board = Board::from_str(fen).unwrap();
    assert_eq!(fen, board.to_fen());
  }

  #[test]
  fn rejects_garbage() {
    assert!(Board::from_str("not a fen").is_err());
    assert!(Board::from_str("").is_err());
  }
}
