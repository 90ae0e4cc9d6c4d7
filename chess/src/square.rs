//! Squares denote single board positions, where Bitboards denote unordered
//! sets of them.

use crate::piece::Color;
use anyhow::anyhow;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use Square::*;

/// A board square
///
/// Often cast to a usize to index into arrays of different sorts.
#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
  pub const COUNT: usize = 64;

  /// A set of all the squares, handy for converting a usize into a square.
  #[rustfmt::skip]
    pub const ALL: [Self; Self::COUNT] = [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ];

  /// String labels for all the squares, for printing and parsing purposes
  #[rustfmt::skip]
    pub const NAMES: [&'static str; Self::COUNT] = [
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    ];

  /// Get an (optional) square from an index
  pub fn new(idx: u8) -> Option<Self> {
    if idx < 64 {
      Some(unsafe { Self::new_unchecked(idx) })
    } else {
      None
    }
  }

  /// Get a square from an index, without bounds checking.
  ///
  /// SAFETY: The caller must make sure the index is < 64.
  pub const unsafe fn new_unchecked(idx: u8) -> Self {
    unsafe { std::mem::transmute::<u8, Self>(idx) }
  }

  /// Get the rank of the square as an index between 0 and 7.
  pub const fn rank(&self) -> usize {
    (*self as usize) / 8
  }

  /// Get the file of the square as an index between 0 and 7.
  pub const fn file(&self) -> usize {
    (*self as usize) % 8
  }

  /// Get the rank of the square as seen from the requested side, so that
  /// rank 0 is always the side's own back rank.
  pub const fn relative_rank(&self, side: Color) -> usize {
    match side {
      Color::White => self.rank(),
      Color::Black => 7 - self.rank(),
    }
  }

  /// Get the square directly in front of this square, as seen by the
  /// requested side.
  pub fn forward(self, side: Color) -> Option<Self> {
    if side.is_white() {
      Self::ALL.get(self as usize + 8).copied()
    } else {
      (self as usize).checked_sub(8).map(Self::from)
    }
  }

  /// Return the Chebyshev distance (i.e., max(|dx|, |dy|))
  pub fn max_dist(&self, other: Self) -> usize {
    usize::max(
      self.rank().abs_diff(other.rank()),
      self.file().abs_diff(other.file()),
    )
  }

  /// Mirror a square across the board's horizontal midline (a1 <-> a8)
  pub const fn flip(&self) -> Self {
    // SAFETY: Guaranteed to be within bounds because `self` is a Square
    unsafe { Self::new_unchecked((*self as u8) ^ 56) }
  }
}

///////////////////////////////////////////////////////////////////////////////
//
// Utility traits
//
///////////////////////////////////////////////////////////////////////////////

/// Convert usize into Square.
/// Panics if the usize is out of bounds!
impl From<usize> for Square {
  fn from(idx: usize) -> Self {
    Self::ALL[idx]
  }
}

impl Display for Square {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", Self::NAMES[*self])
  }
}

impl FromStr for Square {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> anyhow::Result<Self> {
    let idx = Self::NAMES
      .iter()
      .position(|&name| name == s.to_lowercase())
      .ok_or(anyhow!("Not a valid square identifier"))?;

    Ok(Self::ALL[idx])
  }
}

impl<T> Index<Square> for [T; 64] {
  type Output = T;

  fn index(&self, index: Square) -> &Self::Output {
    // SAFETY: the legal values for this type are all in bounds.
    unsafe { self.get_unchecked(index as usize) }
  }
}

impl<T> IndexMut<Square> for [T; 64] {
  fn index_mut(&mut self, index: Square) -> &mut Self::Output {
    // SAFETY: the legal values for this type are all in bounds.
    unsafe { self.get_unchecked_mut(index as usize) }
  }
}

///////////////////////////////////////////////////////////////////////////////
//
// Tests
//
///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rank_and_file() {
    assert_eq!(E4.rank(), 3);
    assert_eq!(E4.file(), 4);
    assert_eq!(H8.rank(), 7);
    assert_eq!(A1.file(), 0);
  }

  #[test]
  fn relative_rank() {
    assert_eq!(E2.relative_rank(Color::White), 1);
    assert_eq!(E2.relative_rank(Color::Black), 6);
    assert_eq!(E7.relative_rank(Color::Black), 1);
  }

  #[test]
  fn forward() {
    assert_eq!(E2.forward(Color::White), Some(E3));
    assert_eq!(E2.forward(Color::Black), Some(E1));
    assert_eq!(E8.forward(Color::White), None);
    assert_eq!(E1.forward(Color::Black), None);
  }

  #[test]
  fn chebyshev_distance() {
    assert_eq!(A1.max_dist(H8), 7);
    assert_eq!(E4.max_dist(E4), 0);
    assert_eq!(E4.max_dist(G5), 2);
  }

  #[test]
  fn flip() {
    assert_eq!(A1.flip(), A8);
    assert_eq!(E2.flip(), E7);
    assert_eq!(H8.flip(), H1);
  }
}
