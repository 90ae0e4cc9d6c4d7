//! Castling rights, as parsed from the third field of a FEN string.
//!
//! The evaluator never consults these, but the board carries them so a
//! parsed position serializes back to the exact FEN it came from.

use anyhow::anyhow;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
  pub const WK: Self = Self(0b0001);
  pub const WQ: Self = Self(0b0010);
  pub const BK: Self = Self(0b0100);
  pub const BQ: Self = Self(0b1000);

  pub fn none() -> Self {
    Self(0)
  }

  pub fn add(&mut self, other: Self) {
    self.0 |= other.0;
  }

  pub fn contains(&self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }
}

impl FromStr for CastlingRights {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> anyhow::Result<Self> {
    let mut rights = Self::none();

    if s == "-" {
      return Ok(rights);
    }

    for c in s.chars() {
      match c {
        'K' => rights.add(Self::WK),
        'Q' => rights.add(Self::WQ),
        'k' => rights.add(Self::BK),
        'q' => rights.add(Self::BQ),
        _ => Err(anyhow!("Not a valid castling rights string"))?,
      }
    }

    Ok(rights)
  }
}

impl Display for CastlingRights {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.0 == 0 {
      return write!(f, "-");
    }

    if self.contains(Self::WK) {
      write!(f, "K")?;
    }
    if self.contains(Self::WQ) {
      write!(f, "Q")?;
    }
    if self.contains(Self::BK) {
      write!(f, "k")?;
    }
    if self.contains(Self::BQ) {
      write!(f, "q")?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_and_display() {
    let rights: CastlingRights = "KQkq".parse().unwrap();
    assert_eq!(rights.to_string(), "KQkq");

    let rights: CastlingRights = "Kq".parse().unwrap();
    assert!(rights.contains(CastlingRights::WK));
    assert!(!rights.contains(CastlingRights::BK));

    let rights: CastlingRights = "-".parse().unwrap();
    assert_eq!(rights.to_string(), "-");
  }
}
