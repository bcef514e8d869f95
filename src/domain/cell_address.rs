//! A1-style cell addresses.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Largest addressable row (1-based), matching common spreadsheet limits.
pub const MAX_ROWS: usize = 1_048_576;

/// Largest addressable column count, `XFD`.
pub const MAX_COLS: usize = 16_384;

/// Zero-based position of a single cell, written as `H4`, `AA10`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    row: usize,
    col: usize,
}

impl CellAddress {
    fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse an address like "H4" or "aa100" (case-insensitive), up to `XFD1048576`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidCellAddress(raw.to_string());
        let upper = raw.trim().to_ascii_uppercase();

        let split = upper.find(|c: char| !c.is_ascii_alphabetic()).ok_or_else(invalid)?;
        let (letters, digits) = upper.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        // A=1 .. Z=26, AA=27; shifted to zero-based below
        let mut col: usize = 0;
        for c in letters.bytes() {
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add((c - b'A' + 1) as usize))
                .ok_or_else(invalid)?;
        }

        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 || row > MAX_ROWS || col > MAX_COLS {
            return Err(invalid());
        }

        Ok(Self::new(row - 1, col - 1))
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    fn column_letters(&self) -> String {
        let mut n = self.col + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row + 1)
    }
}

impl FromStr for CellAddress {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
