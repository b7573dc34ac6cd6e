//! Leg position intent for complex (multileg) orders.

use serde::{Deserialize, Serialize};

/// Open / close intent of a single leg.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Open,
    Close,
    None,
}

impl Position {
    /// One-byte wire code (`'O'`, `'C'`, `'N'`).
    pub const fn wire_code(self) -> u8 {
        match self {
            Position::Open => b'O',
            Position::Close => b'C',
            Position::None => b'N',
        }
    }

    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            b'O' => Some(Position::Open),
            b'C' => Some(Position::Close),
            b'N' => Some(Position::None),
            _ => None,
        }
    }
}
