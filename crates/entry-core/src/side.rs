//! Side (Buy / Sell) of an order.

use serde::{Deserialize, Serialize};

/// Order side: Buy or Sell.
///
/// On the wire a side is a single ASCII digit:
/// `'1'` for Buy, `'2'` for Sell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// One-byte wire code.
    pub const fn wire_code(self) -> u8 {
        match self {
            Side::Buy => b'1',
            Side::Sell => b'2',
        }
    }

    /// Reverse lookup of [`Side::wire_code`].
    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            b'1' => Some(Side::Buy),
            b'2' => Some(Side::Sell),
            _ => None,
        }
    }
}
