//! Order type (Market / Limit / Pegged).

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdType {
    Market,
    Limit,
    Pegged,
}

impl OrdType {
    /// One-byte wire code (`'1'`, `'2'`, `'P'`).
    pub const fn wire_code(self) -> u8 {
        match self {
            OrdType::Market => b'1',
            OrdType::Limit => b'2',
            OrdType::Pegged => b'P',
        }
    }

    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            b'1' => Some(OrdType::Market),
            b'2' => Some(OrdType::Limit),
            b'P' => Some(OrdType::Pegged),
            _ => None,
        }
    }
}
