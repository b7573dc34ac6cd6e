//! Capacity in which an order is entered.

use serde::{Deserialize, Serialize};

/// Capacity in which the firm acts for the order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    /// `'A'`
    Agency,
    /// `'P'`
    Principal,
    /// `'R'`
    RisklessPrincipal,
}

impl Capacity {
    pub const fn wire_code(self) -> u8 {
        match self {
            Capacity::Agency => b'A',
            Capacity::Principal => b'P',
            Capacity::RisklessPrincipal => b'R',
        }
    }

    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            b'A' => Some(Capacity::Agency),
            b'P' => Some(Capacity::Principal),
            b'R' => Some(Capacity::RisklessPrincipal),
            _ => None,
        }
    }
}
