//! Account type of orders inside a cross.

use serde::{Deserialize, Serialize};

/// Account type of an order inside a cross.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// `'1'`
    Client,
    /// `'3'`
    House,
}

impl AccountType {
    pub const fn wire_code(self) -> u8 {
        match self {
            AccountType::Client => b'1',
            AccountType::House => b'3',
        }
    }

    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            b'1' => Some(AccountType::Client),
            b'3' => Some(AccountType::House),
            _ => None,
        }
    }
}
