//! Time in force.

use serde::{Deserialize, Serialize};

/// How long an order stays working.
///
/// Codes follow the FIX `TimeInForce <59>` values:
/// Day `'0'`, Immediate-or-Cancel `'3'`, Good-till-Date `'6'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    Day,
    Ioc,
    Gtd,
}

impl TimeInForce {
    pub const fn wire_code(self) -> u8 {
        match self {
            TimeInForce::Day => b'0',
            TimeInForce::Ioc => b'3',
            TimeInForce::Gtd => b'6',
        }
    }

    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            b'0' => Some(TimeInForce::Day),
            b'3' => Some(TimeInForce::Ioc),
            b'6' => Some(TimeInForce::Gtd),
            _ => None,
        }
    }
}
