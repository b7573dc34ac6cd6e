//! Participant orders carried inside a cross.
//!
//! An [`Order`] is one market participant's side of a New Order Cross.
//! A [`ComplexOrder`] is the same thing for a multileg cross, with one
//! open/close intent per leg.

use serde::{Deserialize, Serialize};

use crate::account_type::AccountType;
use crate::capacity::Capacity;
use crate::position::Position;
use crate::side::Side;

/// A single order within a cross submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub side: Side,

    /// Order quantity.
    pub volume: u32,

    /// Client order identifier. Encoded as fixed-width text, so
    /// anything past the field width is cut off.
    pub cl_ord_id: String,

    pub capacity: Capacity,

    /// Identifier of the firm clearing this order (uppercase alpha).
    pub clearing_firm: String,

    pub account_type: AccountType,

    /// Whether the order was generated by an algorithm.
    #[serde(default)]
    pub algorithmic_indicator: bool,
}

impl Order {
    /// Wire text for the algorithmic indicator: `"Y"` or `"N"`.
    pub fn algorithmic_indicator_code(&self) -> &'static str {
        if self.algorithmic_indicator {
            "Y"
        } else {
            "N"
        }
    }
}

/// An order made of several legs.
///
/// Leg order is significant and is preserved verbatim on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexOrder {
    #[serde(flatten)]
    pub order: Order,

    pub legs: Vec<Position>,
}

impl ComplexOrder {
    /// One code byte per leg, in leg order (e.g. `"OCN"`).
    pub fn leg_string(&self) -> String {
        self.legs.iter().map(|p| p.wire_code() as char).collect()
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}
