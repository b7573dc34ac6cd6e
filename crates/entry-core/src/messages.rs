//! Request values handed to the encoder.
//!
//! These are **transport-agnostic** logical requests. They are built by
//! the caller right before an encode call and never mutated by the
//! encoder. Binary encoders live in the `entry-protocol` crate; this
//! module is purely logical.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::order::{ComplexOrder, Order};
use crate::order_type::OrdType;
use crate::request_kind::RequestKind;
use crate::side::Side;
use crate::time_in_force::TimeInForce;

/// An outbound request of any supported kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    NewOrder(NewOrder),
    NewOrderCross(NewOrderCross),
    NewOrderCrossMultileg(NewOrderCrossMultileg),
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::NewOrder(_) => RequestKind::New,
            Request::NewOrderCross(_) => RequestKind::NewCross,
            Request::NewOrderCrossMultileg(_) => RequestKind::NewCrossMultileg,
        }
    }
}

/// Single-order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub cl_ord_id: String,
    pub side: Side,
    pub volume: u32,

    /// Limit price, scaled to the wire's fixed-point representation
    /// by the field dictionary.
    pub price: Decimal,
    pub ord_type: OrdType,
    pub time_in_force: TimeInForce,

    /// Displayed quantity for reserve orders.
    pub max_floor: u32,
    pub symbol: String,
    pub capacity: Capacity,
    pub account: String,
}

/// Cross of one agency order against one or more contra orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderCross {
    pub cross_id: String,
    pub price: Decimal,
    pub symbol: String,
    pub agency_order: Order,
    #[serde(default)]
    pub contra_orders: Vec<Order>,
}

impl NewOrderCross {
    /// Agency order plus contra orders.
    pub fn order_count(&self) -> usize {
        self.contra_orders.len() + 1
    }

    /// Agency order first, then contra orders in input order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        std::iter::once(&self.agency_order).chain(self.contra_orders.iter())
    }
}

/// Cross where each side is a complex order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderCrossMultileg {
    pub cross_id: String,
    pub price: Decimal,
    pub symbol: String,
    pub agency_order: ComplexOrder,
    #[serde(default)]
    pub contra_orders: Vec<ComplexOrder>,
}

impl NewOrderCrossMultileg {
    pub fn order_count(&self) -> usize {
        self.contra_orders.len() + 1
    }

    pub fn orders(&self) -> impl Iterator<Item = &ComplexOrder> {
        std::iter::once(&self.agency_order).chain(self.contra_orders.iter())
    }

    /// Leg count of every order, agency first.
    pub fn leg_counts(&self) -> Vec<usize> {
        self.orders().map(ComplexOrder::leg_count).collect()
    }
}
