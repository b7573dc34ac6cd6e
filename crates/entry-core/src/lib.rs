//! entry-core
//!
//! Pure order-entry values:
//! - closed enumerations with their one-byte wire codes
//! - participant orders and complex (multileg) orders
//! - request kinds and the request structs the encoder consumes

pub mod side;
pub mod order_type;
pub mod time_in_force;
pub mod capacity;
pub mod account_type;
pub mod position;
pub mod order;
pub mod request_kind;
pub mod messages;

pub use side::Side;
pub use order_type::OrdType;
pub use time_in_force::TimeInForce;
pub use capacity::Capacity;
pub use account_type::AccountType;
pub use position::Position;

pub use order::{ComplexOrder, Order};
pub use request_kind::RequestKind;

pub use messages::{NewOrder, NewOrderCross, NewOrderCrossMultileg, Request};

pub use rust_decimal::Decimal;
