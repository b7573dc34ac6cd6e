//! entry-protocol
//!
//! Binary encoding of outbound order-entry requests.
//!
//! This crate turns the logical requests of `entry_core`
//! (`NewOrder`, `NewOrderCross`, `NewOrderCrossMultileg`) into exact,
//! pre-sized byte buffers ready for the wire.
//!
//! - [`primitives`]      : fixed-width field encoders
//! - [`dictionary`]      : field dictionary (optional-field schemas)
//! - [`optional_fields`] : bitmap and sequential optional-field encoders
//! - [`header`]          : 10-byte request header
//! - [`order_codec`]     : per-order records inside crosses
//! - [`size`]            : size calculator
//! - [`builders`]        : one builder per request kind

pub mod wire_types;
pub mod error;
pub mod primitives;
pub mod dictionary;
pub mod optional_fields;
pub mod header;
pub mod order_codec;
pub mod size;
pub mod builders;

pub use builders::RequestEncoder;
pub use dictionary::{FieldDictionary, FieldSpec, OptionalBlock, OptionalField, PriceFormat};
pub use error::{DictionaryError, EncodeError};
pub use header::RequestHeader;
pub use size::SizeCalculator;
pub use wire_types::NEW_ORDER_LEN;
