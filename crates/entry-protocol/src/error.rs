//! Error types for encoding and for loading field dictionaries.

use entry_core::{Decimal, RequestKind};

use crate::dictionary::OptionalField;

/// Errors that can arise while encoding a request.
///
/// Every variant is reported before a buffer is handed back; a caller
/// never receives a partially written message.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// More orders than the 2-byte count field can carry.
    #[error("cross carries {count} orders, the count field allows at most {max}")]
    TooManyOrders { count: usize, max: usize },

    /// A complex order has more legs than allowed.
    #[error("order #{order_index} has {legs} legs, at most {max} allowed")]
    TooManyLegs {
        order_index: usize,
        legs: usize,
        max: usize,
    },

    /// Leg counts handed to the size calculator do not match the order count.
    #[error("expected leg counts for {expected} orders, got {actual}")]
    LegCountMismatch { expected: usize, actual: usize },

    /// Message too long for the 2-byte length field.
    #[error("{kind} message of {length} bytes exceeds the {max}-byte limit")]
    MessageTooLong {
        kind: RequestKind,
        length: usize,
        max: usize,
    },

    /// Price cannot be represented in the configured fixed-point width.
    #[error("price {value} does not fit a {width}-byte field at scale {scale}")]
    PriceOutOfRange {
        value: Decimal,
        scale: u32,
        width: usize,
    },

    /// The dictionary schedules a field this request kind has no value for.
    #[error("{kind} has no value for optional field {field:?}")]
    UnsupportedField {
        kind: RequestKind,
        field: OptionalField,
    },

    /// Caller-provided buffer is shorter than the message.
    #[error("buffer of {available} bytes is too small, {required} bytes required")]
    BufferTooSmall { required: usize, available: usize },

    /// A write went past the end of the buffer.
    #[error("write of {width} bytes at offset {position} overruns a {len}-byte buffer")]
    BufferOverrun {
        position: usize,
        width: usize,
        len: usize,
    },

    /// Bytes written disagree with the size calculator.
    #[error("{kind} size mismatch: calculated {expected} bytes, wrote {written}")]
    SizeMismatch {
        kind: RequestKind,
        expected: usize,
        written: usize,
    },
}

/// Errors raised while loading or validating a field dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dictionary TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize dictionary: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{kind}: bitmap length {bitmap_len} must be between 1 and 255")]
    BitmapLength { kind: RequestKind, bitmap_len: usize },

    #[error("{kind}: bit {bit} of field {field:?} is not in 0..=7")]
    InvalidBit {
        kind: RequestKind,
        field: OptionalField,
        bit: u8,
    },

    #[error("{kind}: field {field:?} uses bitmap byte {byte}, bitmap has {bitmap_len}")]
    BitmapByteOutOfRange {
        kind: RequestKind,
        field: OptionalField,
        byte: usize,
        bitmap_len: usize,
    },

    #[error("{kind}: byte {byte} bit {bit} is assigned twice")]
    DuplicateBit { kind: RequestKind, byte: usize, bit: u8 },

    #[error("{kind}: field {field:?} is listed twice")]
    DuplicateField {
        kind: RequestKind,
        field: OptionalField,
    },

    #[error("{kind}: field {field:?} cannot be {width} bytes wide")]
    FieldWidth {
        kind: RequestKind,
        field: OptionalField,
        width: usize,
    },

    #[error("{kind} cannot carry optional field {field:?}")]
    FieldNotAvailable {
        kind: RequestKind,
        field: OptionalField,
    },

    #[error("price width {0} is not supported (expected 4 or 8)")]
    PriceWidth(usize),

    #[error("price scale {0} exceeds 18 decimal places")]
    PriceScale(u32),

    #[error("request type code {code:#04x} is shared by {first} and {second}")]
    DuplicateRequestType {
        code: u8,
        first: RequestKind,
        second: RequestKind,
    },

    #[error("New Order layout totals {actual} bytes, protocol requires {expected}")]
    NewOrderSize { expected: usize, actual: usize },
}
