//! Field dictionary: the versioned, externally supplied schema of the
//! optional fields.
//!
//! For every request kind the dictionary lists, in wire order, which
//! optional fields are sent, how wide each one is and which bitmap bit
//! announces it. The encoder only reads it; the generic bitmap encoder
//! in [`optional_fields`](crate::optional_fields) does the rest.
//!
//! A built-in table is available through [`FieldDictionary::standard`].
//! Replacement tables are loaded from TOML:
//!
//! ```toml
//! version = "standard-1"
//!
//! [price]
//! scale = 4
//! width = 8
//!
//! [request_types]
//! new = 0x38
//! new_cross = 0x41
//! new_cross_multileg = 0x43
//!
//! [new_order]
//! bitmap_len = 3
//!
//! [[new_order.fields]]
//! field = "price"
//! byte = 0
//! bit = 2
//! width = 8
//! # ...
//! ```

use std::collections::HashSet;
use std::path::Path;

use entry_core::{Decimal, RequestKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DictionaryError, EncodeError};
use crate::wire_types::{NEW_ORDER_LEN, NEW_ORDER_PREFIX_LEN};

/// Optional fields the builders know how to supply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalField {
    Price,
    OrdType,
    TimeInForce,
    MaxFloor,
    Symbol,
    Capacity,
    Account,
}

/// How a field's value is turned into bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldEncoding {
    /// One code byte.
    Char,
    /// Unsigned big-endian integer.
    Binary,
    /// Fixed-point price, see [`PriceFormat`].
    Price,
    /// Padded / truncated text.
    Text,
    /// Padded / truncated uppercase alpha.
    Alpha,
}

impl OptionalField {
    pub const ALL: [OptionalField; 7] = [
        OptionalField::Price,
        OptionalField::OrdType,
        OptionalField::TimeInForce,
        OptionalField::MaxFloor,
        OptionalField::Symbol,
        OptionalField::Capacity,
        OptionalField::Account,
    ];

    pub fn encoding(self) -> FieldEncoding {
        match self {
            OptionalField::Price => FieldEncoding::Price,
            OptionalField::OrdType | OptionalField::TimeInForce | OptionalField::Capacity => {
                FieldEncoding::Char
            }
            OptionalField::MaxFloor => FieldEncoding::Binary,
            OptionalField::Symbol => FieldEncoding::Alpha,
            OptionalField::Account => FieldEncoding::Text,
        }
    }

    /// Whether a request of `kind` has a value for this field.
    ///
    /// Cross kinds carry price, side and volume in their mandatory part,
    /// leaving only the symbol for the optional block.
    pub fn available_for(self, kind: RequestKind) -> bool {
        match kind {
            RequestKind::New => true,
            RequestKind::NewCross | RequestKind::NewCrossMultileg => {
                self == OptionalField::Symbol
            }
        }
    }
}

/// One entry of an optional-field schema.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: OptionalField,
    /// Index of the bitmap byte holding the presence bit.
    pub byte: usize,
    /// Bit inside that byte, 0 = least significant.
    pub bit: u8,
    /// Bytes the value occupies on the wire.
    pub width: usize,
}

impl FieldSpec {
    pub const fn new(field: OptionalField, byte: usize, bit: u8, width: usize) -> Self {
        FieldSpec {
            field,
            byte,
            bit,
            width,
        }
    }

    pub fn mask(&self) -> u8 {
        1 << self.bit
    }
}

/// Bitmap width plus the ordered field schema of one request kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalBlock {
    pub bitmap_len: usize,
    pub fields: Vec<FieldSpec>,
}

impl OptionalBlock {
    /// Bitmap plus every field value.
    pub fn wire_len(&self) -> usize {
        self.bitmap_len + self.fields.iter().map(|f| f.width).sum::<usize>()
    }
}

/// Fixed-point representation of prices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Implied decimal places (4 means the wire value is `price * 10_000`).
    pub scale: u32,
    /// 4 or 8 bytes, signed.
    pub width: usize,
}

impl PriceFormat {
    /// Scale `value` to integer ticks, rounding half away from zero.
    pub fn to_ticks(&self, value: Decimal) -> Result<i64, EncodeError> {
        let factor = 10i64
            .checked_pow(self.scale)
            .ok_or_else(|| self.out_of_range(value))?;
        let ticks = value
            .checked_mul(Decimal::from(factor))
            .ok_or_else(|| self.out_of_range(value))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(|| self.out_of_range(value))?;

        let fits = match self.width {
            4 => i32::try_from(ticks).is_ok(),
            8 => true,
            _ => false,
        };
        if fits {
            Ok(ticks)
        } else {
            Err(self.out_of_range(value))
        }
    }

    pub(crate) fn out_of_range(&self, value: Decimal) -> EncodeError {
        EncodeError::PriceOutOfRange {
            value,
            scale: self.scale,
            width: self.width,
        }
    }
}

/// Header type code of each request kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTypeCodes {
    pub new: u8,
    pub new_cross: u8,
    pub new_cross_multileg: u8,
}

impl RequestTypeCodes {
    pub fn code(&self, kind: RequestKind) -> u8 {
        match kind {
            RequestKind::New => self.new,
            RequestKind::NewCross => self.new_cross,
            RequestKind::NewCrossMultileg => self.new_cross_multileg,
        }
    }
}

/// Complete field dictionary for the three request kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDictionary {
    pub version: String,
    pub price: PriceFormat,
    pub request_types: RequestTypeCodes,
    pub new_order: OptionalBlock,
    pub new_order_cross: OptionalBlock,
    pub new_order_cross_multileg: OptionalBlock,
}

// Built-in table.
const STANDARD_VERSION: &str = "standard-1";

const STANDARD_PRICE: PriceFormat = PriceFormat { scale: 4, width: 8 };

const STANDARD_REQUEST_TYPES: RequestTypeCodes = RequestTypeCodes {
    new: 0x38,
    new_cross: 0x41,
    new_cross_multileg: 0x43,
};

const STANDARD_NEW_ORDER_BITMAP_LEN: usize = 3;

const STANDARD_NEW_ORDER_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new(OptionalField::Price, 0, 2, 8),
    FieldSpec::new(OptionalField::OrdType, 0, 4, 1),
    FieldSpec::new(OptionalField::TimeInForce, 0, 5, 1),
    FieldSpec::new(OptionalField::MaxFloor, 0, 7, 4),
    FieldSpec::new(OptionalField::Symbol, 1, 0, 8),
    FieldSpec::new(OptionalField::Capacity, 1, 6, 1),
    FieldSpec::new(OptionalField::Account, 2, 0, 16),
];

const STANDARD_CROSS_BITMAP_LEN: usize = 1;

const STANDARD_CROSS_FIELDS: [FieldSpec; 1] = [FieldSpec::new(OptionalField::Symbol, 0, 0, 8)];

const fn total_width(fields: &[FieldSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].width;
        i += 1;
    }
    total
}

const _: () = assert!(
    NEW_ORDER_PREFIX_LEN + STANDARD_NEW_ORDER_BITMAP_LEN + total_width(&STANDARD_NEW_ORDER_FIELDS)
        == NEW_ORDER_LEN,
    "wrong New Order message size"
);

impl Default for FieldDictionary {
    fn default() -> Self {
        Self::standard()
    }
}

impl FieldDictionary {
    /// The built-in dictionary.
    pub fn standard() -> Self {
        let cross = OptionalBlock {
            bitmap_len: STANDARD_CROSS_BITMAP_LEN,
            fields: STANDARD_CROSS_FIELDS.to_vec(),
        };
        FieldDictionary {
            version: STANDARD_VERSION.to_string(),
            price: STANDARD_PRICE,
            request_types: STANDARD_REQUEST_TYPES,
            new_order: OptionalBlock {
                bitmap_len: STANDARD_NEW_ORDER_BITMAP_LEN,
                fields: STANDARD_NEW_ORDER_FIELDS.to_vec(),
            },
            new_order_cross: cross.clone(),
            new_order_cross_multileg: cross,
        }
    }

    /// Parse and validate a TOML dictionary.
    pub fn from_toml_str(s: &str) -> Result<Self, DictionaryError> {
        let dict: FieldDictionary = toml::from_str(s)?;
        dict.validate()?;
        debug!(version = %dict.version, "loaded field dictionary");
        Ok(dict)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, DictionaryError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Optional-field block of `kind`.
    pub fn block(&self, kind: RequestKind) -> &OptionalBlock {
        match kind {
            RequestKind::New => &self.new_order,
            RequestKind::NewCross => &self.new_order_cross,
            RequestKind::NewCrossMultileg => &self.new_order_cross_multileg,
        }
    }

    pub fn request_type(&self, kind: RequestKind) -> u8 {
        self.request_types.code(kind)
    }

    /// Check every structural rule the encoder relies on.
    pub fn validate(&self) -> Result<(), DictionaryError> {
        let result = self.check();
        if let Err(e) = &result {
            debug!(version = %self.version, error = %e, "field dictionary rejected");
        }
        result
    }

    fn check(&self) -> Result<(), DictionaryError> {
        if !matches!(self.price.width, 4 | 8) {
            return Err(DictionaryError::PriceWidth(self.price.width));
        }
        if self.price.scale > 18 {
            return Err(DictionaryError::PriceScale(self.price.scale));
        }

        for (i, first) in RequestKind::ALL.iter().enumerate() {
            for second in &RequestKind::ALL[i + 1..] {
                let code = self.request_type(*first);
                if code == self.request_type(*second) {
                    return Err(DictionaryError::DuplicateRequestType {
                        code,
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        for kind in RequestKind::ALL {
            self.check_block(kind)?;
        }

        let actual = NEW_ORDER_PREFIX_LEN + self.new_order.wire_len();
        if actual != NEW_ORDER_LEN {
            return Err(DictionaryError::NewOrderSize {
                expected: NEW_ORDER_LEN,
                actual,
            });
        }

        Ok(())
    }

    fn check_block(&self, kind: RequestKind) -> Result<(), DictionaryError> {
        let block = self.block(kind);
        if !(1..=u8::MAX as usize).contains(&block.bitmap_len) {
            return Err(DictionaryError::BitmapLength {
                kind,
                bitmap_len: block.bitmap_len,
            });
        }

        let mut seen_fields = HashSet::new();
        let mut seen_bits = HashSet::new();

        for spec in &block.fields {
            let field = spec.field;
            if !field.available_for(kind) {
                return Err(DictionaryError::FieldNotAvailable { kind, field });
            }
            if !seen_fields.insert(field) {
                return Err(DictionaryError::DuplicateField { kind, field });
            }
            if spec.bit > 7 {
                return Err(DictionaryError::InvalidBit {
                    kind,
                    field,
                    bit: spec.bit,
                });
            }
            if spec.byte >= block.bitmap_len {
                return Err(DictionaryError::BitmapByteOutOfRange {
                    kind,
                    field,
                    byte: spec.byte,
                    bitmap_len: block.bitmap_len,
                });
            }
            if !seen_bits.insert((spec.byte, spec.bit)) {
                return Err(DictionaryError::DuplicateBit {
                    kind,
                    byte: spec.byte,
                    bit: spec.bit,
                });
            }

            let width_ok = match field.encoding() {
                FieldEncoding::Char => spec.width == 1,
                FieldEncoding::Binary => spec.width == 4,
                FieldEncoding::Price => spec.width == self.price.width,
                FieldEncoding::Text | FieldEncoding::Alpha => spec.width >= 1,
            };
            if !width_ok {
                return Err(DictionaryError::FieldWidth {
                    kind,
                    field,
                    width: spec.width,
                });
            }
        }

        Ok(())
    }
}
