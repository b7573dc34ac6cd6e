//! Size calculator.
//!
//! Computes, before anything is written, the exact length of a request.
//! Builders allocate with these numbers and compare them with the bytes
//! actually written, so every layout change in the builders must be
//! mirrored here.

use entry_core::RequestKind;

use crate::dictionary::FieldDictionary;
use crate::error::EncodeError;
use crate::optional_fields::{trailer_len, COMPLEX_ORDER_TRAILER, ORDER_TRAILER};
use crate::wire_types::{
    BITMAP_LEN_WIDTH, CL_ORD_ID_WIDTH, CROSS_ID_WIDTH, HEADER_LEN, MAX_LEGS, MAX_MESSAGE_LEN,
    MAX_ORDERS, ORDER_COUNT_WIDTH, ORDER_MANDATORY_LEN, VOLUME_WIDTH,
};

/// Message sizes for one field dictionary.
#[derive(Debug, Copy, Clone)]
pub struct SizeCalculator<'d> {
    dict: &'d FieldDictionary,
}

impl<'d> SizeCalculator<'d> {
    pub fn new(dict: &'d FieldDictionary) -> Self {
        SizeCalculator { dict }
    }

    /// New Order length. For a validated dictionary this always equals
    /// [`NEW_ORDER_LEN`](crate::wire_types::NEW_ORDER_LEN).
    pub fn new_order_size(&self) -> usize {
        HEADER_LEN
            + CL_ORD_ID_WIDTH
            + 1 // side
            + VOLUME_WIDTH
            + BITMAP_LEN_WIDTH
            + self.dict.new_order.wire_len()
    }

    /// Cross bytes ahead of the order count.
    pub fn cross_prefix_size(&self, kind: RequestKind) -> usize {
        HEADER_LEN
            + CROSS_ID_WIDTH
            + 1 // cross type
            + 1 // side
            + self.dict.price.width
            + VOLUME_WIDTH
            + BITMAP_LEN_WIDTH
            + self.dict.block(kind).wire_len()
    }

    pub fn order_size(&self) -> usize {
        ORDER_MANDATORY_LEN + trailer_len(ORDER_TRAILER, 0)
    }

    pub fn complex_order_size(&self, leg_count: usize) -> usize {
        ORDER_MANDATORY_LEN + trailer_len(COMPLEX_ORDER_TRAILER, leg_count)
    }

    pub fn new_order_cross_size(&self, contra_count: usize) -> Result<usize, EncodeError> {
        let count = check_order_count(contra_count)?;
        let total = self.cross_prefix_size(RequestKind::NewCross)
            + ORDER_COUNT_WIDTH
            + count * self.order_size();
        check_message_len(RequestKind::NewCross, total)
    }

    /// `leg_counts` holds one entry per order, agency first.
    pub fn new_order_cross_multileg_size(&self, leg_counts: &[usize]) -> Result<usize, EncodeError> {
        check_order_count(leg_counts.len().saturating_sub(1))?;
        let mut total = self.cross_prefix_size(RequestKind::NewCrossMultileg) + ORDER_COUNT_WIDTH;
        for (order_index, &legs) in leg_counts.iter().enumerate() {
            if legs > MAX_LEGS {
                return Err(EncodeError::TooManyLegs {
                    order_index,
                    legs,
                    max: MAX_LEGS,
                });
            }
            total += self.complex_order_size(legs);
        }
        check_message_len(RequestKind::NewCrossMultileg, total)
    }

    /// Length of a `kind` request with `contra_count` contra orders.
    ///
    /// `leg_counts` is only read for multileg crosses, where it must hold
    /// `contra_count + 1` entries (agency first).
    pub fn calculate_size(
        &self,
        kind: RequestKind,
        contra_count: usize,
        leg_counts: &[usize],
    ) -> Result<usize, EncodeError> {
        match kind {
            RequestKind::New => Ok(self.new_order_size()),
            RequestKind::NewCross => self.new_order_cross_size(contra_count),
            RequestKind::NewCrossMultileg => {
                let expected = contra_count.saturating_add(1);
                if leg_counts.len() != expected {
                    return Err(EncodeError::LegCountMismatch {
                        expected,
                        actual: leg_counts.len(),
                    });
                }
                self.new_order_cross_multileg_size(leg_counts)
            }
        }
    }
}

/// Orders on the wire (agency + contra), if the count field can hold it.
fn check_order_count(contra_count: usize) -> Result<usize, EncodeError> {
    match contra_count.checked_add(1) {
        Some(count) if count <= MAX_ORDERS => Ok(count),
        _ => Err(EncodeError::TooManyOrders {
            count: contra_count.saturating_add(1),
            max: MAX_ORDERS,
        }),
    }
}

fn check_message_len(kind: RequestKind, total: usize) -> Result<usize, EncodeError> {
    if total > MAX_MESSAGE_LEN {
        return Err(EncodeError::MessageTooLong {
            kind,
            length: total,
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(total)
}
