//! Fixed 10-byte request header.
//!
//! ```text
//! [0..2]  protocol marker (0xBA 0xBA)
//! [2..4]  message length (u16 BE) = total length - 2
//! [4]     request type code (from the field dictionary)
//! [5]     reserved = 0
//! [6..10] sequence number (u32 BE)
//! ```

use entry_core::RequestKind;

use crate::error::EncodeError;
use crate::primitives::{encode, encode_char};
use crate::wire_types::{HEADER_LEN, LENGTH_EXCLUDED, MAX_MESSAGE_LEN, PROTOCOL_MARKER};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    /// Bytes following the marker.
    pub length: u16,
    pub request_type: u8,
    pub seq_no: u32,
}

impl RequestHeader {
    /// Header for a message of `total_len` bytes.
    pub fn new(
        kind: RequestKind,
        total_len: usize,
        request_type: u8,
        seq_no: u32,
    ) -> Result<Self, EncodeError> {
        let too_long = || EncodeError::MessageTooLong {
            kind,
            length: total_len,
            max: MAX_MESSAGE_LEN,
        };
        let length = total_len
            .checked_sub(LENGTH_EXCLUDED)
            .and_then(|l| u16::try_from(l).ok())
            .ok_or_else(too_long)?;

        Ok(RequestHeader {
            length,
            request_type,
            seq_no,
        })
    }

    /// Total message length described by this header.
    pub fn message_len(&self) -> usize {
        self.length as usize + LENGTH_EXCLUDED
    }

    pub fn write(&self, buf: &mut [u8], pos: usize) -> Result<usize, EncodeError> {
        let mut p = encode_char(buf, pos, PROTOCOL_MARKER[0])?;
        p = encode_char(buf, p, PROTOCOL_MARKER[1])?;
        p = encode(buf, p, self.length)?;
        p = encode(buf, p, self.request_type)?;
        p = encode_char(buf, p, 0)?; // reserved
        encode(buf, p, self.seq_no)
    }

    /// Read back the header of an encoded request.
    ///
    /// Returns `None` if the buffer is shorter than a header, the marker
    /// is wrong or the reserved byte is not zero.
    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_LEN || buf[0..2] != PROTOCOL_MARKER || buf[5] != 0 {
            return None;
        }

        Some(RequestHeader {
            length: u16::from_be_bytes([buf[2], buf[3]]),
            request_type: buf[4],
            seq_no: u32::from_be_bytes([buf[6], buf[7], buf[8], buf[9]]),
        })
    }
}
