//! Encoding a batch of requests and writing the results.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use entry_core::{Request, RequestKind};
use entry_protocol::RequestEncoder;
use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;

/// One encoded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    pub seq_no: u32,
    pub kind: RequestKind,
    pub bytes: Vec<u8>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    seq_no: u32,
    kind: RequestKind,
    length: usize,
    hex: &'a str,
}

/// Encode `requests` in order, numbering them from `start_seq`.
///
/// Stops at the first request that cannot be encoded.
pub fn encode_all(
    encoder: &RequestEncoder<'_>,
    requests: &[Request],
    start_seq: u32,
) -> Result<Vec<EncodedRequest>> {
    let mut out = Vec::with_capacity(requests.len());
    let mut seq_no = start_seq;

    for (i, request) in requests.iter().enumerate() {
        let bytes = encoder
            .encode(seq_no, request)
            .with_context(|| format!("request #{} (seq {seq_no})", i + 1))?;
        out.push(EncodedRequest {
            seq_no,
            kind: request.kind(),
            bytes,
        });

        if i + 1 < requests.len() {
            seq_no = seq_no
                .checked_add(1)
                .ok_or_else(|| anyhow!("sequence number overflow after {seq_no}"))?;
        }
    }

    debug!(count = out.len(), "encoded request file");
    Ok(out)
}

pub fn write_encoded(
    out: &mut dyn Write,
    encoded: &[EncodedRequest],
    format: OutputFormat,
) -> Result<()> {
    for e in encoded {
        match format {
            OutputFormat::Hex => writeln!(out, "{}", hex::encode(&e.bytes))?,
            OutputFormat::Json => {
                let text = hex::encode(&e.bytes);
                let record = JsonRecord {
                    seq_no: e.seq_no,
                    kind: e.kind,
                    length: e.bytes.len(),
                    hex: &text,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
            OutputFormat::Raw => out.write_all(&e.bytes)?,
        }
    }
    out.flush()?;
    Ok(())
}
