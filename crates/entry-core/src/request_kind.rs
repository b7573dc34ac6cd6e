//! Request kinds understood by the encoder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of outbound request.
///
/// The kind selects the header type code and the body layout,
/// including which optional-field schema applies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Single order submission.
    New,
    /// One agency order crossed against one or more contra orders.
    NewCross,
    /// Cross where every side is a complex (multileg) order.
    NewCrossMultileg,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [
        RequestKind::New,
        RequestKind::NewCross,
        RequestKind::NewCrossMultileg,
    ];
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::New => "NewOrder",
            RequestKind::NewCross => "NewOrderCross",
            RequestKind::NewCrossMultileg => "NewOrderCrossMultileg",
        };
        f.write_str(name)
    }
}
