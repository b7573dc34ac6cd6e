//! TOML request files.
//!
//! A file is a list of `[[request]]` tables, each tagged with its kind:
//!
//! ```toml
//! [[request]]
//! kind = "new_order"
//! cl_ord_id = "ABC"
//! side = "buy"
//! volume = 100
//! price = "12.5"
//! ord_type = "limit"
//! time_in_force = "day"
//! max_floor = 0
//! symbol = "MSFT"
//! capacity = "agency"
//! account = "ACCT1"
//!
//! [[request]]
//! kind = "new_order_cross"
//! cross_id = "X1"
//! price = "10.25"
//! symbol = "IBM"
//! agency_order = { side = "buy", volume = 200, cl_ord_id = "AG1", capacity = "agency", clearing_firm = "CLRA", account_type = "client" }
//! contra_orders = [
//!   { side = "sell", volume = 200, cl_ord_id = "CT1", capacity = "principal", clearing_firm = "CLRB", account_type = "house" },
//! ]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use entry_core::Request;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RequestFile {
    #[serde(rename = "request", default)]
    pub requests: Vec<Request>,
}

impl RequestFile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing request file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}
