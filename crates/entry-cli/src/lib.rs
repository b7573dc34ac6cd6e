//! entry-cli
//!
//! Command-line front end for the request encoder: reads TOML request
//! files, encodes them against a field dictionary and writes the bytes
//! out as hex, JSON lines or raw.

pub mod config;
pub mod request_file;
pub mod output;
