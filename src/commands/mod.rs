//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - list: Show the machine catalog
//! - quote: Quote a single machine
//! - compare: Compare every machine side by side
//! - parts: Show a machine's frame cut list
//! - config: Configuration display and validation

pub mod compare;
pub mod config;
pub mod list;
pub mod parts;
pub mod quote;

use cnc_quote::error::QuoteError;

/// With `--json`, print a quote error as a JSON body on stdout before it
/// propagates to the usual stderr report.
pub(crate) fn json_error(json: bool, err: QuoteError) -> QuoteError {
    if json {
        println!("{:#}", err.to_json());
    }
    err
}
