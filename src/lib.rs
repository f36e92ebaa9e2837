//! Core library for the oracle-deviation monitor.
//!
//! Compares a lending market's oracle prices against spot prices implied by
//! Uniswap V2 reserves, deriving pair addresses offline.

pub mod cli;
pub mod config;
pub mod deviation;
pub mod dex;
pub mod errors;
pub mod lending;
pub mod models;
pub mod report;
pub mod utils;
