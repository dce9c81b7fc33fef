//! Integration tests for okgamut crates.
//!
//! End-to-end checks that run device colors through the full chain in both
//! precisions. Per-module unit tests live next to the code they cover.

#[cfg(test)]
mod golden;
