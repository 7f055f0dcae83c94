//! Providers Module - External Data Sources
//!
//! Remote JSON documents backing the experience timelines.

pub mod remote_list;

pub use remote_list::*;
