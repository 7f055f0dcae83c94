//! Core Module - Page Logic
//!
//! Remote list fetching with fallback, the timed overlay state machine and
//! the per-mount session that ties them together.

pub mod fallback;
pub mod fetch;
pub mod overlay;
pub mod session;

pub use fallback::*;
pub use fetch::*;
pub use overlay::*;
pub use session::*;
