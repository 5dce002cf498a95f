//! Shared domain library for the operations dashboard.
//!
//! Everything here is platform independent: the frontend (wasm) and the
//! backend (native) both depend on it, and the record access / filtering
//! engine is tested here without a browser.

pub mod domain;
pub mod shared;
pub mod system;
