//! Async runtime for live rock-paper-scissors matches.
//!
//! This crate pairs two anonymous connections into a best-of-N match,
//! reconciles simultaneous choice submission into deterministic round
//! outcomes, and tracks scores to the winning threshold.
//!
//! ## Architecture
//!
//! - [`Session`] — Registry of the two slots and the score tally (functional core)
//! - [`Arena`] — Single-writer task serializing all session mutation
//! - [`Table`] — Outbound routing to live connections
//! - [`Protocol`] — Wire text to typed [`Event`] decoding
//!
//! ## Wire format
//!
//! - [`Event`] — Messages from client to arena (join, choice, restart)
//! - [`ServerMessage`] — Messages from arena to clients (status, results)
mod arena;
mod choice;
mod duel;
mod event;
mod message;
mod protocol;
mod session;
mod table;

pub use arena::*;
pub use choice::*;
pub use duel::*;
pub use event::*;
pub use message::*;
pub use protocol::*;
pub use session::*;
pub use table::*;
