//! Shared message contracts for the pingpong bot.
//!
//! This crate exposes the `Envelope` structure exchanged over the broker and
//! the reply-construction helper used to answer a triggering message.
pub mod envelope;

pub use envelope::*;
