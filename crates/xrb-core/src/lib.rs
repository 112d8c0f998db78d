//! Core command pipeline for the XMPP room query bot.
//!
//! This crate is intentionally transport-agnostic. The XMPP session (connect,
//! authenticate, join rooms, stanza I/O) and the per-peer protocol queries
//! live behind ports (traits) implemented in adapter crates; the pipeline
//! only turns inbound message bodies into at most one outbound reply.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod format;
pub mod handler;
pub mod logging;
pub mod ports;
pub mod queue;
pub mod reply;
pub mod tokenize;
pub mod validate;

pub use errors::{Error, Result};
