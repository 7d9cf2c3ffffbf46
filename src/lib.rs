//! Chat proxy for the FullOps Group website assistant.
//!
//! Accepts a chat message from the browser, forwards it to an
//! OpenAI-compatible chat-completions API behind a fixed system prompt,
//! and returns the generated reply.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
