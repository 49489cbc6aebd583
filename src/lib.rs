//! Chat-completion relay for workflow-automation webhooks.
//!
//! Accepts `{ messages, chatSettings? }`, posts it to a configured webhook
//! once, and answers with `{ choices: [{ message: { role, content } }] }` or
//! a `{ message }` error envelope.

pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod profile;
pub mod relay;
pub mod utils;
