//! # Overtime Bot
//!
//! A Telegram bot that works out overtime pay. The user sets an hourly rate,
//! then adds weekday, weekend and public holiday overtime through inline
//! buttons and asks for a running total.

/// In-memory per-chat session store
pub mod bot_state;
/// Pay formulas and input parsing
pub mod calculator;
/// Environment configuration
pub mod config;
/// Conversation state machine
pub mod engine;
/// Telegram update handlers
pub mod handlers;
/// Session, category and button types
pub mod models;
/// Webhook and liveness HTTP routes
pub mod server;
