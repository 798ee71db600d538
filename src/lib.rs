//! Client library for the LearnLoop social learning platform.
//!
//! Typed REST clients for the plans, progress-update, and notification
//! collections; controllers covering the fetch, render, owner-gated
//! mutation, and re-sync lifecycle of each surface; and the terminal
//! front end over them.

pub mod api;
pub mod cli;
pub mod commands;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod metadata;
pub mod models;
pub mod notify;
pub mod ownership;
pub mod session;

#[cfg(test)]
mod test_helpers;

pub use error::{ApiError, ApiResult};
