//! Request handlers.
//!
//! Catalog handlers (`character`, `mission`) delegate to repositories in
//! `questboard_db`; `queue` handlers drive the per-character
//! [`MissionQueue`](questboard_db::queue::MissionQueue) inside a transaction.
//! Errors are mapped via [`AppError`](crate::error::AppError).

pub mod character;
pub mod mission;
pub mod queue;
