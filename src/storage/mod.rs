//! Storage layer for pomodoro.
//!
//! SQLite-backed key-value persistence for the daily session record.

mod database;
mod migrations;

pub use database::Database;
