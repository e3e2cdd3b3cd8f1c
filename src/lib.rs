//! Library entry for titandex exposing core logic for the binary and integration tests.

pub mod app;
pub mod args;
pub mod error;
pub mod events;
pub mod favorites;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
