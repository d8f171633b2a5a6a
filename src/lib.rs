pub mod availability;
pub mod calendar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod tui;
