//! CLI commands for venue-search

pub mod category;
pub mod dispatch;
pub mod search;
pub mod similar;
pub mod stats;
